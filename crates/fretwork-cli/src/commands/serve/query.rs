//! Query-string parsing with percent-decoding.

/// Parse a query string into (name, value) pairs, in order of appearance.
///
/// A pair without `=` becomes a name with an empty value. Both names and
/// values are percent-decoded.
pub fn parse(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((name, value)) => (percent_decode(name), percent_decode(value)),
            None => (percent_decode(pair), String::new()),
        })
        .collect()
}

/// First value for a parameter name, if present.
///
/// Duplicate parameters keep their first occurrence.
pub fn first<'p>(params: &'p [(String, String)], name: &str) -> Option<&'p str> {
    params
        .iter()
        .find(|(n, _)| n == name)
        .map(|(_, v)| v.as_str())
}

/// Decode `%XX` escapes and `+` as space.
///
/// Malformed escapes pass through unchanged; a decode producing invalid
/// UTF-8 falls back to the raw input.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => match hex_pair(bytes[i + 1], bytes[i + 2]) {
                Some(decoded) => {
                    out.push(decoded);
                    i += 3;
                }
                None => {
                    out.push(b'%');
                    i += 1;
                }
            },
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }
    String::from_utf8(out).unwrap_or_else(|_| s.to_string())
}

fn hex_pair(hi: u8, lo: u8) -> Option<u8> {
    let hi = (hi as char).to_digit(16)?;
    let lo = (lo as char).to_digit(16)?;
    Some((hi * 16 + lo) as u8)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_pairs_in_order() {
        let params = parse("key=C&type=major");
        assert_eq!(
            params,
            vec![
                ("key".to_string(), "C".to_string()),
                ("type".to_string(), "major".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_empty_query() {
        assert_eq!(parse(""), vec![]);
        assert_eq!(parse("&&"), vec![]);
    }

    #[test]
    fn test_parse_pair_without_value() {
        let params = parse("key=&type");
        assert_eq!(
            params,
            vec![
                ("key".to_string(), String::new()),
                ("type".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn test_percent_decoding() {
        let params = parse("key=C%23&type=blues");
        assert_eq!(first(&params, "key"), Some("C#"));
        assert_eq!(parse("q=a+b%20c"), vec![("q".to_string(), "a b c".to_string())]);
    }

    #[test]
    fn test_malformed_escape_passes_through() {
        assert_eq!(parse("k=%zz"), vec![("k".to_string(), "%zz".to_string())]);
        assert_eq!(parse("k=%2"), vec![("k".to_string(), "%2".to_string())]);
        assert_eq!(parse("k=100%"), vec![("k".to_string(), "100%".to_string())]);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let params = parse("key=C&key=D");
        assert_eq!(first(&params, "key"), Some("C"));
    }

    #[test]
    fn test_first_missing_name() {
        let params = parse("key=C");
        assert_eq!(first(&params, "type"), None);
    }
}
