//! Fretwork CLI library.
//!
//! This crate provides the command implementations for the `fretwork`
//! binary: one-shot scale computation and the HTTP scale service.

pub mod commands;
