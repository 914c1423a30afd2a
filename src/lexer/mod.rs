//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into tokens on demand. It handles:
//!
//! - Recognition of keywords, identifiers and integer literals
//! - One-character lookahead for the two-character comparison operators
//! - `ILLEGAL` tokens for input outside the language, without stopping the scan

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
