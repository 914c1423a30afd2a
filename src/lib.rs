#![allow(clippy::module_inception)]

//! Front end of a small C-like scripting language: a pull-based lexer and a
//! Pratt parser producing a `Program` plus the diagnostics raised on the way.

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

pub use ast::ast::{Node, Program};
pub use lexer::lexer::Lexer;
pub use parser::parser::{parse, Parser};
