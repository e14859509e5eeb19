//! Lexer and parser for the minigo language.

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod visitor;
