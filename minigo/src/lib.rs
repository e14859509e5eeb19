//! Front end for the minigo language.
//!
//! Converts source text into tokens and into a validated AST. The caller
//! supplies an in-memory source string and receives either a [`Program`] or
//! the ordered list of [`Diagnostic`]s that caused the rejection; this crate
//! performs no I/O of its own.

pub use minigo_parser::lexer::{Lexeme, Token};
pub use minigo_parser::{ast, lexer, parser, visitor};
pub use minigo_source::{Diagnostic, DiagnosticKind, Source};

use minigo_parser::ast::Program;
use minigo_parser::parser::Parser;

/// Lexes `content` into a finite sequence of [`Lexeme`]s, for diagnostic
/// display.
///
/// Lexical errors never abort the scan: illegal characters are skipped and
/// out-of-range numeric literals are replaced with a zero sentinel. To
/// surface the corresponding diagnostics, use [`parse`].
pub fn tokenize(content: &str) -> Vec<Lexeme> {
    let source = content.into();
    minigo_parser::lexer::tokenize(&source)
}

/// Parses `content` into a [`Program`].
///
/// Every invocation uses a fresh lexer and parser, so repeated or concurrent
/// parses never share state. The program is accepted iff zero diagnostics
/// were recorded; otherwise the full ordered, non-empty diagnostic list is
/// returned.
pub fn parse(content: &str) -> Result<Program, Vec<Diagnostic>> {
    let source = content.into();
    let program = Parser::new(&source).parse_program();
    if source.has_no_errors() {
        Ok(program)
    } else {
        Err(source.errors.diagnostics())
    }
}
