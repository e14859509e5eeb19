//! Source code representation and diagnostic management.

use std::{cell::RefCell, fmt};

/// Represents source code.
pub struct Source<'a> {
    /// Original source code.
    pub content: &'a str,
    /// Byte offset of the start of every line, computed once up front.
    line_starts: Vec<usize>,
    /// Accumulated diagnostics.
    pub errors: ErrorReporter,
}

impl<'a> Source<'a> {
    /// Create a new `Source` with the specified `content`.
    pub fn new(content: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .bytes()
                .enumerate()
                .filter_map(|(offset, byte)| if byte == b'\n' { Some(offset + 1) } else { None }),
        );
        Self {
            content,
            line_starts,
            errors: ErrorReporter::new(),
        }
    }

    /// Returns `true` if `Source` has no accumulated diagnostics. Returns `false` otherwise.
    pub fn has_no_errors(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the 1-based line number containing the byte at `offset`.
    /// Offsets past the end of the content resolve to the last line.
    pub fn line_of(&self, offset: usize) -> usize {
        let offset = offset.min(self.content.len());
        self.line_starts.partition_point(|&start| start <= offset)
    }
}

impl<'a> Into<Source<'a>> for &'a str {
    fn into(self) -> Source<'a> {
        Source::new(self)
    }
}

/// The category of a [`Diagnostic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A character the lexer does not recognize. Recoverable, the character is skipped.
    IllegalCharacter,
    /// A numeric literal out of range. Recoverable, the literal is replaced with zero.
    NumericOverflow,
    /// An unexpected token. Recoverable via statement-boundary resynchronization.
    SyntaxError,
    /// Nesting depth guard tripped. Fatal, the parse is abandoned.
    ResourceExceeded,
}

/// A structured lexical or syntactic error (compile time error).
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    kind: DiagnosticKind,
    message: String,
    line: usize,
}

impl Diagnostic {
    /// Create a new diagnostic with the specified `kind`, `message` and 1-based `line`.
    pub fn new(kind: DiagnosticKind, message: impl ToString, line: usize) -> Self {
        Self {
            kind,
            message: message.to_string(),
            line,
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn line(&self) -> usize {
        self.line
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ERROR: {message} on line {line}",
            message = self.message,
            line = self.line
        )
    }
}

/// Manages all the diagnostics, in the order they were reported.
/// A passive sink: reporting never aborts the pipeline.
pub struct ErrorReporter {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl ErrorReporter {
    /// Create an empty `ErrorReporter`.
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Adds a diagnostic to the `ErrorReporter`.
    /// This method uses the interior mutability pattern. This does not require mutability for ergonomics.
    pub fn report(&self, diagnostic: Diagnostic) {
        // This should be the only place where self.diagnostics is borrowed mutably.
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Returns a copy of the accumulated diagnostics, in reporting order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }
}

impl Default for ErrorReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ErrorReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let diagnostics = self.diagnostics.borrow();
        for diagnostic in diagnostics.iter() {
            writeln!(f, "{}", diagnostic)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_of_counts_newlines() {
        let source = Source::new("var x int\nvar y bool\n\nz = 1");
        assert_eq!(source.line_of(0), 1);
        assert_eq!(source.line_of(9), 1); // the newline itself is still on line 1
        assert_eq!(source.line_of(10), 2);
        assert_eq!(source.line_of(22), 4);
        // past the end resolves to the last line
        assert_eq!(source.line_of(1000), 4);
    }

    #[test]
    fn line_of_at_line_starts() {
        let source = Source::new("a\nb\nc");
        // offsets 0, 2 and 4 are the first bytes of their lines
        assert_eq!(source.line_of(0), 1);
        assert_eq!(source.line_of(2), 2);
        assert_eq!(source.line_of(4), 3);
        assert_eq!(Source::new("").line_of(0), 1);
    }

    #[test]
    fn reporter_preserves_order() {
        let reporter = ErrorReporter::new();
        assert!(reporter.is_empty());
        reporter.report(Diagnostic::new(DiagnosticKind::IllegalCharacter, "first", 1));
        reporter.report(Diagnostic::new(DiagnosticKind::SyntaxError, "second", 2));

        let diagnostics = reporter.diagnostics();
        assert_eq!(reporter.len(), 2);
        assert_eq!(diagnostics[0].kind(), DiagnosticKind::IllegalCharacter);
        assert_eq!(diagnostics[0].message(), "first");
        assert_eq!(diagnostics[1].kind(), DiagnosticKind::SyntaxError);
        assert_eq!(diagnostics[1].line(), 2);
    }

    #[test]
    fn diagnostic_display() {
        let diagnostic = Diagnostic::new(DiagnosticKind::SyntaxError, "unexpected token `}`", 3);
        assert_eq!(diagnostic.to_string(), "ERROR: unexpected token `}` on line 3");
    }
}
