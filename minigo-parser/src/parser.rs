use crate::ast::*;
use crate::lexer::{self, Token, TypeName};
use logos::{Lexer, Logos};
use minigo_source::{Diagnostic, DiagnosticKind, Source};
use std::mem;

mod expr;
mod stmt;

/// Maximum combined statement/expression nesting before the parse is
/// abandoned with a [`DiagnosticKind::ResourceExceeded`] diagnostic.
const MAX_NESTING_DEPTH: usize = 256;

pub struct Parser<'a> {
    /// Cached token for peeking.
    current_token: Token,
    lexer: Lexer<'a, Token>,
    /// Source code
    source: &'a Source<'a>,
    /// Current statement/expression nesting depth.
    depth: usize,
    /// Set once a fatal diagnostic has been reported. Suppresses further
    /// diagnostics and forces the lookahead to `Eof` so every parse loop
    /// unwinds.
    fatal: bool,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a Source<'a>) -> Self {
        let mut parser = Self {
            current_token: Token::Eof,
            lexer: Token::lexer(source.content),
            source,
            depth: 0,
            fatal: false,
        };
        parser.next(); // prime the lookahead
        parser
    }

    /// Parses the whole token stream into a [`Program`].
    ///
    /// Recoverable errors are reported on the `Source` and the parser
    /// resynchronizes at the next statement boundary, so a single malformed
    /// statement does not abort the rest of the program. The program is
    /// accepted iff no diagnostics were recorded.
    pub fn parse_program(&mut self) -> Program {
        let mut stmts = Vec::new();
        while self.current_token != Token::Eof {
            let stmt = self.parse_stmt();
            if stmt == Stmt::Error {
                self.synchronize();
                // a stray `}` or `case` cannot open anything at top level
                if matches!(self.current_token, Token::CloseBrace | Token::Case) {
                    self.next();
                }
            }
            stmts.push(stmt);
        }
        Program { stmts }
    }
}

/// Parse utilities
impl<'a> Parser<'a> {
    fn next(&mut self) -> Token {
        let token = loop {
            match self.lexer.next() {
                Some(Token::Error) => {
                    match lexer::recover_error_token(
                        self.lexer.slice(),
                        self.lexer.span(),
                        self.source,
                    ) {
                        Some(substitute) => break substitute,
                        // illegal character, already reported and skipped
                        None => continue,
                    }
                }
                Some(token) => break token,
                None => break Token::Eof,
            }
        };
        self.current_token = token.clone();
        token
    }

    /// Predicate that tests whether the next token has the same discriminant and eats the next token if yes as a side effect.
    fn eat(&mut self, tok: Token) -> bool {
        if mem::discriminant(&self.current_token) == mem::discriminant(&tok) {
            self.next(); // eat token
            true
        } else {
            false
        }
    }

    fn expect(&mut self, tok: Token) {
        if !self.eat(tok.clone()) {
            self.syntax_error(format!("expected `{}`, found `{}`", tok, self.current_token));
        }
    }

    /// Raises an unexpected token error.
    fn unexpected(&mut self) {
        self.syntax_error(format!("unexpected token `{}`", self.current_token));
    }

    fn syntax_error(&self, message: impl ToString) {
        if self.fatal {
            return;
        }
        let line = self.source.line_of(self.lexer.span().start);
        self.source
            .errors
            .report(Diagnostic::new(DiagnosticKind::SyntaxError, message, line));
    }

    /// Parses an identifier, eating the token. Reports a syntax error and
    /// returns `None` if the current token is not an identifier.
    fn parse_identifier(&mut self) -> Option<String> {
        if let Token::Identifier(ref ident) = self.current_token {
            let ident = ident.clone();
            self.next();
            Some(ident)
        } else {
            self.syntax_error(format!(
                "expected identifier, found `{}`",
                self.current_token
            ));
            None
        }
    }

    fn parse_type_specifier(&mut self) -> Option<TypeName> {
        if let Token::Type(ty) = self.current_token {
            self.next();
            Some(ty)
        } else {
            self.syntax_error(format!("expected type name, found `{}`", self.current_token));
            None
        }
    }

    /// Panic mode error recovery: discards tokens until a statement boundary
    /// is reached, that is a `;` (consumed), a `}`, a `case` label or a
    /// keyword that starts a new statement.
    fn synchronize(&mut self) {
        loop {
            match self.current_token {
                Token::Eof | Token::CloseBrace | Token::Case => break,
                Token::Semi => {
                    self.next();
                    break;
                }
                Token::Var
                | Token::Const
                | Token::If
                | Token::For
                | Token::Do
                | Token::Switch
                | Token::Func => break,
                _ => {
                    self.next();
                }
            }
        }
    }

    /// Depth guard against pathological nesting. Returns `false` once the
    /// parse has been abandoned.
    fn enter_nested(&mut self) -> bool {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            if !self.fatal {
                let line = self.source.line_of(self.lexer.span().start);
                self.source.errors.report(Diagnostic::new(
                    DiagnosticKind::ResourceExceeded,
                    format!(
                        "nesting deeper than {} levels, abandoning parse",
                        MAX_NESTING_DEPTH
                    ),
                    line,
                ));
                self.fatal = true;
                self.current_token = Token::Eof;
            }
            false
        } else {
            true
        }
    }

    fn exit_nested(&mut self) {
        self.depth -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program(content: &str) -> (Program, Vec<Diagnostic>) {
        let source = content.into();
        let program = Parser::new(&source).parse_program();
        let diagnostics = source.errors.diagnostics();
        (program, diagnostics)
    }

    #[test]
    fn empty_input_is_an_empty_program() {
        let (program, diagnostics) = program("");
        assert!(diagnostics.is_empty());
        assert!(program.stmts.is_empty());
    }

    #[test]
    fn statement_count_is_preserved() {
        let (program, diagnostics) = program("var x int\nx = 1\nfunc f()");
        assert!(diagnostics.is_empty());
        assert_eq!(program.stmts.len(), 3);
    }

    #[test]
    fn recovers_at_statement_boundaries() {
        // the first and third declarations are malformed, the second is fine
        let (program, diagnostics) = program("var x 5\nvar y bool\nvar z 7");
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].kind(), DiagnosticKind::SyntaxError);
        assert_eq!(diagnostics[0].line(), 1);
        assert_eq!(diagnostics[1].line(), 3);
        assert!(program.stmts.contains(&Stmt::Declaration {
            kind: DeclKind::Var,
            names: vec!["y".to_string()],
            ty: TypeName::Bool,
            array_size: None,
            initializer: None,
        }));
    }

    #[test]
    fn stray_close_brace_does_not_stall() {
        let (program, diagnostics) = program("}\nx = 1");
        assert_eq!(diagnostics.len(), 1);
        assert!(program.stmts.contains(&Stmt::Assignment {
            target: "x".to_string(),
            value: Expr::NumberLit(1),
        }));
    }

    #[test]
    fn pathological_nesting_is_fatal() {
        let mut content = String::from("x = ");
        for _i in 0..300 {
            content.push('(');
        }
        content.push('1');
        for _i in 0..300 {
            content.push(')');
        }

        let (_program, diagnostics) = program(&content);
        // exactly one diagnostic: everything after the fatal error is suppressed
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind(), DiagnosticKind::ResourceExceeded);
    }

    #[test]
    fn reparsing_is_idempotent() {
        let content = "var x int\nif (x < 5) { x = x + 1 }";
        let (first, first_diagnostics) = program(content);
        let (second, second_diagnostics) = program(content);
        assert!(first_diagnostics.is_empty() && second_diagnostics.is_empty());
        assert_eq!(first, second);
    }
}
