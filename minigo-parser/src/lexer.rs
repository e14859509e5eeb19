use logos::{Logos, Span};
use minigo_source::{Diagnostic, DiagnosticKind, Source};
use std::fmt;

/// A primitive type name keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeName {
    Int,
    Float,
    String,
    Bool,
    Char,
    Double,
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeName::Int => write!(f, "int"),
            TypeName::Float => write!(f, "float32"),
            TypeName::String => write!(f, "string"),
            TypeName::Bool => write!(f, "bool"),
            TypeName::Char => write!(f, "char"),
            TypeName::Double => write!(f, "double"),
        }
    }
}

#[derive(Debug, Logos, Clone, PartialEq)]
pub enum Token {
    // literals
    /// Integer literal. Parsed as `i64`; a literal out of range for `i64` is
    /// reported as a numeric overflow and replaced with `0`.
    #[regex(r"[0-9]+", |lex| lex.slice().parse())]
    NumberLit(i64),
    /// Floating point literal. The optional sign is part of the literal.
    #[regex(r"[-+]?[0-9]*\.[0-9]+", |lex| lex.slice().parse())]
    FloatLit(f64),
    #[regex(r"true|false", |lex| if lex.slice() == "true" { true } else { false } )]
    BoolLit(bool),
    #[regex(r#""[^"]*""#, |lex| lex.slice()[1..lex.slice().len() - 1].to_string())]
    StringLit(String),
    /// Fixed array size annotation, e.g. the `[2]` in `var x = [2]int{}`.
    /// Lexed as a single token, distinct from bare `[` / `]`.
    #[regex(r"\[[0-9]+\]", |lex| lex.slice()[1..lex.slice().len() - 1].parse())]
    ArraySize(i64),

    // identifiers
    #[regex("[a-zA-Z_][a-zA-Z_0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),

    // binary operators
    // - arithmetics
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Asterisk,
    #[token("/")]
    Slash,
    // - assignment
    #[token("=")]
    Equals,
    #[token(":=")]
    ColonEquals,
    // - comparison
    #[token("==")]
    EqualsEquals,
    #[token(">")]
    GreaterThan,
    #[token(">=")]
    GreaterThanEquals,
    #[token("<")]
    LessThan,
    #[token("<=")]
    LessThanEquals,

    // punctuation
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(";")]
    Semi,

    // keywords
    #[token("var")]
    Var,
    #[token("const")]
    Const,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("switch")]
    Switch,
    #[token("case")]
    Case,
    #[token("for")]
    For,
    #[token("while")]
    While,
    #[token("do")]
    Do,
    #[token("break")]
    Break,
    #[token("continue")]
    Continue,
    #[token("func")]
    Func,
    // type names
    #[regex("int|float32|float|string|bool|char|double", |lex| match lex.slice() {
        "int" => TypeName::Int,
        "float32" | "float" => TypeName::Float,
        "string" => TypeName::String,
        "bool" => TypeName::Bool,
        "char" => TypeName::Char,
        _ => TypeName::Double,
    })]
    Type(TypeName),

    // misc
    #[regex(r"[ \t\n\r\f]+", logos::skip)]
    #[regex(r"//[^\n]*", logos::skip)] // single line comments
    #[error]
    Error,

    /// Only generated in parse phase when `lexer.next()` returns `None`.
    Eof,
}

impl Token {
    /// Returns the binary binding power or `None` if invalid binop token.
    /// Binding power `0` and `1` is reserved for accepting any expression.
    /// Comparison has the lowest precedence; all binary operators are
    /// left-associative.
    pub fn binop_bp(&self) -> Option<(u8, u8)> {
        match self {
            /* Comparison */
            Token::LessThan
            | Token::GreaterThan
            | Token::LessThanEquals
            | Token::GreaterThanEquals
            | Token::EqualsEquals => Some((2, 3)),
            /* Additive */
            Token::Plus | Token::Minus => Some((4, 5)),
            /* Multiplicative */
            Token::Asterisk | Token::Slash => Some((6, 7)),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::NumberLit(value) => write!(f, "{}", value),
            Token::FloatLit(value) => write!(f, "{}", value),
            Token::BoolLit(value) => write!(f, "{}", value),
            Token::StringLit(value) => write!(f, "\"{}\"", value),
            Token::ArraySize(size) => write!(f, "[{}]", size),
            Token::Identifier(ident) => write!(f, "{}", ident),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Asterisk => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Equals => write!(f, "="),
            Token::ColonEquals => write!(f, ":="),
            Token::EqualsEquals => write!(f, "=="),
            Token::GreaterThan => write!(f, ">"),
            Token::GreaterThanEquals => write!(f, ">="),
            Token::LessThan => write!(f, "<"),
            Token::LessThanEquals => write!(f, "<="),
            Token::OpenParen => write!(f, "("),
            Token::CloseParen => write!(f, ")"),
            Token::OpenBrace => write!(f, "{{"),
            Token::CloseBrace => write!(f, "}}"),
            Token::OpenBracket => write!(f, "["),
            Token::CloseBracket => write!(f, "]"),
            Token::Comma => write!(f, ","),
            Token::Colon => write!(f, ":"),
            Token::Semi => write!(f, ";"),
            Token::Var => write!(f, "var"),
            Token::Const => write!(f, "const"),
            Token::If => write!(f, "if"),
            Token::Else => write!(f, "else"),
            Token::Switch => write!(f, "switch"),
            Token::Case => write!(f, "case"),
            Token::For => write!(f, "for"),
            Token::While => write!(f, "while"),
            Token::Do => write!(f, "do"),
            Token::Break => write!(f, "break"),
            Token::Continue => write!(f, "continue"),
            Token::Func => write!(f, "func"),
            Token::Type(ty) => write!(f, "{}", ty),
            Token::Error => write!(f, "<error>"),
            Token::Eof => write!(f, "end of input"),
        }
    }
}

/// A token together with the 1-based line it starts on.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    pub token: Token,
    pub line: usize,
}

/// Classifies an `Error` token produced by the lexer and reports the
/// matching diagnostic on `source`.
///
/// Returns `Some(substitute)` when the bad lexeme should be replaced with a
/// zero sentinel (numeric overflow), or `None` when it should be skipped
/// entirely (illegal character). Lexing always continues afterwards.
pub(crate) fn recover_error_token(slice: &str, span: Span, source: &Source) -> Option<Token> {
    let line = source.line_of(span.start);
    if slice.starts_with('[') {
        source.errors.report(Diagnostic::new(
            DiagnosticKind::NumericOverflow,
            format!("array size `{}` is out of range for a 64-bit integer", slice),
            line,
        ));
        Some(Token::ArraySize(0))
    } else if slice.starts_with(|c: char| c.is_ascii_digit()) {
        source.errors.report(Diagnostic::new(
            DiagnosticKind::NumericOverflow,
            format!("integer literal `{}` is out of range for a 64-bit integer", slice),
            line,
        ));
        Some(Token::NumberLit(0))
    } else {
        let bad_char = slice.chars().next().unwrap_or('\u{fffd}');
        source.errors.report(Diagnostic::new(
            DiagnosticKind::IllegalCharacter,
            format!("illegal character `{}`", bad_char),
            line,
        ));
        None
    }
}

/// Lexes the entire `source` into a vector of [`Lexeme`]s.
///
/// Lexical errors are reported on `source.errors` and never abort lexing:
/// illegal characters are skipped, overflowing numeric literals are replaced
/// with a zero sentinel. The sequence is finite and ends when the content is
/// exhausted; no `Eof` marker is emitted.
pub fn tokenize(source: &Source) -> Vec<Lexeme> {
    let mut lexer = Token::lexer(source.content);
    let mut lexemes = Vec::new();
    while let Some(token) = lexer.next() {
        let line = source.line_of(lexer.span().start);
        match token {
            Token::Error => {
                if let Some(substitute) = recover_error_token(lexer.slice(), lexer.span(), source) {
                    lexemes.push(Lexeme {
                        token: substitute,
                        line,
                    });
                }
            }
            token => lexemes.push(Lexeme { token, line }),
        }
    }
    lexemes
}
