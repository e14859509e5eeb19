use crate::lexer::{Token, TypeName};

/// An entire parsed source file: an ordered sequence of top-level statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub stmts: Vec<Stmt>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Var,
    Const,
}

/// A `(name, type)` pair in a function declaration parameter list.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub ty: TypeName,
}

/// A single `case` clause in a `switch` statement. Case order is significant.
/// `has_break` records an explicit trailing `break`; it carries no semantic
/// meaning (cases never fall through).
#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    pub value: i64,
    pub body: Vec<Stmt>,
    pub has_break: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// A `var` or `const` declaration (e.g. `var x, y int` or `var x = [2]int{}`).
    Declaration {
        kind: DeclKind,
        names: Vec<String>,
        ty: TypeName,
        /// Fixed array dimension for the `var x = [N]type{}` form.
        array_size: Option<i64>,
        initializer: Option<Expr>,
    },
    /// An assignment (e.g. `x = 1` or `x := 1`).
    Assignment { target: String, value: Expr },
    If {
        condition: Expr,
        then_branch: Vec<Stmt>,
        else_branch: Option<Vec<Stmt>>,
    },
    For {
        init: Box<Stmt>,
        condition: Expr,
        post: Box<Stmt>,
        body: Vec<Stmt>,
    },
    DoWhile {
        body: Vec<Stmt>,
        condition: Expr,
    },
    Switch {
        discriminant: Expr,
        cases: Vec<Case>,
    },
    /// A function declaration (header only, e.g. `func f(x int, y bool)`).
    FnDeclaration { ident: String, params: Vec<Param> },
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    NumberLit(i64),
    FloatLit(f64),
    BoolLit(bool),
    StringLit(String),
    /// An identifier (e.g. `foo`).
    Identifier(String),
    /// A binary expression (e.g. `1+1`).
    Binary {
        lhs: Box<Expr>,
        op: Token,
        rhs: Box<Expr>,
    },
    /// A parenthesized expression (e.g. `(1+1)`).
    Grouping(Box<Expr>),
    Error,
}
