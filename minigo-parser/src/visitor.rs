//! Visitor pattern for AST nodes.

use crate::ast::{Case, Expr, Program, Stmt};

pub trait Visitor<'ast>: Sized {
    fn visit_expr(&mut self, expr: &'ast Expr) {
        walk_expr(self, expr);
    }
    fn visit_stmt(&mut self, stmt: &'ast Stmt) {
        walk_stmt(self, stmt);
    }
}

/// Visits every top level statement of `program` in order.
pub fn walk_program<'ast>(visitor: &mut impl Visitor<'ast>, program: &'ast Program) {
    for stmt in &program.stmts {
        visitor.visit_stmt(stmt);
    }
}

pub fn walk_expr<'ast>(visitor: &mut impl Visitor<'ast>, expr: &'ast Expr) {
    match expr {
        Expr::NumberLit(_) => {}
        Expr::FloatLit(_) => {}
        Expr::BoolLit(_) => {}
        Expr::StringLit(_) => {}
        Expr::Identifier(_) => {}
        Expr::Binary { lhs, op: _, rhs } => {
            visitor.visit_expr(lhs);
            visitor.visit_expr(rhs);
        }
        Expr::Grouping(inner) => visitor.visit_expr(inner),
        Expr::Error => {}
    }
}

pub fn walk_stmt<'ast>(visitor: &mut impl Visitor<'ast>, stmt: &'ast Stmt) {
    /// Iteratively visit all statements in a `Vec<Stmt>`.
    macro_rules! visit_stmt_list {
        ($visitor: expr, $body: expr) => {
            for stmt in $body {
                Visitor::visit_stmt($visitor, stmt);
            }
        };
    }

    match stmt {
        Stmt::Declaration { initializer, .. } => {
            if let Some(initializer) = initializer {
                visitor.visit_expr(initializer);
            }
        }
        Stmt::Assignment { target: _, value } => visitor.visit_expr(value),
        Stmt::If {
            condition,
            then_branch,
            else_branch,
        } => {
            visitor.visit_expr(condition);
            visit_stmt_list!(visitor, then_branch);
            if let Some(else_branch) = else_branch {
                visit_stmt_list!(visitor, else_branch);
            }
        }
        Stmt::For {
            init,
            condition,
            post,
            body,
        } => {
            visitor.visit_stmt(init);
            visitor.visit_expr(condition);
            visitor.visit_stmt(post);
            visit_stmt_list!(visitor, body);
        }
        Stmt::DoWhile { body, condition } => {
            visit_stmt_list!(visitor, body);
            visitor.visit_expr(condition);
        }
        Stmt::Switch {
            discriminant,
            cases,
        } => {
            visitor.visit_expr(discriminant);
            for Case { body, .. } in cases {
                visit_stmt_list!(visitor, body);
            }
        }
        Stmt::FnDeclaration { .. } => {}
        Stmt::Error => {}
    }
}
