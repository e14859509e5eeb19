use minigo::ast::{Expr, Stmt};
use minigo::visitor::{walk_expr, walk_program, Visitor};
use minigo::{parse, tokenize, DiagnosticKind, Token};

/// Adapted from the demonstration program that ships with the language.
const DEMO: &str = r#"
var x int
const y bool
const a, b string
switch x {
    case 1:
        x = 10
        break
    case 2:
        var z float32
}
if (x > 10) {
    x = x + 10
} else {
    x = x - 1
}
var arr = [2]int{}
for i = 0; i < 10; i = i + 1 {
    x = x + i
}
do {
    x = x - 1
} while (x > 0)
func myfunction(p int, q float32, f string)
"#;

#[test]
fn demo_program_is_accepted() {
    let program = parse(DEMO).unwrap();
    assert_eq!(program.stmts.len(), 9);
}

#[test]
fn tokenize_arithmetic_expression() {
    let tokens: Vec<Token> = tokenize("3 + 4 * 10")
        .into_iter()
        .map(|lexeme| lexeme.token)
        .collect();
    assert_eq!(
        tokens,
        vec![
            Token::NumberLit(3),
            Token::Plus,
            Token::NumberLit(4),
            Token::Asterisk,
            Token::NumberLit(10),
        ]
    );
}

#[test]
fn if_else_shape() {
    let program = parse("if (x < 5) { x = x * 5 } else { x = x + 5 }").unwrap();
    assert_eq!(program.stmts.len(), 1);
    match &program.stmts[0] {
        Stmt::If {
            condition,
            then_branch,
            else_branch,
        } => {
            assert_eq!(
                *condition,
                Expr::Binary {
                    lhs: Box::new(Expr::Identifier("x".to_string())),
                    op: Token::LessThan,
                    rhs: Box::new(Expr::NumberLit(5)),
                }
            );
            assert_eq!(then_branch.len(), 1);
            assert!(matches!(then_branch[0], Stmt::Assignment { .. }));
            let else_branch = else_branch.as_ref().unwrap();
            assert_eq!(else_branch.len(), 1);
            assert!(matches!(else_branch[0], Stmt::Assignment { .. }));
        }
        stmt => panic!("expected an if statement, got {:?}", stmt),
    }
}

#[test]
fn rejection_reports_errors_past_the_first() {
    // an illegal character on line 2 must not swallow the syntax error on line 3
    let diagnostics = parse("switch x { case 1: y = 1 }\n§\nvar 5 int").unwrap_err();
    assert!(diagnostics.len() >= 2);
    assert_eq!(diagnostics[0].kind(), DiagnosticKind::IllegalCharacter);
    assert_eq!(diagnostics[0].line(), 2);
    assert!(diagnostics
        .iter()
        .any(|d| d.kind() == DiagnosticKind::SyntaxError && d.line() == 3));
}

#[test]
fn stray_case_inside_block_is_rejected() {
    let diagnostics = parse("if (x < 1) { case }").unwrap_err();
    assert!(!diagnostics.is_empty());
    assert!(diagnostics
        .iter()
        .all(|d| d.kind() == DiagnosticKind::SyntaxError));
}

#[test]
fn empty_source_is_accepted() {
    let program = parse("").unwrap();
    assert!(program.stmts.is_empty());
}

#[test]
fn fresh_instances_make_parsing_idempotent() {
    assert_eq!(parse(DEMO).unwrap(), parse(DEMO).unwrap());
    assert_eq!(tokenize(DEMO), tokenize(DEMO));
}

struct IdentCounter {
    count: usize,
}

impl<'ast> Visitor<'ast> for IdentCounter {
    fn visit_expr(&mut self, expr: &'ast Expr) {
        if let Expr::Identifier(_) = expr {
            self.count += 1;
        }
        walk_expr(self, expr);
    }
}

#[test]
fn visitor_reaches_nested_expressions() {
    let program = parse("if (x < 5) { y = z + w }").unwrap();
    let mut counter = IdentCounter { count: 0 };
    walk_program(&mut counter, &program);
    // x in the condition, z and w in the assignment value
    assert_eq!(counter.count, 3);
}
