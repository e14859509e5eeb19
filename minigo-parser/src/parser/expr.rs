use super::*;

impl<'a> Parser<'a> {
    /* Expressions */
    /// Parses any expression.
    /// This is equivalent to calling [`Self::parse_expr_bp`] with `min_bp = 0`.
    pub fn parse_expr(&mut self) -> Expr {
        if !self.enter_nested() {
            return Expr::Error;
        }
        let expr = self.parse_expr_bp(0); // 0 to accept any expression
        self.exit_nested();
        expr
    }

    /// Parses a primary (atom) expression.
    fn parse_primary_expr(&mut self) -> Expr {
        match self.current_token {
            Token::NumberLit(_) | Token::FloatLit(_) | Token::BoolLit(_) | Token::StringLit(_) => {
                self.parse_literal_expr()
            }
            Token::Identifier(_) => self.parse_identifier_expr(),
            Token::OpenParen => {
                self.next();
                let expr = self.parse_expr();
                self.expect(Token::CloseParen);
                Expr::Grouping(Box::new(expr))
            }
            _ => {
                self.unexpected();
                Expr::Error
            }
        }
    }

    /// Parses an expression with the specified `min_bp`.
    /// To parse any expression, use [`Self::parse_expr`].
    fn parse_expr_bp(&mut self, min_bp: u8) -> Expr {
        let mut lhs = self.parse_primary_expr();

        loop {
            let (l_bp, r_bp) = match self.current_token.binop_bp() {
                Some(bp) => bp,
                None => break, // not a valid binop, stop parsing
            };
            if l_bp < min_bp {
                break; // less than the min_bp, stop parsing
            }

            // self.current_token is a valid binop
            let binop = self.current_token.clone();
            self.next();

            let rhs = self.parse_expr_bp(r_bp);

            lhs = Expr::Binary {
                lhs: Box::new(lhs),
                op: binop,
                rhs: Box::new(rhs),
            }
        }

        lhs
    }

    /* Expressions.Literals */
    /// Parses a literal expression.
    /// A literal can be a number, float, bool or string literal.
    fn parse_literal_expr(&mut self) -> Expr {
        let val = match self.current_token {
            Token::NumberLit(val) => Expr::NumberLit(val),
            Token::FloatLit(val) => Expr::FloatLit(val),
            Token::BoolLit(val) => Expr::BoolLit(val),
            Token::StringLit(ref val) => Expr::StringLit(val.clone()),
            _ => {
                self.unexpected();
                Expr::Error
            }
        };
        if val != Expr::Error {
            self.next(); // eat parsed token if not error
        }
        val
    }

    /* Expressions.Identifier */
    fn parse_identifier_expr(&mut self) -> Expr {
        match self.current_token.clone() {
            Token::Identifier(ident) => {
                self.next();
                Expr::Identifier(ident)
            }
            _ => {
                self.unexpected();
                Expr::Error
            }
        }
    }
}
