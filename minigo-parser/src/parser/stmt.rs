use super::*;

impl<'a> Parser<'a> {
    /// Parses a statement (or declaration).
    pub fn parse_stmt(&mut self) -> Stmt {
        if !self.enter_nested() {
            return Stmt::Error;
        }
        let stmt = match self.current_token {
            Token::Var | Token::Const => self.parse_declaration(),
            Token::If => self.parse_if_stmt(),
            Token::For => self.parse_for_stmt(),
            Token::Do => self.parse_do_while_stmt(),
            Token::Switch => self.parse_switch_stmt(),
            Token::Func => self.parse_fn_declaration(),
            Token::Identifier(_) => self.parse_assignment(),
            _ => {
                self.unexpected();
                Stmt::Error
            }
        };
        self.exit_nested();
        stmt
    }

    /// Parses a brace-delimited statement list, recovering at statement
    /// boundaries inside the braces.
    fn parse_block(&mut self) -> Vec<Stmt> {
        self.expect(Token::OpenBrace);

        let mut body = Vec::new();
        while !self.eat(Token::CloseBrace) {
            if self.current_token == Token::Eof {
                self.syntax_error("expected `}`, found end of input");
                break;
            }
            let stmt = self.parse_stmt();
            if stmt == Stmt::Error {
                self.synchronize();
                // a stray `case` cannot open a clause outside a switch;
                // consume it so the block loop always makes progress
                if self.current_token == Token::Case {
                    self.next();
                }
            }
            body.push(stmt);
        }

        body
    }

    /// Parses a `var` or `const` declaration. Covers the plain form
    /// (`var x, y int`, optionally with an `= expression` initializer) and
    /// the zero-valued array form (`var x = [2]int{}`).
    fn parse_declaration(&mut self) -> Stmt {
        let kind = if self.eat(Token::Const) {
            DeclKind::Const
        } else {
            self.expect(Token::Var);
            DeclKind::Var
        };

        let mut names = Vec::new();
        match self.parse_identifier() {
            Some(name) => names.push(name),
            None => return Stmt::Error,
        }
        while self.eat(Token::Comma) {
            match self.parse_identifier() {
                Some(name) => names.push(name),
                None => return Stmt::Error,
            }
        }

        if self.eat(Token::Equals) {
            // zero-valued array declaration
            let array_size = match self.current_token {
                Token::ArraySize(size) => {
                    self.next();
                    size
                }
                _ => {
                    self.syntax_error(format!(
                        "expected array size, found `{}`",
                        self.current_token
                    ));
                    return Stmt::Error;
                }
            };
            let ty = match self.parse_type_specifier() {
                Some(ty) => ty,
                None => return Stmt::Error,
            };
            self.expect(Token::OpenBrace);
            self.expect(Token::CloseBrace);
            Stmt::Declaration {
                kind,
                names,
                ty,
                array_size: Some(array_size),
                initializer: None,
            }
        } else {
            let ty = match self.parse_type_specifier() {
                Some(ty) => ty,
                None => return Stmt::Error,
            };
            let initializer = if self.eat(Token::Equals) {
                Some(self.parse_expr())
            } else {
                None
            };
            Stmt::Declaration {
                kind,
                names,
                ty,
                array_size: None,
                initializer,
            }
        }
    }

    /// Parses an assignment. Both `=` and `:=` are accepted.
    fn parse_assignment(&mut self) -> Stmt {
        let target = match self.parse_identifier() {
            Some(target) => target,
            None => return Stmt::Error,
        };
        if !self.eat(Token::Equals) && !self.eat(Token::ColonEquals) {
            self.syntax_error(format!(
                "expected `=` or `:=`, found `{}`",
                self.current_token
            ));
            return Stmt::Error;
        }
        let value = self.parse_expr();
        Stmt::Assignment { target, value }
    }

    fn parse_if_stmt(&mut self) -> Stmt {
        self.expect(Token::If);
        self.expect(Token::OpenParen);
        let condition = self.parse_expr();
        self.expect(Token::CloseParen);
        let then_branch = self.parse_block();
        let else_branch = if self.eat(Token::Else) {
            Some(self.parse_block())
        } else {
            None
        };
        Stmt::If {
            condition,
            then_branch,
            else_branch,
        }
    }

    fn parse_for_stmt(&mut self) -> Stmt {
        self.expect(Token::For);
        let init = Box::new(self.parse_assignment());
        self.expect(Token::Semi);
        let condition = self.parse_expr();
        self.expect(Token::Semi);
        let post = Box::new(self.parse_assignment());
        let body = self.parse_block();
        Stmt::For {
            init,
            condition,
            post,
            body,
        }
    }

    fn parse_do_while_stmt(&mut self) -> Stmt {
        self.expect(Token::Do);
        let body = self.parse_block();
        self.expect(Token::While);
        self.expect(Token::OpenParen);
        let condition = self.parse_expr();
        self.expect(Token::CloseParen);
        Stmt::DoWhile { body, condition }
    }

    fn parse_switch_stmt(&mut self) -> Stmt {
        self.expect(Token::Switch);
        let discriminant = match self.current_token.clone() {
            Token::Identifier(ident) => {
                self.next();
                Expr::Identifier(ident)
            }
            Token::NumberLit(value) => {
                self.next();
                Expr::NumberLit(value)
            }
            _ => {
                self.syntax_error(format!(
                    "expected identifier or number, found `{}`",
                    self.current_token
                ));
                return Stmt::Error;
            }
        };
        self.expect(Token::OpenBrace);

        let mut cases = Vec::new();
        while !self.eat(Token::CloseBrace) {
            match self.current_token {
                Token::Eof => {
                    self.syntax_error("expected `}`, found end of input");
                    break;
                }
                Token::Case => cases.push(self.parse_case()),
                _ => {
                    self.unexpected();
                    self.next(); // guarantee progress before resynchronizing
                    self.synchronize();
                }
            }
        }
        if cases.is_empty() {
            self.syntax_error("switch must contain at least one case");
        }

        Stmt::Switch {
            discriminant,
            cases,
        }
    }

    /// Parses a single `case` clause. An explicit trailing `break` terminates
    /// the clause and is recorded; cases never fall through either way.
    fn parse_case(&mut self) -> Case {
        self.expect(Token::Case);
        let value = match self.current_token {
            Token::NumberLit(value) => {
                self.next();
                value
            }
            _ => {
                self.syntax_error(format!(
                    "expected case label, found `{}`",
                    self.current_token
                ));
                0
            }
        };
        self.expect(Token::Colon);

        let mut body = Vec::new();
        let mut has_break = false;
        loop {
            match self.current_token {
                Token::Case | Token::CloseBrace | Token::Eof => break,
                Token::Break => {
                    self.next();
                    has_break = true;
                    break;
                }
                _ => {
                    let stmt = self.parse_stmt();
                    if stmt == Stmt::Error {
                        self.synchronize();
                    }
                    body.push(stmt);
                }
            }
        }

        Case {
            value,
            body,
            has_break,
        }
    }

    fn parse_fn_declaration(&mut self) -> Stmt {
        self.expect(Token::Func);
        let ident = match self.parse_identifier() {
            Some(ident) => ident,
            None => return Stmt::Error,
        };
        self.expect(Token::OpenParen);
        let mut params = Vec::new();
        if !self.eat(Token::CloseParen) {
            loop {
                let name = match self.parse_identifier() {
                    Some(name) => name,
                    None => return Stmt::Error,
                };
                let ty = match self.parse_type_specifier() {
                    Some(ty) => ty,
                    None => return Stmt::Error,
                };
                params.push(Param { name, ty });

                if self.eat(Token::CloseParen) {
                    break;
                } else if !self.eat(Token::Comma) {
                    self.unexpected();
                    break;
                }
            }
        }

        Stmt::FnDeclaration { ident, params }
    }
}
