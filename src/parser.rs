use crate::{
    ast::{tag, ParseNode},
    diagnostics::{Diagnostic, DiagnosticKind, SourceSpan},
    lexer::{Lexer, Token, TokenKind},
};

/// Parses a whole source string into a generic parse tree rooted at a
/// `program` node. The parser enforces grammar validity (balanced
/// delimiters, valid tokens); the reader downstream only interprets shape.
pub fn parse_program(source: &str) -> Result<ParseNode, Diagnostic> {
    let tokens = Lexer::new(source).tokenize()?;
    Parser::new(tokens).parse_program()
}

struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, current: 0 }
    }

    fn parse_program(&mut self) -> Result<ParseNode, Diagnostic> {
        let mut children = Vec::new();
        while !self.check(TokenKind::Eof) {
            children.push(self.parse_expr()?);
        }
        let end = self.peek().span.end;
        Ok(ParseNode::branch(
            tag::PROGRAM,
            children,
            SourceSpan::new(0, end),
        ))
    }

    fn parse_expr(&mut self) -> Result<ParseNode, Diagnostic> {
        let token = self.advance().clone();
        match token.kind {
            TokenKind::Number => Ok(ParseNode::leaf(tag::NUMBER, token.lexeme, token.span)),
            TokenKind::Symbol => Ok(ParseNode::leaf(tag::SYMBOL, token.lexeme, token.span)),
            TokenKind::LParen => self.parse_list(tag::SEXPR, TokenKind::RParen, token),
            TokenKind::LBrace => self.parse_list(tag::QEXPR, TokenKind::RBrace, token),
            TokenKind::RParen | TokenKind::RBrace => Err(Diagnostic::new(
                DiagnosticKind::Parser,
                format!("stray `{}` without matching opener", token.lexeme),
            )
            .with_span(token.span)),
            TokenKind::Eof => Err(Diagnostic::new(
                DiagnosticKind::Parser,
                "unexpected end of input",
            )
            .with_span(token.span)),
        }
    }

    fn parse_list(
        &mut self,
        list_tag: &'static str,
        closer: TokenKind,
        open: Token,
    ) -> Result<ParseNode, Diagnostic> {
        let start = open.span.start;
        let mut children = vec![ParseNode::leaf(tag::CHAR, open.lexeme.clone(), open.span)];
        while !self.check(closer.clone()) {
            if self.check(TokenKind::Eof) {
                return Err(Diagnostic::new(
                    DiagnosticKind::Parser,
                    format!("unclosed `{}`", open.lexeme),
                )
                .with_span(open.span)
                .with_note("expected a matching closing delimiter before end of input"));
            }
            children.push(self.parse_expr()?);
        }
        let close = self.advance().clone();
        let end = close.span.end;
        children.push(ParseNode::leaf(tag::CHAR, close.lexeme, close.span));
        Ok(ParseNode::branch(
            list_tag,
            children,
            SourceSpan::new(start, end),
        ))
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.current.min(self.tokens.len() - 1)]
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    fn advance(&mut self) -> &Token {
        let idx = self.current.min(self.tokens.len() - 1);
        if self.current < self.tokens.len() {
            self.current += 1;
        }
        &self.tokens[idx]
    }
}
