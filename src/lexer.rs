use crate::diagnostics::{Diagnostic, DiagnosticKind, SourceSpan};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Number,
    Symbol,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Eof,
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: SourceSpan,
}

/// Characters permitted in a symbol: `[a-zA-Z0-9_+\-*/\\=<>!&]`.
fn is_symbol_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || "_+-*/\\=<>!&".contains(ch)
}

pub struct Lexer<'a> {
    chars: std::str::CharIndices<'a>,
    current: usize,
    peeked: Option<(usize, char)>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.char_indices(),
            current: 0,
            peeked: None,
        }
    }

    fn bump(&mut self) -> Option<(usize, char)> {
        let next = if let Some((idx, ch)) = self.peeked.take() {
            Some((idx, ch))
        } else {
            self.chars.next()
        };
        if let Some((idx, ch)) = next {
            self.current = idx + ch.len_utf8();
            Some((idx, ch))
        } else {
            None
        }
    }

    fn peek(&mut self) -> Option<(usize, char)> {
        if self.peeked.is_none() {
            self.peeked = self.chars.next();
        }
        self.peeked
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, Diagnostic> {
        let mut tokens = Vec::new();
        while let Some((start, ch)) = self.bump() {
            if ch.is_whitespace() {
                continue;
            }
            let token = match ch {
                '(' => self.delimiter(TokenKind::LParen, start, ch),
                ')' => self.delimiter(TokenKind::RParen, start, ch),
                '{' => self.delimiter(TokenKind::LBrace, start, ch),
                '}' => self.delimiter(TokenKind::RBrace, start, ch),
                '-' if self.peek().map(|(_, next)| next.is_ascii_digit()) == Some(true) => {
                    self.number(start, ch)
                }
                _ if ch.is_ascii_digit() => self.number(start, ch),
                _ if is_symbol_char(ch) => self.symbol(start, ch),
                _ => {
                    return Err(Diagnostic::new(
                        DiagnosticKind::Lexer,
                        format!("unexpected character `{ch}`"),
                    )
                    .with_span(SourceSpan::new(start, self.current)));
                }
            };
            tokens.push(token);
        }
        tokens.push(Token {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            span: SourceSpan::new(self.current, self.current),
        });
        Ok(tokens)
    }

    fn delimiter(&self, kind: TokenKind, start: usize, ch: char) -> Token {
        Token {
            kind,
            lexeme: ch.to_string(),
            span: SourceSpan::new(start, self.current),
        }
    }

    // Matches `-?[0-9]+`; the caller has already checked that a leading `-`
    // is followed by a digit.
    fn number(&mut self, start: usize, first: char) -> Token {
        let mut lexeme = String::from(first);
        while let Some((_, ch)) = self.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            lexeme.push(ch);
            self.bump();
        }
        Token {
            kind: TokenKind::Number,
            lexeme,
            span: SourceSpan::new(start, self.current),
        }
    }

    fn symbol(&mut self, start: usize, first: char) -> Token {
        let mut lexeme = String::from(first);
        while let Some((_, ch)) = self.peek() {
            if !is_symbol_char(ch) {
                break;
            }
            lexeme.push(ch);
            self.bump();
        }
        Token {
            kind: TokenKind::Symbol,
            lexeme,
            span: SourceSpan::new(start, self.current),
        }
    }
}
