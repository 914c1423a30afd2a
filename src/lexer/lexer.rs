use tracing::trace;

use crate::MK_TOKEN;

use super::tokens::{lookup_ident, Token, TokenKind};

/// Character-level scanner producing one token per call.
///
/// The lexer keeps a single character of lookahead (`peek_char`) and never
/// backtracks. Once the input is exhausted every call yields `EOF`.
#[derive(Debug, Clone)]
pub struct Lexer {
    input: String,
    /// Byte offset of `ch`
    position: usize,
    /// Byte offset of the character after `ch`
    read_position: usize,
    /// Current byte, 0 once past the end of input
    ch: u8,
}

impl Lexer {
    pub fn new(input: impl Into<String>) -> Lexer {
        let mut lexer = Lexer {
            input: input.into(),
            position: 0,
            read_position: 0,
            ch: 0,
        };
        lexer.read_char();
        lexer
    }

    fn read_char(&mut self) {
        self.ch = self
            .input
            .as_bytes()
            .get(self.read_position)
            .copied()
            .unwrap_or(0);
        self.position = self.read_position;
        self.read_position = (self.read_position + 1).min(self.input.len() + 1);
    }

    fn peek_char(&self) -> u8 {
        self.input
            .as_bytes()
            .get(self.read_position)
            .copied()
            .unwrap_or(0)
    }

    fn at_eof(&self) -> bool {
        self.position >= self.input.len()
    }

    fn skip_whitespace(&mut self) {
        while !self.at_eof() && matches!(self.ch, b' ' | b'\t' | b'\r' | b'\n') {
            self.read_char();
        }
    }

    fn read_while(&mut self, matcher: fn(u8) -> bool) -> &str {
        let start = self.position;
        while !self.at_eof() && matcher(self.ch) {
            self.read_char();
        }
        &self.input[start..self.position]
    }

    /// Single-character token, or the two-character `<ch>=` form when followed by `=`.
    fn or_equal(&mut self, single: TokenKind, with_equal: TokenKind) -> Token {
        if self.peek_char() == b'=' {
            let start = self.position;
            self.read_char();
            MK_TOKEN!(with_equal, &self.input[start..self.read_position])
        } else {
            MK_TOKEN!(single, &self.input[self.position..self.read_position])
        }
    }

    /// Consumes one whole character, which may span several bytes.
    fn read_illegal(&mut self) -> Token {
        let start = self.position;
        let width = self.input[start..]
            .chars()
            .next()
            .map(char::len_utf8)
            .unwrap_or(1);

        for _ in 0..width {
            self.read_char();
        }

        MK_TOKEN!(TokenKind::Illegal, &self.input[start..start + width])
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        let token = self.scan_token();
        trace!(kind = %token.kind, literal = %token.literal, "token");
        token
    }

    fn scan_token(&mut self) -> Token {
        if self.at_eof() {
            return MK_TOKEN!(TokenKind::EOF, "");
        }

        let token = match self.ch {
            b'=' => self.or_equal(TokenKind::Assign, TokenKind::Equal),
            b'!' => self.or_equal(TokenKind::Bang, TokenKind::NotEqual),
            b'<' => self.or_equal(TokenKind::LessThan, TokenKind::LessThanOrEqual),
            b'>' => self.or_equal(TokenKind::GreaterThan, TokenKind::GreaterThanOrEqual),
            b'+' => MK_TOKEN!(TokenKind::Plus, "+"),
            b'-' => MK_TOKEN!(TokenKind::Minus, "-"),
            b'*' => MK_TOKEN!(TokenKind::Asterisk, "*"),
            b'/' => MK_TOKEN!(TokenKind::Slash, "/"),
            b',' => MK_TOKEN!(TokenKind::Comma, ","),
            b';' => MK_TOKEN!(TokenKind::Semicolon, ";"),
            b'(' => MK_TOKEN!(TokenKind::LParen, "("),
            b')' => MK_TOKEN!(TokenKind::RParen, ")"),
            b'{' => MK_TOKEN!(TokenKind::LBrace, "{"),
            b'}' => MK_TOKEN!(TokenKind::RBrace, "}"),
            // Runs stop on the first non-matching byte, which is left for the next call
            ch if is_letter(ch) => {
                let literal = self.read_while(is_letter).to_string();
                return MK_TOKEN!(lookup_ident(&literal), literal);
            }
            ch if ch.is_ascii_digit() => {
                let literal = self.read_while(|c| c.is_ascii_digit()).to_string();
                return MK_TOKEN!(TokenKind::Int, literal);
            }
            _ => return self.read_illegal(),
        };

        self.read_char();
        token
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields tokens up to, but not including, `EOF`.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is(TokenKind::EOF) {
            None
        } else {
            Some(token)
        }
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

/// Scans the whole source, returning every token followed by a single `EOF`.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens: Vec<Token> = lexer.by_ref().collect();
    tokens.push(lexer.next_token());
    tokens
}
