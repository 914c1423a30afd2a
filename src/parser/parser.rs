//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program entry point.
//! The parser pulls tokens from the lexer one at a time, keeping the current
//! token and one token of lookahead. Expressions are parsed with NUD/LED
//! handlers looked up by token kind; statements have their own table.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    MK_TOKEN,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler,
        NUDLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// Deepest expression nesting accepted before the parser gives up on a statement.
///
/// Every level of nesting costs several stack frames; input past this
/// depth is reported as an error instead of exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 64;

/// The main parser structure that maintains parsing state.
///
/// Owns the lexer for its whole run. Handlers are entered with the first
/// token of their construct as the current token and return with the last
/// token of the construct as the current token.
pub struct Parser {
    /// Source of tokens, advanced only on demand
    lexer: Lexer,
    current_token: Token,
    peek_token: Token,
    /// Diagnostics in the order they were raised
    errors: Vec<Error>,
    /// Number of `parse_expr` calls currently on the stack
    nesting_depth: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for infix binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a new Parser with its lookup tables registered and both the
    /// current and peek tokens primed.
    pub fn new(lexer: Lexer) -> Self {
        let mut parser = Parser {
            lexer,
            current_token: MK_TOKEN!(TokenKind::EOF, ""),
            peek_token: MK_TOKEN!(TokenKind::EOF, ""),
            errors: vec![],
            nesting_depth: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser.advance();
        parser.advance();
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek_token.kind
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current_token.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Shifts the peek token into the current slot, pulls a new peek token
    /// from the lexer and returns the token that was current.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        let peek = std::mem::replace(&mut self.peek_token, next);
        std::mem::replace(&mut self.current_token, peek)
    }

    /// Advances onto the peek token if it has the expected kind.
    ///
    /// On a mismatch nothing is consumed and an `UnexpectedToken` error
    /// naming the peek token is returned.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<&Token, Error> {
        if self.peek_token_is(expected_kind) {
            self.advance();
            Ok(&self.current_token)
        } else {
            Err(self.peek_error(expected_kind))
        }
    }

    fn peek_error(&self, expected: TokenKind) -> Error {
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected,
                found: self.peek_token.kind,
            },
            self.peek_token.clone(),
        )
    }

    /// Builds an error located at the current token.
    pub fn error(&self, error_impl: ErrorImpl) -> Error {
        Error::new(error_impl, self.current_token.clone())
    }

    /// Binding power of the peek token when it continues an expression.
    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power_lookup
            .get(&self.peek_token.kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Increments the nesting depth, failing once it passes [`MAX_NESTING_DEPTH`].
    /// Pair every `Ok` with a call to [`Parser::leave_nesting`].
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.nesting_depth >= MAX_NESTING_DEPTH {
            return Err(self.error(ErrorImpl::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            }));
        }
        self.nesting_depth += 1;
        Ok(())
    }

    pub fn leave_nesting(&mut self) {
        self.nesting_depth = self.nesting_depth.saturating_sub(1);
    }

    /// Parses statements until `EOF`.
    ///
    /// A statement that fails to parse is recorded in the error list and
    /// skipped (see [`Parser::synchronize`]); parsing then resumes with the
    /// following statement, so every statement in the input gets a chance
    /// to report.
    #[instrument(skip_all)]
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.current_token_is(TokenKind::EOF) {
            match parse_stmt(self) {
                Ok(stmt) => {
                    program.statements.push(stmt);
                    self.advance();
                }
                Err(error) => {
                    self.record_error(error);
                    self.synchronize(false);
                }
            }
        }

        debug!(
            statements = program.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        program
    }

    pub fn record_error(&mut self, error: Error) {
        debug!(%error, token = %error.get_token(), "recovering from parse error");
        self.errors.push(error);
    }

    /// Skips the rest of a statement that failed to parse and leaves the
    /// current token on the first token of the next one.
    ///
    /// The skip ends after a `;`, or on a `let`/`return` that starts a new
    /// statement. Inside a block it also ends on the closing `}`, which is
    /// left for the block to consume. Always moves forward unless it is
    /// already at `EOF` or, in a block, at `}`.
    pub fn synchronize(&mut self, in_block: bool) {
        loop {
            match self.current_token_kind() {
                TokenKind::EOF => return,
                TokenKind::RBrace if in_block => return,
                TokenKind::Semicolon => {
                    self.advance();
                    return;
                }
                _ => {}
            }

            self.advance();
            if matches!(
                self.current_token_kind(),
                TokenKind::Let | TokenKind::Return
            ) {
                return;
            }
        }
    }

    /// Messages of every error raised so far, in order.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    /// Structured form of [`Parser::errors`].
    pub fn diagnostics(&self) -> &[Error] {
        &self.errors
    }
}

/// Parses a source string into a Program.
///
/// This is the main entry point for parsing. It creates a lexer and parser
/// instance and parses all statements until EOF.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (holding the errors raised during the run)
/// - The parsed Program, possibly partial when errors were raised
pub fn parse(source: &str) -> (Parser, Program) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    (parser, program)
}
