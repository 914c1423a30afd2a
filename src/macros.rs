//! Utility macros for the interpreter front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `impl_node!` - Implements `Node` for AST structs that carry their originating token
//!
//! These macros reduce boilerplate in the lexer and AST definitions.

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42");
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr) => {
        $crate::lexer::tokens::Token::new($kind, $literal)
    };
}

/// Implements `Node` for one or more structs holding a `token: Token` field.
///
/// # Example
///
/// ```ignore
/// impl_node!(Identifier, IntegerLiteral);
/// ```
#[macro_export]
macro_rules! impl_node {
    ($($node:ty),+ $(,)?) => {
        $(
            impl $crate::ast::ast::Node for $node {
                fn token_literal(&self) -> &str {
                    &self.token.literal
                }
            }
        )+
    };
}
