//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - One- and two-character operators
//! - Illegal input and end of input

use super::{
    lexer::{tokenize, Lexer},
    tokens::{lookup_ident, TokenKind},
};

#[test]
fn test_tokenize_symbols() {
    let tokens = tokenize("=+(){},;");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Assign,
            TokenKind::Plus,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("let return fn true false if else");

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Return);
    assert_eq!(tokens[2].kind, TokenKind::Function);
    assert_eq!(tokens[3].kind, TokenKind::True);
    assert_eq!(tokens[4].kind, TokenKind::False);
    assert_eq!(tokens[5].kind, TokenKind::If);
    assert_eq!(tokens[6].kind, TokenKind::Else);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
    assert_eq!(tokens[2].literal, "fn");
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo _underscore CamelCase letter iff");

    for (token, expected) in tokens
        .iter()
        .zip(["foo", "_underscore", "CamelCase", "letter", "iff"])
    {
        assert_eq!(token.kind, TokenKind::Ident);
        assert_eq!(token.literal, expected);
    }
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifier_stops_at_digit() {
    let tokens = tokenize("x1");

    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!(tokens[0].literal, "x");
    assert_eq!(tokens[1].kind, TokenKind::Int);
    assert_eq!(tokens[1].literal, "1");
}

#[test]
fn test_tokenize_integers() {
    let tokens = tokenize("5 10 838383 007");

    assert_eq!(tokens[0].literal, "5");
    assert_eq!(tokens[1].literal, "10");
    assert_eq!(tokens[2].literal, "838383");
    assert_eq!(tokens[3].literal, "007");
    assert!(tokens[..4].iter().all(|t| t.kind == TokenKind::Int));
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("+ - * / ! == != < > <= >= =");

    assert_eq!(tokens[0].kind, TokenKind::Plus);
    assert_eq!(tokens[1].kind, TokenKind::Minus);
    assert_eq!(tokens[2].kind, TokenKind::Asterisk);
    assert_eq!(tokens[3].kind, TokenKind::Slash);
    assert_eq!(tokens[4].kind, TokenKind::Bang);
    assert_eq!(tokens[5].kind, TokenKind::Equal);
    assert_eq!(tokens[6].kind, TokenKind::NotEqual);
    assert_eq!(tokens[7].kind, TokenKind::LessThan);
    assert_eq!(tokens[8].kind, TokenKind::GreaterThan);
    assert_eq!(tokens[9].kind, TokenKind::LessThanOrEqual);
    assert_eq!(tokens[10].kind, TokenKind::GreaterThanOrEqual);
    assert_eq!(tokens[11].kind, TokenKind::Assign);
    assert_eq!(tokens[12].kind, TokenKind::EOF);
}

#[test]
fn test_two_character_operator_literals() {
    let tokens = tokenize("==!=<=>=");

    assert_eq!(tokens[0].literal, "==");
    assert_eq!(tokens[1].literal, "!=");
    assert_eq!(tokens[2].literal, "<=");
    assert_eq!(tokens[3].literal, ">=");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_single_character_fallback_without_equals() {
    let tokens = tokenize("!x <y >z =w");

    assert_eq!(tokens[0].kind, TokenKind::Bang);
    assert_eq!(tokens[2].kind, TokenKind::LessThan);
    assert_eq!(tokens[4].kind, TokenKind::GreaterThan);
    assert_eq!(tokens[6].kind, TokenKind::Assign);
    assert_eq!(tokens[6].literal, "=");
}

#[test]
fn test_tokenize_program() {
    let source = "let five = 5;
let ten = 10;
let add = fn(x, y) {
  x + y;
};
let result = add(five, ten);
!-/*5;
5 < 10 > 5;
if (5 < 10) {
  return true;
} else {
  return false;
}
10 == 10;
10 != 9;
";
    let expected = [
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "five"),
        (TokenKind::Assign, "="),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "ten"),
        (TokenKind::Assign, "="),
        (TokenKind::Int, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "add"),
        (TokenKind::Assign, "="),
        (TokenKind::Function, "fn"),
        (TokenKind::LParen, "("),
        (TokenKind::Ident, "x"),
        (TokenKind::Comma, ","),
        (TokenKind::Ident, "y"),
        (TokenKind::RParen, ")"),
        (TokenKind::LBrace, "{"),
        (TokenKind::Ident, "x"),
        (TokenKind::Plus, "+"),
        (TokenKind::Ident, "y"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::RBrace, "}"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "result"),
        (TokenKind::Assign, "="),
        (TokenKind::Ident, "add"),
        (TokenKind::LParen, "("),
        (TokenKind::Ident, "five"),
        (TokenKind::Comma, ","),
        (TokenKind::Ident, "ten"),
        (TokenKind::RParen, ")"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Bang, "!"),
        (TokenKind::Minus, "-"),
        (TokenKind::Slash, "/"),
        (TokenKind::Asterisk, "*"),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Int, "5"),
        (TokenKind::LessThan, "<"),
        (TokenKind::Int, "10"),
        (TokenKind::GreaterThan, ">"),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::If, "if"),
        (TokenKind::LParen, "("),
        (TokenKind::Int, "5"),
        (TokenKind::LessThan, "<"),
        (TokenKind::Int, "10"),
        (TokenKind::RParen, ")"),
        (TokenKind::LBrace, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::True, "true"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::RBrace, "}"),
        (TokenKind::Else, "else"),
        (TokenKind::LBrace, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::False, "false"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::RBrace, "}"),
        (TokenKind::Int, "10"),
        (TokenKind::Equal, "=="),
        (TokenKind::Int, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Int, "10"),
        (TokenKind::NotEqual, "!="),
        (TokenKind::Int, "9"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::EOF, ""),
    ];

    let mut lexer = Lexer::new(source);
    for (i, (kind, literal)) in expected.iter().enumerate() {
        let token = lexer.next_token();
        assert_eq!(token.kind, *kind, "token {} has the wrong kind", i);
        assert_eq!(token.literal, *literal, "token {} has the wrong literal", i);
    }
}

#[test]
fn test_tokenize_illegal() {
    let tokens = tokenize("let x = @;");

    assert_eq!(tokens[3].kind, TokenKind::Illegal);
    assert_eq!(tokens[3].literal, "@");
    // The scan continues past illegal input
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_illegal_multibyte_character() {
    let tokens = tokenize("a é b");

    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].literal, "é");
    assert_eq!(tokens[2].kind, TokenKind::Ident);
    assert_eq!(tokens[2].literal, "b");
}

#[test]
fn test_tokenize_nul_byte_is_illegal() {
    let tokens = tokenize("a\0b");

    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].literal, "\0");
    assert_eq!(tokens[2].literal, "b");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_whitespace_handling() {
    let tokens = tokenize("  let\tx \r\n =   42  ");

    assert_eq!(tokens.len(), 5);
    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Ident);
    assert_eq!(tokens[2].kind, TokenKind::Assign);
    assert_eq!(tokens[3].kind, TokenKind::Int);
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_eof_repeats() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token().kind, TokenKind::Ident);
    for _ in 0..3 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.literal, "");
    }
}

#[test]
fn test_empty_source() {
    let tokens = tokenize("");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_lexer_iterator_stops_before_eof() {
    let literals: Vec<String> = Lexer::new("a + b").map(|t| t.literal).collect();

    assert_eq!(literals, vec!["a", "+", "b"]);
}

#[test]
fn test_lookup_ident() {
    assert_eq!(lookup_ident("fn"), TokenKind::Function);
    assert_eq!(lookup_ident("let"), TokenKind::Let);
    assert_eq!(lookup_ident("Let"), TokenKind::Ident);
    assert_eq!(lookup_ident("function"), TokenKind::Ident);
}

#[test]
fn test_token_kind_display() {
    assert_eq!(TokenKind::Ident.to_string(), "IDENT");
    assert_eq!(TokenKind::Illegal.to_string(), "ILLEGAL");
    assert_eq!(TokenKind::LessThanOrEqual.to_string(), "LESSTHANOREQUAL");
    assert_eq!(TokenKind::EOF.to_string(), "EOF");
}
