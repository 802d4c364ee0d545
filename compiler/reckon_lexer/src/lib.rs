//! Reckon lexical analyzer
//!
//! This crate turns a sanitized arithmetic expression into a flat stream of
//! tokens for the Shunting-Yard converter.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod lexer;
pub mod logos_token;
pub mod token;

// Re-export the main types for convenience
pub use lexer::{sanitize, tokenize, tokenize_expression, Lexer};
pub use logos_token::LogosToken;
pub use token::{format_tokens, Location, Token, TokenKind};
