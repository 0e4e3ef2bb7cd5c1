//! Assembler front end for the TM virtual machine.
//!
//! Source files are turned into a flat token stream by the [`lexer`],
//! which deduplicates includes by canonical path, and then into a typed
//! syntax tree by the recursive-descent [`parser`]. Later lowering of the
//! tree into a ROM image is not implemented here.

pub mod keyword;
pub mod lexer;
pub mod parser;
pub mod syntax;
pub mod token;

pub use lexer::{LexError, Lexer};
pub use parser::{ParseError, Parser};
pub use syntax::{Node, Syntax};
pub use token::{Token, TokenKind};
