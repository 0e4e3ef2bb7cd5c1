//! Tokens extracted from TMM source by the lexer.

use std::fmt;
use std::path::Path;
use std::rc::Rc;

/// Every token the lexer can produce. Operator and punctuation tokens
/// carry no text; literal-bearing kinds keep their payload in
/// [`Token::text`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    // Keyword and identifier tokens
    Keyword,
    Identifier,

    // Number and literal tokens
    Number,
    Binary,
    Octal,
    Hexadecimal,
    String,
    Character,
    Placeholder,

    // Arithmetic operator tokens
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Exponent,

    // Bitwise operator tokens
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseNot,
    BitwiseLshift,
    BitwiseRshift,

    // Logical operator tokens
    LogicalAnd,
    LogicalOr,
    LogicalNot,

    // Comparison operator tokens
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,

    // Assignment operator tokens
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    ExpAssign,
    AndAssign,
    OrAssign,
    XorAssign,
    LshiftAssign,
    RshiftAssign,

    // Delimiter tokens
    Comma,
    Semicolon,
    Colon,
    Period,
    Question,

    // Grouping tokens
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenBrace,
    CloseBrace,
    Arrow,

    // Signal tokens
    Eol,
    Eof,
}

impl TokenKind {
    pub fn is_number(self) -> bool {
        matches!(
            self,
            TokenKind::Number | TokenKind::Binary | TokenKind::Octal | TokenKind::Hexadecimal
        )
    }

    pub fn is_unary_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Add | TokenKind::Subtract | TokenKind::BitwiseNot | TokenKind::LogicalNot
        )
    }

    pub fn is_multiplicative_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Multiply | TokenKind::Divide | TokenKind::Modulo | TokenKind::Exponent
        )
    }

    pub fn is_additive_operator(self) -> bool {
        matches!(self, TokenKind::Add | TokenKind::Subtract)
    }

    pub fn is_shift_operator(self) -> bool {
        matches!(self, TokenKind::BitwiseLshift | TokenKind::BitwiseRshift)
    }

    /// Relational and equality operators share one precedence level.
    pub fn is_relational_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Equal
                | TokenKind::NotEqual
                | TokenKind::Less
                | TokenKind::LessEqual
                | TokenKind::Greater
                | TokenKind::GreaterEqual
        )
    }

    pub fn is_assignment_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Assign
                | TokenKind::AddAssign
                | TokenKind::SubAssign
                | TokenKind::MulAssign
                | TokenKind::DivAssign
                | TokenKind::ModAssign
                | TokenKind::ExpAssign
                | TokenKind::AndAssign
                | TokenKind::OrAssign
                | TokenKind::XorAssign
                | TokenKind::LshiftAssign
                | TokenKind::RshiftAssign
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::Binary => "binary",
            TokenKind::Octal => "octal",
            TokenKind::Hexadecimal => "hexadecimal",
            TokenKind::String => "string",
            TokenKind::Character => "character",
            TokenKind::Placeholder => "placeholder",
            TokenKind::Add => "add",
            TokenKind::Subtract => "subtract",
            TokenKind::Multiply => "multiply",
            TokenKind::Divide => "divide",
            TokenKind::Modulo => "modulo",
            TokenKind::Exponent => "exponent",
            TokenKind::BitwiseAnd => "bitwise_and",
            TokenKind::BitwiseOr => "bitwise_or",
            TokenKind::BitwiseXor => "bitwise_xor",
            TokenKind::BitwiseNot => "bitwise_not",
            TokenKind::BitwiseLshift => "bitwise_lshift",
            TokenKind::BitwiseRshift => "bitwise_rshift",
            TokenKind::LogicalAnd => "logical_and",
            TokenKind::LogicalOr => "logical_or",
            TokenKind::LogicalNot => "logical_not",
            TokenKind::Equal => "equal",
            TokenKind::NotEqual => "not_equal",
            TokenKind::Less => "less",
            TokenKind::LessEqual => "less_equal",
            TokenKind::Greater => "greater",
            TokenKind::GreaterEqual => "greater_equal",
            TokenKind::Assign => "assign",
            TokenKind::AddAssign => "add_assign",
            TokenKind::SubAssign => "sub_assign",
            TokenKind::MulAssign => "mul_assign",
            TokenKind::DivAssign => "div_assign",
            TokenKind::ModAssign => "mod_assign",
            TokenKind::ExpAssign => "exp_assign",
            TokenKind::AndAssign => "and_assign",
            TokenKind::OrAssign => "or_assign",
            TokenKind::XorAssign => "xor_assign",
            TokenKind::LshiftAssign => "lshift_assign",
            TokenKind::RshiftAssign => "rshift_assign",
            TokenKind::Comma => "comma",
            TokenKind::Semicolon => "semicolon",
            TokenKind::Colon => "colon",
            TokenKind::Period => "period",
            TokenKind::Question => "question",
            TokenKind::OpenParen => "open_paren",
            TokenKind::CloseParen => "close_paren",
            TokenKind::OpenBracket => "open_bracket",
            TokenKind::CloseBracket => "close_bracket",
            TokenKind::OpenBrace => "open_brace",
            TokenKind::CloseBrace => "close_brace",
            TokenKind::Arrow => "arrow",
            TokenKind::Eol => "end_of_line",
            TokenKind::Eof => "end_of_file",
        };
        f.write_str(name)
    }
}

/// One token, carrying the canonical path of the file it came from so
/// diagnostics can cite it. The path is shared with the lexer's include
/// set rather than copied per token.
#[derive(Clone, Debug)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    pub source_file: Rc<Path>,
    pub line: usize,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            f.write_str(&self.text)
        }
    }
}
