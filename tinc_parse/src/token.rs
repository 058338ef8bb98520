use crate::symtab::Ty;
use std::fmt;

/// The kind of a lexical token. This is a closed, flat set: the lexeme
/// text lives on [`Token`], never inside the kind, so the tokenizer's
/// rule table can be a const list of kinds paired with matchers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenTy {
    // Reserved type keywords
    Int,
    Float,
    Bool,

    // Literal categories
    IntLit,
    FloatLit,
    BoolLit,

    Ident,

    /// =
    Assign,
    /// One of + - * /, recognized but never evaluated
    Op,

    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    /// : (reserved; no grammar rule consumes it)
    Colon,
    /// ; statement terminator
    Semicolon,

    /// Reserved for a print feature that was never wired into the grammar
    Console,

    /// Text no lexical rule could classify. The tokenizer itself never
    /// produces this (unmatched characters are dropped), but the kind
    /// stays in the set so token sequences built by hand can exercise
    /// the parser's rejection path.
    Unknown,
}

impl TokenTy {
    /// The display name of this kind, used in token dumps and in error
    /// messages that cite a kind rather than a lexeme.
    pub fn kind_name(&self) -> &'static str {
        match self {
            TokenTy::Int => "int",
            TokenTy::Float => "float",
            TokenTy::Bool => "bool",
            TokenTy::IntLit => "IntLit",
            TokenTy::FloatLit => "FloatLit",
            TokenTy::BoolLit => "BoolLit",
            TokenTy::Ident => "Ident",
            TokenTy::Assign => "Assign",
            TokenTy::Op => "Op",
            TokenTy::LeftParen => "LeftParen",
            TokenTy::RightParen => "RightParen",
            TokenTy::LeftBrace => "LeftBrace",
            TokenTy::RightBrace => "RightBrace",
            TokenTy::Comma => "Comma",
            TokenTy::Colon => "Colon",
            TokenTy::Semicolon => "Semicolon",
            TokenTy::Console => "Console",
            TokenTy::Unknown => "Unknown",
        }
    }

    /// If this kind is a reserved type keyword, the type it declares.
    pub fn as_decl_ty(&self) -> Option<Ty> {
        match self {
            TokenTy::Int => Some(Ty::Int),
            TokenTy::Float => Some(Ty::Float),
            TokenTy::Bool => Some(Ty::Bool),
            _ => None,
        }
    }

    /// True if this kind is one of the literal categories.
    pub fn is_lit(&self) -> bool {
        match self {
            TokenTy::IntLit | TokenTy::FloatLit | TokenTy::BoolLit => true,
            _ => false,
        }
    }

    /// Exact-match compatibility between a literal category and a
    /// declared type. No widening: an IntLit does not fit a float
    /// variable.
    pub fn lit_matches(&self, ty: Ty) -> bool {
        match (self, ty) {
            (TokenTy::IntLit, Ty::Int) => true,
            (TokenTy::FloatLit, Ty::Float) => true,
            (TokenTy::BoolLit, Ty::Bool) => true,
            _ => false,
        }
    }
}

impl fmt::Display for TokenTy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.kind_name())
    }
}

/// A single lexical token: a kind and the text it was cut from.
/// Immutable once produced; the parser only ever reads these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub ty: TokenTy,
    pub lexeme: String,
}

impl Token {
    pub fn new(ty: TokenTy, lexeme: &str) -> Token {
        Token {
            ty,
            lexeme: String::from(lexeme),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.ty.kind_name(), self.lexeme)
    }
}
