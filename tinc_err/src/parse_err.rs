use crate::err::TinErr;

/// Every way a parse can fail. Each kind carries the context needed to
/// render a precise message: the expected token or kind, and what was
/// actually found. Tokens carry no source positions, so messages cite
/// the offending lexeme instead of a line/column pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrTy {
    /// The current token does not match the kind the grammar requires.
    /// Fields are (expected, found).
    TknMismatch(String, String),

    /// A statement began with something other than a type keyword.
    InvalidDeclStart(String),

    /// A type keyword was not followed by an identifier.
    ExpectedIdent(String),

    /// The token sequence ended while the grammar still expected
    /// something. Carries a description of what was expected.
    UnexpectedEof(String),

    /// An assignment target has no entry in the symbol table.
    UndeclaredVar(String),

    /// The literal's category does not match the declared type.
    /// Fields are (found literal category, declared type).
    TypeMismatch(String, String),

    /// A declaration re-used a name that already has an entry.
    Redeclared(String),

    /// A token the tokenizer could not classify reached the parser.
    UnknownLexeme(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErr {
    pub ty: ParseErrTy,
}

impl ParseErr {
    pub fn new(ty: ParseErrTy) -> ParseErr {
        ParseErr { ty }
    }
}

impl TinErr for ParseErr {
    fn emit(&self) {
        eprintln!("tin: Parse error - {}", self.to_msg());
    }

    fn to_msg(&self) -> String {
        match self.ty {
            ParseErrTy::TknMismatch(ref expected, ref found) => {
                format!("Expected token '{}', but found '{}'", expected, found)
            }
            ParseErrTy::InvalidDeclStart(ref found) => format!(
                "Invalid declaration: expected a type keyword, but found '{}'",
                found
            ),
            ParseErrTy::ExpectedIdent(ref found) => {
                format!("Identifier expected, found '{}'. Is this a reserved word?", found)
            }
            ParseErrTy::UnexpectedEof(ref expected) => {
                format!("Unexpected end of input: expected {}", expected)
            }
            ParseErrTy::UndeclaredVar(ref name) => {
                format!("Undeclared variable '{}' found", name)
            }
            ParseErrTy::TypeMismatch(ref found, ref decl) => format!(
                "Cannot assign {} into variable of type {}",
                found, decl
            ),
            ParseErrTy::Redeclared(ref name) => {
                format!("Variable '{}' is already declared", name)
            }
            ParseErrTy::UnknownLexeme(ref lexeme) => {
                format!("Unrecognized lexeme '{}' found", lexeme)
            }
        }
    }
}
