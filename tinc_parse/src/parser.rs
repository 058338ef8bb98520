use crate::{
    symtab::SymTab,
    token::{Token, TokenTy},
    trace::TraceEvent,
};

use log::debug;
use tinc_err::parse_err::{ParseErr, ParseErrTy};

/// [`Parser`] implements a top-down, LL(1) recursive descent parser for
/// the tin grammar. The token sequence is fully materialized before the
/// parser sees it; the parser borrows it read-only and walks it with an
/// explicit cursor. Every recognizer method takes the cursor as an
/// argument and returns the advanced cursor on success, so partial
/// grammars can be driven in isolation without any hidden
/// current-token state.
///
/// The grammar is a repetition of declaration/assignment units. The
/// assignment's target is the identifier the declaration just bound, so
/// the identifier appears once in the source text:
///
/// program ::= { decl assign } ;
/// decl    ::= TYPE IDENT ;
/// assign  ::= "=" LITERAL [ ";" ] ;
///
/// A declaration inserts its binding into the symbol table and records
/// a trace event; an assignment checks the literal's category against
/// the declared type and records a trace event. The first error aborts
/// the whole parse: every recognizer returns `Result` and the control
/// loop propagates with `?`, so there is no recovery and no partial
/// commit past the failing statement.
pub struct Parser<'t, 's> {
    /// The token sequence being consumed. Never mutated or reordered.
    tokens: &'t [Token],

    /// The symbol table filled by declarations in this run.
    symtab: &'s mut SymTab,

    /// Trace events recorded so far, in recognition order.
    trace: Vec<TraceEvent>,
}

impl<'t, 's> Parser<'t, 's> {
    pub fn new(tokens: &'t [Token], symtab: &'s mut SymTab) -> Parser<'t, 's> {
        Parser {
            tokens,
            symtab,
            trace: Vec::new(),
        }
    }

    /// Main entry point. Parses the entire token sequence and returns
    /// the ordered trace, or the first error encountered.
    pub fn parse(mut self) -> Result<Vec<TraceEvent>, ParseErr> {
        let mut cur = 0;

        while cur < self.tokens.len() {
            cur = self.decl_assign(cur)?;
        }

        Ok(self.trace)
    }

    /// Parses one declaration/assignment unit, the only statement shape
    /// the grammar has. The terminator is optional: one trailing
    /// semicolon is consumed if present, never required.
    fn decl_assign(&mut self, cur: usize) -> Result<usize, ParseErr> {
        let (cur, name) = self.declaration(cur)?;
        let cur = self.assignment(cur, &name)?;
        Ok(self.optional(cur, TokenTy::Semicolon))
    }

    /// Parses a declaration and binds the name in the symbol table.
    ///
    /// decl ::= TYPE IDENT ;
    fn declaration(&mut self, cur: usize) -> Result<(usize, String), ParseErr> {
        let tkn = self.peek_or_eof(cur, "a type keyword")?;
        let ty = match tkn.ty.as_decl_ty() {
            Some(ty) => ty,
            None => {
                return Err(self.reject(tkn, ParseErrTy::InvalidDeclStart(tkn.lexeme.clone())));
            }
        };
        let cur = cur + 1;

        let ident = self.peek_or_eof(cur, "an identifier")?;
        if ident.ty != TokenTy::Ident {
            return Err(self.reject(ident, ParseErrTy::ExpectedIdent(ident.lexeme.clone())));
        }
        let name = ident.lexeme.clone();

        if self.symtab.contains(&name) {
            return Err(ParseErr::new(ParseErrTy::Redeclared(name)));
        }

        debug!("parse: declaring {} as {}", name, ty);
        self.symtab.store(&name, ty);
        self.trace.push(TraceEvent::Declared {
            name: name.clone(),
            ty,
        });

        Ok((cur + 1, name))
    }

    /// Parses the assignment for a declared name. The name is looked up
    /// in the symbol table rather than trusted, so this recognizer also
    /// stands alone against an arbitrary table state.
    ///
    /// assign ::= "=" LITERAL ;
    fn assignment(&mut self, cur: usize, name: &str) -> Result<usize, ParseErr> {
        let cur = self.expect(cur, TokenTy::Assign, "=")?;

        let lit = self.peek_or_eof(cur, "a literal value")?;
        if !lit.ty.is_lit() {
            return Err(self.reject(
                lit,
                ParseErrTy::TknMismatch(String::from("literal"), lit.lexeme.clone()),
            ));
        }

        let declared = match self.symtab.retrieve(name) {
            Some(ty) => ty,
            None => {
                return Err(ParseErr::new(ParseErrTy::UndeclaredVar(String::from(name))));
            }
        };

        if !lit.ty.lit_matches(declared) {
            return Err(ParseErr::new(ParseErrTy::TypeMismatch(
                String::from(lit.ty.kind_name()),
                declared.to_string(),
            )));
        }

        debug!("parse: assigning {} = {}", name, lit.lexeme);
        self.trace.push(TraceEvent::Assigned {
            name: String::from(name),
            value: lit.lexeme.clone(),
        });

        Ok(cur + 1)
    }

    /// Check that the token at the cursor has the expected kind and
    /// advance past it. `expected` is the text used in the error
    /// message when the kind does not match or the input ends.
    fn expect(&self, cur: usize, ty: TokenTy, expected: &str) -> Result<usize, ParseErr> {
        let tkn = self.peek_or_eof(cur, expected)?;
        if tkn.ty == ty {
            Ok(cur + 1)
        } else {
            Err(self.reject(
                tkn,
                ParseErrTy::TknMismatch(String::from(expected), tkn.lexeme.clone()),
            ))
        }
    }

    /// Advance past the token at the cursor if it has the given kind.
    /// Used for the optional statement terminator.
    fn optional(&self, cur: usize, ty: TokenTy) -> usize {
        match self.peek(cur) {
            Some(tkn) if tkn.ty == ty => cur + 1,
            _ => cur,
        }
    }

    fn peek(&self, cur: usize) -> Option<&'t Token> {
        self.tokens.get(cur)
    }

    /// Peek, turning the end of the sequence into an explicit error
    /// instead of reading past it.
    fn peek_or_eof(&self, cur: usize, expected: &str) -> Result<&'t Token, ParseErr> {
        self.peek(cur)
            .ok_or_else(|| ParseErr::new(ParseErrTy::UnexpectedEof(String::from(expected))))
    }

    /// Wrap a rejection, upgrading it to an unknown-lexeme error when
    /// the offending token is one the tokenizer could not classify.
    fn reject(&self, tkn: &Token, ty: ParseErrTy) -> ParseErr {
        if tkn.ty == TokenTy::Unknown {
            ParseErr::new(ParseErrTy::UnknownLexeme(tkn.lexeme.clone()))
        } else {
            ParseErr::new(ty)
        }
    }
}
