use crate::{
    rules::RULES,
    token::{Token, TokenTy},
};
use log::debug;

/// Tokenize an entire source string. This is total: input that matches
/// no lexical rule (whitespace included) is dropped without a token and
/// without an error, so the result is always the full ordered token
/// sequence for the parser to consume.
pub fn tokenize(src: &str) -> Vec<Token> {
    Lexer::new(src).collect()
}

/// Cuts tokens from a source string, one call at a time, by running the
/// ordered rule table in [`crate::rules`] at the current offset. The
/// whole input lives in memory; there is no streaming or line buffering.
#[derive(Debug)]
pub struct Lexer<'s> {
    src: &'s str,

    /// Byte offset of the next unconsumed character.
    pos: usize,
}

impl<'s> Lexer<'s> {
    pub fn new(src: &'s str) -> Lexer<'s> {
        Lexer { src, pos: 0 }
    }

    /// Produce the next token, or None at the end of the input. Skips
    /// over any characters that match no rule.
    pub fn next_token(&mut self) -> Option<Token> {
        while self.pos < self.src.len() {
            let rest = &self.src[self.pos..];

            match self.match_rules(rest) {
                Some((ty, len)) => {
                    let lexeme = &rest[..len];
                    self.pos += len;
                    debug!("lex: {} '{}'", ty.kind_name(), lexeme);
                    return Some(Token::new(ty, lexeme));
                }
                None => {
                    // No rule claims this character. Drop it and move on.
                    let ch = rest.chars().next()?;
                    self.pos += ch.len_utf8();
                }
            }
        }

        None
    }

    /// Run the rule table top to bottom against the remaining input and
    /// return the first (highest precedence) match. Each matcher is
    /// greedy, so the winning rule's match is also its longest.
    fn match_rules(&self, rest: &str) -> Option<(TokenTy, usize)> {
        for rule in RULES {
            if let Some(len) = rule.matcher.match_len(rest) {
                return Some((rule.ty, len));
            }
        }
        None
    }
}

impl<'s> Iterator for Lexer<'s> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
