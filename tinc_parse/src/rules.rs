use crate::token::TokenTy;

/// A single lexical rule: the kind it produces and the shape of text it
/// matches. Rules never overlap in what they *produce*, but several can
/// match the same substring (`int` is both a keyword and a valid
/// identifier), so classification lives entirely in the order of
/// [`RULES`]: the first rule to match wins, and each matcher is greedy,
/// taking the longest lexeme it can. The matched rule is decided at
/// match time and never re-derived afterwards.
#[derive(Debug)]
pub struct LexRule {
    pub ty: TokenTy,
    pub matcher: Matcher,
}

/// The shapes of text a rule can match. Each returns the byte length of
/// the longest match at the *start* of the input, or None.
#[derive(Debug)]
pub enum Matcher {
    /// An exact word followed by a non-word character (or end of input).
    Keyword(&'static str),
    /// A single exact character.
    Symbol(char),
    /// Any single character from the set.
    OneOf(&'static [char]),
    /// digits '.' digits — matches only with digits on both sides.
    FloatLit,
    /// digits
    IntLit,
    /// [A-Za-z_][A-Za-z0-9_]*
    Ident,
}

/// The ordered rule table. Precedence is top to bottom:
/// type keywords, then boolean literals, then the reserved `console`
/// word, then punctuation and operators, then float before integer
/// literals, then identifiers, then assignment. Anything no rule
/// matches produces no token at all.
pub const RULES: &[LexRule] = &[
    LexRule { ty: TokenTy::Int, matcher: Matcher::Keyword("int") },
    LexRule { ty: TokenTy::Float, matcher: Matcher::Keyword("float") },
    LexRule { ty: TokenTy::Bool, matcher: Matcher::Keyword("bool") },
    LexRule { ty: TokenTy::BoolLit, matcher: Matcher::Keyword("true") },
    LexRule { ty: TokenTy::BoolLit, matcher: Matcher::Keyword("false") },
    LexRule { ty: TokenTy::Console, matcher: Matcher::Keyword("console") },
    LexRule { ty: TokenTy::LeftParen, matcher: Matcher::Symbol('(') },
    LexRule { ty: TokenTy::RightParen, matcher: Matcher::Symbol(')') },
    LexRule { ty: TokenTy::LeftBrace, matcher: Matcher::Symbol('{') },
    LexRule { ty: TokenTy::RightBrace, matcher: Matcher::Symbol('}') },
    LexRule { ty: TokenTy::Comma, matcher: Matcher::Symbol(',') },
    LexRule { ty: TokenTy::Colon, matcher: Matcher::Symbol(':') },
    LexRule { ty: TokenTy::Semicolon, matcher: Matcher::Symbol(';') },
    LexRule { ty: TokenTy::Op, matcher: Matcher::OneOf(&['+', '-', '*', '/']) },
    LexRule { ty: TokenTy::FloatLit, matcher: Matcher::FloatLit },
    LexRule { ty: TokenTy::IntLit, matcher: Matcher::IntLit },
    LexRule { ty: TokenTy::Ident, matcher: Matcher::Ident },
    LexRule { ty: TokenTy::Assign, matcher: Matcher::Symbol('=') },
];

impl Matcher {
    pub fn match_len(&self, src: &str) -> Option<usize> {
        match self {
            Matcher::Keyword(word) => {
                if !src.starts_with(word) {
                    return None;
                }
                // Word boundary: "intx" must fall through to the
                // identifier rule.
                match src[word.len()..].chars().next() {
                    Some(ch) if is_word_char(ch) => None,
                    _ => Some(word.len()),
                }
            }
            Matcher::Symbol(sym) => {
                let first = src.chars().next()?;
                if first == *sym {
                    Some(first.len_utf8())
                } else {
                    None
                }
            }
            Matcher::OneOf(set) => {
                let first = src.chars().next()?;
                if set.contains(&first) {
                    Some(first.len_utf8())
                } else {
                    None
                }
            }
            Matcher::FloatLit => {
                let whole = digits_len(src);
                if whole == 0 || !src[whole..].starts_with('.') {
                    return None;
                }
                let frac = digits_len(&src[whole + 1..]);
                if frac == 0 {
                    return None;
                }
                Some(whole + 1 + frac)
            }
            Matcher::IntLit => match digits_len(src) {
                0 => None,
                n => Some(n),
            },
            Matcher::Ident => {
                let first = src.chars().next()?;
                if !first.is_ascii_alphabetic() && first != '_' {
                    return None;
                }
                let rest = src[first.len_utf8()..]
                    .chars()
                    .take_while(|c| is_word_char(*c))
                    .count();
                Some(first.len_utf8() + rest)
            }
        }
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

fn digits_len(src: &str) -> usize {
    src.chars().take_while(|c| c.is_ascii_digit()).count()
}
