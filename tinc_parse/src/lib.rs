pub mod lex;
pub mod parser;
pub mod rules;
pub mod symtab;
pub mod token;
pub mod trace;
