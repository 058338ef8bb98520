use tinc_err::parse_err::ParseErrTy;

use tinc_parse::{
    lex::tokenize,
    parser::Parser,
    symtab::{SymTab, Ty},
    token::{Token, TokenTy},
};

fn parse(src: &str, symtab: &mut SymTab) -> Result<Vec<String>, ParseErrTy> {
    let tokens = tokenize(src);
    match Parser::new(&tokens, symtab).parse() {
        Ok(trace) => Ok(trace.iter().map(|ev| ev.to_string()).collect()),
        Err(e) => Err(e.ty),
    }
}

// Two declarations and two assignments trace in order, no error.
#[test]
fn two_int_pairs_trace_in_order() {
    let mut symtab = SymTab::new();
    let lines = parse("int num1 = 1; int num2 = 2", &mut symtab).unwrap();

    assert_eq!(
        lines,
        vec![
            "Variable declared: Type=int, Name=num1",
            "Variable assigned: Name=num1, Value=1",
            "Variable declared: Type=int, Name=num2",
            "Variable assigned: Name=num2, Value=2",
        ]
    );
    assert_eq!(symtab.retrieve("num1"), Some(Ty::Int));
    assert_eq!(symtab.retrieve("num2"), Some(Ty::Int));
}

// An integer literal never fits a bool variable.
#[test]
fn int_literal_into_bool_mismatches() {
    let tokens = tokenize("bool flag = 5");
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenTy::Bool, "bool"),
            Token::new(TokenTy::Ident, "flag"),
            Token::new(TokenTy::Assign, "="),
            Token::new(TokenTy::IntLit, "5"),
        ]
    );

    let mut symtab = SymTab::new();
    let err = parse("bool flag = 5", &mut symtab).unwrap_err();
    assert_eq!(
        err,
        ParseErrTy::TypeMismatch(String::from("IntLit"), String::from("bool"))
    );
}

// A parenthesized expression is rejected at the '(' with no evaluation.
#[test]
fn expression_rhs_is_a_syntax_error() {
    let mut symtab = SymTab::new();
    let err = parse("int result = (4.67*7)", &mut symtab).unwrap_err();
    assert_eq!(
        err,
        ParseErrTy::TknMismatch(String::from("literal"), String::from("("))
    );
    // The declaration itself was recognized before the failure.
    assert_eq!(symtab.retrieve("result"), Some(Ty::Int));
}

// A declaration with no assignment clause ends the input where the
// grammar still demands '='; that is a distinct end-of-input error,
// not an out-of-bounds read.
#[test]
fn bare_declaration_hits_end_of_input() {
    let mut symtab = SymTab::new();
    let err = parse("int y", &mut symtab).unwrap_err();
    assert_eq!(err, ParseErrTy::UnexpectedEof(String::from("=")));
}

// Every matching (type, literal category) pair parses and binds.
#[test]
fn matching_literal_categories_always_pass() {
    let cases = [
        ("int a = 7", "a", Ty::Int),
        ("float b = 1.25", "b", Ty::Float),
        ("bool c = false", "c", Ty::Bool),
    ];

    for (src, name, ty) in cases.iter() {
        let mut symtab = SymTab::new();
        let lines = parse(src, &mut symtab).unwrap();
        assert_eq!(lines.len(), 2, "{}", src);
        assert_eq!(symtab.retrieve(name), Some(*ty), "{}", src);
    }
}

// Every non-matching pair raises a type mismatch.
#[test]
fn mismatched_literal_categories_always_fail() {
    let cases = [
        "int a = 1.5",
        "int a = true",
        "float a = 1",
        "float a = false",
        "bool a = 0",
        "bool a = 0.5",
    ];

    for src in cases.iter() {
        let mut symtab = SymTab::new();
        let err = parse(src, &mut symtab).unwrap_err();
        match err {
            ParseErrTy::TypeMismatch(_, _) => (),
            other => panic!("{}: expected type mismatch, got {:?}", src, other),
        };
    }
}

#[test]
fn tokenizing_is_deterministic_across_runs() {
    let src = "int num1 = 1; float f = 4.67 bool ok = true";
    let first = tokenize(src);
    let second = tokenize(src);
    assert_eq!(first, second);
}
