use tinc_parse::{lex::tokenize, parser::Parser, symtab::SymTab};

use std::fs;

macro_rules! parse_fail_test {
    ($test_name:ident, $file_name:expr) => {
        #[test]
        fn $test_name() {
            let path = format!("./tests/parse_fail/inputs/{}.tin", $file_name);
            let src = fs::read_to_string(&path).unwrap();
            let tokens = tokenize(&src);
            let mut symtab = SymTab::new();
            let parser = Parser::new(&tokens, &mut symtab);

            let result = parser.parse();
            assert!(result.is_err(), "expected parse error, got {:?}", result);
        }
    };
}

parse_fail_test!(type_mismatch, "type_mismatch");
parse_fail_test!(missing_assign, "missing_assign");
parse_fail_test!(expr_rhs, "expr_rhs");
parse_fail_test!(no_type_keyword, "no_type_keyword");
parse_fail_test!(redeclared, "redeclared");
parse_fail_test!(missing_ident, "missing_ident");
parse_fail_test!(console_stmt, "console_stmt");
