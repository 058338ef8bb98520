use tinc_parse::{lex::tokenize, parser::Parser, symtab::SymTab};

use std::fs;

macro_rules! parse_pass_test {
    ($test_name:ident, $file_name:expr) => {
        #[test]
        fn $test_name() {
            let path = format!("./tests/parse_pass/inputs/{}.tin", $file_name);
            let src = fs::read_to_string(&path).unwrap();
            let tokens = tokenize(&src);
            let mut symtab = SymTab::new();
            let parser = Parser::new(&tokens, &mut symtab);

            let result = parser.parse();
            assert!(result.is_ok(), "expected clean parse, got {:?}", result);
        }
    };
}

parse_pass_test!(decl_assign, "decl_assign");
parse_pass_test!(all_types, "all_types");
parse_pass_test!(no_terminators, "no_terminators");
parse_pass_test!(noise_chars, "noise_chars");
parse_pass_test!(empty, "empty");
