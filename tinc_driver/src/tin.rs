use clap::Parser as ClapParser;

use tinc_err::err::TinErr;

use tinc_parse::{lex::tokenize, parser::Parser, symtab::SymTab};

use std::{
    fs, io,
    io::Read,
    process,
};

#[derive(ClapParser)]
#[clap(name = "tin", version = "1.0")]
pub struct TinOpts {
    /// Source file to parse. Reads from stdin when omitted.
    filename: Option<String>,

    /// Dump the token sequence and a token count before parsing.
    #[clap(long)]
    print_tokens: bool,
}

fn main() {
    env_logger::init();
    let opts: TinOpts = TinOpts::parse();

    let src = match read_source(&opts) {
        Ok(src) => src,
        Err(e) => {
            eprintln!("tin: could not read input: {:?}", e.kind());
            process::exit(1);
        }
    };

    let tokens = tokenize(&src);

    if opts.print_tokens {
        println!("Tokens:");
        for tkn in &tokens {
            println!("{}", tkn);
        }
        println!("Total number of tokens: {}", tokens.len());
    }

    let mut symtab = SymTab::new();
    let parser = Parser::new(&tokens, &mut symtab);

    match parser.parse() {
        Ok(trace) => {
            for event in &trace {
                println!("{}", event);
            }
        }
        Err(e) => {
            e.emit();
            eprintln!("tin: exiting due to parse errors");
            process::exit(1);
        }
    };
}

/// Reads the full source text up front: from the named file if one was
/// given, otherwise from stdin until EOF.
fn read_source(opts: &TinOpts) -> io::Result<String> {
    match &opts.filename {
        Some(filename) => fs::read_to_string(filename),
        None => {
            let mut src = String::new();
            io::stdin().read_to_string(&mut src)?;
            Ok(src)
        }
    }
}
