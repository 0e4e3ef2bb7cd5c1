//! `tmm`: the TM assembler front end.
//!
//! Lexes the input file (following include deduplication), optionally
//! dumps the token stream, and otherwise parses it into a syntax tree.
//! Lowering the tree into a ROM image is not implemented yet, so a
//! successful parse is currently the end of the pipeline.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use tm_asm::Lexer;

#[derive(Parser)]
#[command(name = "tmm", about = "TM CPU assembler", version)]
struct Args {
    /// Input file to process.
    #[arg(short = 'i', long = "input-file")]
    input_file: PathBuf,

    /// Only perform lexical analysis and print the token stream.
    #[arg(short = 'l', long = "lex-only")]
    lex_only: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut lexer = Lexer::new();
    if let Err(e) = lexer.lex_file(&args.input_file) {
        eprintln!("tmm: {e}");
        eprintln!(
            "tmm: failed to lex input file '{}'",
            args.input_file.display()
        );
        return ExitCode::FAILURE;
    }

    if args.lex_only {
        for (index, token) in lexer.tokens().iter().enumerate() {
            if token.text.is_empty() {
                println!("\t{}: '{}'", index + 1, token.kind);
            } else {
                println!("\t{}: '{}' = '{}'", index + 1, token.kind, token.text);
            }
        }
        return ExitCode::SUCCESS;
    }

    let tokens = lexer.into_tokens();
    match tm_asm::Parser::new(&tokens).parse() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tmm: {e}");
            eprintln!(
                "tmm: failed to parse input file '{}'",
                args.input_file.display()
            );
            ExitCode::FAILURE
        }
    }
}
