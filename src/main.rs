use std::{
    fs,
    io::{self, Write},
};

use anyhow::Result;
use clap::Parser;
use log::debug;

use zx_highlight::{registry, render, tokenize_with};

mod commandline;

use commandline::{LexerOptions, Operation, Options};

fn main() -> Result<()> {
    let options = Options::parse();

    stderrlog::new()
        .verbosity(options.verbose)
        .module(module_path!())
        .init()?;

    match options.operation {
        Operation::Highlight { file, lexer } => highlight(&file, &lexer),
        Operation::Tokens { file, lexer } => dump_tokens(&file, &lexer),
        Operation::Lexers => {
            for name in registry::NAMES {
                println!("{name}");
            }
            Ok(())
        }
    }
}

fn highlight(file: &str, lexer: &LexerOptions) -> Result<()> {
    let source = fs::read_to_string(file)?;
    let rules = registry::ruleset_for(&lexer.lexer)?;

    let mut stdout = io::stdout().lock();
    for token in tokenize_with(rules, &source) {
        write!(stdout, "{}", render::styled(token.category, token.text(&source)))?;
    }
    Ok(())
}

fn dump_tokens(file: &str, lexer: &LexerOptions) -> Result<()> {
    let source = fs::read_to_string(file)?;
    let rules = registry::ruleset_for(&lexer.lexer)?;

    let mut count = 0usize;
    let mut stdout = io::stdout().lock();
    for token in tokenize_with(rules, &source) {
        writeln!(stdout, "{} {:?}", token, token.text(&source))?;
        count += 1;
    }
    debug!("tokenized {} bytes into {} tokens", source.len(), count);
    Ok(())
}
