use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[clap(about = "A syntax highlighter for the zurox language")]
pub struct Options {
    #[clap(subcommand)]
    pub operation: Operation,
    #[clap(short, long, default_value_t = 1)]
    pub verbose: usize,
}

#[derive(Debug, Subcommand)]
pub enum Operation {
    /// Write ANSI-styled source to stdout
    Highlight {
        file: String,
        #[clap(flatten)]
        lexer: LexerOptions,
    },
    /// Dump the classified token stream, one token per line
    Tokens {
        file: String,
        #[clap(flatten)]
        lexer: LexerOptions,
    },
    /// List the registered lexer names
    Lexers,
}

#[derive(Debug, Args)]
pub struct LexerOptions {
    /// Name of the lexer to tokenize with
    #[clap(short, long, default_value = "zx")]
    pub lexer: String,
}
