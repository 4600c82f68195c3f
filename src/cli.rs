use std::path::PathBuf;

use clap::Parser;
use fasttag::Language;

/// Interactive rule-based part-of-speech tagger
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Lexicon file, one `word tag1 tag2 ...` entry per line [default: bundled sample]
    #[arg(short, long)]
    pub lexicon: Option<PathBuf>,

    /// Rule set applied after lexicon lookup
    #[arg(long, value_enum, default_value_t = Language::English)]
    pub language: Language,

    /// Print each tagged sentence as a JSON array instead of `[word tag]` lines
    #[arg(long)]
    pub json: bool,

    /// Input line that ends the session
    #[arg(long, default_value = "[x]")]
    pub quit: String,
}
