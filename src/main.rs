use std::error::Error;
use std::io::{self, BufRead, Write};

use clap::Parser;
use fasttag::{Tagger, bundled_lexicon, load_lexicon};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

mod cli;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let lexicon = match &cli.lexicon {
        Some(path) => load_lexicon(path)?,
        None => bundled_lexicon(),
    };
    info!(entries = lexicon.len(), language = ?cli.language, "tagger ready");
    let tagger = Tagger::with_language(lexicon, cli.language);

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl(&tagger, stdin.lock(), stdout.lock(), &cli.quit, cli.json)?;
    Ok(())
}

/// Tags one line at a time until the quit token or end of input.
fn repl<R: BufRead, W: Write>(
    tagger: &Tagger,
    input: R,
    mut out: W,
    quit: &str,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    writeln!(out, "Welcome to fasttag")?;
    writeln!(out, "Enter an English sentence and watch it being tagged")?;
    out.flush()?;

    for line in input.lines() {
        let sentence = line?;
        if sentence == quit {
            break;
        }

        let tagged = tagger.tag_sentence(&sentence);
        if json {
            writeln!(out, "{}", serde_json::to_string(&tagged)?)?;
        } else {
            for token in &tagged {
                writeln!(out, "[{} {}]", token.word, token.tag)?;
            }
        }
        out.flush()?;
    }

    writeln!(out, "Bye Bye!")?;
    Ok(())
}
