// respell-suggest: List every correction for words from stdin or arguments.
//
// Unlike `respell`, nothing is picked at random: all corrections are printed
// in the order the search found them.
//   word (correct)           the word is in the dictionary
//   word: (no suggestions)   nothing reachable
//   word:                    followed by one indented correction per line
//
// Usage:
//   respell-suggest [-d DICT_PATH] [-v] [WORD...]

use std::io::{self, BufRead, Write};

use clap::Parser;
use respell_engine::Respeller;

/// List every correction for each word
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    common: respell_cli::CommonArgs,

    /// Words to correct; read from stdin (one per line) when omitted
    words: Vec<String>,
}

fn suggest_word(word: &str, respeller: &Respeller, out: &mut impl Write) -> io::Result<()> {
    if let Some(known) = respeller.check(word) {
        return writeln!(out, "{known} (correct)");
    }
    let result = respeller.suggest(word);
    if result.is_empty() {
        return writeln!(out, "{word}: (no suggestions)");
    }
    writeln!(out, "{word}:")?;
    for suggestion in &result {
        writeln!(out, "  {suggestion}")?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    respell_cli::init_tracing(cli.common.verbose);

    let respeller = respell_cli::load_respeller(cli.common.dict_path.as_deref())?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if cli.words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            suggest_word(word, &respeller, &mut out)?;
        }
    } else {
        for word in &cli.words {
            suggest_word(word, &respeller, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
