// respell: Interactive word corrector.
//
// Prints a "> " prompt, reads one word per line and prints the dictionary
// spelling of the word, a correction, or "NO SUGGESTION". When several
// corrections are possible one is picked at random.
//
// Usage:
//   respell [-d DICT_PATH] [--seed N] [-v]

use std::io::{self, BufRead, Write};

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Correct case, repeated-letter and vowel mistakes one word at a time
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    common: respell_cli::CommonArgs,

    /// Seed for picking among several corrections (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    respell_cli::init_tracing(cli.common.verbose);

    let respeller = respell_cli::load_respeller(cli.common.dict_path.as_deref())?;
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut line = String::new();

    loop {
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // End of input: finish the prompt line before exiting.
            writeln!(out)?;
            break;
        }
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        writeln!(out, "{}", respeller.correct(word, &mut rng))?;
    }

    Ok(())
}
