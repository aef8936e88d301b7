// respell-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use respell_engine::Respeller;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable naming the word list to load.
pub const DICT_PATH_ENV: &str = "RESPELL_DICT_PATH";

/// Word list name looked for in the current directory as a last resort.
const LOCAL_WORD_LIST: &str = "words.txt";

/// Options shared by every respell binary.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Newline-delimited word list to load
    #[arg(short = 'd', long)]
    pub dict_path: Option<PathBuf>,

    /// Log search progress to stderr (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the level is `warn`, or `debug`
/// with `--verbose`.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Search for a word list and create a Respeller.
///
/// Search order:
/// 1. `dict_path` argument (if provided; an explicit path must exist)
/// 2. `RESPELL_DICT_PATH` environment variable
/// 3. `/usr/share/dict/words`, then `/usr/dict/words`
/// 4. `words.txt` in the current working directory
pub fn load_respeller(dict_path: Option<&Path>) -> anyhow::Result<Respeller> {
    if let Some(path) = dict_path {
        return Respeller::from_file(path)
            .with_context(|| format!("cannot use word list {}", path.display()));
    }

    let search_paths = build_search_paths();
    for path in &search_paths {
        if path.is_file() {
            debug!(path = %path.display(), "using word list");
            return Respeller::from_file(path)
                .with_context(|| format!("cannot use word list {}", path.display()));
        }
    }

    anyhow::bail!(
        "could not find a word list in any of the search paths:\n{}\n\
         pass --dict-path or set {}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n"),
        DICT_PATH_ENV
    )
}

/// Build the list of word-list files to try when none is given explicitly.
fn build_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(env_path) = std::env::var(DICT_PATH_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    paths.push(PathBuf::from("/usr/share/dict/words"));
    paths.push(PathBuf::from("/usr/dict/words"));

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(LOCAL_WORD_LIST));
    }

    paths
}
