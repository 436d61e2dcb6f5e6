use std::io::Read;
use std::iter::Peekable;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{ArgAction, Parser};
use tracing::{debug, info, Level};

use rackwords::config::parse_blank;
use rackwords::utils::serialization;
use rackwords::words::dictionary::read_word_file;
use rackwords::words::search;
use rackwords::{FstDictionary, Rack, SearchConfig, Strategy, Trie};
#[macro_use]
extern crate text_io;

/// Finds the dictionary words that can be spelled from a rack of letters
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Letters in the rack. Racks are read from stdin, one per line, when omitted
    #[arg(name = "LETTERS")]
    letters: Option<String>,
    /// Word list with one word per line
    #[arg(short, long)]
    dict: Option<PathBuf>,
    /// Index previously written with --save-index
    #[arg(short, long, conflicts_with = "dict")]
    index: Option<PathBuf>,
    /// Write the built index to this file
    #[arg(long)]
    save_index: Option<PathBuf>,
    /// JSON search config; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long)]
    min_length: Option<usize>,
    /// Rack character that stands for any letter
    #[arg(short, long, value_parser = blank_arg)]
    blank: Option<char>,
    /// Undo spent letters in place instead of copying the rack per edge
    #[arg(long)]
    backtrack: bool,
    /// Search an fst word set instead of the trie. The automaton has no search
    /// strategy, so this cannot be combined with --backtrack
    #[arg(long, conflicts_with = "backtrack")]
    fst: bool,
    /// Print matches as a JSON array
    #[arg(long)]
    json: bool,
    /// Report whether a word is in the dictionary
    #[arg(long)]
    check: Option<String>,
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn blank_arg(s: &str) -> Result<char, String> {
    parse_blank(s).map_err(|e| e.to_string())
}

impl Cli {
    fn search_config(&self) -> anyhow::Result<SearchConfig> {
        let mut config = match &self.config {
            Some(path) => SearchConfig::from_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => SearchConfig::default(),
        };
        if let Some(min_length) = self.min_length {
            config.min_length = min_length;
        }
        if self.blank.is_some() {
            config.blank = self.blank;
        }
        if self.backtrack {
            config.strategy = Strategy::Backtrack;
        }
        if self.fst && config.strategy == Strategy::Backtrack {
            bail!("--fst cannot run the backtracking strategy set in the config");
        }
        Ok(config)
    }

    fn load_trie(&self) -> anyhow::Result<Trie> {
        if let Some(path) = &self.index {
            let trie: Trie = serialization::load_from_disk(path)
                .with_context(|| format!("loading index {}", path.display()))?;
            info!(words = trie.len(), "loaded index");
            return Ok(trie);
        }
        let Some(path) = &self.dict else {
            bail!("either --dict or --index is required");
        };
        let words = read_word_file(path)?;
        let trie: Trie = words.iter().collect();
        info!(words = trie.len(), nodes = trie.node_count(), "built index");
        Ok(trie)
    }
}

enum Finder {
    Trie(Trie),
    Fst(FstDictionary),
}

impl Finder {
    fn find(&self, letters: &str, config: &SearchConfig) -> anyhow::Result<Vec<String>> {
        let rack = Rack::from_input(letters, config.blank);
        debug!(letters, rack = rack.n_total, "searching");
        match self {
            Finder::Trie(trie) => Ok(search::search(trie, &rack, config)),
            Finder::Fst(dict) => Ok(dict.find_words(&rack, config.min_length)?),
        }
    }
}

fn print_words(words: &[String], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(words)?);
    } else {
        for w in words {
            println!("{}", w);
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    let config = cli.search_config()?;
    let trie = cli.load_trie()?;

    if let Some(path) = &cli.save_index {
        serialization::save_to_disk(&trie, path)
            .with_context(|| format!("saving index {}", path.display()))?;
        info!(path = %path.display(), "saved index");
    }

    if let Some(word) = &cli.check {
        let verdict = if trie.contains(word) { "found" } else { "missing" };
        println!("{}: {}", word, verdict);
    }

    let finder = if cli.fst {
        Finder::Fst(FstDictionary::from_words(trie.words())?)
    } else {
        Finder::Trie(trie)
    };

    if let Some(letters) = &cli.letters {
        return print_words(&finder.find(letters, &config)?, cli.json);
    }

    // An empty line is an empty rack; only the end of input stops the loop
    let mut stdin = std::io::stdin().bytes().map_while(Result::ok).peekable();
    loop {
        eprintln!("Enter Tray:");
        let Some(tray) = next_tray(&mut stdin) else {
            break;
        };
        print_words(&finder.find(&tray, &config)?, cli.json)?;
    }
    Ok(())
}

/// Reads one line of input, or `None` once the input is exhausted
fn next_tray<I: Iterator<Item = u8>>(mut bytes: &mut Peekable<I>) -> Option<String> {
    bytes.peek()?;
    let tray: String = try_read!("{}\n", bytes).ok()?;
    Some(tray.trim_end_matches('\r').to_owned())
}
