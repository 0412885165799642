// Command line driver: length of the longest common substring of two inputs.
//
// Inputs come from --first/--second, from files, or from two prompts on stdin.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use kdam::{tqdm, BarExt};
use log::info;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use rusty_gst::build_stats::BuildStats;
use rusty_gst::graph::indexing::DefaultIx;
use rusty_gst::tokenize::{Split, TokenIndex, Tokenize};
use rusty_gst::{GeneralizedSuffixTree, SequenceBuilder, Token};

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum Tokenizer {
    /// Unicode scalar values; `#` and `$` are reserved.
    Chars,
    /// Raw bytes; `#` and `$` are reserved.
    Bytes,
    /// Extended grapheme clusters.
    Graphemes,
    /// Whitespace-separated words.
    Whitespace,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// First sequence (A).
    #[arg(long, conflicts_with = "first_path")]
    first: Option<String>,
    /// Second sequence (B).
    #[arg(long, conflicts_with = "second_path")]
    second: Option<String>,
    #[arg(long)]
    first_path: Option<PathBuf>,
    #[arg(long)]
    second_path: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Tokenizer::Chars)]
    tokenizer: Tokenizer,

    /// Refuse inputs whose combined length (with both sentinels) exceeds this.
    #[arg(long)]
    max_length: Option<usize>,

    /// Append build statistics as a JSON line to this file.
    #[arg(long)]
    stats_path: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    progress: bool,
    #[arg(long, short = 'v', default_value_t = false)]
    verbose: bool,
    #[arg(long, default_value_t = false)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug {
        "debug"
    } else if args.verbose {
        "info"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let first = read_input(args.first.clone(), args.first_path.as_ref(), "Enter the String: ")?;
    let second = read_input(args.second.clone(), args.second_path.as_ref(), "Enter the Text: ")?;

    let length = match args.tokenizer {
        Tokenizer::Chars => {
            let a: Vec<char> = first.chars().collect();
            let b: Vec<char> = second.chars().collect();
            run(&a, &b, &args)?
        }
        Tokenizer::Bytes => run(first.as_bytes(), second.as_bytes(), &args)?,
        Tokenizer::Graphemes | Tokenizer::Whitespace => {
            let split = if args.tokenizer == Tokenizer::Graphemes {
                Split::Graphemes
            } else {
                Split::Whitespace
            };
            let mut index = TokenIndex::new(split);
            let a = index.tokenize(&first);
            let b = index.tokenize(&second);
            info!("#(vocab): {}", index.get_count());
            run(&a, &b, &args)?
        }
    };

    println!("{}", length);
    Ok(())
}

fn read_input(literal: Option<String>, path: Option<&PathBuf>, prompt: &str) -> Result<String> {
    if let Some(text) = literal {
        return Ok(text);
    }
    if let Some(path) = path {
        return fs::read_to_string(path).with_context(|| format!("Could not load {}", path.display()));
    }

    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Could not read from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn run<T: Token>(a: &[T], b: &[T], args: &Args) -> Result<usize> {
    info!("#(first): {}", a.len());
    info!("#(second): {}", b.len());

    let sequence = SequenceBuilder::default()
        .with_max_length(args.max_length)
        .build(a, b)
        .context("Invalid input")?;
    let n_tokens = sequence.len();

    let start = Instant::now();
    let mut tree: GeneralizedSuffixTree<T, DefaultIx> = GeneralizedSuffixTree::new(sequence);
    if args.progress {
        let mut pbar = tqdm!(total = n_tokens);
        for idx in 0..n_tokens {
            tree.update(idx);
            let _ = pbar.update(1);
        }
        eprintln!();
    } else {
        tree.build();
    }
    let elapsed_time = start.elapsed().as_secs_f32();

    let stats = BuildStats::from_tree(&tree, elapsed_time);
    info!("Completed in {:.3}s", elapsed_time);
    info!("  # nodes: {} ({:.2}/token)", stats.n_nodes, stats.get_nodes_per_token());
    info!("  # edges: {} ({:.2}/token)", stats.n_edges, stats.get_edges_per_token());
    if let Some(ref stats_path) = args.stats_path {
        stats.append_to_jsonl(stats_path)?;
    }
    Ok(tree.max_common_length())
}
