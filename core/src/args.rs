use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "pawnscope")]
#[command(author = "Jørgen Hanssen <jorgen@hanssen.io>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Evaluates the pawn structure of chess positions")]
pub struct Args {
    /// Position to evaluate, may be repeated.
    #[arg(long)]
    pub fen: Vec<String>,

    /// File with one FEN per line. Blank lines and lines starting with '#' are skipped.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Print the per-term breakdown for every position.
    #[arg(short, long)]
    pub trace: bool,

    #[arg(long, default_value_t = num_cpus::get())]
    pub threads: usize,

    /// Slots in each worker's pawn cache, rounded up to a power of two.
    #[arg(long, default_value_t = 16384)]
    pub pawn_cache_entries: usize,

    /// Pawn structure weight in percent, both phases.
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(i32).range(0..=1000))]
    pub pawn_weight: i32,

    /// Passed pawn weight in percent, both phases.
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(i32).range(0..=1000))]
    pub passer_weight: i32,

    /// Log to a file for debugging.
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,
}
