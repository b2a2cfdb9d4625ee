use anyhow::Result;
use bucketeer::cards::street::Street;
use bucketeer::clustering::driver;
use clap::Parser;

/// Cluster a round LUT into abstraction buckets.
#[derive(Parser)]
#[command(name = "clustering")]
struct Args {
    #[command(subcommand)]
    round: Round,
}

#[derive(clap::Subcommand)]
#[command(rename_all = "snake_case")]
enum Round {
    /// earth mover's distance over equity histograms
    Flop,
    /// earth mover's distance over equity histograms
    Turn,
    /// euclidean distance over opponent-cluster equities
    River,
}

fn main() -> Result<()> {
    let args = Args::try_parse().unwrap_or_else(|e| {
        let _ = e.print();
        std::process::exit(if e.use_stderr() { 1 } else { 0 });
    });
    bucketeer::init();
    match args.round {
        Round::Flop => driver::cluster(Street::Flop),
        Round::Turn => driver::cluster(Street::Turn),
        Round::River => driver::cluster(Street::Rive),
    }
}
