use anyhow::Result;
use bucketeer::cards::street::Street;
use bucketeer::save::disk::Disk;
use bucketeer::strengths::files;
use bucketeer::strengths::luts;
use bucketeer::strengths::showdown::showdown_table;
use bucketeer::strengths::showdown::ShowdownStrength;
use clap::Parser;

/// Build the showdown table, or derive a round LUT from it.
#[derive(Parser)]
#[command(name = "hand-strengths")]
struct Args {
    #[command(subcommand)]
    table: Table,
}

#[derive(clap::Subcommand)]
#[command(rename_all = "snake_case")]
enum Table {
    /// equity and per-cluster counts for every canonical river
    Showdown,
    /// 169 x 50 equity histograms over all five-card rollouts
    Preflop,
    /// 1,286,792 x 50 equity histograms over all two-card rollouts
    Flop,
    /// 13,960,050 x 50 equity histograms over all one-card rollouts
    Turn,
    /// 123,156,254 x 8 opponent-cluster equities
    River,
    /// 169 x 8 opponent-cluster equities over all rollouts
    OchsPreflop,
}

fn main() -> Result<()> {
    let args = Args::try_parse().unwrap_or_else(|e| {
        let _ = e.print();
        std::process::exit(if e.use_stderr() { 1 } else { 0 });
    });
    bucketeer::init();
    files::prepare()?;
    if let Table::Showdown = args.table {
        return showdown_table().save(&files::showdown_path());
    }
    let showdown = Vec::<ShowdownStrength>::load(&files::showdown_path())?;
    match args.table {
        Table::Showdown => unreachable!("handled above"),
        Table::Preflop => luts::preflop_lut(&showdown).save(&files::lut_path(Street::Pref)),
        Table::Flop => luts::flop_lut(&showdown).save(&files::lut_path(Street::Flop)),
        Table::Turn => luts::turn_lut(&showdown).save(&files::lut_path(Street::Turn)),
        Table::River => luts::river_lut(&showdown)?.save(&files::lut_path(Street::Rive)),
        Table::OchsPreflop => luts::ochs_preflop_lut(&showdown).save(&files::ochs_preflop_path()),
    }
}
