mod args;
mod input;
mod report;

use args::Args;
use clap::Parser;
use evaluation::{Breakdown, Score, HCE};
use hce::{Evaluator, HCEConfig};
use input::Input;
use log::{debug, info, LevelFilter};
use rayon::prelude::*;
use report::Report;
use simplelog::{Config, WriteLogger};
use std::error::Error;
use std::fs::File;
use std::time::Instant;
use utils::{game_phase, Position};

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    let inputs = input::collect(&args.fen, args.file.as_deref())?;
    let config = hce_config(&args);

    info!(
        "Evaluating {} positions on {} threads (pawn cache {} entries)",
        inputs.len(),
        args.threads,
        config.pawn_cache_entries
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build()?;

    let trace = args.trace;
    let start = Instant::now();
    let reports: Vec<Report> = pool.install(|| {
        inputs
            .par_iter()
            // One evaluator per worker, pawn caches are never shared
            .map_init(|| Evaluator::new(config), |evaluator, input| {
                evaluate(evaluator, input, trace)
            })
            .collect()
    });
    info!("Done in {} ms", start.elapsed().as_millis());

    for report in &reports {
        println!("{}", report);
    }

    Ok(())
}

fn evaluate(evaluator: &mut Evaluator, input: &Input, trace: bool) -> Report {
    let position = Position::new(&input.board);
    let phase = game_phase(&input.board);

    let (score, breakdown) = if trace {
        let mut breakdown = Breakdown::new();
        let score = evaluator.trace(&position, &mut breakdown);
        (score, Some(breakdown))
    } else {
        (evaluator.score(&position), None)
    };

    let centipawns = score.blend(phase);
    debug!(
        "{} {}: {} cp ({})",
        evaluator.name(),
        input.fen,
        centipawns,
        score
    );

    Report {
        fen: input.fen.clone(),
        score,
        phase,
        centipawns,
        breakdown,
    }
}

fn hce_config(args: &Args) -> HCEConfig {
    HCEConfig {
        pawn_structure_weight: Score::new(args.pawn_weight, args.pawn_weight),
        passed_pawn_weight: Score::new(args.passer_weight, args.passer_weight),
        pawn_cache_entries: args.pawn_cache_entries,
        ..HCEConfig::default()
    }
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();

    if let Some(log_file) = &args.log_file {
        WriteLogger::init(
            LevelFilter::Debug,
            Config::default(),
            File::create(log_file)?,
        )
        .unwrap();
    }

    Ok(args)
}
