use anyhow::Result;
use clap::Parser;
use tracing::info;

use sim::{load_config, run, Args};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut cfg = load_config(&args.config)?;
    cfg.apply_args(&args);
    info!(run = ?cfg.run, "Sim config loaded");

    let summary = run(&cfg)?;
    for race in &summary.races {
        info!(
            race = race.race,
            completed = race.completed,
            elapsed_s = race.elapsed.map(|d| d.as_secs_f32()),
            checkpoints = race.checkpoints_passed,
            "Race result"
        );
    }
    if let Some(flight) = &summary.free_fly {
        info!(?flight, "Free flight result");
    }
    if let Some(best) = summary.best_time {
        info!(best_s = best.as_secs_f32(), "Best time");
    }
    Ok(())
}
