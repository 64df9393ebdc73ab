//! # pickpen
//!
//! Command-line entry point. Every subcommand reads JSON files, runs one
//! operation and prints the result as JSON on stdout.

use anyhow::Result;
use clap::{Parser, Subcommand};
use pickpen::app;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pickpen", version, about = "Pick-pen task checks and subtask segmentation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate term signals and the done mask for one scene snapshot.
    Evaluate {
        /// Scene snapshot JSON (origins, entity poses, joint state).
        #[arg(long)]
        scene: PathBuf,
        /// Task config JSON; the built-in pen task when omitted.
        #[arg(long)]
        task: Option<PathBuf>,
    },
    /// Cut a recorded signal trace into subtask step ranges.
    Segment {
        /// Per-step signal trace JSON.
        #[arg(long)]
        trace: PathBuf,
        /// Mimic task config JSON; the built-in pick-pen config when omitted.
        #[arg(long)]
        mimic: Option<PathBuf>,
        /// Actor whose subtask sequence to use.
        #[arg(long, default_value = "so101_follower")]
        actor: String,
        /// Seed for the boundary offsets; the config's seed when omitted.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the built-in pick-pen mimic config.
    ShowMimic,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = match cli.command {
        Command::Evaluate { scene, task } => {
            let report = app::evaluate(&app::read(&scene)?, task.map(|p| app::read(&p)).transpose()?.as_deref())?;
            serde_json::to_string_pretty(&report)?
        }
        Command::Segment { trace, mimic, actor, seed } => {
            let bounds = app::segment(
                &app::read(&trace)?,
                mimic.map(|p| app::read(&p)).transpose()?.as_deref(),
                &actor,
                seed,
            )?;
            serde_json::to_string_pretty(&bounds)?
        }
        Command::ShowMimic => serde_json::to_string_pretty(&datagen::MimicTaskConfig::pick_pen()?)?,
    };
    println!("{output}");
    Ok(())
}
