//! # Application logic
//!
//! The operations behind each subcommand. They take JSON text rather than
//! paths so they can be driven from tests without touching the filesystem.

use anyhow::{anyhow, Context, Result};
use datagen::{segment_trajectory, MimicTaskConfig, SegmentBounds, SignalTrace};
use goals::{BatchOps, JointRangeRest, StepOutcome, TaskConfig};
use scene::{EntityRegistry, SceneSnapshot};
use std::path::Path;
use std::sync::Arc;

/// Reads a whole file, naming it in the error.
///
/// # Errors
///
/// Returns the underlying I/O error with the path attached.
pub fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

/// Resolves the task against the snapshot and evaluates one step.
///
/// The robot's rest pose is checked against the SO-101 follower table.
///
/// # Errors
///
/// Returns any error from parsing the inputs, resolving entity names or
/// evaluating the predicates.
pub fn evaluate(scene_json: &str, task_json: Option<&str>) -> Result<StepOutcome> {
    let scene = SceneSnapshot::from_json(scene_json)
        .context("parsing scene snapshot")?
        .into_batch()?;
    let config = match task_json {
        Some(json) => TaskConfig::from_json(json).context("parsing task config")?,
        None => TaskConfig::default(),
    };

    let task = config.build(&scene, Arc::new(JointRangeRest::so101_follower()))?;
    tracing::info!(
        envs = scene.num_envs(),
        signals = task.signals().len(),
        "task resolved"
    );

    let outcome = task.step(&scene, &BatchOps::default())?;
    let done = outcome.done.iter().filter(|&&d| d).count();
    tracing::info!("{done}/{} environments done", outcome.done.len());
    Ok(outcome)
}

/// Cuts a recorded trace into step ranges for one actor's subtasks.
///
/// Offsets are drawn from a generator seeded with `seed`, or with the
/// config's own seed when `None`.
///
/// # Errors
///
/// Returns any error from parsing the inputs or segmenting the trace, or if
/// `actor` has no subtask sequence.
pub fn segment(
    trace_json: &str,
    mimic_json: Option<&str>,
    actor: &str,
    seed: Option<u64>,
) -> Result<Vec<SegmentBounds>> {
    let config = match mimic_json {
        Some(json) => MimicTaskConfig::from_json(json).context("parsing mimic config")?,
        None => MimicTaskConfig::pick_pen()?,
    };
    let sequence = config
        .subtask_configs
        .get(actor)
        .ok_or_else(|| anyhow!("no subtask sequence for actor `{actor}`"))?;
    let trace = SignalTrace::from_json(trace_json).context("parsing signal trace")?;

    let seed = seed.unwrap_or(config.datagen_config.seed);
    let mut rng = fastrand::Rng::with_seed(seed);
    let bounds = segment_trajectory(sequence, &trace, &mut rng)?;
    tracing::info!(actor, seed, steps = trace.len(), stages = bounds.len(), "trace segmented");
    Ok(bounds)
}
