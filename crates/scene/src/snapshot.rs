//! JSON form of one simulation step, as handed over by an external simulator.
//!
//! ```json
//! {
//!   "env_origins": [[0, 0, 0], [2.5, 0, 0]],
//!   "entities": { "Plate": { "pos": [[0.3, 0.1, 0.8], [2.8, 0.1, 0.8]] } },
//!   "articulations": {
//!     "robot": { "joint_names": ["shoulder_pan", "gripper"], "joint_pos": [[0, 0.7], [0, 0.2]] }
//!   }
//! }
//! ```

use crate::{JointState, PoseBatch, SceneBatch, SceneError, Vec3};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SceneSnapshot {
    pub env_origins: Vec<[f32; 3]>,
    #[serde(default)]
    pub entities: BTreeMap<String, EntitySnapshot>,
    #[serde(default)]
    pub articulations: BTreeMap<String, ArticulationSnapshot>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EntitySnapshot {
    pub pos: Vec<[f32; 3]>,
    /// Scalar-first quaternions; identity when omitted.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub quat: Vec<[f32; 4]>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ArticulationSnapshot {
    pub joint_names: Vec<String>,
    pub joint_pos: Vec<Vec<f32>>,
}

impl SceneSnapshot {
    /// # Errors
    ///
    /// Returns [`SceneError::Json`] for malformed input.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validates every length and builds the batch.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::ShapeMismatch`] if any entity or articulation
    /// disagrees with the number of environment origins, or a joint row
    /// disagrees with its joint names.
    pub fn into_batch(self) -> Result<SceneBatch, SceneError> {
        let num_envs = self.env_origins.len();
        let mut scene = SceneBatch::new(self.env_origins.into_iter().map(Vec3::from).collect());

        for (name, entity) in self.entities {
            let positions: Vec<Vec3> = entity.pos.into_iter().map(Vec3::from).collect();
            let poses = if entity.quat.is_empty() {
                PoseBatch::from_positions(positions)
            } else {
                PoseBatch { positions, orientations: entity.quat }
            };
            scene.add_entity(&name, poses)?;
        }

        for (name, articulation) in self.articulations {
            if articulation.joint_pos.len() != num_envs {
                return Err(SceneError::ShapeMismatch {
                    name: format!("{name}.joint_pos"),
                    expected: num_envs,
                    actual: articulation.joint_pos.len(),
                });
            }
            let state = JointState::new(articulation.joint_names, &articulation.joint_pos)?;
            scene.add_articulation(&name, state)?;
        }

        tracing::debug!(num_envs, "scene snapshot loaded");
        Ok(scene)
    }
}
