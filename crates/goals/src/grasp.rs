use crate::error::finite;
use crate::predicate::{expect_batch, Condition, Predicate};
use crate::{BatchOps, GoalError};
use scene::{ArticulationId, EntityId, EntityRegistry};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraspConfig {
    /// Object to end-effector distance must be strictly below this.
    pub diff_threshold: f32,
    /// Gripper joint must be strictly below this (closed).
    pub grasp_threshold: f32,
}

impl Default for GraspConfig {
    fn default() -> Self {
        Self { diff_threshold: 0.01, grasp_threshold: 0.40 }
    }
}

/// Object held by the gripper: close to the end-effector with the jaw closed.
///
/// Compares world-frame positions only; orientation is ignored. When the
/// object pose lags the gripper by one physics step this may miss a single
/// step, which is accepted.
#[derive(Clone, Debug)]
pub struct GraspPredicate {
    robot: ArticulationId,
    ee_frame: EntityId,
    object: EntityId,
    config: GraspConfig,
}

impl GraspPredicate {
    /// Resolves entity names once against the scene.
    ///
    /// # Errors
    ///
    /// Fails if a name is unknown or a threshold is not finite.
    pub fn resolve(
        scene: &dyn EntityRegistry,
        robot: &str,
        ee_frame: &str,
        object: &str,
        config: GraspConfig,
    ) -> Result<Self, GoalError> {
        finite("diff_threshold", config.diff_threshold)?;
        finite("grasp_threshold", config.grasp_threshold)?;
        Ok(Self {
            robot: scene.resolve_articulation(robot)?,
            ee_frame: scene.resolve_entity(ee_frame)?,
            object: scene.resolve_entity(object)?,
            config,
        })
    }
}

impl Predicate for GraspPredicate {
    fn conditions(&self, scene: &dyn EntityRegistry, ops: &BatchOps) -> Result<Vec<Condition>, GoalError> {
        let object = scene.get_pose(self.object)?;
        let ee = scene.get_pose(self.ee_frame)?;
        let gripper = scene.get_joint_state(self.robot)?.gripper()?;
        expect_batch(scene, "object", object.len())?;
        expect_batch(scene, "ee_frame", ee.len())?;
        expect_batch(scene, "gripper", gripper.len())?;

        let pos_diff = ops.distance(&object.positions, &ee.positions)?;
        Ok(vec![
            Condition::new("near_ee", ops.below(&pos_diff, self.config.diff_threshold)?),
            Condition::new("gripper_closed", ops.below(&gripper, self.config.grasp_threshold)?),
        ])
    }
}
