use crate::error::finite;
use crate::predicate::{expect_batch, Condition, Predicate};
use crate::{Axis, BatchOps, GoalError, ValueRange};
use scene::{ArticulationId, EntityId, EntityRegistry};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Region along x, relative to the container's x.
    pub x_range: ValueRange,
    /// Region along y, relative to the container's y.
    pub y_range: ValueRange,
    /// Object to end-effector distance must be strictly below this.
    pub diff_threshold: f32,
    /// Gripper joint must be strictly above this (open).
    pub open_threshold: f32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            x_range: ValueRange::symmetric(0.10),
            y_range: ValueRange::symmetric(0.10),
            diff_threshold: 0.05,
            open_threshold: 0.60,
        }
    }
}

/// Object released over a container.
///
/// True where the object's x/y lies strictly inside the container-relative
/// rectangle, the end-effector is still near the object and the gripper is
/// open. "Near the end-effector" stands in for "was just released here"; no
/// grasp history is kept, so an object passing by an open gripper also counts.
#[derive(Clone, Debug)]
pub struct PlacementPredicate {
    robot: ArticulationId,
    ee_frame: EntityId,
    object: EntityId,
    container: EntityId,
    config: PlacementConfig,
}

impl PlacementPredicate {
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
        container: &str,
        config: PlacementConfig,
    ) -> Result<Self, GoalError> {
        finite("diff_threshold", config.diff_threshold)?;
        finite("open_threshold", config.open_threshold)?;
        Ok(Self {
            robot: scene.resolve_articulation(robot)?,
            ee_frame: scene.resolve_entity(ee_frame)?,
            object: scene.resolve_entity(object)?,
            container: scene.resolve_entity(container)?,
            config,
        })
    }
}

impl Predicate for PlacementPredicate {
    fn conditions(&self, scene: &dyn EntityRegistry, ops: &BatchOps) -> Result<Vec<Condition>, GoalError> {
        let object = scene.get_pose(self.object)?;
        let container = scene.get_pose(self.container)?;
        let ee = scene.get_pose(self.ee_frame)?;
        let gripper = scene.get_joint_state(self.robot)?.gripper()?;
        expect_batch(scene, "object", object.len())?;
        expect_batch(scene, "container", container.len())?;
        expect_batch(scene, "ee_frame", ee.len())?;
        expect_batch(scene, "gripper", gripper.len())?;

        let mut conditions = Vec::with_capacity(4);
        for (axis, range) in [(Axis::X, self.config.x_range), (Axis::Y, self.config.y_range)] {
            let object_c = ops.axis(&object.positions, axis)?;
            let container_c = ops.axis(&container.positions, axis)?;
            let below_upper = ops.less_than(&object_c, &ops.shift(&container_c, range.high())?)?;
            let above_lower = ops.greater_than(&object_c, &ops.shift(&container_c, range.low())?)?;
            conditions.push(Condition::new(format!("in_{}", axis.label()), ops.and(&below_upper, &above_lower)?));
        }

        let pos_diff = ops.distance(&object.positions, &ee.positions)?;
        conditions.push(Condition::new("near_ee", ops.below(&pos_diff, self.config.diff_threshold)?));
        conditions.push(Condition::new("gripper_open", ops.above(&gripper, self.config.open_threshold)?));
        Ok(conditions)
    }
}
