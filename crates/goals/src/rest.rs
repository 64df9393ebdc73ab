use crate::predicate::{expect_batch, Condition, Predicate};
use crate::{BatchOps, GoalError, Mask, ValueRange};
use scene::{ArticulationId, EntityRegistry, JointState};
use std::sync::Arc;

/// Decides whether each environment's robot sits at its rest configuration.
///
/// The joint state carries both the positions and the joint names, so a
/// name/position length mismatch has already been rejected when it was built.
pub trait RestPoseCheck: Send + Sync {
    /// # Errors
    ///
    /// Implementations fail on joints they require but cannot find.
    fn is_at_rest(&self, joints: &JointState) -> Result<Mask, GoalError>;
}

/// Per-joint rest windows in degrees; joints not listed are unconstrained.
#[derive(Clone, Debug, PartialEq)]
pub struct JointRangeRest {
    ranges: Vec<(String, ValueRange)>,
}

impl JointRangeRest {
    #[must_use]
    pub fn new(ranges: Vec<(String, ValueRange)>) -> Self {
        Self { ranges }
    }

    /// Rest windows of the SO-101 follower arm, ±30° around the home pose.
    #[must_use]
    pub fn so101_follower() -> Self {
        const TOLERANCE: f32 = 30.0;
        let home = [
            ("shoulder_pan", 0.0),
            ("shoulder_lift", -100.0),
            ("elbow_flex", 90.0),
            ("wrist_flex", 50.0),
            ("wrist_roll", 0.0),
            ("gripper", -10.0),
        ];
        Self {
            ranges: home
                .into_iter()
                .map(|(name, center)| (name.to_string(), ValueRange::around(center, TOLERANCE)))
                .collect(),
        }
    }
}

impl RestPoseCheck for JointRangeRest {
    fn is_at_rest(&self, joints: &JointState) -> Result<Mask, GoalError> {
        let mut at_rest = vec![true; joints.num_envs()];
        for (name, range) in &self.ranges {
            let idx = joints
                .joint_index(name)
                .ok_or_else(|| GoalError::UnknownJoint(name.clone()))?;
            for (env, row) in joints.positions().chunks_exact(joints.num_joints()).enumerate() {
                at_rest[env] &= range.contains(row[idx].to_degrees());
            }
        }
        Ok(at_rest)
    }
}

/// Robot back at its rest pose, as judged by a [`RestPoseCheck`].
#[derive(Clone)]
pub struct RestPosePredicate {
    robot: ArticulationId,
    check: Arc<dyn RestPoseCheck>,
}

impl RestPosePredicate {
    /// # Errors
    ///
    /// Fails if the robot name is unknown.
    pub fn resolve(scene: &dyn EntityRegistry, robot: &str, check: Arc<dyn RestPoseCheck>) -> Result<Self, GoalError> {
        Ok(Self { robot: scene.resolve_articulation(robot)?, check })
    }
}

impl Predicate for RestPosePredicate {
    fn conditions(&self, scene: &dyn EntityRegistry, _ops: &BatchOps) -> Result<Vec<Condition>, GoalError> {
        let joints = scene.get_joint_state(self.robot)?;
        let at_rest = self.check.is_at_rest(joints)?;
        expect_batch(scene, "rest_pose", at_rest.len())?;
        Ok(vec![Condition::new("at_rest", at_rest)])
    }
}
