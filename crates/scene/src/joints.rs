use crate::SceneError;

/// Joint positions of one articulation across the environment batch.
///
/// Positions are stored row-major, one row of `names.len()` values per
/// environment. Joint order is fixed at construction; the last joint is the
/// gripper.
#[derive(Clone, Debug, PartialEq)]
pub struct JointState {
    names: Vec<String>,
    positions: Vec<f32>,
    num_envs: usize,
}

impl JointState {
    /// Builds the state from one row per environment.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::ShapeMismatch`] if any row length differs from
    /// the number of joint names.
    pub fn new(names: Vec<String>, rows: &[Vec<f32>]) -> Result<Self, SceneError> {
        let mut positions = Vec::with_capacity(rows.len() * names.len());
        for (env, row) in rows.iter().enumerate() {
            if row.len() != names.len() {
                return Err(SceneError::ShapeMismatch {
                    name: format!("joint_pos[{env}]"),
                    expected: names.len(),
                    actual: row.len(),
                });
            }
            positions.extend_from_slice(row);
        }
        Ok(Self { names, positions, num_envs: rows.len() })
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    #[must_use]
    pub fn num_envs(&self) -> usize {
        self.num_envs
    }

    #[must_use]
    pub fn num_joints(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn joint_index(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Values of joint `joint` in every environment.
    #[must_use]
    pub fn column(&self, joint: usize) -> Option<Vec<f32>> {
        if joint >= self.num_joints() {
            return None;
        }
        Some(
            self.positions
                .chunks_exact(self.num_joints())
                .map(|row| row[joint])
                .collect(),
        )
    }

    /// Last-joint values, used as the gripper closure proxy.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::NoJoints`] for an articulation without joints.
    pub fn gripper(&self) -> Result<Vec<f32>, SceneError> {
        self.num_joints()
            .checked_sub(1)
            .and_then(|last| self.column(last))
            .ok_or_else(|| SceneError::NoJoints("gripper".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: &[&str]) -> Vec<String> {
        n.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn rows_are_flattened_in_order() {
        let state = JointState::new(names(&["a", "b"]), &[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(state.positions(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(state.column(0), Some(vec![1.0, 3.0]));
        assert_eq!(state.gripper().unwrap(), vec![2.0, 4.0]);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = JointState::new(names(&["a", "b"]), &[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, SceneError::ShapeMismatch { expected: 2, actual: 1, .. }));
    }

    #[test]
    fn gripper_needs_a_joint() {
        let state = JointState::new(Vec::new(), &[vec![], vec![]]).unwrap();
        assert!(matches!(state.gripper(), Err(SceneError::NoJoints(_))));
    }
}
