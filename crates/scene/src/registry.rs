//! # Entity registry
//!
//! Predicates never look entities up by name while a step is being evaluated.
//! Names are resolved once into [`EntityId`] / [`ArticulationId`] handles when
//! a task is built, and the handles index straight into the batch afterwards.

use crate::{JointState, PoseBatch, SceneError, Vec3};
use std::collections::HashMap;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EntityId(pub(crate) usize);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArticulationId(pub(crate) usize);

/// Read-only view of the current step's scene state.
///
/// Implemented by [`SceneBatch`]; a simulator binding can implement it
/// directly over its own buffers.
pub trait EntityRegistry {
    /// Number of environments in the batch.
    fn num_envs(&self) -> usize;

    /// World-frame origin of every environment.
    fn env_origins(&self) -> &[Vec3];

    /// # Errors
    ///
    /// Returns [`SceneError::UnknownEntity`] if `name` is not registered.
    fn resolve_entity(&self, name: &str) -> Result<EntityId, SceneError>;

    /// # Errors
    ///
    /// Returns [`SceneError::UnknownArticulation`] if `name` is not registered.
    fn resolve_articulation(&self, name: &str) -> Result<ArticulationId, SceneError>;

    /// # Errors
    ///
    /// Returns [`SceneError::StaleHandle`] for a handle from another scene.
    fn get_pose(&self, id: EntityId) -> Result<&PoseBatch, SceneError>;

    /// # Errors
    ///
    /// Returns [`SceneError::StaleHandle`] for a handle from another scene.
    fn get_joint_state(&self, id: ArticulationId) -> Result<&JointState, SceneError>;
}

/// Owned scene state for an environment batch.
#[derive(Clone, Debug, Default)]
pub struct SceneBatch {
    env_origins: Vec<Vec3>,
    entity_index: HashMap<String, usize>,
    entities: Vec<PoseBatch>,
    articulation_index: HashMap<String, usize>,
    articulations: Vec<JointState>,
}

impl SceneBatch {
    /// Creates an empty scene with one environment per origin.
    #[must_use]
    pub fn new(env_origins: Vec<Vec3>) -> Self {
        Self { env_origins, ..Self::default() }
    }

    fn check_len(&self, name: &str, actual: usize) -> Result<(), SceneError> {
        if actual == self.env_origins.len() {
            Ok(())
        } else {
            Err(SceneError::ShapeMismatch {
                name: name.to_string(),
                expected: self.env_origins.len(),
                actual,
            })
        }
    }

    /// Registers a rigid entity or frame.
    ///
    /// # Errors
    ///
    /// Fails if the name is taken or the batch size differs from the scene's.
    pub fn add_entity(&mut self, name: &str, poses: PoseBatch) -> Result<EntityId, SceneError> {
        if self.entity_index.contains_key(name) {
            return Err(SceneError::DuplicateName(name.to_string()));
        }
        self.check_len(name, poses.positions.len())?;
        self.check_len(name, poses.orientations.len())?;
        let idx = self.entities.len();
        self.entities.push(poses);
        self.entity_index.insert(name.to_string(), idx);
        Ok(EntityId(idx))
    }

    /// Registers an articulated robot.
    ///
    /// # Errors
    ///
    /// Fails if the name is taken or the batch size differs from the scene's.
    pub fn add_articulation(&mut self, name: &str, state: JointState) -> Result<ArticulationId, SceneError> {
        if self.articulation_index.contains_key(name) {
            return Err(SceneError::DuplicateName(name.to_string()));
        }
        self.check_len(name, state.num_envs())?;
        let idx = self.articulations.len();
        self.articulations.push(state);
        self.articulation_index.insert(name.to_string(), idx);
        Ok(ArticulationId(idx))
    }
}

impl EntityRegistry for SceneBatch {
    fn num_envs(&self) -> usize {
        self.env_origins.len()
    }

    fn env_origins(&self) -> &[Vec3] {
        &self.env_origins
    }

    fn resolve_entity(&self, name: &str) -> Result<EntityId, SceneError> {
        self.entity_index
            .get(name)
            .map(|&idx| EntityId(idx))
            .ok_or_else(|| SceneError::UnknownEntity(name.to_string()))
    }

    fn resolve_articulation(&self, name: &str) -> Result<ArticulationId, SceneError> {
        self.articulation_index
            .get(name)
            .map(|&idx| ArticulationId(idx))
            .ok_or_else(|| SceneError::UnknownArticulation(name.to_string()))
    }

    fn get_pose(&self, id: EntityId) -> Result<&PoseBatch, SceneError> {
        self.entities.get(id.0).ok_or(SceneError::StaleHandle(id.0))
    }

    fn get_joint_state(&self, id: ArticulationId) -> Result<&JointState, SceneError> {
        self.articulations.get(id.0).ok_or(SceneError::StaleHandle(id.0))
    }
}
