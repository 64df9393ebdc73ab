use crate::predicate::{expect_batch, Condition, Predicate};
use crate::{Axis, BatchOps, GoalError, RestPosePredicate, ValueRange};
use scene::{EntityId, EntityRegistry};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    pub x_range: ValueRange,
    pub y_range: ValueRange,
    pub height_range: ValueRange,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            x_range: ValueRange::symmetric(0.10),
            y_range: ValueRange::symmetric(0.10),
            height_range: ValueRange::symmetric(0.07),
        }
    }
}

impl CompletionConfig {
    fn range(&self, axis: Axis) -> ValueRange {
        match axis {
            Axis::X => self.x_range,
            Axis::Y => self.y_range,
            Axis::Z => self.height_range,
        }
    }
}

/// Whole-task success: every object inside the container's box and the robot
/// back at rest.
///
/// Positions are made environment-local by subtracting each environment's
/// origin before any comparison, so tiled environments never see each
/// other's geometry. Sub-conditions are produced in a fixed order (objects in
/// configuration order, then x, y, z with upper before lower bound, then the
/// rest pose) and folded with AND.
#[derive(Clone)]
pub struct TaskCompletion {
    objects: Vec<(String, EntityId)>,
    container: EntityId,
    config: CompletionConfig,
    rest: RestPosePredicate,
}

impl TaskCompletion {
    /// # Errors
    ///
    /// Fails if an object or container name is unknown.
    pub fn resolve(
        scene: &dyn EntityRegistry,
        objects: &[String],
        container: &str,
        config: CompletionConfig,
        rest: RestPosePredicate,
    ) -> Result<Self, GoalError> {
        let objects = objects
            .iter()
            .map(|name| Ok((name.clone(), scene.resolve_entity(name)?)))
            .collect::<Result<Vec<_>, GoalError>>()?;
        Ok(Self {
            objects,
            container: scene.resolve_entity(container)?,
            config,
            rest,
        })
    }
}

impl Predicate for TaskCompletion {
    fn conditions(&self, scene: &dyn EntityRegistry, ops: &BatchOps) -> Result<Vec<Condition>, GoalError> {
        let origins = scene.env_origins();
        let container = scene.get_pose(self.container)?;
        expect_batch(scene, "container", container.len())?;
        let container_local = ops.sub(&container.positions, origins)?;

        let container_axes = Axis::ALL
            .iter()
            .map(|&axis| ops.axis(&container_local, axis))
            .collect::<Result<Vec<_>, _>>()?;

        let mut conditions = Vec::with_capacity(self.objects.len() * 6 + 1);
        for (name, id) in &self.objects {
            let object = scene.get_pose(*id)?;
            expect_batch(scene, name, object.len())?;
            let object_local = ops.sub(&object.positions, origins)?;

            for (axis, container_c) in Axis::ALL.into_iter().zip(&container_axes) {
                let range = self.config.range(axis);
                let object_c = ops.axis(&object_local, axis)?;
                conditions.push(Condition::new(
                    format!("{name}.{}_upper", axis.label()),
                    ops.less_than(&object_c, &ops.shift(container_c, range.high())?)?,
                ));
                conditions.push(Condition::new(
                    format!("{name}.{}_lower", axis.label()),
                    ops.greater_than(&object_c, &ops.shift(container_c, range.low())?)?,
                ));
            }
        }

        conditions.extend(self.rest.conditions(scene, ops)?);
        Ok(conditions)
    }
}
