#![allow(dead_code)]

use scene::{JointState, PoseBatch, SceneBatch, Vec3};

pub const SO101_JOINTS: [&str; 6] = [
    "shoulder_pan",
    "shoulder_lift",
    "elbow_flex",
    "wrist_flex",
    "wrist_roll",
    "gripper",
];

/// SO-101 home pose in radians with the given gripper value.
pub fn home_row(gripper: f32) -> Vec<f32> {
    let mut row: Vec<f32> = [0.0f32, -100.0, 90.0, 50.0, 0.0]
        .iter()
        .map(|d| d.to_radians())
        .collect();
    row.push(gripper);
    row
}

/// Per-environment state relative to that environment's origin.
#[derive(Clone, Copy)]
pub struct EnvSetup {
    pub origin: Vec3,
    pub plate: Vec3,
    pub pen: Vec3,
    pub ee: Vec3,
    pub gripper: f32,
}

impl EnvSetup {
    /// Pen resting on the plate, end-effector just above it.
    pub fn placed() -> Self {
        Self {
            origin: Vec3::ZERO,
            plate: Vec3::new(0.3, 0.1, 0.8),
            pen: Vec3::new(0.32, 0.12, 0.82),
            ee: Vec3::new(0.32, 0.12, 0.84),
            gripper: 0.8,
        }
    }
}

pub fn scene_from(envs: &[EnvSetup]) -> SceneBatch {
    let mut scene = SceneBatch::new(envs.iter().map(|e| e.origin).collect());
    let world = |f: fn(&EnvSetup) -> Vec3| -> PoseBatch {
        PoseBatch::from_positions(envs.iter().map(|e| e.origin + f(e)).collect())
    };
    scene.add_entity("Plate", world(|e| e.plate)).unwrap();
    scene.add_entity("MechanicalPencil", world(|e| e.pen)).unwrap();
    scene.add_entity("ee_frame", world(|e| e.ee)).unwrap();

    let rows: Vec<Vec<f32>> = envs.iter().map(|e| home_row(e.gripper)).collect();
    let names = SO101_JOINTS.iter().map(ToString::to_string).collect();
    scene
        .add_articulation("robot", JointState::new(names, &rows).unwrap())
        .unwrap();
    scene
}
