use std::ops::{Add, Sub};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(v: Vec3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Orientation quaternion, scalar first (`w, x, y, z`).
pub type Quat = [f32; 4];

pub const IDENTITY_QUAT: Quat = [1.0, 0.0, 0.0, 0.0];

/// World-frame poses of one entity across the whole environment batch.
///
/// `positions[i]` and `orientations[i]` belong to environment `i`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PoseBatch {
    pub positions: Vec<Vec3>,
    pub orientations: Vec<Quat>,
}

impl PoseBatch {
    /// Poses with identity orientation.
    #[must_use]
    pub fn from_positions(positions: Vec<Vec3>) -> Self {
        let orientations = vec![IDENTITY_QUAT; positions.len()];
        Self { positions, orientations }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
