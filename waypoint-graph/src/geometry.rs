//! Vector and colour types shared by the graph model and the edit session.
//!
//! World positions are [`Vec3`] and pointer/projected positions are screen-space
//! [`Vec2`], both re-exported from `glam`. No transform math lives here:
//! projection belongs to the [`Surface`](crate::session::Surface) collaborator.

pub use glam::{Vec2, Vec3};

/// World-space ray cast from the pointer through the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point `distance` world units along the (normalized) direction.
    /// A zero direction stays at the origin.
    pub fn point_at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction.normalize_or_zero() * distance
    }
}

/// RGBA colour for draw requests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}
