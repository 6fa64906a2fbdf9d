//! Shared surface for edit session tests.

use std::collections::HashMap;

use waypoint_graph::{Color, Ray, Surface, Vec2, Vec3, WaypointId};

/// Top-down camera: world (x, y, z) appears at screen (x, z); the pointer ray
/// starts 10 units above the screen point and looks straight down.
///
/// Records every draw request. `hit` is returned by `raycast_hit`; `moves`
/// overrides what the position gizmo returns for a waypoint.
#[derive(Default)]
pub struct RecordingSurface {
    pub hit: Option<Vec3>,
    pub moves: HashMap<WaypointId, Vec3>,
    pub lines: Vec<(Vec3, Vec3, Color)>,
    pub labels: Vec<(Vec3, String)>,
    pub spheres: Vec<(Vec3, f32, Color)>,
    pub handles: Vec<WaypointId>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.labels.clear();
        self.spheres.clear();
        self.handles.clear();
    }
}

impl Surface for RecordingSurface {
    fn project(&self, world: Vec3) -> Option<Vec2> {
        Some(Vec2::new(world.x, world.z))
    }

    fn pointer_ray(&self, screen: Vec2) -> Ray {
        Ray::new(Vec3::new(screen.x, 10.0, screen.y), Vec3::new(0.0, -1.0, 0.0))
    }

    fn raycast_hit(&self, _screen: Vec2) -> Option<Vec3> {
        self.hit
    }

    fn position_handle(&mut self, id: WaypointId, world: Vec3) -> Vec3 {
        self.handles.push(id);
        self.moves.get(&id).copied().unwrap_or(world)
    }

    fn draw_line(&mut self, from: Vec3, to: Vec3, color: Color) {
        self.lines.push((from, to, color));
    }

    fn draw_label(&mut self, at: Vec3, text: &str) {
        self.labels.push((at, text.to_string()));
    }

    fn draw_sphere(&mut self, center: Vec3, radius: f32, color: Color) {
        self.spheres.push((center, radius, color));
    }
}
