//! Headless top-down surface for replaying edit sessions without a viewport.

use serde::Serialize;
use waypoint_graph::{Color, Ray, Surface, Vec2, Vec3, WaypointId};

/// Counts of draw requests received by a [`ReplaySurface`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DrawStats {
    pub lines: usize,
    pub labels: usize,
    pub spheres: usize,
    pub handles: usize,
}

/// Orthographic camera looking straight down the -y axis.
///
/// World `(x, y, z)` appears at screen `(x * scale, z * scale)`; points above
/// the camera are not visible. The scene is a ground plane at `y = 0`, so
/// every pointer ray hits it. Position gizmos never move anything.
#[derive(Clone, Debug)]
pub struct ReplaySurface {
    scale: f32,
    camera_height: f32,
    stats: DrawStats,
}

impl Default for ReplaySurface {
    fn default() -> Self {
        Self::new(1.0, 100.0)
    }
}

impl ReplaySurface {
    /// `scale` is screen units per world unit and must be non-zero.
    pub fn new(scale: f32, camera_height: f32) -> Self {
        Self {
            scale,
            camera_height,
            stats: DrawStats::default(),
        }
    }

    pub fn stats(&self) -> DrawStats {
        self.stats
    }

    fn to_ground(&self, screen: Vec2) -> (f32, f32) {
        (screen.x / self.scale, screen.y / self.scale)
    }
}

impl Surface for ReplaySurface {
    fn project(&self, world: Vec3) -> Option<Vec2> {
        if world.y > self.camera_height {
            return None;
        }
        Some(Vec2::new(world.x * self.scale, world.z * self.scale))
    }

    fn pointer_ray(&self, screen: Vec2) -> Ray {
        let (x, z) = self.to_ground(screen);
        Ray::new(
            Vec3::new(x, self.camera_height, z),
            Vec3::new(0.0, -1.0, 0.0),
        )
    }

    fn raycast_hit(&self, screen: Vec2) -> Option<Vec3> {
        let (x, z) = self.to_ground(screen);
        Some(Vec3::new(x, 0.0, z))
    }

    fn position_handle(&mut self, _id: WaypointId, world: Vec3) -> Vec3 {
        self.stats.handles += 1;
        world
    }

    fn draw_line(&mut self, _from: Vec3, _to: Vec3, _color: Color) {
        self.stats.lines += 1;
    }

    fn draw_label(&mut self, _at: Vec3, _text: &str) {
        self.stats.labels += 1;
    }

    fn draw_sphere(&mut self, _center: Vec3, _radius: f32, _color: Color) {
        self.stats.spheres += 1;
    }
}
