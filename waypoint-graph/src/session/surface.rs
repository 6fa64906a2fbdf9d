//! Scene/Surface collaborator: projection, picking and draw primitives.
//!
//! The edit session never renders or projects on its own. A host (editor
//! viewport, headless replay, test recorder) implements [`Surface`] and
//! receives draw requests in the order the session issues them.

use crate::geometry::{Color, Ray, Vec2, Vec3};
use crate::graph::WaypointId;

/// Host viewport as seen by the edit session.
///
/// Query methods take `&self`; draw methods take `&mut self` so recorders can
/// collect requests.
pub trait Surface {
    /// Screen position of a world position, or `None` when it is not visible
    /// (no camera, behind the camera). Invisible waypoints cannot be snapped to.
    fn project(&self, world: Vec3) -> Option<Vec2>;

    /// World-space ray from the pointer at `screen` into the scene.
    fn pointer_ray(&self, screen: Vec2) -> Ray;

    /// First scene hit along the pointer ray, if any.
    fn raycast_hit(&self, screen: Vec2) -> Option<Vec3>;

    /// Draws a position gizmo for `id` seeded with `world` and returns the
    /// (possibly edited) position.
    fn position_handle(&mut self, id: WaypointId, world: Vec3) -> Vec3;

    fn draw_line(&mut self, from: Vec3, to: Vec3, color: Color);

    fn draw_label(&mut self, at: Vec3, text: &str);

    fn draw_sphere(&mut self, center: Vec3, radius: f32, color: Color);
}
