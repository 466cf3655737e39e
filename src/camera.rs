/*
 * Camera Module
 *
 * This module defines the Camera struct that frames the 3D swarm. It orbits
 * the origin (drag to rotate, wheel to dolly) and provides the coordinate
 * transforms between world space and screen space. The inverse transform
 * lifts the 2D pointer onto the plane through the origin facing the camera,
 * which is where the attraction point lives.
 */

use nannou::prelude::*;

// Vertical field of view in radians
const FOV: f32 = 60.0 * PI / 180.0;
const NEAR: f32 = 0.1;

pub struct Camera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub is_dragging: bool,
    pub last_cursor_pos: Vec2,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: 100.0,
            min_distance: 20.0,
            max_distance: 500.0,
            is_dragging: false,
            last_cursor_pos: Vec2::ZERO,
        }
    }

    // Camera basis vectors from the orbit angles (y-up)
    fn axes(&self) -> (Vec3, Vec3, Vec3) {
        let forward = vec3(
            -self.pitch.cos() * self.yaw.sin(),
            -self.pitch.sin(),
            -self.pitch.cos() * self.yaw.cos(),
        );
        let right = forward.cross(Vec3::Y).normalize();
        let up = right.cross(forward);
        (forward, right, up)
    }

    fn eye(&self) -> Vec3 {
        let (forward, _, _) = self.axes();
        -forward * self.distance
    }

    fn focal_length(&self, window_rect: Rect) -> f32 {
        0.5 * window_rect.h() / (FOV / 2.0).tan()
    }

    // Project a world point to screen space. Returns the screen position
    // and the perspective scale factor (world unit -> pixels at that
    // depth), or None when the point is behind the camera.
    pub fn world_to_screen(&self, point: Vec3, window_rect: Rect) -> Option<(Vec2, f32)> {
        let (forward, right, up) = self.axes();
        let v = point - self.eye();

        let depth = v.dot(forward);
        if depth < NEAR {
            return None;
        }

        let scale = self.focal_length(window_rect) / depth;
        Some((vec2(v.dot(right), v.dot(up)) * scale, scale))
    }

    // Lift a screen point onto the camera-facing plane through the origin.
    // Used to turn the 2D pointer into a 3D attraction point.
    pub fn screen_to_world(&self, point: Vec2, window_rect: Rect) -> Vec3 {
        let (_, right, up) = self.axes();
        let k = self.distance / self.focal_length(window_rect);
        right * point.x * k + up * point.y * k
    }

    // Handle mouse wheel events for dollying in and out
    pub fn zoom(&mut self, scroll_delta: Vec2) {
        let zoom_factor = 1.0 - scroll_delta.y * 0.1;
        self.distance = (self.distance * zoom_factor).clamp(self.min_distance, self.max_distance);
    }

    // Start orbiting the camera
    pub fn start_drag(&mut self, position: Vec2) {
        self.last_cursor_pos = position;
        self.is_dragging = true;
    }

    // Update orbit angles while dragging
    pub fn drag(&mut self, position: Vec2) {
        if self.is_dragging {
            let delta = position - self.last_cursor_pos;

            if delta.length_squared() > 0.0 {
                self.yaw -= delta.x * 0.005;
                self.pitch = (self.pitch + delta.y * 0.005).clamp(-1.5, 1.5);
                self.last_cursor_pos = position;
            }
        }
    }

    // End orbiting
    pub fn end_drag(&mut self) {
        self.is_dragging = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> Rect {
        Rect::from_w_h(1280.0, 720.0)
    }

    #[test]
    fn origin_projects_to_screen_center() {
        let camera = Camera::new();
        let (screen, _) = camera.world_to_screen(Vec3::ZERO, window()).unwrap();
        assert!(screen.length() < 1e-3);
    }

    #[test]
    fn points_behind_the_camera_are_culled() {
        let camera = Camera::new();
        // Default camera sits at +z looking at the origin
        assert!(camera.world_to_screen(vec3(0.0, 0.0, 200.0), window()).is_none());
    }

    #[test]
    fn screen_to_world_round_trips_through_the_focal_plane() {
        let mut camera = Camera::new();
        camera.yaw = 0.7;
        camera.pitch = -0.3;

        let world = camera.screen_to_world(vec2(120.0, -45.0), window());
        let (screen, _) = camera.world_to_screen(world, window()).unwrap();

        assert!((screen - vec2(120.0, -45.0)).length() < 1e-2, "{:?}", screen);
    }

    #[test]
    fn nearer_points_draw_larger() {
        let camera = Camera::new();
        let (_, near_scale) = camera.world_to_screen(vec3(0.0, 0.0, 30.0), window()).unwrap();
        let (_, far_scale) = camera.world_to_screen(vec3(0.0, 0.0, -30.0), window()).unwrap();
        assert!(near_scale > far_scale);
    }
}
