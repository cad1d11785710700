use std::f32::consts::{
    FRAC_PI_2,
    PI,
};

use eframe::egui::{
    pos2,
    Pos2,
    Rect,
};
use glam::{
    Mat4,
    Vec3,
};

pub const INITIAL_DISTANCE: f32 = 25.0;
pub const FIELD_OF_VIEW_DEGREES: f32 = 45.0;
pub const MIN_DISTANCE: f32 = 2.0;
pub const MAX_DISTANCE: f32 = 200.0;

const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 1000.0;
const ORBIT_SPEED: f32 = 0.008;
const ZOOM_SPEED: f32 = 0.002;
const POLAR_MARGIN: f32 = 0.05;

/// A point projected into a viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub pos: Pos2,
    /// Distance in front of the camera along its view axis.
    pub depth: f32,
}

/// Perspective camera orbiting a target point.
///
/// Starts at `(0, 0, 25)` looking at the origin. The eye sits at
/// `target + distance * (sin(polar) sin(azimuth), cos(polar), sin(polar) cos(azimuth))`.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    target: Vec3,
    distance: f32,
    azimuth: f32,
    polar: f32,
    fov_y: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            distance: INITIAL_DISTANCE,
            azimuth: 0.0,
            polar: FRAC_PI_2,
            fov_y: FIELD_OF_VIEW_DEGREES.to_radians(),
        }
    }
}

impl OrbitCamera {
    pub fn eye(&self) -> Vec3 {
        let (sin_polar, cos_polar) = self.polar.sin_cos();
        let (sin_azimuth, cos_azimuth) = self.azimuth.sin_cos();
        self.target
            + self.distance * Vec3::new(sin_polar * sin_azimuth, cos_polar, sin_polar * cos_azimuth)
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        let projection = Mat4::perspective_rh(self.fov_y, aspect, NEAR_PLANE, FAR_PLANE);
        let view = Mat4::look_at_rh(self.eye(), self.target, Vec3::Y);
        projection * view
    }

    /// Projects a world point into `viewport`. `None` when the viewport is
    /// empty or the point is behind the near plane.
    pub fn project(&self, point: Vec3, viewport: Rect) -> Option<Projected> {
        if viewport.width() <= 0.0 || viewport.height() <= 0.0 {
            return None;
        }

        let clip = self.view_projection(viewport.width() / viewport.height()) * point.extend(1.0);
        if clip.w <= NEAR_PLANE {
            return None;
        }

        let ndc = clip.truncate() / clip.w;
        let center = viewport.center();
        Some(Projected {
            pos: pos2(
                center.x + ndc.x * viewport.width() * 0.5,
                center.y - ndc.y * viewport.height() * 0.5,
            ),
            depth: clip.w,
        })
    }

    /// Pixels per world unit at depth 1 for a viewport of this height.
    pub fn focal_length_px(&self, viewport_height: f32) -> f32 {
        viewport_height * 0.5 / (self.fov_y * 0.5).tan()
    }

    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.azimuth -= dx * ORBIT_SPEED;
        self.polar = (self.polar - dy * ORBIT_SPEED).clamp(POLAR_MARGIN, PI - POLAR_MARGIN);
    }

    /// Moves the target so the scene follows the pointer.
    pub fn pan(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        if viewport_height <= 0.0 {
            return;
        }

        let world_per_px = 2.0 * self.distance * (self.fov_y * 0.5).tan() / viewport_height;
        let forward = (self.target - self.eye()).normalize();
        let right = forward.cross(Vec3::Y).normalize();
        let up = right.cross(forward);

        self.target += (up * dy - right * dx) * world_per_px;
    }

    /// Positive scroll moves closer.
    pub fn zoom(&mut self, scroll: f32) {
        self.distance = (self.distance * (-scroll * ZOOM_SPEED).exp()).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
