use eframe::{
    egui::{
        self,
        emath::Rot2,
        FontId,
        PointerButton,
        Pos2,
        Sense,
        Vec2,
    },
    epaint::TextShape,
};
use glam::Vec3;

use crate::{
    cloud::{
        camera::Projected,
        CloudScene,
        FloatMotion,
        Glyph,
        OrbitCamera,
    },
    gui::theme::{
        blend_colors,
        CLOUD_BACKGROUND,
    },
};

const MIN_FONT_PX: f32 = 4.0;
const MAX_FONT_PX: f32 = 220.0;
/// Share of the glyph color kept at the far side of the cloud.
const FAR_BRIGHTNESS: f32 = 0.45;

/// Interactive view of a `CloudScene`. Owns the camera so orbit state
/// survives across frames.
#[derive(Default)]
pub struct CloudView {
    camera: OrbitCamera,
    motion: FloatMotion,
}

struct PlacedGlyph {
    glyph: Glyph,
    projected: Projected,
    tilt: f32,
}

impl CloudView {
    pub fn reset_camera(&mut self) {
        self.camera.reset();
    }

    pub fn show(&mut self, ui: &mut egui::Ui, scene: &CloudScene) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        self.handle_input(ui, &response);

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, CLOUD_BACKGROUND);

        let time = ui.input(|i| i.time) as f32;
        let placed = self.place_glyphs(scene, rect, time);

        let focal = self.camera.focal_length_px(rect.height());
        let near = (self.camera.distance() - scene.radius()).max(0.1);
        let far = self.camera.distance() + scene.radius();

        for item in placed {
            let font_px = (item.glyph.size * focal / item.projected.depth).clamp(MIN_FONT_PX, MAX_FONT_PX);
            let color = blend_colors(
                item.glyph.color,
                CLOUD_BACKGROUND,
                1.0 - depth_brightness(item.projected.depth, near, far),
            );

            let galley = painter.layout_no_wrap(item.glyph.word, FontId::proportional(font_px), color);
            let top_left = rotated_top_left(item.projected.pos, galley.size(), item.tilt);
            painter.add(TextShape::new(top_left, galley, color).with_angle(item.tilt));
        }

        response.on_hover_text("Drag to rotate, right-drag to pan, scroll to zoom, double-click to reset");

        // The float animation needs a steady frame stream
        ui.ctx().request_repaint();
    }

    fn handle_input(&mut self, ui: &egui::Ui, response: &egui::Response) {
        let delta = response.drag_delta();
        if response.dragged_by(PointerButton::Primary) {
            self.camera.orbit(delta.x, delta.y);
        } else if response.dragged_by(PointerButton::Secondary)
            || response.dragged_by(PointerButton::Middle)
        {
            self.camera.pan(delta.x, delta.y, response.rect.height());
        }

        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll != 0.0 {
                self.camera.zoom(scroll);
            }
        }

        if response.double_clicked() {
            self.camera.reset();
        }
    }

    /// Projects every glyph and orders them far to near.
    fn place_glyphs(&self, scene: &CloudScene, rect: egui::Rect, time: f32) -> Vec<PlacedGlyph> {
        let mut placed: Vec<PlacedGlyph> = scene
            .glyphs()
            .filter_map(|glyph| {
                let offset = self.motion.offset(time, glyph.phase);
                let world = glyph.position + Vec3::Y * offset.lift;
                self.camera
                    .project(world, rect)
                    .map(|projected| PlacedGlyph { glyph, projected, tilt: offset.tilt })
            })
            .collect();

        placed.sort_by(|a, b| b.projected.depth.total_cmp(&a.projected.depth));
        placed
    }
}

/// `TextShape` rotates around its top-left corner. Returns the corner that
/// keeps a `size` box rotated by `angle` centered on `center`.
pub fn rotated_top_left(center: Pos2, size: Vec2, angle: f32) -> Pos2 {
    center - Rot2::from_angle(angle) * (size / 2.0)
}

/// 1.0 at the near side of the cloud fading to `FAR_BRIGHTNESS` at the far side.
pub fn depth_brightness(depth: f32, near: f32, far: f32) -> f32 {
    if far <= near {
        return 1.0;
    }
    let t = ((depth - near) / (far - near)).clamp(0.0, 1.0);
    1.0 - t * (1.0 - FAR_BRIGHTNESS)
}
