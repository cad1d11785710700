use eframe::egui::Color32;
use glam::Vec3;
use rand::Rng;
use tracing::debug;

use super::{
    encoding::{
        map_weight_to_color,
        map_weight_to_size,
    },
    float::MAX_PHASE,
    sphere::{
        generate_sphere_positions,
        SPHERE_RADIUS,
    },
};
use crate::core::WordItem;

/// One word ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub word: String,
    pub position: Vec3,
    pub size: f32,
    pub color: Color32,
    pub phase: f32,
}

/// Words of one analysis plus their random placement.
///
/// Positions and float phases are drawn once, one per word, when the scene is
/// built and stay fixed for its lifetime. Weights only feed size and color.
/// Each analysis result gets its own scene.
#[derive(Debug, Clone)]
pub struct CloudScene {
    words: Vec<WordItem>,
    positions: Vec<Vec3>,
    phases: Vec<f32>,
    radius: f32,
}

impl CloudScene {
    pub fn new<R: Rng + ?Sized>(words: Vec<WordItem>, rng: &mut R) -> Self {
        Self::with_radius(words, SPHERE_RADIUS, rng)
    }

    pub fn with_radius<R: Rng + ?Sized>(words: Vec<WordItem>, radius: f32, rng: &mut R) -> Self {
        let mut scene = Self { words: Vec::new(), positions: Vec::new(), phases: Vec::new(), radius };
        scene.regenerate(words.len(), rng);
        scene.words = words;
        scene
    }

    fn regenerate<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) {
        debug!(count, radius = self.radius, "placing words on sphere");
        self.positions = generate_sphere_positions(count, self.radius, rng);
        self.phases = (0..count).map(|_| rng.random_range(0.0..MAX_PHASE)).collect();
    }

    pub fn words(&self) -> &[WordItem] {
        &self.words
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn glyphs(&self) -> impl Iterator<Item = Glyph> + '_ {
        self.words.iter().zip(&self.positions).zip(&self.phases).map(|((item, position), phase)| {
            Glyph {
                word: item.word.clone(),
                position: *position,
                size: map_weight_to_size(item.weight),
                color: map_weight_to_color(item.weight),
                phase: *phase,
            }
        })
    }
}
