use eframe::egui::Color32;

/// Low to high weight: green, sky, yellow, orange, purple.
pub const PALETTE: [Color32; 5] = [
    Color32::from_rgb(0x22, 0xc5, 0x5e),
    Color32::from_rgb(0x38, 0xbd, 0xf8),
    Color32::from_rgb(0xea, 0xb3, 0x08),
    Color32::from_rgb(0xf9, 0x73, 0x16),
    Color32::from_rgb(0xa8, 0x55, 0xf7),
];

/// Weights from the service are observed in roughly [0.2, 1.0].
pub const MIN_WEIGHT: f32 = 0.2;
pub const WEIGHT_SPAN: f32 = 0.8;

const BASE_SIZE: f32 = 0.5;
const SIZE_PER_WEIGHT: f32 = 1.5;

pub fn map_weight_to_size(weight: f32) -> f32 {
    BASE_SIZE + weight * SIZE_PER_WEIGHT
}

/// Bucket index into `PALETTE`. Anything outside the five buckets, including
/// weights at or above 1.0, below 0.2, and NaN, lands in the last one.
pub fn palette_index(weight: f32) -> usize {
    let bucket = ((weight - MIN_WEIGHT) / WEIGHT_SPAN * PALETTE.len() as f32).floor();
    if bucket >= 0.0 && bucket < PALETTE.len() as f32 {
        bucket as usize
    } else {
        PALETTE.len() - 1
    }
}

pub fn map_weight_to_color(weight: f32) -> Color32 {
    PALETTE[palette_index(weight)]
}
