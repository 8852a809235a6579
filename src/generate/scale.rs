//! Colour scale generation from a single anchor colour.

use crate::types::{Colour, ColourScale, Step};

/// Reference lightness for each step (Tailwind-shaped curve).
const LIGHTNESS_CURVE: [f64; 11] = [
    0.97, // 50
    0.94, // 100
    0.86, // 200
    0.76, // 300
    0.64, // 400
    0.53, // 500
    0.45, // 600
    0.38, // 700
    0.30, // 800
    0.22, // 900
    0.15, // 950
];

/// Reference lightness for a step.
pub fn reference_lightness(step: Step) -> f64 {
    let index = Step::ALL.iter().position(|&s| s == step).unwrap_or(5);
    LIGHTNESS_CURVE[index]
}

/// Chroma attenuation near the lightness extremes. Near-white and
/// near-black colours carry less chroma so they stay plausible.
fn chroma_factor(step: Step) -> f64 {
    match step {
        Step::S50 | Step::S950 => 0.5,
        Step::S100 | Step::S900 => 0.7,
        Step::S200 | Step::S800 => 0.85,
        _ => 1.0,
    }
}

/// Generate a complete 11-step scale from one anchor colour.
///
/// Chroma and hue are held constant from the anchor; lightness follows the
/// reference curve, offset so the scale reproduces the anchor lightness
/// exactly at `base_step`. Every step is clamped and rounded to three
/// decimals, so an anchor rounded to three decimals round-trips exactly.
pub fn generate_colour_scale(base: Colour, base_step: Step) -> ColourScale {
    let offset = base.l - reference_lightness(base_step);

    Step::ALL
        .iter()
        .map(|&step| {
            let colour = Colour {
                l: reference_lightness(step) + offset,
                c: base.c * chroma_factor(step),
                h: base.h,
            }
            .clamp()
            .round(3);
            (step, colour)
        })
        .collect()
}
