//! OKLCH colour type and parsing.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use palette::{Clamp, IntoColor, Oklch, Srgb};
use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TektonError;

/// Upper chroma bound. OKLCH chroma beyond this is outside any display
/// gamut we target.
pub const CHROMA_MAX: f64 = 0.4;

/// Degrees in a full hue turn.
pub const HUE_TURN: f64 = 360.0;

/// An OKLCH colour value.
///
/// Lightness is in `[0, 1]`, chroma in `[0, 0.4]`, hue in `[0, 360)`.
/// Values are immutable; every operation returns a new colour.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Colour {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Colour {
    /// Create a new colour, clamping each component into bounds.
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }.clamp()
    }

    /// Black.
    pub const BLACK: Self = Self {
        l: 0.0,
        c: 0.0,
        h: 0.0,
    };

    /// White.
    pub const WHITE: Self = Self {
        l: 1.0,
        c: 0.0,
        h: 0.0,
    };

    /// Clip each component to its bound.
    ///
    /// Lightness and chroma are clipped; hue wraps with Euclidean modulo so
    /// the result stays in the half-open `[0, 360)` range.
    pub fn clamp(self) -> Self {
        Self {
            l: self.l.clamp(0.0, 1.0),
            c: self.c.clamp(0.0, CHROMA_MAX),
            h: self.h.rem_euclid(HUE_TURN),
        }
    }

    /// Check each component against its bound without modifying it.
    pub fn in_bounds(&self) -> bool {
        (0.0..=1.0).contains(&self.l)
            && (0.0..=CHROMA_MAX).contains(&self.c)
            && (0.0..HUE_TURN).contains(&self.h)
    }

    /// Round each component to `decimals` places.
    ///
    /// Required before hashing or serialization so that generation stays
    /// deterministic regardless of floating-point noise upstream.
    pub fn round(self, decimals: u32) -> Self {
        let factor = 10f64.powi(decimals as i32);
        Self {
            l: (self.l * factor).round() / factor,
            c: (self.c * factor).round() / factor,
            h: (self.h * factor).round() / factor,
        }
    }

    /// Parse an `oklch(L C H)` string.
    ///
    /// Returns `None` when the pattern does not match or any component is
    /// out of bounds, so callers can chain fallbacks.
    pub fn parse_oklch(s: &str) -> Option<Self> {
        let (l, c, h) = parse_oklch_parts(s)?;
        let colour = Self { l, c, h };
        colour.in_bounds().then_some(colour)
    }

    /// Interpolate towards `other`, taking the shortest hue path.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            l: self.l + (other.l - self.l) * t,
            c: self.c + (other.c - self.c) * t,
            h: interpolate_hue(self.h, other.h, t),
        }
        .clamp()
    }

    /// Check if two colours are visually close.
    pub fn similar_to(&self, other: &Self, threshold: f64) -> bool {
        (self.l - other.l).abs() < threshold
            && (self.c - other.c).abs() < threshold
            && (self.h - other.h).abs() < threshold * HUE_TURN
    }

    /// Convert to a gamut-clamped sRGB value.
    pub(crate) fn to_srgb(self) -> Srgb {
        let oklch = Oklch::new(self.l as f32, self.c as f32, self.h as f32);
        let rgb: Srgb = oklch.into_color();
        rgb.clamp()
    }

    /// Convert to a 6-digit lowercase hex string.
    ///
    /// The conversion clamps into the sRGB gamut. Hex output is for
    /// Tailwind and preview consumers; the OKLCH value stays canonical.
    pub fn to_hex(self) -> String {
        let rgb = self.to_srgb().into_format::<u8>();
        format!("#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)
    }
}

impl FromStr for Colour {
    type Err = TektonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_oklch(s).ok_or_else(|| TektonError::Parse {
            message: format!("Invalid OKLCH colour: {}", s),
            help: Some(
                "Use the form oklch(L C H) with L in [0,1], C in [0,0.4], H in [0,360)"
                    .to_string(),
            ),
        })
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "oklch({} {} {})", self.l, self.c, self.h)
    }
}

impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Circular hue interpolation.
///
/// If the raw difference exceeds 180 degrees, 360 is added to the smaller
/// hue so the blend takes the shorter path, then the result wraps back into
/// `[0, 360)`.
pub fn interpolate_hue(h1: f64, h2: f64, t: f64) -> f64 {
    let mut h1 = h1;
    let mut h2 = h2;
    let diff = h2 - h1;

    if diff.abs() > 180.0 {
        if diff > 0.0 {
            h1 += HUE_TURN;
        } else {
            h2 += HUE_TURN;
        }
    }

    (h1 + (h2 - h1) * t).rem_euclid(HUE_TURN)
}

/// Extract the three numeric fields of an `oklch(L C H)` string without
/// range checks, so validation can report pattern and range problems
/// separately.
pub(crate) fn parse_oklch_parts(s: &str) -> Option<(f64, f64, f64)> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE
        .get_or_init(|| Regex::new(r"^oklch\(\s*([\d.]+)\s+([\d.]+)\s+([\d.]+)\s*\)$").unwrap());

    let caps = re.captures(s.trim())?;
    let l = caps[1].parse().ok()?;
    let c = caps[2].parse().ok()?;
    let h = caps[3].parse().ok()?;
    Some((l, c, h))
}
