//! Rank-based color ramp for chart slices.
//!
//! Colors depend only on an entry's rank and the number of entries, so the
//! largest share is always the darkest slice.

use std::fmt;

/// An sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation between two colors, `t` in [0, 1]
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| -> u8 {
            let v = a as f64 + (b as f64 - a as f64) * t;
            v.round().clamp(0.0, 255.0) as u8
        };

        Rgb {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }

    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Parse `#rrggbb` (the leading `#` is optional)
    pub fn from_hex(hex: &str) -> Option<Rgb> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Five stops, darkest first
pub const RAMP_STOPS: [Rgb; 5] = [
    Rgb::new(30, 58, 138),
    Rgb::new(29, 78, 216),
    Rgb::new(59, 130, 246),
    Rgb::new(96, 165, 250),
    Rgb::new(191, 219, 254),
];

/// Sample the ramp at position `t` in [0, 1]
pub fn sample(t: f64) -> Rgb {
    let segments = RAMP_STOPS.len() - 1;
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

    let scaled = t * segments as f64;
    let index = (scaled.floor() as usize).min(segments - 1);
    let frac = scaled - index as f64;

    RAMP_STOPS[index].lerp(RAMP_STOPS[index + 1], frac)
}

/// Color for the entry at `rank` out of `count` entries
pub fn ramp_color(rank: usize, count: usize) -> Rgb {
    if count <= 1 {
        return RAMP_STOPS[0];
    }
    sample(rank as f64 / (count - 1) as f64)
}
