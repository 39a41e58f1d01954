// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings, RGBA colors).

use std::str::FromStr;

use skia_safe as skia;

use crate::error::RenderError;

/// Default surface width in pixels.
pub const WIDTH: i32 = 960;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 480;
/// Height reserved below the plot for the legend row, when shown.
pub const LEGEND_HEIGHT: u32 = 28;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Same insets with extra room at the bottom.
    pub const fn grow_bottom(self, extra: u32) -> Self {
        Self { bottom: self.bottom + extra, ..self }
    }
}

impl Default for Insets {
    fn default() -> Self {
        // right margin leaves room for a secondary axis
        Self::new(64, 64, 16, 40)
    }
}

/// 8-bit RGBA color, parsed from the CSS-ish strings the chart configs use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const GRAY: Rgba = Rgba::rgb(128, 128, 128);

    pub fn to_skia(self) -> skia::Color {
        skia::Color::from_argb(self.a, self.r, self.g, self.b)
    }

    fn named(name: &str) -> Option<Self> {
        let c = match name {
            "black" => Self::rgb(0, 0, 0),
            "white" => Self::rgb(255, 255, 255),
            "red" => Self::rgb(255, 0, 0),
            "darkred" => Self::rgb(139, 0, 0),
            "green" => Self::rgb(0, 128, 0),
            "blue" => Self::rgb(0, 0, 255),
            "orange" => Self::rgb(255, 165, 0),
            "gray" | "grey" => Self::GRAY,
            _ => return None,
        };
        Some(c)
    }
}

impl FromStr for Rgba {
    type Err = RenderError;

    /// Accepts `#rgb`, `#rrggbb`, `rgb(r, g, b)`, `rgba(r, g, b, a)` and a few color names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_ascii_lowercase();
        let bad = || RenderError::InvalidColor(s.to_string());

        if let Some(hex) = text.strip_prefix('#') {
            if !hex.is_ascii() {
                return Err(bad());
            }
            let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map_err(|_| bad());
            let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
            return match hex.len() {
                3 => Ok(Self::rgb(digit(0)? * 17, digit(1)? * 17, digit(2)? * 17)),
                6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
                _ => Err(bad()),
            };
        }

        let args = text
            .strip_prefix("rgba(")
            .or_else(|| text.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'));
        if let Some(args) = args {
            let parts: Vec<&str> = args.split(',').map(str::trim).collect();
            let channel = |p: &&str| p.parse::<u8>().map_err(|_| bad());
            return match parts.as_slice() {
                [r, g, b] => Ok(Self::rgb(channel(r)?, channel(g)?, channel(b)?)),
                [r, g, b, a] => {
                    let alpha = a.parse::<f32>().map_err(|_| bad())?.clamp(0.0, 1.0);
                    Ok(Self { r: channel(r)?, g: channel(g)?, b: channel(b)?, a: (alpha * 255.0).round() as u8 })
                }
                _ => Err(bad()),
            };
        }

        Self::named(&text).ok_or_else(bad)
    }
}
