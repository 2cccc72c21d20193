//! # Color Helpers
//!
//! Hex conversion for theme files and gradient sampling for meters and
//! graphs. Interpolation happens in linear RGB through the `palette` crate so
//! mid-points do not come out muddy.

use palette::{LinSrgb, Mix, Srgb};
use ratatui::style::Color;

/// Parse `#rrggbb` (leading `#` optional) into an RGB color.
pub fn parse_hex(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Format a color as `#rrggbb`. Only RGB colors have a hex form.
pub fn to_hex(color: Color) -> Option<String> {
    match color {
        Color::Rgb(r, g, b) => Some(format!("#{r:02x}{g:02x}{b:02x}")),
        _ => None,
    }
}

/// Mix two RGB colors; `factor` 0.0 gives `from`, 1.0 gives `to`.
pub fn mix_rgb(from: (u8, u8, u8), to: (u8, u8, u8), factor: f32) -> (u8, u8, u8) {
    let from: LinSrgb = Srgb::new(from.0, from.1, from.2).into_linear();
    let to: LinSrgb = Srgb::new(to.0, to.1, to.2).into_linear();
    let mixed = from.mix(to, factor.clamp(0.0, 1.0));
    let out: Srgb<u8> = Srgb::from_linear(mixed);
    (out.red, out.green, out.blue)
}

/// Sample a multi-stop gradient at `position` (clamped to 0.0..=1.0).
///
/// Neighbouring RGB stops are interpolated; any other pair falls back to the
/// nearer stop. An empty gradient yields [`Color::Reset`].
pub fn gradient_at(stops: &[Color], position: f64) -> Color {
    let (first, last) = match (stops.first(), stops.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Color::Reset,
    };
    if stops.len() == 1 || position <= 0.0 {
        return first;
    }
    if position >= 1.0 {
        return last;
    }

    let scaled = position * (stops.len() - 1) as f64;
    let segment = (scaled.floor() as usize).min(stops.len() - 2);
    let local = (scaled - segment as f64) as f32;
    if local <= 0.0 {
        return stops[segment];
    }

    match (stops[segment], stops[segment + 1]) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let (r, g, b) = mix_rgb((r1, g1, b1), (r2, g2, b2), local);
            Color::Rgb(r, g, b)
        }
        (from, to) => {
            if local < 0.5 {
                from
            } else {
                to
            }
        }
    }
}
