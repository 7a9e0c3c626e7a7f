//! Lenient resolution of command-line values into a render configuration.
//!
//! Malformed values never abort the program: each knob has a documented
//! default that is substituted with a warning on stderr, so a typo still
//! produces an image. Iteration counts above the library's cap are the one
//! exception — they pass through and surface as a render error.

use std::path::PathBuf;

use colornames::Color as NamedColor;
use dragoncurve::Color;

/// Iteration count used when none is given or the value is malformed.
pub const DEFAULT_ITERATIONS: u32 = 10;
/// Partial fraction used when the value is malformed.
pub const DEFAULT_PARTIAL: f64 = 1.0;

/// Parse a named or hex color (alpha digits are accepted and ignored; the
/// rendered output is always opaque).
///
/// Supports CSS color names via `colornames`, and short/long hex
/// (RGB/RRGGBB/RGBA/RRGGBBAA) with an optional leading `#` or `0x`.
pub fn parse_color(input: &str) -> Result<Color, String> {
    fn parse_hex(hex: &str) -> Option<Color> {
        use std::ops::Range;

        let raw = hex
            .strip_prefix("0x")
            .or_else(|| hex.strip_prefix("0X"))
            .unwrap_or_else(|| hex.trim_start_matches('#'));
        if raw.is_empty() || !raw.as_bytes().iter().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let from_pair =
            |range: Range<usize>| -> Option<u8> { u8::from_str_radix(&raw[range], 16).ok() };
        let from_nibble = |idx: usize| -> Option<u8> {
            u8::from_str_radix(&raw[idx..idx + 1], 16)
                .ok()
                .map(|v| v * 17)
        };

        match raw.len() {
            3 | 4 => Some(Color::rgb(from_nibble(0)?, from_nibble(1)?, from_nibble(2)?)),
            6 | 8 => Some(Color::rgb(
                from_pair(0..2)?,
                from_pair(2..4)?,
                from_pair(4..6)?,
            )),
            _ => None,
        }
    }

    let trimmed = input.trim();
    if let Some(color) = parse_hex(trimmed) {
        return Ok(color);
    }

    let color: NamedColor = trimmed.try_into().map_err(|_| {
        format!(
            "invalid color '{input}': use a named color or hex (RGB/RRGGBB with optional alpha, leading '#' or '0x' optional)"
        )
    })?;
    let (red, green, blue) = color.rgb();
    Ok(Color::rgb(red, green, blue))
}

/// Resolve a raw iteration count, warning and defaulting on malformed input.
pub fn resolve_iterations(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return DEFAULT_ITERATIONS;
    };
    match raw.trim().parse::<u32>() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("Invalid iteration count '{raw}', defaulting to {DEFAULT_ITERATIONS}.");
            DEFAULT_ITERATIONS
        }
    }
}

/// Resolve a raw partial fraction, clamping out-of-range values and
/// defaulting on malformed ones.
pub fn resolve_partial(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(p) if (0.0..=1.0).contains(&p) => p,
        Ok(p) if p.is_nan() => {
            eprintln!("Invalid partial fraction '{raw}', defaulting to {DEFAULT_PARTIAL}.");
            DEFAULT_PARTIAL
        }
        Ok(p) => {
            let clamped = p.clamp(0.0, 1.0);
            eprintln!("Partial fraction {p} outside [0, 1], clamping to {clamped}.");
            clamped
        }
        Err(_) => {
            eprintln!("Invalid partial fraction '{raw}', defaulting to {DEFAULT_PARTIAL}.");
            DEFAULT_PARTIAL
        }
    }
}

/// Resolve a raw color value, warning and falling back to `default` when it
/// does not parse. `role` names the knob in the warning.
pub fn resolve_color(raw: &str, role: &str, default: Color) -> Color {
    parse_color(raw).unwrap_or_else(|err| {
        eprintln!("{err}; using the default {role} color.");
        default
    })
}

/// Conventional output filename for an iteration count.
pub fn default_output(iterations: u32) -> PathBuf {
    PathBuf::from(format!("dragon{iterations}.png"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(parse_color("0xFF8000"), Ok(Color::rgb(0xff, 0x80, 0x00)));
        assert_eq!(parse_color("#ff8000"), Ok(Color::rgb(0xff, 0x80, 0x00)));
        assert_eq!(parse_color("ff8000"), Ok(Color::rgb(0xff, 0x80, 0x00)));
        assert_eq!(parse_color("#f80"), Ok(Color::rgb(0xff, 0x88, 0x00)));
        // Alpha digits are accepted but ignored.
        assert_eq!(parse_color("ff800080"), Ok(Color::rgb(0xff, 0x80, 0x00)));
    }

    #[test]
    fn parses_named_colors() {
        assert_eq!(parse_color("white"), Ok(Color::WHITE));
        assert_eq!(parse_color("black"), Ok(Color::BLACK));
    }

    #[test]
    fn rejects_garbage_colors() {
        assert!(parse_color("not-a-color").is_err());
        assert!(parse_color("0xGG0000").is_err());
        assert!(parse_color("#ff808").is_err());
    }

    #[test]
    fn iteration_defaults() {
        assert_eq!(resolve_iterations(None), DEFAULT_ITERATIONS);
        assert_eq!(resolve_iterations(Some("12")), 12);
        assert_eq!(resolve_iterations(Some(" 7 ")), 7);
        assert_eq!(resolve_iterations(Some("twelve")), DEFAULT_ITERATIONS);
        assert_eq!(resolve_iterations(Some("-3")), DEFAULT_ITERATIONS);
    }

    #[test]
    fn partial_defaults_and_clamping() {
        assert_eq!(resolve_partial("0.25"), 0.25);
        assert_eq!(resolve_partial("1.5"), 1.0);
        assert_eq!(resolve_partial("-0.5"), 0.0);
        assert_eq!(resolve_partial("lots"), DEFAULT_PARTIAL);
        assert_eq!(resolve_partial("NaN"), DEFAULT_PARTIAL);
    }

    #[test]
    fn color_fallback_keeps_default() {
        assert_eq!(
            resolve_color("no-such-color", "background", Color::BLACK),
            Color::BLACK
        );
        assert_eq!(
            resolve_color("0x102030", "background", Color::BLACK),
            Color::rgb(0x10, 0x20, 0x30)
        );
    }

    #[test]
    fn output_filename_convention() {
        assert_eq!(default_output(10), PathBuf::from("dragon10.png"));
        assert_eq!(default_output(0), PathBuf::from("dragon0.png"));
    }
}
