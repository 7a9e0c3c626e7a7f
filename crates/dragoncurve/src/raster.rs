//! Two-pass rasterization of the dragon curve into a pixel buffer.
//!
//! Pass 1 walks the turn sequence to find its extent; only then is the buffer
//! allocated, filled with the background color, and painted by an identical
//! second walk. The two passes share [`PathWalker`], so the painted path is
//! guaranteed to fall inside the computed bounds.

use crate::{
    color::Color,
    error,
    extent::Bounds,
    turns::TurnSequence,
    walk::{PathWalker, Pos, StepSize},
};

/// Everything a single render needs. Immutable for its duration; rendering is
/// a pure function of this value.
#[derive(Clone, Copy, Debug)]
pub struct RenderConfig {
    /// Number of curve folds. The turn sequence has `2^iterations - 1` turns.
    pub iterations: u32,
    /// Dense mode: single-cell strides instead of the classic double stride.
    pub dense: bool,
    /// Path color at the start of the walk.
    pub blend_start: Color,
    /// Path color at the end of the walk.
    pub blend_end: Color,
    /// Background fill, independent of the blend pair.
    pub background: Color,
    /// Fraction of the path to paint, in `[0, 1]`. The remainder stays
    /// background.
    pub partial: f64,
}

impl Default for RenderConfig {
    /// The classic rendering: 10 folds, double stride, white path on black.
    fn default() -> Self {
        Self {
            iterations: 10,
            dense: false,
            blend_start: Color::WHITE,
            blend_end: Color::WHITE,
            background: Color::BLACK,
            partial: 1.0,
        }
    }
}

/// A row-major RGBA pixel buffer.
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// Row-major pixels, top to bottom.
    pixels: Vec<Color>,
}

impl PixelBuffer {
    /// A buffer of the given dimensions filled with one color.
    fn filled(width: u32, height: u32, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The pixel at `(x, y)`. Coordinates must be in bounds.
    pub fn get(&self, x: u32, y: u32) -> Color {
        debug_assert!(x < self.width && y < self.height, "read out of bounds");
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Write the pixel at `pos`.
    ///
    /// Precondition: `pos` lies inside the buffer. The rasterizer guarantees
    /// this by construction — every painted cell is translated into buffer
    /// range by the bounding-box offset.
    fn set(&mut self, pos: Pos, color: Color) {
        debug_assert!(
            pos.x >= 0 && pos.y >= 0 && pos.x < i64::from(self.width) && pos.y < i64::from(self.height),
            "write out of bounds: {pos:?}"
        );
        self.pixels[pos.y as usize * self.width as usize + pos.x as usize] = color;
    }

    /// Consume the buffer into a flat little-endian RGBA byte stream,
    /// row-major, top to bottom. Alpha is 0xff throughout.
    pub fn into_rgba_bytes(self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for pixel in self.pixels {
            bytes.extend_from_slice(&pixel.to_rgba_bytes());
        }
        bytes
    }
}

/// Translate a walk position into buffer coordinates.
fn translated(pos: Pos, offset: Pos) -> Pos {
    Pos {
        x: pos.x + offset.x,
        y: pos.y + offset.y,
    }
}

/// Render the curve described by `config` into an owned pixel buffer.
///
/// Fails only when the iteration count exceeds
/// [`MAX_ITERATIONS`](crate::error::MAX_ITERATIONS); everything else is total
/// for a validated configuration.
pub fn render(config: &RenderConfig) -> error::Result<PixelBuffer> {
    let turns = TurnSequence::generate(config.iterations)?;
    let stride = StepSize::for_dense(config.dense);

    let bounds = Bounds::of_walk(PathWalker::new(&turns, stride));

    // Bounds are already in buffer cells; +3 leaves a one-cell border on each
    // edge plus the gap of the final double stride.
    let width = (bounds.span_x() + 3) as u32;
    let height = (bounds.span_y() + 3) as u32;
    let mut buffer = PixelBuffer::filled(width, height, config.background);

    let offset = Pos {
        x: -bounds.min_x + 1,
        y: -bounds.min_y + 1,
    };

    let max_turns = turns.len();
    let cutoff = (max_turns as f64 * config.partial.clamp(0.0, 1.0)).floor() as usize;

    for step in PathWalker::new(&turns, stride) {
        if step.index > cutoff {
            break;
        }
        let progress = if max_turns == 0 {
            0.0
        } else {
            step.index as f64 / max_turns as f64
        };
        let color = config.blend_start.blend(config.blend_end, progress);

        buffer.set(translated(step.from, offset), color);
        if let Some(mid) = step.midpoint {
            buffer.set(translated(mid, offset), color);
        }
        // The final landing has no following step to paint it.
        if step.index == max_turns {
            buffer.set(translated(step.to, offset), color);
        }
    }

    Ok(buffer)
}
