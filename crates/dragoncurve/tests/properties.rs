//! Property-based tests for walks, blending, and partial rendering.
//!
//! The walker must be deterministic, bounds must always contain the origin,
//! blending must satisfy its endpoint identities, and lowering the partial
//! fraction may only remove painted cells, never add or recolor them.

#![allow(missing_docs, clippy::tests_outside_test_module)]

use dragoncurve::{
    Bounds, Color, PathStep, PathWalker, RenderConfig, StepSize, TurnSequence, render,
};
use proptest::prelude::*;

/// Collect the painted (non-background) cells of a render.
fn painted(config: &RenderConfig) -> Vec<(u32, u32)> {
    let buffer = render(config).expect("iteration count within limits");
    let mut cells = Vec::new();
    for y in 0..buffer.height() {
        for x in 0..buffer.width() {
            if buffer.get(x, y) != config.background {
                cells.push((x, y));
            }
        }
    }
    cells
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Two walks over the same sequence and stride yield identical streams.
    #[test]
    fn walker_is_deterministic(n in 0u32..10, dense in any::<bool>()) {
        let seq = TurnSequence::generate(n).expect("within limits");
        let stride = StepSize::for_dense(dense);
        let first: Vec<PathStep> = PathWalker::new(&seq, stride).collect();
        let second: Vec<PathStep> = PathWalker::new(&seq, stride).collect();
        prop_assert_eq!(first, second);
    }

    /// The bounding box always contains the origin on both axes.
    #[test]
    fn bounds_contain_origin(n in 0u32..12, dense in any::<bool>()) {
        let seq = TurnSequence::generate(n).expect("within limits");
        let bounds = Bounds::of_walk(PathWalker::new(&seq, StepSize::for_dense(dense)));
        prop_assert!(bounds.min_x <= 0 && bounds.max_x >= 0);
        prop_assert!(bounds.min_y <= 0 && bounds.max_y >= 0);
    }

    /// Blending a color with itself is the identity for any progress.
    #[test]
    fn blend_self_identity(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), k in 0.0f64..=1.0) {
        let c = Color::rgb(r, g, b);
        prop_assert_eq!(c.blend(c, k), c);
    }

    /// Blending hits its endpoints exactly at progress 0 and 1.
    #[test]
    fn blend_endpoints(
        ar in any::<u8>(), ag in any::<u8>(), ab in any::<u8>(),
        br in any::<u8>(), bg in any::<u8>(), bb in any::<u8>(),
    ) {
        let a = Color::rgb(ar, ag, ab);
        let b = Color::rgb(br, bg, bb);
        prop_assert_eq!(a.blend(b, 0.0), a);
        prop_assert_eq!(a.blend(b, 1.0), b);
    }

    /// Every channel of a blend lies between the corresponding endpoints.
    #[test]
    fn blend_stays_in_channel_range(
        ar in any::<u8>(), ag in any::<u8>(), ab in any::<u8>(),
        br in any::<u8>(), bg in any::<u8>(), bb in any::<u8>(),
        k in 0.0f64..=1.0,
    ) {
        let a = Color::rgb(ar, ag, ab);
        let b = Color::rgb(br, bg, bb);
        let mix = a.blend(b, k);
        for (lo, hi, got) in [
            (a.red().min(b.red()), a.red().max(b.red()), mix.red()),
            (a.green().min(b.green()), a.green().max(b.green()), mix.green()),
            (a.blue().min(b.blue()), a.blue().max(b.blue()), mix.blue()),
        ] {
            prop_assert!(got >= lo && got <= hi, "channel {got} outside [{lo}, {hi}]");
        }
    }

    /// Cells painted at a lower partial fraction stay painted at a higher one.
    #[test]
    fn partial_rendering_is_monotone(
        n in 1u32..7,
        dense in any::<bool>(),
        p1 in 0.0f64..=1.0,
        p2 in 0.0f64..=1.0,
    ) {
        let (lo, hi) = if p1 <= p2 { (p1, p2) } else { (p2, p1) };
        let base = RenderConfig {
            iterations: n,
            dense,
            blend_start: Color::rgb(0xff, 0x00, 0x00),
            blend_end: Color::rgb(0x00, 0x00, 0xff),
            background: Color::BLACK,
            partial: lo,
        };
        let few = painted(&base);
        let many = painted(&RenderConfig { partial: hi, ..base });
        for cell in &few {
            prop_assert!(many.contains(cell), "cell {cell:?} lost at fraction {hi}");
        }
    }
}
