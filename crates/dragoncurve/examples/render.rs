//! Minimal render example: generate a small dragon curve and inspect it.

use std::error::Error;

use dragoncurve::{RenderConfig, TurnSequence, render};

fn main() -> Result<(), Box<dyn Error>> {
    let iterations = 8;

    let turns = TurnSequence::generate(iterations)?;
    println!("{iterations} folds produce {} turns", turns.len());

    let buffer = render(&RenderConfig {
        iterations,
        ..RenderConfig::default()
    })?;
    println!("rendered {}x{} pixels", buffer.width(), buffer.height());

    Ok(())
}
