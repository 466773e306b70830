use anyhow::{Result, bail};
use dynamic_color::{Appearance, Argb, hue_distance, hue_tolerance, set_luminance};

use crate::output;

pub fn execute(color: Argb, tone: f64) -> Result<()> {
    if !tone.is_finite() {
        bail!("tone must be a finite number, got {tone}");
    }
    if !(0.0..=100.0).contains(&tone) {
        output::warn(format!("tone {tone} is outside 0..=100 and will be clamped"));
    }

    let source = Appearance::of(color);
    let result = set_luminance(color, tone);
    let measured = Appearance::of(result);
    output::measurement("Source", color, source);
    output::measurement("Result", result, measured);
    if result.red() == result.green() && result.green() == result.blue() {
        output::status("Hue", "result is achromatic");
    } else {
        output::status(
            "Hue",
            format!(
                "drift {:.2} of {:.2} degrees allowed",
                hue_distance(measured.hue, source.hue),
                hue_tolerance(measured.chroma)
            ),
        );
    }
    println!("{result}");
    Ok(())
}
