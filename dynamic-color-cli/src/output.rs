use console::style;
use dynamic_color::{Appearance, Argb};

const LABEL_WIDTH: usize = 9;

/// Diagnostic line on stderr. Stdout only carries a command's result, so it
/// can be piped.
pub fn status(label: &str, message: impl AsRef<str>) {
    eprintln!(
        "{:>LABEL_WIDTH$} {}",
        style(label).cyan().bold(),
        message.as_ref()
    );
}

pub fn warn(message: impl AsRef<str>) {
    eprintln!(
        "{:>LABEL_WIDTH$} {}",
        style("warning").yellow().bold(),
        message.as_ref()
    );
}

/// A color with its measured hue, chroma and tone.
pub fn measurement(label: &str, color: Argb, appearance: Appearance) {
    let (color, detail) = describe(color, appearance);
    status(label, format!("{color} {}", style(detail).dim()));
}

fn describe(color: Argb, appearance: Appearance) -> (String, String) {
    (
        color.to_string(),
        format!(
            "hue {:.1} chroma {:.1} tone {:.1}",
            appearance.hue, appearance.chroma, appearance.tone
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_measurements() {
        let appearance = Appearance {
            hue: 282.16,
            chroma: 48.0,
            tone: 40.04,
        };
        assert_eq!(
            describe(Argb::new(0xFF67_50A4), appearance),
            (
                "#FF6750A4".to_owned(),
                "hue 282.2 chroma 48.0 tone 40.0".to_owned()
            )
        );
    }
}
