//! Rounded corner radii of the display.
//!
//! ## Usage
//!
//! Implement [`CornerSource`] over whatever reports the radii (or use a
//! closure), then call [`ScreenCorners::resolve`] with the running API level.
//! On Android, `android::screen_corners` reads them from the activity's
//! window insets.
#![deny(missing_docs, clippy::unwrap_used)]

#[cfg(target_os = "android")]
pub mod android;

use tracing::debug;

/// API level of Android 12, the first release that reports rounded corners.
pub const ROUNDED_CORNER_MIN_API: u32 = 31;

/// A corner of the display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CornerPosition {
    /// Top left corner.
    TopLeft,
    /// Top right corner.
    TopRight,
    /// Bottom right corner.
    BottomRight,
    /// Bottom left corner.
    BottomLeft,
}

impl CornerPosition {
    /// Every corner, clockwise from the top left.
    pub const ALL: [CornerPosition; 4] = [
        CornerPosition::TopLeft,
        CornerPosition::TopRight,
        CornerPosition::BottomRight,
        CornerPosition::BottomLeft,
    ];

    /// Value of the matching `RoundedCorner.POSITION_*` constant.
    pub const fn android_position(self) -> i32 {
        match self {
            CornerPosition::TopLeft => 0,
            CornerPosition::TopRight => 1,
            CornerPosition::BottomRight => 2,
            CornerPosition::BottomLeft => 3,
        }
    }
}

/// Reports the radius of a display corner in pixels.
pub trait CornerSource {
    /// Radius of the corner at `position`, or `None` when it is not reported.
    fn radius(&self, position: CornerPosition) -> Option<f64>;
}

impl<F> CornerSource for F
where
    F: Fn(CornerPosition) -> Option<f64>,
{
    fn radius(&self, position: CornerPosition) -> Option<f64> {
        self(position)
    }
}

/// Corner radii of the display, in pixels. Absent corners are square or not
/// reported by the platform.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenCorners {
    /// Top left radius.
    pub top_left: Option<f64>,
    /// Top right radius.
    pub top_right: Option<f64>,
    /// Bottom left radius.
    pub bottom_left: Option<f64>,
    /// Bottom right radius.
    pub bottom_right: Option<f64>,
}

impl ScreenCorners {
    /// Whether `api_level` reports rounded corners at all.
    pub fn is_supported(api_level: u32) -> bool {
        api_level >= ROUNDED_CORNER_MIN_API
    }

    /// Reads every corner from `source`. Below Android 12 the source is not
    /// consulted and every corner is absent.
    pub fn resolve<S: CornerSource + ?Sized>(api_level: u32, source: &S) -> Self {
        if !Self::is_supported(api_level) {
            return Self::default();
        }
        let mut corners = Self::default();
        for position in CornerPosition::ALL {
            *corners.slot(position) = source.radius(position);
        }
        debug!(api_level, ?corners, "resolved screen corners");
        corners
    }

    /// Radius of the corner at `position`.
    pub fn get(&self, position: CornerPosition) -> Option<f64> {
        match position {
            CornerPosition::TopLeft => self.top_left,
            CornerPosition::TopRight => self.top_right,
            CornerPosition::BottomRight => self.bottom_right,
            CornerPosition::BottomLeft => self.bottom_left,
        }
    }

    fn slot(&mut self, position: CornerPosition) -> &mut Option<f64> {
        match position {
            CornerPosition::TopLeft => &mut self.top_left,
            CornerPosition::TopRight => &mut self.top_right,
            CornerPosition::BottomRight => &mut self.bottom_right,
            CornerPosition::BottomLeft => &mut self.bottom_left,
        }
    }

    /// Whether no corner is reported.
    pub fn is_empty(&self) -> bool {
        CornerPosition::ALL
            .iter()
            .all(|&position| self.get(position).is_none())
    }
}
