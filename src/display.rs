use druid::{Point, Rect, Size};
use xcap::Monitor;

use crate::error::{Error, Result};

/// Geometry of the display the overlay covers, in logical points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimaryDisplay {
    pub frame: Rect,
}

impl PrimaryDisplay {
    /// Finds the primary monitor, or the first one if none is flagged.
    pub fn detect() -> Result<Self> {
        let monitors = Monitor::all()?;
        log::debug!("Found {} monitor(s)", monitors.len());

        let flags: Vec<bool> = monitors
            .iter()
            .map(|m| m.is_primary().unwrap_or(false))
            .collect();
        let mon = &monitors[pick_primary(&flags)?];

        let frame = logical_frame(
            mon.x()?,
            mon.y()?,
            mon.width()?,
            mon.height()?,
            mon.scale_factor()?,
            cfg!(target_os = "macos"),
        );
        log::debug!("Using display frame: {frame:?}");
        Ok(PrimaryDisplay { frame })
    }

    pub fn origin(&self) -> Point {
        self.frame.origin()
    }

    pub fn size(&self) -> Size {
        self.frame.size()
    }
}

/// Index of the flagged primary monitor, else the first one.
fn pick_primary(primary_flags: &[bool]) -> Result<usize> {
    match primary_flags.iter().position(|&p| p) {
        Some(i) => Ok(i),
        None if !primary_flags.is_empty() => Ok(0),
        None => Err(Error::NoPrimaryDisplay),
    }
}

/// Windows are placed in logical points. xcap reports physical pixels everywhere except macOS,
/// where monitor bounds are already in points.
fn logical_frame(
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    scale: f32,
    already_points: bool,
) -> Rect {
    let scale = if !already_points && scale.is_finite() && scale > 0.0 {
        scale as f64
    } else {
        1.0
    };
    Rect::from_origin_size(
        (x as f64 / scale, y as f64 / scale),
        (width as f64 / scale, height as f64 / scale),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flagged_primary_wins() {
        assert_eq!(pick_primary(&[false, true, false]).unwrap(), 1);
    }

    #[test]
    fn falls_back_to_first_monitor() {
        assert_eq!(pick_primary(&[false, false]).unwrap(), 0);
    }

    #[test]
    fn no_monitors_means_no_display() {
        let err = pick_primary(&[]).unwrap_err();
        assert!(matches!(err, Error::NoPrimaryDisplay));
        assert_eq!(err.to_string(), "Unable to get main screen");
    }

    #[test]
    fn physical_pixels_scale_down() {
        let r = logical_frame(0, 0, 2880, 1800, 2.0, false);
        assert_eq!(r, Rect::new(0.0, 0.0, 1440.0, 900.0));
        let r = logical_frame(-1920, 0, 1920, 1080, 1.0, false);
        assert_eq!(r.origin(), Point::new(-1920.0, 0.0));
    }

    #[test]
    fn bogus_scale_is_treated_as_one() {
        assert_eq!(logical_frame(0, 0, 800, 600, 0.0, false).size(), Size::new(800.0, 600.0));
    }

    #[test]
    fn point_geometry_is_not_rescaled() {
        // a 2x display whose bounds already come in points
        let r = logical_frame(1440, 0, 1440, 900, 2.0, true);
        assert_eq!(r, Rect::new(1440.0, 0.0, 2880.0, 900.0));
    }
}
