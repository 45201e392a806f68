//! ViewAdjustments value object - brightness/contrast/saturation/zoom
//!
//! Pure presentation state. Never persisted, never shared between views.

/// Lower bound for brightness, contrast and saturation (percent)
pub const TONE_MIN: u16 = 0;
/// Upper bound for brightness, contrast and saturation (percent)
pub const TONE_MAX: u16 = 200;
/// Lower bound for zoom (percent)
pub const ZOOM_MIN: u16 = 50;
/// Upper bound for zoom (percent)
pub const ZOOM_MAX: u16 = 200;
/// Neutral value for every control
pub const NEUTRAL: u16 = 100;

/// A single adjustable control
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Adjustment {
    Brightness,
    Contrast,
    Saturation,
    Zoom,
}

impl Adjustment {
    /// Parse a control name as typed by the user
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "brightness" | "b" => Some(Adjustment::Brightness),
            "contrast" | "c" => Some(Adjustment::Contrast),
            "saturation" | "saturate" | "s" => Some(Adjustment::Saturation),
            "zoom" | "scale" | "z" => Some(Adjustment::Zoom),
            _ => None,
        }
    }

    fn bounds(self) -> (u16, u16) {
        match self {
            Adjustment::Zoom => (ZOOM_MIN, ZOOM_MAX),
            _ => (TONE_MIN, TONE_MAX),
        }
    }
}

/// Image adjustment values, all in percent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewAdjustments {
    pub brightness: u16,
    pub contrast: u16,
    pub saturation: u16,
    pub zoom: u16,
}

impl Default for ViewAdjustments {
    fn default() -> Self {
        Self {
            brightness: NEUTRAL,
            contrast: NEUTRAL,
            saturation: NEUTRAL,
            zoom: NEUTRAL,
        }
    }
}

impl ViewAdjustments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a control, clamping to its range. Returns the stored value.
    pub fn set(&mut self, adjustment: Adjustment, value: u16) -> u16 {
        let (min, max) = adjustment.bounds();
        let value = value.clamp(min, max);
        match adjustment {
            Adjustment::Brightness => self.brightness = value,
            Adjustment::Contrast => self.contrast = value,
            Adjustment::Saturation => self.saturation = value,
            Adjustment::Zoom => self.zoom = value,
        }
        value
    }

    pub fn get(&self, adjustment: Adjustment) -> u16 {
        match adjustment {
            Adjustment::Brightness => self.brightness,
            Adjustment::Contrast => self.contrast,
            Adjustment::Saturation => self.saturation,
            Adjustment::Zoom => self.zoom,
        }
    }

    /// Back to neutral
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::default()
    }

    /// Zoom as a scale factor (1.0 = 100%)
    pub fn scale(&self) -> f32 {
        f32::from(self.zoom) / 100.0
    }

    /// CSS-style filter string for renderers that understand one
    pub fn css_filter(&self) -> String {
        format!(
            "brightness({}%) contrast({}%) saturate({}%)",
            self.brightness, self.contrast, self.saturation
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_neutral() {
        let adj = ViewAdjustments::new();
        assert!(adj.is_neutral());
        assert_eq!(adj.scale(), 1.0);
        assert_eq!(adj.css_filter(), "brightness(100%) contrast(100%) saturate(100%)");
    }

    #[test]
    fn test_set_clamps() {
        let mut adj = ViewAdjustments::new();

        assert_eq!(adj.set(Adjustment::Brightness, 500), TONE_MAX);
        assert_eq!(adj.set(Adjustment::Zoom, 10), ZOOM_MIN);
        assert_eq!(adj.set(Adjustment::Contrast, 0), 0);

        assert_eq!(adj.brightness, 200);
        assert_eq!(adj.zoom, 50);
        assert_eq!(adj.scale(), 0.5);
    }

    #[test]
    fn test_reset() {
        let mut adj = ViewAdjustments::new();
        adj.set(Adjustment::Saturation, 20);
        assert!(!adj.is_neutral());

        adj.reset();
        assert!(adj.is_neutral());
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Adjustment::from_name("Brightness"), Some(Adjustment::Brightness));
        assert_eq!(Adjustment::from_name("scale"), Some(Adjustment::Zoom));
        assert_eq!(Adjustment::from_name("hue"), None);
    }
}
