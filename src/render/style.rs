use crate::error::{RenderError, Result};

/// Stroke parameters used when drawing cell outlines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    stroke_width: f64,
    color: [u8; 4],
    anti_alias: bool,
}

impl Default for RenderStyle {
    /// Opaque black, one pixel wide, anti-aliased.
    fn default() -> Self {
        Self {
            stroke_width: 1.0,
            color: [0, 0, 0, 255],
            anti_alias: true,
        }
    }
}

impl RenderStyle {
    /// Returns a copy with a different stroke width.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::InvalidStyle` if `width` is not finite and positive.
    pub fn with_stroke_width(mut self, width: f64) -> Result<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(RenderError::InvalidStyle(format!(
                "stroke width must be positive, got {width}"
            ))
            .into());
        }
        self.stroke_width = width;
        Ok(self)
    }

    /// Returns a copy drawing in the given straight-alpha RGBA colour.
    #[must_use]
    pub fn with_color(mut self, rgba: [u8; 4]) -> Self {
        self.color = rgba;
        self
    }

    #[must_use]
    pub fn with_anti_alias(mut self, anti_alias: bool) -> Self {
        self.anti_alias = anti_alias;
        self
    }

    #[must_use]
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    #[must_use]
    pub fn color(&self) -> [u8; 4] {
        self.color
    }

    #[must_use]
    pub fn anti_alias(&self) -> bool {
        self.anti_alias
    }
}
