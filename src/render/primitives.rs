use serde::{Deserialize, Serialize};

use crate::error::{CarouselError, CarouselResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> CarouselResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(CarouselError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Draw command for one pagination dot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DotPrimitive {
    pub page: usize,
    pub active: bool,
    pub diameter_px: f64,
    pub margin_px: f64,
    pub color: Color,
}

impl DotPrimitive {
    pub fn validate(self) -> CarouselResult<()> {
        if !self.diameter_px.is_finite() || self.diameter_px <= 0.0 {
            return Err(CarouselError::InvalidData(
                "dot diameter must be finite and > 0".to_owned(),
            ));
        }
        if !self.margin_px.is_finite() || self.margin_px < 0.0 {
            return Err(CarouselError::InvalidData(
                "dot margin must be finite and >= 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub font_size_px: f64,
    pub color: Color,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(text: impl Into<String>, font_size_px: f64, color: Color) -> Self {
        Self {
            text: text.into(),
            font_size_px,
            color,
        }
    }

    pub fn validate(&self) -> CarouselResult<()> {
        if self.text.is_empty() {
            return Err(CarouselError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(CarouselError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
