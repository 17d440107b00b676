pub use kurbo::{Affine, Rect, Vec2};

/// Scroll axis a parallax container operates on.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Page scrolls top to bottom; elements translate along `y`.
    #[default]
    Vertical,
    /// Page scrolls left to right; elements translate along `x`.
    Horizontal,
}

impl Axis {
    /// Return `true` for [`Axis::Horizontal`].
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Horizontal)
    }

    /// Project a bounding box onto this axis.
    ///
    /// Vertical reads `top/bottom/height`, horizontal reads `left/right/width`.
    pub fn bounds(self, rect: Rect) -> AxisBounds {
        match self {
            Self::Vertical => AxisBounds {
                start: rect.y0,
                end: rect.y1,
                size: rect.height(),
            },
            Self::Horizontal => AxisBounds {
                start: rect.x0,
                end: rect.x1,
                size: rect.width(),
            },
        }
    }

    /// Pick the viewport dimension that matters for this axis.
    pub fn pick(self, width: f64, height: f64) -> f64 {
        match self {
            Self::Vertical => height,
            Self::Horizontal => width,
        }
    }

    /// Offset vector of length `value` along this axis.
    pub fn offset(self, value: f64) -> Vec2 {
        match self {
            Self::Vertical => Vec2::new(0.0, value),
            Self::Horizontal => Vec2::new(value, 0.0),
        }
    }
}

/// A bounding box projected onto one [`Axis`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AxisBounds {
    /// Leading edge (`top` or `left`).
    pub start: f64,
    /// Trailing edge (`bottom` or `right`).
    pub end: f64,
    /// Extent along the axis (`height` or `width`).
    pub size: f64,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
