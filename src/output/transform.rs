use crate::foundation::core::{Affine, Axis, Vec2};
use crate::foundation::math::format_fixed;

/// Translation of one element along the scroll axis, as handed to a [`crate::Presenter`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Translation {
    /// Axis the value applies to.
    pub axis: Axis,
    /// Unrounded offset in pixels.
    pub value: f64,
    /// Decimal places used by [`Translation::to_css`].
    pub precision: usize,
}

impl Translation {
    /// Offset as a 2D vector.
    pub fn offset(self) -> Vec2 {
        self.axis.offset(self.value)
    }

    /// Offset as an affine transform.
    pub fn to_affine(self) -> Affine {
        Affine::translate(self.offset())
    }

    /// CSS `transform` value, e.g. `matrix(1,0,0,1, 0, -12.5000)`.
    pub fn to_css(self) -> String {
        let v = format_fixed(self.value, self.precision);
        match self.axis {
            Axis::Vertical => format!("matrix(1,0,0,1, 0, {v})"),
            Axis::Horizontal => format!("matrix(1,0,0,1, {v}, 0)"),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/output/transform.rs"]
mod tests;
