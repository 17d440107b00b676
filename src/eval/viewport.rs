use crate::cache::snapshot::GeometrySnapshot;

/// Per-frame result for one snapshot.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ViewportSample {
    /// Progress through the visibility window; `[0, 1]` while in view.
    ///
    /// Infinite or NaN for a zero-length window.
    pub ratio: f64,
    /// `0 <= ratio <= 1`, both ends inclusive.
    pub visible: bool,
    /// Translation to apply, unrounded.
    pub value: f64,
}

/// Stateless evaluator from cached geometry and scroll position to a [`ViewportSample`].
pub struct ViewportEvaluator;

impl ViewportEvaluator {
    /// Evaluate one snapshot at `current` scroll position.
    pub fn evaluate<H>(snapshot: &GeometrySnapshot<H>, current: f64) -> ViewportSample {
        let speed = snapshot.speed;
        let observed = &snapshot.observed;

        let distance_from_start = observed.start_position - current;
        let ratio =
            (distance_from_start - observed.min) / (observed.max - observed.min) * speed;

        let base = snapshot.delta_start + snapshot.delta_translation * ratio;
        let value = if snapshot.is_based_on_scroll_start {
            base + current * (1.0 - speed)
        } else {
            base + (-observed.full_height + observed.full_height / speed) * ratio
        };

        ViewportSample {
            ratio,
            visible: is_in_view(ratio),
            value,
        }
    }
}

/// Visibility predicate. NaN and infinities are never in view.
pub fn is_in_view(ratio: f64) -> bool {
    (0.0..=1.0).contains(&ratio)
}

#[cfg(test)]
#[path = "../../tests/unit/eval/viewport.rs"]
mod tests;
