/// Thresholds that define when an element is in view and how far it travels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Observed {
    /// Leading edge in page space, deltas included.
    pub start_position: f64,
    /// Distance-from-viewport-start at which the ratio is `0`.
    pub min: f64,
    /// Distance-from-viewport-start at which the ratio is `1`.
    pub max: f64,
    /// Travel distance plus viewport size.
    pub full_height: f64,
}

/// Cached geometry of one tracked element for one cache generation.
///
/// Everything except the visibility flag is fixed until the next resize.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GeometrySnapshot<H> {
    /// The tracked element (non-owning handle).
    pub element: H,
    /// Measured box width.
    pub width: f64,
    /// Measured box height.
    pub height: f64,
    /// Speed multiplier.
    pub speed: f64,
    /// Motion also follows the absolute scroll position.
    pub is_based_on_scroll_start: bool,
    /// Resolved leading offset in pixels.
    pub delta_start: f64,
    /// Resolved trailing offset in pixels.
    pub delta_end: f64,
    /// Translation range, `delta_end - delta_start`.
    pub delta_translation: f64,
    /// Visibility thresholds.
    pub observed: Observed,
    pub(crate) visible: bool,
}

impl<H> GeometrySnapshot<H> {
    /// Last visibility state applied to the element.
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
