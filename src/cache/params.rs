use crate::diagnostics::sink::{ConfigWarning, DiagnosticsSink};
use crate::dom::source::ElementSource;
use crate::foundation::math::{parse_float_prefix, parse_int_prefix};

/// Speed multiplier attribute.
pub const ATTR_SPEED: &str = "data-speed";
/// Leading-edge delta attribute.
pub const ATTR_DELTA_START: &str = "data-delta-start";
/// Trailing-edge delta attribute.
pub const ATTR_DELTA_END: &str = "data-delta-end";
/// Presence flag: motion also follows the absolute scroll position.
pub const ATTR_SCROLL_TOP: &str = "data-scroll-top";
/// Presence flag plus declared size percentage for the parent shrink model.
pub const ATTR_BASED_ON_PARENT: &str = "data-based-on-parent";
/// Presence flag: shrink applies to the trailing edge instead of the leading one.
pub const ATTR_INVERT: &str = "data-invert";

/// A declared edge offset, resolved to pixels at cache-build time.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub enum DeltaValue {
    /// Absolute pixels.
    Pixels(f64),
    /// Percentage of the element's extent along the scroll axis.
    ElementPercent(f64),
    /// Percentage of the viewport extent along the scroll axis.
    ViewportPercent(f64),
}

impl Default for DeltaValue {
    fn default() -> Self {
        Self::Pixels(0.0)
    }
}

impl DeltaValue {
    /// Parse an attribute value.
    ///
    /// Empty means zero pixels, a trailing `v` means viewport percent (`"50v"`), anything else
    /// reads its integer prefix as element percent (`"10%"`, `"10"`).
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return Some(Self::Pixels(0.0));
        }
        match raw.strip_suffix('v') {
            Some(num) => parse_float_prefix(num).map(Self::ViewportPercent),
            None => parse_int_prefix(raw).map(Self::ElementPercent),
        }
    }

    /// Resolve to pixels.
    pub fn resolve(self, element_size: f64, viewport_size: f64) -> f64 {
        match self {
            Self::Pixels(px) => px,
            Self::ElementPercent(pct) => element_size * pct / 100.0,
            Self::ViewportPercent(pct) => pct / 100.0 * viewport_size,
        }
    }

    /// Return `true` when the declared amount is zero, whatever its unit.
    pub fn is_zero(self) -> bool {
        match self {
            Self::Pixels(v) | Self::ElementPercent(v) | Self::ViewportPercent(v) => v == 0.0,
        }
    }
}

/// Per-item parameters declared on an element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ItemParams {
    /// Speed multiplier, `1` by default.
    pub speed: f64,
    /// Leading-edge offset.
    pub delta_start: DeltaValue,
    /// Trailing-edge offset.
    pub delta_end: DeltaValue,
    /// Motion is additionally offset by the absolute scroll position.
    pub is_based_on_scroll_start: bool,
    /// Declared size percentage when the item measures its parent instead of itself.
    pub parent_basis: Option<f64>,
    /// Apply the parent shrink to the trailing edge.
    pub invert: bool,
}

impl Default for ItemParams {
    fn default() -> Self {
        Self {
            speed: 1.0,
            delta_start: DeltaValue::default(),
            delta_end: DeltaValue::default(),
            is_based_on_scroll_start: false,
            parent_basis: None,
            invert: false,
        }
    }
}

impl ItemParams {
    /// Read the declared attributes of `element`.
    ///
    /// Values that do not parse are reported and replaced by their default.
    pub fn read<S: ElementSource + ?Sized>(
        source: &S,
        element: &S::Handle,
        diagnostics: &mut dyn DiagnosticsSink,
    ) -> Self {
        let mut params = Self::default();

        if let Some(raw) = source.attribute(element, ATTR_SPEED) {
            match parse_float_prefix(&raw) {
                Some(speed) => params.speed = speed,
                None => diagnostics.warn(invalid(ATTR_SPEED, raw)),
            }
        }

        for (name, slot) in [
            (ATTR_DELTA_START, &mut params.delta_start),
            (ATTR_DELTA_END, &mut params.delta_end),
        ] {
            if let Some(raw) = source.attribute(element, name) {
                match DeltaValue::parse(&raw) {
                    Some(v) => *slot = v,
                    None => diagnostics.warn(invalid(name, raw)),
                }
            }
        }

        params.is_based_on_scroll_start = source.has_attribute(element, ATTR_SCROLL_TOP);
        params.invert = source.has_attribute(element, ATTR_INVERT);

        if let Some(raw) = source.attribute(element, ATTR_BASED_ON_PARENT) {
            let size = raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|s| s.is_finite() && *s != 0.0);
            params.parent_basis = Some(size.unwrap_or_else(|| {
                diagnostics.warn(invalid(ATTR_BASED_ON_PARENT, raw));
                100.0
            }));
        }

        params
    }

    /// Return `true` when the item measures its parent.
    pub fn is_based_on_parent(&self) -> bool {
        self.parent_basis.is_some()
    }

    /// Report incompatible combinations. Every applicable warning is emitted.
    pub fn check(&self, diagnostics: &mut dyn DiagnosticsSink) {
        let custom_speed = self.speed != 1.0;
        if custom_speed && (!self.delta_start.is_zero() || !self.delta_end.is_zero()) {
            diagnostics.warn(ConfigWarning::SpeedWithDeltas { speed: self.speed });
        }
        if custom_speed && self.is_based_on_parent() {
            diagnostics.warn(ConfigWarning::SpeedWithParentBasis { speed: self.speed });
        }
    }
}

fn invalid(name: &str, value: String) -> ConfigWarning {
    ConfigWarning::InvalidAttribute {
        name: name.to_owned(),
        value,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cache/params.rs"]
mod tests;
