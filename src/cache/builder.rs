use crate::cache::params::ItemParams;
use crate::cache::snapshot::{GeometrySnapshot, Observed};
use crate::config::options::ParallaxConfig;
use crate::diagnostics::sink::{ConfigWarning, DiagnosticsSink};
use crate::dom::source::ElementSource;
use crate::foundation::error::PrllxResult;

/// Turns an element, its declared parameters and a baseline scroll position into a
/// [`GeometrySnapshot`].
pub struct CacheBuilder<'a> {
    config: &'a ParallaxConfig,
    diagnostics: &'a mut dyn DiagnosticsSink,
}

impl<'a> CacheBuilder<'a> {
    /// Create a builder reporting configuration warnings to `diagnostics`.
    pub fn new(config: &'a ParallaxConfig, diagnostics: &'a mut dyn DiagnosticsSink) -> Self {
        Self {
            config,
            diagnostics,
        }
    }

    /// Read `element`'s attributes and measure it.
    pub fn build<S: ElementSource + ?Sized>(
        &mut self,
        source: &S,
        element: &S::Handle,
        baseline: f64,
    ) -> PrllxResult<GeometrySnapshot<S::Handle>> {
        let params = ItemParams::read(source, element, &mut *self.diagnostics);
        self.build_with(source, element, &params, baseline)
    }

    /// Measure `element` using explicit parameters.
    pub fn build_with<S: ElementSource + ?Sized>(
        &mut self,
        source: &S,
        element: &S::Handle,
        params: &ItemParams,
        baseline: f64,
    ) -> PrllxResult<GeometrySnapshot<S::Handle>> {
        params.check(&mut *self.diagnostics);

        let own = source.bounding_rect(element)?;
        let bounding = if params.is_based_on_parent() {
            match source.parent_bounding_rect(element)? {
                Some(parent) => parent,
                None => {
                    self.diagnostics.warn(ConfigWarning::MissingParent);
                    own
                }
            }
        } else {
            own
        };

        let axis = self.config.axis();
        let viewport = self.config.viewport_size();
        let b = axis.bounds(bounding);

        let delta_start = params.delta_start.resolve(b.size, viewport);
        let delta_end = params.delta_end.resolve(b.size, viewport);

        let start_position = b.start + baseline + delta_start;
        let end_position = b.end + baseline + delta_end;
        let delta_translate = end_position - start_position;

        let observed = Observed {
            start_position,
            min: if params.is_based_on_scroll_start {
                start_position
            } else {
                viewport
            },
            max: -delta_translate,
            full_height: delta_translate + viewport,
        };

        let (delta_start, delta_end, delta_translation) = match params.parent_basis {
            Some(declared) => {
                let (start, translation) =
                    parent_deltas(axis.bounds(own).size, declared, params.invert);
                (start, start + translation, translation)
            }
            None => (delta_start, delta_end, delta_end - delta_start),
        };

        Ok(GeometrySnapshot {
            element: element.clone(),
            width: bounding.width(),
            height: bounding.height(),
            speed: params.speed,
            is_based_on_scroll_start: params.is_based_on_scroll_start,
            delta_start,
            delta_end,
            delta_translation,
            observed,
            visible: true,
        })
    }
}

/// Shrink model for parent-based items.
///
/// The percentage comes from the declared parent size but scales the element's own extent.
fn parent_deltas(element_size: f64, declared: f64, invert: bool) -> (f64, f64) {
    let shrink = ((declared - 100.0) / declared * 100.0).floor();
    let (start_pct, end_pct) = if invert { (0.0, -shrink) } else { (-shrink, 0.0) };
    let delta_start = element_size * start_pct / 100.0;
    let delta_translation = element_size * end_pct / 100.0 - delta_start;
    (delta_start, delta_translation)
}

#[cfg(test)]
#[path = "../../tests/unit/cache/builder.rs"]
mod tests;
