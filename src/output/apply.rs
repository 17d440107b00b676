use crate::cache::snapshot::GeometrySnapshot;
use crate::config::options::ParallaxConfig;
use crate::dom::source::Presenter;
use crate::eval::viewport::ViewportSample;
use crate::foundation::core::Axis;
use crate::output::transform::Translation;

/// What the output stage did to an element's hidden marker on one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisibilityChange {
    /// Marker untouched.
    Unchanged,
    /// Element entered its window; marker removed.
    Shown,
    /// Element left its window; marker added.
    Hidden,
}

/// Apply one frame's result to an element.
///
/// Visible frames always write the transform. The hidden marker is edge-triggered: it is only
/// added or removed when the visibility flag flips.
pub fn apply_frame<H, P: Presenter<H> + ?Sized>(
    presenter: &mut P,
    config: &ParallaxConfig,
    snapshot: &mut GeometrySnapshot<H>,
    sample: &ViewportSample,
) -> VisibilityChange {
    if sample.visible {
        let t = translation(config.axis(), config.precision(), sample.value);
        presenter.set_transform(&snapshot.element, &t);
        if snapshot.visible {
            return VisibilityChange::Unchanged;
        }
        presenter.remove_class(&snapshot.element, config.hidden_class());
        snapshot.visible = true;
        VisibilityChange::Shown
    } else {
        if !snapshot.visible {
            return VisibilityChange::Unchanged;
        }
        presenter.add_class(&snapshot.element, config.hidden_class());
        snapshot.visible = false;
        VisibilityChange::Hidden
    }
}

/// Undo every presentation change made for `snapshot`.
pub fn revert<H, P: Presenter<H> + ?Sized>(
    presenter: &mut P,
    config: &ParallaxConfig,
    snapshot: &GeometrySnapshot<H>,
) {
    presenter.clear_transform(&snapshot.element);
    presenter.remove_class(&snapshot.element, config.hidden_class());
}

fn translation(axis: Axis, precision: usize, value: f64) -> Translation {
    Translation {
        axis,
        value,
        precision,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/output/apply.rs"]
mod tests;
