use std::cell::RefCell;
use std::rc::Rc;

/// Non-fatal configuration problem found while building a cache.
///
/// Computation always continues; the composed behavior stays well defined.
#[derive(thiserror::Error, Clone, Debug, PartialEq, serde::Serialize)]
pub enum ConfigWarning {
    /// A non-default speed combined with non-zero deltas.
    #[error("Setting speed ({speed}) and deltaStart or deltaEnd can provide an unwanted effect")]
    SpeedWithDeltas {
        /// Declared speed.
        speed: f64,
    },

    /// A parent-based item with a non-default speed.
    #[error("If item is based on parent, speed ({speed}) should not be set")]
    SpeedWithParentBasis {
        /// Declared speed.
        speed: f64,
    },

    /// An attribute value that does not parse; its default is used instead.
    #[error("attribute '{name}' has invalid value '{value}', using default")]
    InvalidAttribute {
        /// Attribute name.
        name: String,
        /// Raw attribute value.
        value: String,
    },

    /// A parent-based item without a parent element; its own box is measured.
    #[error("item is based on parent but has no parent element, measuring the item itself")]
    MissingParent,
}

/// Destination for [`ConfigWarning`]s.
pub trait DiagnosticsSink {
    /// Record one warning.
    fn warn(&mut self, warning: ConfigWarning);
}

/// Default sink: forwards warnings to `tracing` at WARN level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;

impl DiagnosticsSink for TracingDiagnostics {
    fn warn(&mut self, warning: ConfigWarning) {
        tracing::warn!("Parallax - {warning}");
    }
}

/// Sink that keeps every warning in a shared buffer.
///
/// Clones share the buffer, so a caller can keep one handle and give the other to a rule.
#[derive(Clone, Debug, Default)]
pub struct CollectingDiagnostics {
    buf: Rc<RefCell<Vec<ConfigWarning>>>,
}

impl CollectingDiagnostics {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the warnings recorded so far.
    pub fn warnings(&self) -> Vec<ConfigWarning> {
        self.buf.borrow().clone()
    }

    /// Number of warnings recorded so far.
    pub fn len(&self) -> usize {
        self.buf.borrow().len()
    }

    /// Return `true` when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.buf.borrow().is_empty()
    }

    /// Drop all recorded warnings.
    pub fn clear(&self) {
        self.buf.borrow_mut().clear();
    }
}

impl DiagnosticsSink for CollectingDiagnostics {
    fn warn(&mut self, warning: ConfigWarning) {
        self.buf.borrow_mut().push(warning);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/diagnostics/sink.rs"]
mod tests;
