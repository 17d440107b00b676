use crate::cache::builder::CacheBuilder;
use crate::cache::snapshot::GeometrySnapshot;
use crate::config::options::{ParallaxConfig, RuleOptions};
use crate::diagnostics::sink::{DiagnosticsSink, TracingDiagnostics};
use crate::dom::source::Document;
use crate::eval::viewport::{ViewportEvaluator, ViewportSample};
use crate::foundation::error::{PrllxError, PrllxResult};
use crate::output::apply::{apply_frame, revert};
use crate::rule::contract::Rule;
use std::rc::Rc;

/// Lifecycle position of a [`BasicRule`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleState {
    /// Constructed, no configuration yet.
    Uninitialized,
    /// Configured, no elements resolved yet.
    Ready,
    /// Elements resolved, no cache.
    ElementsGrabbed,
    /// Cache generation built, not rendered yet.
    CacheBuilt,
    /// At least one frame rendered from the current cache.
    Rendering,
    /// Cache dropped and presentation reverted.
    CacheReset,
    /// Released; every further call fails.
    Destroyed,
}

/// Rule engine for one selector group: caches element geometry per resize and translates
/// elements along the scroll axis every frame.
pub struct BasicRule<H> {
    opts: RuleOptions,
    config: Option<Rc<ParallaxConfig>>,
    elements: Vec<H>,
    cache: Vec<GeometrySnapshot<H>>,
    state: RuleState,
    diagnostics: Box<dyn DiagnosticsSink>,
}

impl<H> Default for BasicRule<H> {
    fn default() -> Self {
        Self::new(RuleOptions::default())
    }
}

impl<H> BasicRule<H> {
    /// Create a rule; warnings go to [`TracingDiagnostics`].
    pub fn new(opts: RuleOptions) -> Self {
        Self {
            opts,
            config: None,
            elements: Vec::new(),
            cache: Vec::new(),
            state: RuleState::Uninitialized,
            diagnostics: Box::new(TracingDiagnostics),
        }
    }

    /// Create a rule tracking elements matching `query`.
    pub fn with_query(query: impl Into<String>) -> Self {
        Self::new(RuleOptions {
            query: query.into(),
        })
    }

    /// Route configuration warnings to `sink`.
    pub fn with_diagnostics(mut self, sink: impl DiagnosticsSink + 'static) -> Self {
        self.diagnostics = Box::new(sink);
        self
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RuleState {
        self.state
    }

    /// Selector this rule resolves.
    pub fn query(&self) -> &str {
        &self.opts.query
    }

    /// Configuration received in the last `init`, if any.
    pub fn config(&self) -> Option<&ParallaxConfig> {
        self.config.as_deref()
    }

    /// Elements resolved by the last `grab_elements`, in document order.
    pub fn elements(&self) -> &[H] {
        &self.elements
    }

    /// Snapshots of the live cache generation, in insertion order.
    pub fn snapshots(&self) -> &[GeometrySnapshot<H>] {
        &self.cache
    }

    /// Evaluate every snapshot at `current` without presenting anything.
    pub fn samples(&self, current: f64) -> Vec<ViewportSample> {
        self.cache
            .iter()
            .map(|s| ViewportEvaluator::evaluate(s, current))
            .collect()
    }

    /// Receive the shared configuration. Fails while a cache generation is alive.
    pub fn init(&mut self, config: Rc<ParallaxConfig>) -> PrllxResult<()> {
        if self.state == RuleState::Destroyed {
            return Err(PrllxError::lifecycle("init called on a destroyed rule"));
        }
        if !self.cache.is_empty() {
            return Err(PrllxError::lifecycle(
                "configuration replaced while a cache generation is alive; reset first",
            ));
        }
        self.config = Some(config);
        if self.state == RuleState::Uninitialized {
            self.state = RuleState::Ready;
        }
        Ok(())
    }

    fn live_config(&self, op: &str) -> PrllxResult<Rc<ParallaxConfig>> {
        if self.state == RuleState::Destroyed {
            return Err(PrllxError::lifecycle(format!(
                "{op} called on a destroyed rule"
            )));
        }
        self.config
            .clone()
            .ok_or_else(|| PrllxError::lifecycle(format!("{op} called before init")))
    }
}

impl<D: Document> Rule<D> for BasicRule<D::Handle> {
    fn init(&mut self, config: Rc<ParallaxConfig>) -> PrllxResult<()> {
        BasicRule::init(self, config)
    }

    fn grab_elements(&mut self, document: &D) -> PrllxResult<()> {
        self.live_config("grab_elements")?;
        self.elements = document.query_all(&self.opts.query)?;
        tracing::debug!(
            query = %self.opts.query,
            count = self.elements.len(),
            "grabbed elements"
        );
        self.state = RuleState::ElementsGrabbed;
        Ok(())
    }

    #[tracing::instrument(skip(self, document))]
    fn build_cache(&mut self, document: &D, scroll: f64) -> PrllxResult<()> {
        let config = self.live_config("build_cache")?;
        let baseline = config.baseline(scroll);

        let mut builder = CacheBuilder::new(&config, &mut *self.diagnostics);
        let fresh = self
            .elements
            .iter()
            .map(|el| builder.build(document, el, baseline))
            .collect::<PrllxResult<Vec<_>>>()?;

        tracing::debug!(snapshots = fresh.len(), baseline, "cache generation built");
        self.cache.extend(fresh);
        self.state = RuleState::CacheBuilt;
        Ok(())
    }

    fn reset_cache(&mut self, document: &mut D) -> PrllxResult<()> {
        let config = self.live_config("reset_cache")?;
        for snapshot in self.cache.drain(..) {
            revert(&mut *document, &config, &snapshot);
        }
        self.state = RuleState::CacheReset;
        Ok(())
    }

    fn render_frame(&mut self, document: &mut D, scroll: f64) -> PrllxResult<()> {
        let config = self.live_config("render_frame")?;
        for snapshot in &mut self.cache {
            let sample = ViewportEvaluator::evaluate(snapshot, scroll);
            apply_frame(&mut *document, &config, snapshot, &sample);
        }
        if matches!(self.state, RuleState::CacheBuilt | RuleState::Rendering) {
            self.state = RuleState::Rendering;
        }
        Ok(())
    }

    fn destroy(&mut self, document: &mut D) -> PrllxResult<()> {
        if self.state == RuleState::Destroyed {
            return Err(PrllxError::lifecycle("destroy called twice"));
        }
        if let Some(config) = self.config.take() {
            for snapshot in self.cache.drain(..) {
                revert(&mut *document, &config, &snapshot);
            }
        }
        self.cache.clear();
        self.elements.clear();
        self.state = RuleState::Destroyed;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rule/basic.rs"]
mod tests;
