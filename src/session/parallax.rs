use crate::config::options::{ParallaxConfig, ParallaxOptions};
use crate::dom::source::Document;
use crate::foundation::error::PrllxResult;
use crate::rule::contract::Rule;
use std::rc::Rc;

/// Container driving a set of rules over one document.
///
/// The container owns the document, the shared configuration and the scroll position. Rules are
/// driven in insertion order. A resize replaces the configuration and rebuilds every cache from
/// fresh measurements; scroll updates only render.
pub struct Parallax<D: Document> {
    document: D,
    config: Rc<ParallaxConfig>,
    rules: Vec<Box<dyn Rule<D>>>,
    current: f64,
}

impl<D: Document> Parallax<D> {
    /// Validate `options` and take ownership of `document`. The viewport size starts at zero.
    pub fn new(document: D, options: ParallaxOptions) -> PrllxResult<Self> {
        let config = Rc::new(ParallaxConfig::new(options)?);
        Ok(Self {
            document,
            config,
            rules: Vec::new(),
            current: 0.0,
        })
    }

    /// Hand the shared configuration to `rule` and append it.
    pub fn add_rule<R: Rule<D> + 'static>(&mut self, mut rule: R) -> PrllxResult<()> {
        rule.init(Rc::clone(&self.config))?;
        self.rules.push(Box::new(rule));
        Ok(())
    }

    /// Measure every rule against the current position and render one frame.
    #[tracing::instrument(skip(self))]
    pub fn init(&mut self) -> PrllxResult<()> {
        tracing::debug!(rules = self.rules.len(), current = self.current, "init");
        for rule in &mut self.rules {
            rule.reset_cache(&mut self.document)?;
        }
        for rule in &mut self.rules {
            rule.grab_elements(&self.document)?;
        }
        for rule in &mut self.rules {
            rule.build_cache(&self.document, self.current)?;
        }
        self.render()
    }

    /// Move to scroll position `pos` and render. Unchanged positions are ignored.
    pub fn set_current(&mut self, pos: f64) -> PrllxResult<()> {
        if pos == self.current {
            return Ok(());
        }
        self.current = pos;
        self.render()
    }

    /// Apply a viewport resize.
    ///
    /// Every cache is reset before the new configuration is handed out and rebuilt afterwards.
    /// Nothing is rendered until the next scroll update or [`Parallax::render`].
    #[tracing::instrument(skip(self))]
    pub fn set_viewport(&mut self, width: f64, height: f64) -> PrllxResult<()> {
        let size = self.config.axis().pick(width, height);
        tracing::debug!(width, height, size, "viewport resized");

        for rule in &mut self.rules {
            rule.reset_cache(&mut self.document)?;
        }
        self.config = Rc::new(self.config.with_viewport_size(size));
        for rule in &mut self.rules {
            rule.init(Rc::clone(&self.config))?;
            rule.build_cache(&self.document, self.current)?;
        }
        Ok(())
    }

    /// Render every rule at the current position.
    pub fn render(&mut self) -> PrllxResult<()> {
        for rule in &mut self.rules {
            rule.render_frame(&mut self.document, self.current)?;
        }
        Ok(())
    }

    /// Destroy every rule and hand the document back with all presentation reverted.
    pub fn destroy(mut self) -> PrllxResult<D> {
        for rule in &mut self.rules {
            rule.destroy(&mut self.document)?;
        }
        Ok(self.document)
    }

    /// Current scroll position.
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Viewport extent along the scroll axis.
    pub fn viewport_size(&self) -> f64 {
        self.config.viewport_size()
    }

    /// Shared configuration.
    pub fn config(&self) -> &ParallaxConfig {
        &self.config
    }

    /// Number of registered rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Borrow the document.
    pub fn document(&self) -> &D {
        &self.document
    }

    /// Mutably borrow the document, e.g. to move elements before a resize.
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/parallax.rs"]
mod tests;
