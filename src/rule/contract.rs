use crate::config::options::ParallaxConfig;
use crate::dom::source::Document;
use crate::foundation::error::PrllxResult;
use std::rc::Rc;

/// Lifecycle contract between a [`crate::Parallax`] container and one group of tracked elements.
///
/// The container drives a rule through `init -> grab_elements -> build_cache -> render_frame*`
/// and back through `reset_cache` on every resize. Calls are single-threaded and run to
/// completion; `build_cache` appends, so callers reset first when rebuilding.
pub trait Rule<D: Document> {
    /// Receive the shared configuration. Only valid while no cache generation is alive.
    fn init(&mut self, config: Rc<ParallaxConfig>) -> PrllxResult<()>;

    /// Re-resolve the tracked elements, replacing the previous list.
    fn grab_elements(&mut self, document: &D) -> PrllxResult<()>;

    /// Append one snapshot per tracked element, measured against `scroll`.
    fn build_cache(&mut self, document: &D, scroll: f64) -> PrllxResult<()>;

    /// Revert every element's presentation state and drop all snapshots.
    fn reset_cache(&mut self, document: &mut D) -> PrllxResult<()>;

    /// Evaluate every snapshot at `scroll` and present the result.
    fn render_frame(&mut self, document: &mut D, scroll: f64) -> PrllxResult<()>;

    /// Reset, then release every element reference. The rule is unusable afterwards.
    fn destroy(&mut self, document: &mut D) -> PrllxResult<()>;
}
