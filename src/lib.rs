//! prllx is a scroll-driven parallax engine.
//!
//! Elements are measured once per viewport size into cached geometry; every scroll update then
//! evaluates a visibility ratio per element and presents a translation along the scroll axis.
//! The public API is container-oriented:
//!
//! - Describe the page through a [`Document`] (or use the in-memory [`MemoryDocument`])
//! - Create a [`Parallax`] container and register one or more [`Rule`]s, usually [`BasicRule`]
//! - Feed it viewport sizes with [`Parallax::set_viewport`] and scroll positions with
//!   [`Parallax::set_current`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod cache;
pub(crate) mod config;
pub(crate) mod diagnostics;
pub(crate) mod dom;
pub(crate) mod eval;
pub(crate) mod output;
pub(crate) mod rule;
pub(crate) mod session;

pub use crate::foundation::core::{Affine, Axis, AxisBounds, Rect, Vec2};
pub use crate::foundation::error::{PrllxError, PrllxResult};

pub use crate::cache::builder::CacheBuilder;
pub use crate::cache::params::{
    ATTR_BASED_ON_PARENT, ATTR_DELTA_END, ATTR_DELTA_START, ATTR_INVERT, ATTR_SCROLL_TOP,
    ATTR_SPEED, DeltaValue, ItemParams,
};
pub use crate::cache::snapshot::{GeometrySnapshot, Observed};
pub use crate::config::options::{
    DEFAULT_ITEM_QUERY, MAX_PRECISION, ParallaxConfig, ParallaxOptions, RuleOptions,
};
pub use crate::diagnostics::sink::{
    CollectingDiagnostics, ConfigWarning, DiagnosticsSink, TracingDiagnostics,
};
pub use crate::dom::memory::{MemoryDocument, MemoryNode, NodeId};
pub use crate::dom::source::{Document, ElementSource, Presenter};
pub use crate::eval::viewport::{ViewportEvaluator, ViewportSample, is_in_view};
pub use crate::output::apply::{VisibilityChange, apply_frame, revert};
pub use crate::output::transform::Translation;
pub use crate::rule::basic::{BasicRule, RuleState};
pub use crate::rule::contract::Rule;
pub use crate::session::parallax::Parallax;
