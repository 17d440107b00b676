use crate::foundation::core::Rect;
use crate::foundation::error::PrllxResult;
use crate::output::transform::Translation;

/// Read side of the element layer: selector resolution, geometry and declared attributes.
///
/// Handles are non-owning references; the source owns element lifetimes.
pub trait ElementSource {
    /// Opaque element reference handed to rules and snapshots.
    type Handle: Clone + std::fmt::Debug;

    /// Resolve every element matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> PrllxResult<Vec<Self::Handle>>;

    /// Current client-space bounding box of `element`.
    fn bounding_rect(&self, element: &Self::Handle) -> PrllxResult<Rect>;

    /// Current client-space bounding box of the parent of `element`, if it has one.
    fn parent_bounding_rect(&self, element: &Self::Handle) -> PrllxResult<Option<Rect>>;

    /// Raw value of a declared attribute; `None` when absent.
    fn attribute(&self, element: &Self::Handle, name: &str) -> Option<String>;

    /// Return `true` when the attribute is declared, whatever its value.
    fn has_attribute(&self, element: &Self::Handle, name: &str) -> bool {
        self.attribute(element, name).is_some()
    }
}

/// Write side of the element layer. This is the only place presentation state changes.
pub trait Presenter<H> {
    /// Apply a translation as the element's transform.
    fn set_transform(&mut self, element: &H, transform: &Translation);
    /// Remove any transform previously applied.
    fn clear_transform(&mut self, element: &H);
    /// Add a class to the element.
    fn add_class(&mut self, element: &H, class: &str);
    /// Remove a class from the element.
    fn remove_class(&mut self, element: &H, class: &str);
}

/// An element layer that can be both read and presented to.
pub trait Document: ElementSource + Presenter<<Self as ElementSource>::Handle> {}

impl<T> Document for T where T: ElementSource + Presenter<<T as ElementSource>::Handle> {}
