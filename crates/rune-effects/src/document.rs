//! Document capability contract.
//!
//! The effect layer reads the host document through this trait: readiness,
//! class-based element lookup, direct children, text content and custom
//! attributes. Elements are referenced by plain string node ids; hosts map
//! them onto whatever their document model uses.
//!
//! Implementations are expected to use interior mutability (`set_text` takes
//! `&self`) so update callbacks can write through a shared handle.

use std::sync::Arc;

/// Parse state of the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentReadyState {
    /// The document's content is still being parsed.
    Loading,
    /// The document's content is fully parsed.
    Ready,
}

/// The injected document capability.
pub trait Document: Send + Sync {
    /// Current parse state. Initialization defers until `Ready`.
    fn ready_state(&self) -> DocumentReadyState;

    /// All elements carrying the given class, in document order. Zero
    /// matches is an ordinary outcome, not an error.
    fn elements_with_class(&self, class: &str) -> Vec<String>;

    /// The first element carrying the given class.
    fn first_with_class(&self, class: &str) -> Option<String> {
        self.elements_with_class(class).into_iter().next()
    }

    /// Direct children of a container element, in sibling order.
    fn children_of(&self, node: &str) -> Vec<String>;

    /// The element's visible text content, if the node exists.
    fn text_of(&self, node: &str) -> Option<String>;

    /// Replace the element's visible text content.
    fn set_text(&self, node: &str, text: &str);

    /// Read a named custom attribute off the element.
    fn attribute(&self, node: &str, name: &str) -> Option<String>;
}

/// Shared handle to the injected document.
pub type SharedDocument = Arc<dyn Document>;
