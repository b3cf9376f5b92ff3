//! Cloneable handle over the single editor instance.

#[cfg(test)]
#[path = "handle_test.rs"]
mod handle_test;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

/// Handle to the editor widget, constructed once by the hosting component
/// and passed explicitly to every closure that needs the document.
///
/// Clones share the same underlying instance. Before the widget mounts (and
/// always on the server) the handle is detached: `html` returns an empty
/// string and `clear` is a no-op.
#[derive(Clone, Debug, Default)]
pub struct EditorHandle {
    #[cfg(feature = "hydrate")]
    instance: Rc<RefCell<Option<crate::editor::quill::Quill>>>,
}

impl EditorHandle {
    /// Adopt a mounted editor instance. Later attaches replace the earlier
    /// instance; the host component guards against double-mounting.
    #[cfg(feature = "hydrate")]
    pub fn attach(&self, quill: crate::editor::quill::Quill) {
        *self.instance.borrow_mut() = Some(quill);
    }

    pub fn is_attached(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.instance.borrow().is_some()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }

    /// Current document as an HTML fragment.
    pub fn html(&self) -> String {
        #[cfg(feature = "hydrate")]
        {
            self.instance
                .borrow()
                .as_ref()
                .map(|quill| quill.root().inner_html())
                .unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            String::new()
        }
    }

    /// Reset the document to empty.
    pub fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(quill) = self.instance.borrow().as_ref() {
                quill.set_contents(&js_sys::Array::new());
            }
        }
    }
}
