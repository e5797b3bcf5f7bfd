//! Vertex labels.

use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::rc::Rc;
use std::sync::Arc;

use super::error::{GraphError, GraphResult};

/// An opaque vertex identity: equality and hashing only, no ordering.
///
/// `is_blank` plays the role of a missing label. Structural operations reject
/// blank labels with [`GraphError::InvalidArgument`] before touching the graph.
pub trait Label: Clone + Eq + Hash + Debug + Display {
    /// Whether this label is unusable as a vertex identity.
    fn is_blank(&self) -> bool {
        false
    }
}

impl Label for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Label for &str {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Label for Box<str> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Label for Rc<str> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Label for Arc<str> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

macro_rules! integer_labels {
    ($($t:ty),*) => {
        $(impl Label for $t {})*
    };
}

integer_labels!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Reject blank labels.
pub(crate) fn validate<L: Label>(label: &L) -> GraphResult<()> {
    if label.is_blank() {
        return Err(GraphError::InvalidArgument(format!(
            "blank label {label:?}"
        )));
    }
    Ok(())
}
