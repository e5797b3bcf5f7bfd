//! All data types for the social-graph library.

pub mod distance;
pub mod edge;
pub mod error;
pub mod label;

pub use distance::Distance;
pub use edge::Edge;
pub use error::{ErrorKind, GraphError, GraphResult};
pub use label::Label;

/// Random friendships made per ingested user when no configuration says otherwise.
pub const DEFAULT_FRIENDSHIPS_PER_USER: usize = 5;
