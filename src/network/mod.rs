//! Social-network analytics on top of the graph.

pub mod memo;
mod roster;
pub mod social;

pub use memo::DistanceMemo;
pub use social::SocialNetwork;
