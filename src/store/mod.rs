//! Typed stores layered over a [`crate::persist::KvStore`].

/// Meet list blob store.
pub mod meets;
/// Team name and roster store.
pub mod team;

pub use meets::MeetStore;
pub use team::TeamStore;
