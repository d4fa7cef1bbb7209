//! Cascading State → District → Cluster selector.
//!
//! `use_locations` wraps `contracts::domain::location::LocationCascade` in a
//! signal and performs the fetches it asks for; `LocationFilter` renders the
//! dependent selects.

pub mod api;
pub mod filter;
pub mod hook;

pub use filter::LocationFilter;
pub use hook::{use_locations, LocationsHandle};
