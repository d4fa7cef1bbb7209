//! Shared contracts between the admin console and the ERP REST API.
//!
//! Everything here is target-independent: wire types, validation and the
//! pure state logic the frontend drives (access predicate, location cascade,
//! list state, dashboard summaries).

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
