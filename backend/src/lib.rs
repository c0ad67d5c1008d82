//! Wanderlist: a server-rendered site for browsing travel destinations and
//! keeping a personal want-to-go list.
//!
//! The crate follows a hexagonal layout. [`domain`] holds the account and
//! catalogue rules behind port traits, [`inbound`] adapts HTTP requests onto
//! those ports and [`outbound`] provides the account stores.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

pub use middleware::Trace;
