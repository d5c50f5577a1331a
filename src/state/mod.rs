//! Widget state modules.
//!
//! DESIGN
//! ======
//! Each widget owns one plain struct held in an `RwSignal`. Every user-visible
//! transition is a method here, and the async sequences that drive them are
//! free functions over `store::Store` and `net::transport`, so components stay
//! thin event wiring.

pub mod chat;
pub mod store;
pub mod upload;
