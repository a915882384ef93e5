//! Color API: a small color/hostname demo service for exercising Kubernetes
//! deployment patterns.
//!
//! The service resolves a display color once at startup from layered sources,
//! reports the host's network name, and exposes liveness/readiness/startup
//! probes whose outcomes are fixed per process run by environment flags. When
//! DB_URL is set, the root page resolves its color per request from a
//! key/value store instead.

pub mod color;
pub mod config;
pub mod error;
pub mod gate;
pub mod identity;
pub mod routes;
pub mod state;
pub mod store;
