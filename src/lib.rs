//! dashboard-enhancer: headless state core for analytics dashboard pages.
//!
//! The crate owns the stateful parts of a dashboard page enhancer: the
//! persisted preference pipeline, the self-expiring notification queue,
//! mutation-driven chart augmentation and keyboard shortcuts. Browser
//! surfaces are reached only through collaborator traits so every timer and
//! mutation can be driven deterministically by the host.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod persistence;
pub mod render;
pub mod telemetry;

pub use api::{DashboardEnhancer, EnhancerConfig};
pub use error::{EnhancerError, EnhancerResult};
