//! storefront-rs: headless page-interaction layer for small storefronts.
//!
//! The crate models a storefront page's client-side behavior (mobile nav,
//! anchor scrolling, cart counter, newsletter validation, and a live-priced
//! product builder) as a controller over an abstract `Document`, so every
//! interaction can be driven and asserted without a browser.

pub mod api;
pub mod core;
pub mod document;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod submission;
pub mod telemetry;

pub use api::{PageController, PageControllerConfig};
pub use error::{StorefrontError, StorefrontResult};
