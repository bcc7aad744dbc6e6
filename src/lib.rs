//! Supplyboard UI Behaviors
//!
//! Client-side behavior layer for the server-rendered supply-chain
//! dashboard. The server owns the markup; this crate attaches the
//! interactive affordances on top of it:
//!
//! - edit highlighting while a data cell has focus
//! - a confirmation prompt gating the save button
//! - a periodic date-freshness check that reloads stale pages
//! - shortage row highlighting driven by a mutation observer
//! - numeric reformatting of edited cells
//!
//! # Modules
//!
//! - [`behaviors`]: the five behavior rules and the [`Behaviors`] handle
//! - [`config`]: page-tunable selectors, class names and timings
//! - [`dom`]: listener/observer subscriptions with teardown on drop

pub mod behaviors;
pub mod config;
pub mod dom;

pub use behaviors::{initialize, BehaviorError, Behaviors};
pub use config::BehaviorConfig;
