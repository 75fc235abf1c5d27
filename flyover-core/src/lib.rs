//! Core library for the `flyover` CLI.
//!
//! This crate defines:
//! - Configuration of the three upstream services
//! - The IP, geolocation and flyover lookups
//! - The tracker that chains them into a pass report
//!
//! It is used by `flyover-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod lookup;
pub mod model;
pub mod tracker;

pub use config::Config;
pub use error::{LookupError, Stage};
pub use model::{Address, Coordinates, FlyoverWindow};
pub use tracker::PassTracker;
