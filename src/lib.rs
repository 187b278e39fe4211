//! Regenerates Android, PWA and iOS app icons from one master image.

pub mod android;
pub mod config;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod imaging;
pub mod ios;
pub mod logger;
pub mod models;
pub mod pwa;

pub use error::{IconError, Result};
pub use generator::run;
pub use models::{Config, OutputSpec, Role, RunReport};
