//! Camera list portal
//!
//! Lists the cameras known to a camera API backend and starts a camera's stream when its button
//! is clicked.

#[macro_use]
extern crate derive_more;


pub mod api;
pub mod config;
pub mod container;
mod error;
mod locks;
pub mod logging;
pub mod paths;
pub mod refresher;
#[cfg(feature = "portal")]
pub mod templates;
pub mod transport;
#[cfg(feature = "portal")]
pub mod ui;

#[cfg(test)]
mod testing;


pub use error::*;
