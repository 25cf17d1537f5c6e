//! Foundation types for nixfolio.
//!
//! This crate contains the types shared by every nixfolio crate: the closed
//! set of application identifiers, window geometry, platform-agnostic input
//! events, desktop configuration, and error types.

pub mod app_id;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;

pub use app_id::AppId;
pub use geometry::{Frame, Position, Size};
