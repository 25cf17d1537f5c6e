//! nixfolio desktop: the pieces assembled into one state object.

pub mod console;
pub mod desktop;
pub mod files;

pub use desktop::Desktop;
