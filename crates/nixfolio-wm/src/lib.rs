//! Window manager for nixfolio.
//!
//! [`WindowManager`] owns the authoritative [`SystemState`]: one
//! [`WindowState`] per [`AppId`](nixfolio_types::AppId), the focused window,
//! and the z-index counter. Every mutation goes through one of its
//! operations, each a whole synchronous transition. Renderers read the state
//! or subscribe to [`WmEvent`]s; pointer input on window chrome is turned into
//! operations by [`GestureTracker`].

pub mod dock;
pub mod gesture;
pub mod manager;
pub mod state;

pub use dock::{Dock, DockItem};
pub use gesture::{ChromeTarget, GestureOutcome, GestureTracker};
pub use manager::{WindowManager, WindowOps, WmEvent};
pub use state::{SystemState, WindowState};
