//! Lumen Core - session state for the 2D light playground.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Obstacle`, `Light`
//! - **Session configuration**: ray and bounce counts with their floors
//! - **Input**: the closed set of input events and the `Session` that consumes them
//! - **Colors**: the hue sweep used to tint rays
//!
//! # Example
//!
//! ```
//! use lumen_core::{InputEvent, Session};
//!
//! let mut session = Session::default();
//! session.handle_event(InputEvent::Scroll { delta: 4 });
//! assert_eq!(session.config.ray_count(), 68);
//! ```

pub mod color;
pub mod config;
pub mod input;
pub mod scene;
pub mod session;

// Re-export commonly used types
pub use color::{hue_sweep, hue_to_rgb, Color};
pub use config::SessionConfig;
pub use input::{InputEvent, Key, MouseButton};
pub use scene::{Light, Obstacle, ObstacleId, Scene};
pub use session::{DragTarget, Session};
