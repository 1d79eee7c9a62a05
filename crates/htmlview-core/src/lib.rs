//! Core systems for htmlview.
//!
//! This crate provides the small set of foundations shared by the rendering
//! and widget crates:
//!
//! - **Signal/Slot System**: Type-safe callbacks used to relay link activations
//!   and content changes back to the host application
//! - **Logging**: `tracing` target names for filtering per subsystem
//!
//! # Signal/Slot Example
//!
//! ```
//! use htmlview_core::Signal;
//!
//! let link_activated = Signal::<String>::new();
//!
//! let conn_id = link_activated.connect(|url| {
//!     println!("Open {}", url);
//! });
//!
//! link_activated.emit("https://example.com".to_string());
//! link_activated.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
