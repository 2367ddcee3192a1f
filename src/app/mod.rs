//! Host-facing side of the extension.
//!
//! The host launcher owns the UI and event loop. It hands us one event at a
//! time and renders whatever comes back.

mod events;
mod handler;

pub use events::{HostEvent, HostResponse};
pub use handler::{HandlerError, WindowsExtension};
