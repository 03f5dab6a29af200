//! Host-facing vocabulary shared by every layer: input events and bound values.

pub mod binding;
pub mod event;

pub use binding::{ConstRef, ConstStringRef, Ref, StringRef};
pub use event::{events_from_bytes, Event, Key, Motion, Mouse, MouseButton};
