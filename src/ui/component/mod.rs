//! Interactive layer: components arranged in an arena tree, with keyboard
//! focus, mouse capture and animation state owned by the tree.

pub mod capture;
pub mod component;
pub mod container;
pub mod slider;
pub mod tree;
pub mod wrappers;

pub use capture::{CaptureArbiter, CapturedMouse};
pub use component::{Component, FocusState, Focusability};
pub use container::{Container, ContainerKind};
pub use slider::{slider, Slider, SliderOption, SliderValue, SliderWithLabel};
pub use tree::{ComponentId, ComponentTree, Cx, TreeError};
pub use wrappers::{CatchEvent, Hoverable, Maybe, Renderer};
