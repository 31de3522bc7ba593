mod controls;
mod pointer;

pub use controls::{wire_axis_legend, wire_camera_controls};
pub use pointer::{wire_input_handlers, InputWiring};
