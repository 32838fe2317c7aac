//! Application shell for armada: the frame-loop thread and its command
//! surface.
//!
//! Windowing, input devices, and rasterization live outside this
//! workspace; the demo binary scripts a pointer instead.

pub mod game_loop;
pub mod state;
