//! Orchestration of the render engine.
//!
//! `RenderSession` owns the state shared between the foreground loop and
//! the render worker; `RenderController` turns input events into
//! cancel-and-restart render jobs on its single long-lived worker thread;
//! `HeadlessController` drives the same engine synchronously for file
//! output.

pub mod controller;
pub mod events;
pub mod headless;
pub mod ports;
pub mod render_events;
pub mod session;
