//! WebAssembly bindings for the execution engine.
//!
//! This module exposes the engine to JavaScript hosts, either over a flat
//! memory owned by the module or over a memory-access function supplied by
//! the host page.

pub mod api;

pub use api::{Emulator, EmulatorError};
