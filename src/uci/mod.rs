//! UCI (Universal Chess Interface) Protocol
//!
//! This module implements the UCI protocol for driving the engine from
//! chess GUIs or a terminal.

pub mod protocol;

pub use protocol::UCI;
