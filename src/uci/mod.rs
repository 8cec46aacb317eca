//! UCI (Universal Chess Interface) Protocol
//!
//! This module implements the UCI protocol for communication with chess GUIs.

pub mod protocol;

pub use protocol::UCI;
