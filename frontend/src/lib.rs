//! Library half of the MediDesk client.
//!
//! Hosts the session layer, the interactive screens, configuration, and
//! the terminal I/O helpers. The `medidesk` binary wires these together
//! with a concrete registry gateway.

pub mod config;
pub mod screens;
pub mod session;
pub mod ui;
