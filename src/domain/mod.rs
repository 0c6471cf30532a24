//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — report configuration and solver row shape.
//! - `constants.rs` — production report defaults.
//!
//! ## Rule of thumb
//! Domain types never talk to the solver; the only I/O here is reading a
//! config file into `ReportConfig`.

pub mod constants;
pub mod models;
