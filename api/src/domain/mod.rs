//! Domain layer
//!
//! Contains the contributor model and the feed it is read from. No I/O here.
//! - `entities`: Domain models representing core business concepts
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
