//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod contributor_service;
pub mod normalizer;

pub use contributor_service::ContributorService;
