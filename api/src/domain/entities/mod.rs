//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod contributor;
pub mod social;

pub use contributor::{ContributionCounts, Contributor};
pub use social::SocialLink;
