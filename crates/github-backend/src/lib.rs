pub mod client;
mod convert;
pub mod error;
pub mod models;
mod trait_impl;

#[cfg(test)]
mod client_tests;

pub use client::{GitHubClient, GITHUB_API_URL};
pub use error::{GitHubError, Result};
pub use models::GitHubContributor;

// Re-export cards-core types for convenience
pub use cards_core::{CardsError, ContributorSource};
