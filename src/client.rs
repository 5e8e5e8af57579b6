//! Client for the Evolution API gateway.
//!
//! Every remote operation goes through one dispatch path: an [`Endpoint`]
//! from the [`catalog`] is turned into an [`ApiRequest`], resolved against
//! the selected instance, and sent with a snapshot of the active credential.
//! The per-resource methods live in [`crate::api`].

pub mod builder;
pub mod catalog;
pub mod core;
pub mod endpoint;
mod execution;

pub use builder::EvolutionClientBuilder;
pub use self::core::EvolutionClient;
pub use endpoint::{ApiRequest, Auth, Endpoint, Scope};
