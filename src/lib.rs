//! # evolution-api-client
//!
//! Async client for the [Evolution API](https://doc.evolution-api.com) WhatsApp gateway.
//!
//! ## Overview
//!
//! Each gateway endpoint is exposed as one method on [`EvolutionClient`]. A
//! method builds the endpoint path (scoped to the selected instance where
//! the gateway expects it), merges caller options over the endpoint's
//! default body, performs a single HTTP call and returns the decoded JSON
//! body untouched.
//!
//! There are no retries, no caching and no pagination: a failed call
//! surfaces as an [`Error`] to the caller of that call.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use evolution_api_client::{Config, EvolutionClient, MessageOptions};
//!
//! #[tokio::main]
//! async fn main() -> evolution_api_client::Result<()> {
//!     let client = EvolutionClient::new(&Config::new(
//!         "https://gateway.example.com",
//!         "global-api-key",
//!     ))?;
//!     client.select_instance("shop");
//!
//!     let state = client.get_connection_state().await?;
//!     if state["instance"]["state"] == "open" {
//!         client
//!             .send_text("5511987654321", "Hello!", &MessageOptions::default())
//!             .await?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Credentials
//!
//! Requests carry an `apikey` header. The client starts on the global key
//! from [`Config`]; [`EvolutionClient::create_instance`] switches to the
//! instance key the gateway issues, and
//! [`EvolutionClient::set_credential`] /
//! [`EvolutionClient::use_global_credential`] switch explicitly.
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Base URL and global key, from code, env or file |
//! | [`client`] | Client, builder, endpoint catalog and dispatch |
//! | [`api`] | Per-resource endpoint methods and their option types |
//! | [`transport`] | reqwest-based HTTP transport |
//! | [`types`] | Shared request types |
//! | [`error`] | Error type |

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;
pub mod types;
pub mod utils;

pub use api::{
    Button, ButtonsMessage, GroupConfig, InstanceOptions, ListMessage, ListRow, ListSection,
    MediaMessage, Settings, WebhookConfig,
};
pub use client::{ApiRequest, Endpoint, EvolutionClient, EvolutionClientBuilder};
pub use config::Config;
pub use error::{Error, ErrorContext};
pub use types::{ChatPresence, MediaSource, MediaType, MessageOptions, PresenceStatus, SendOptions};

#[cfg(feature = "openai")]
pub use api::{OpenAiBotConfig, OpenAiCreds};
#[cfg(feature = "typebot")]
pub use api::{TypebotConfig, TypebotStart};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
