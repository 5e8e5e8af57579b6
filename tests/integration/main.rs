//! Wire-level tests against a mock gateway.

mod groups;
mod instance;
mod messaging;

#[cfg(any(feature = "typebot", feature = "openai"))]
mod integrations;
