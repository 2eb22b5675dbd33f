//! Typed HTTP client for the Messenger Graph API.
//!
//! Covers thread control handoff, user profiles, page settings, private
//! replies, and persona management, plus the template schemas for richer
//! message types.
//!
//! # Example
//!
//! ```no_run
//! use messenger_graph::{GraphClient, ProfileField, Result};
//!
//! # async fn example() -> Result<()> {
//! let client = GraphClient::builder().api_version("v3.1").build()?;
//!
//! // Fetch a user's profile with the default field set.
//! let profile = client.profile().get("page-token", "user-id", &[]).await?;
//! println!("{} {}", profile.first_name, profile.last_name);
//!
//! // Hand the conversation to another app.
//! client
//!     .thread()
//!     .pass("page-token", 123456, "user-id", "handoff")
//!     .await?;
//!
//! // Personas.
//! for persona in client.personas().list("page-token").await? {
//!     println!("{}: {}", persona.id, persona.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Every operation returns a single [`Error`] value describing exactly what
//! went wrong: local validation, serialization, transport, decoding, or a
//! structured platform error (with its trace ID preserved for support
//! escalation). The client never retries; retry policy belongs to the caller.
//!
//! # Concurrency
//!
//! [`GraphClient`] is cheap to clone and immutable after construction, so
//! clones can be used freely across tasks. Access tokens are arguments to
//! each call and are never stored.

pub mod api;
pub mod client;
pub mod error;
pub mod template;
pub mod types;

pub use client::{ClientBuilder, GraphClient};
pub use error::{Error, Result};
pub use types::*;
