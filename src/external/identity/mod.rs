//! Identity provider integration.
//!
//! The portal resolves manager display fields from an external identity
//! provider and authenticates its outgoing calls with client-credential
//! bearer tokens.

mod client;
mod provider;
mod token;
mod types;

pub use client::RestIdentityClient;
pub use provider::IdentityProvider;
pub use token::TokenManager;
pub use types::{IdentityUser, TokenResponse};
