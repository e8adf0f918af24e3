//! OAuth2 authorization-code flow against Google.

pub mod exchange;
pub mod google;
pub mod provider;

pub use exchange::{CodeExchanger, TokenResult};
pub use google::{AuthUrlBuilder, GoogleProvider};
pub use provider::{ProviderClient, TokenSet, UserInfo};
