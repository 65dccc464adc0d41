//! Middleware and extractors for cross-cutting request concerns.
//!
//! - [`auth`]: Basic-auth credential parsing and the authenticated-user
//!   extractor
//! - [`ownership`]: owner check gating course mutation
//!
//! # Authentication Flow
//!
//! 1. Client sends a request with an `Authorization: Basic <credentials>`
//!    header
//! 2. The [`auth::AuthUser`] extractor parses the credentials, looks the
//!    user up by email, and verifies the password digest
//! 3. Handlers receive the authenticated [`User`] as the extractor value;
//!    mutation handlers additionally run [`ownership::ensure_owner`] once
//!    the target resource is known to exist
//!
//! There is no session or token store. Every request re-authenticates
//! against the user table.
//!
//! [`User`]: crate::modules::users::model::User

pub mod auth;
pub mod ownership;
