//! # Coursebook API
//!
//! A REST API for managing courses and the users who own them. Reads are
//! public; writes are gated by HTTP Basic authentication, and course
//! mutation additionally requires ownership.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── config/           # Env-driven configuration (server, database, CORS)
//! ├── middleware/       # Auth extractor and ownership guard
//! ├── modules/          # Feature modules
//! │   ├── users/       # Signup, identity lookup
//! │   └── courses/     # Course CRUD with owner projections
//! └── utils/           # Errors, password hashing
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `controller.rs`: HTTP handlers
//! - `service.rs`: business logic over the store
//! - `model.rs`: entities and DTOs
//! - `router.rs`: axum route table
//!
//! ## Authentication
//!
//! There are no sessions or tokens. Every request presents
//! `Authorization: Basic <base64(email:password)>` and is re-authenticated
//! against the user table; passwords are stored as bcrypt digests only.
//! All authentication failures produce the same `401 Access Denied`
//! response — the reason is logged server-side and never sent to the
//! client.
//!
//! ## Persistence
//!
//! SQLite via `sqlx`. The schema lives in `migrations/` and is applied at
//! startup; email uniqueness is a store-level constraint so concurrent
//! duplicate signups cannot both succeed.

pub mod config;
pub mod docs;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;
