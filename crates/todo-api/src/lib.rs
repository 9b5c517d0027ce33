//! REST client for the todo backend.
//!
//! # Overview
//! Wraps the two collection endpoints the backend exposes — `/api/lists`
//! and `/api/items` — behind typed async clients. The clients are stateless
//! apart from a normalized base URL and a shared `reqwest::Client`, so they
//! are cheap to clone into UI components.
//!
//! # Design
//! - Every operation returns `Result<T, RequestError>`; no retry, no
//!   caching. Callers decide what to surface.
//! - Success is any 2xx status; non-2xx responses become
//!   `RequestError::Status` carrying the code and body text.
//! - Compiles for wasm32 (browser fetch) and natively (integration tests
//!   run against an in-process mock backend).

pub mod error;
pub mod items;
pub mod lists;
pub mod models;

mod http;

pub use error::{RequestError, Result};
pub use items::ItemClient;
pub use lists::ListClient;
pub use models::{TodoItem, TodoList};
