//! Client-side logic for the tasklist web app, independent of any UI
//! framework.
//!
//! Panels follow the same split: a `*State` value with an `apply` method for
//! synchronous transitions, and an async controller that talks to the API and
//! returns the action to apply. Loads go through a [`fetch::FetchGuard`] so a
//! slow response never overwrites the result of a newer request.

pub mod auth;
pub mod board;
pub mod client;
pub mod config;
pub mod datetime;
pub mod detail;
pub mod error;
pub mod fetch;
pub mod lists;
pub mod routes;
pub mod session;
pub mod transport;

pub use client::ApiClient;
pub use error::{
  ApiError,
  ApiResult
};
pub use session::{
  AuthHeader,
  Credential,
  CredentialStorage,
  Session
};
pub use transport::Transport;
