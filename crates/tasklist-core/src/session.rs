//! Session store: the single owner of the bearer credential.
//!
//! The credential is persisted through a [`CredentialStorage`] and mirrored
//! into an [`AuthHeader`] that the API client reads on every request. Both
//! side effects happen inside [`Session::set_credential`], before the caller
//! publishes the new state, so no request can be dispatched between "logged
//! in" and "header attached".

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::{
  debug,
  info
};

use crate::routes::AppRoute;

#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
  /// Returns `None` for blank tokens.
  pub fn new(
    token: impl Into<String>
  ) -> Option<Self> {
    let token = token.into();
    if token.trim().is_empty() {
      None
    } else {
      Some(Self(token))
    }
  }

  pub fn token(&self) -> &str {
    &self.0
  }

  pub fn bearer(&self) -> String {
    format!("Bearer {}", self.0)
  }
}

impl fmt::Debug for Credential {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str("Credential(<redacted>)")
  }
}

/// Durable storage for the credential string.
pub trait CredentialStorage {
  fn load(&self) -> Option<String>;
  fn store(&self, token: &str);
  fn clear(&self);
}

/// In-memory storage. Clones share the same slot, which is how tests
/// simulate a page reload.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
  slot: Rc<RefCell<Option<String>>>
}

impl MemoryStorage {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_token(
    token: impl Into<String>
  ) -> Self {
    let storage = Self::default();
    storage.store(&token.into());
    storage
  }

  pub fn peek(&self) -> Option<String> {
    self.slot.borrow().clone()
  }
}

impl CredentialStorage
  for MemoryStorage
{
  fn load(&self) -> Option<String> {
    self.slot.borrow().clone()
  }

  fn store(&self, token: &str) {
    *self.slot.borrow_mut() =
      Some(token.to_string());
  }

  fn clear(&self) {
    *self.slot.borrow_mut() = None;
  }
}

/// Default `Authorization` header shared between the session and the API
/// client.
#[derive(Clone, Default)]
pub struct AuthHeader {
  value: Rc<RefCell<Option<String>>>
}

impl AuthHeader {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn value(&self) -> Option<String> {
    self.value.borrow().clone()
  }

  pub fn is_set(&self) -> bool {
    self.value.borrow().is_some()
  }

  fn set(
    &self,
    credential: Option<&Credential>
  ) {
    *self.value.borrow_mut() =
      credential.map(Credential::bearer);
  }
}

impl fmt::Debug for AuthHeader {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.debug_struct("AuthHeader")
      .field("set", &self.is_set())
      .finish()
  }
}

#[derive(Debug)]
pub struct Session<S> {
  storage:    S,
  header:     AuthHeader,
  credential: Option<Credential>
}

impl<S: CredentialStorage> Session<S> {
  /// Restores a persisted credential, if any, and applies it to `header`.
  #[tracing::instrument(skip_all)]
  pub fn restore(
    storage: S,
    header: AuthHeader
  ) -> Self {
    let credential = storage
      .load()
      .and_then(Credential::new);
    header.set(credential.as_ref());
    info!(
      restored = credential.is_some(),
      "session initialized"
    );

    Self {
      storage,
      header,
      credential
    }
  }

  pub fn credential(
    &self
  ) -> Option<&Credential> {
    self.credential.as_ref()
  }

  pub fn is_authenticated(&self) -> bool {
    self.credential.is_some()
  }

  pub fn header(&self) -> &AuthHeader {
    &self.header
  }

  #[tracing::instrument(skip_all)]
  pub fn set_credential(
    &mut self,
    credential: Option<Credential>
  ) {
    match &credential {
      | Some(credential) => {
        self
          .storage
          .store(credential.token());
        debug!(
          "persisted credential and \
           attached authorization \
           header"
        );
      }
      | None => {
        self.storage.clear();
        debug!(
          "cleared persisted \
           credential and \
           authorization header"
        );
      }
    }
    self.header.set(credential.as_ref());
    self.credential = credential;
  }

  /// Drops the credential everywhere and returns where to go next.
  pub fn logout(&mut self) -> AppRoute {
    info!("logging out");
    self.set_credential(None);
    AppRoute::Login
  }
}
