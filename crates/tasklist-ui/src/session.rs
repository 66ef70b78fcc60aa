//! Session context shared by every page.
//!
//! The provider owns the one [`Session`] of the app together with the API
//! client that reads its authorization header. Changing the credential goes
//! through [`SessionHandle::set_credential`], which persists it and updates
//! the header before the new state is published to consumers.

use std::cell::RefCell;
use std::rc::Rc;

use tasklist_core::config::AppConfig;
use tasklist_core::routes::AppRoute;
use tasklist_core::{
  ApiClient,
  AuthHeader,
  Credential,
  Session
};
use yew::{
  ContextProvider,
  Html,
  Properties,
  UseStateSetter,
  function_component,
  hook,
  html,
  use_context,
  use_memo,
  use_state
};

use crate::api::BrowserTransport;
use crate::storage::BrowserStorage;

pub type Client = ApiClient<BrowserTransport>;

struct SessionInner {
  session: RefCell<Session<BrowserStorage>>,
  client:  Client,
  config:  Rc<AppConfig>
}

#[derive(Clone)]
pub struct SessionHandle {
  authenticated:     bool,
  set_authenticated: UseStateSetter<bool>,
  inner:             Rc<SessionInner>
}

impl PartialEq for SessionHandle {
  fn eq(&self, other: &Self) -> bool {
    self.authenticated
      == other.authenticated
      && Rc::ptr_eq(
        &self.inner,
        &other.inner
      )
  }
}

impl SessionHandle {
  pub fn is_authenticated(&self) -> bool {
    self.authenticated
  }

  pub fn client(&self) -> Client {
    self.inner.client.clone()
  }

  pub fn config(&self) -> Rc<AppConfig> {
    self.inner.config.clone()
  }

  pub fn set_credential(
    &self,
    credential: Option<Credential>
  ) {
    let authenticated =
      credential.is_some();
    self
      .inner
      .session
      .borrow_mut()
      .set_credential(credential);
    self
      .set_authenticated
      .set(authenticated);
  }

  pub fn logout(&self) -> AppRoute {
    let next = self
      .inner
      .session
      .borrow_mut()
      .logout();
    self.set_authenticated.set(false);
    next
  }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
  pub config:   Rc<AppConfig>,
  #[prop_or_default]
  pub children: Html
}

#[function_component(SessionProvider)]
pub fn session_provider(
  props: &SessionProviderProps
) -> Html {
  let inner = {
    let config = props.config.clone();
    use_memo((), move |_| {
      let header = AuthHeader::new();
      let session = Session::restore(
        BrowserStorage::new(
          config.storage_key.clone()
        ),
        header.clone()
      );
      let client = ApiClient::new(
        BrowserTransport,
        config.api_base_url.clone(),
        header
      );
      SessionInner {
        session: RefCell::new(session),
        client,
        config
      }
    })
  };

  let authenticated = {
    let inner = inner.clone();
    use_state(move || {
      inner
        .session
        .borrow()
        .is_authenticated()
    })
  };

  let handle = SessionHandle {
    authenticated:     *authenticated,
    set_authenticated: authenticated
      .setter(),
    inner:             inner.clone()
  };

  html! {
      <ContextProvider<SessionHandle> context={handle}>
          { props.children.clone() }
      </ContextProvider<SessionHandle>>
  }
}

/// The enclosing session. Panics outside a [`SessionProvider`].
#[hook]
pub fn use_session() -> SessionHandle {
  use_context::<SessionHandle>().expect(
    "use_session must be used within a \
     <SessionProvider>"
  )
}
