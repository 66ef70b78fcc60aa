use gloo::console::log;
use yew::{
  Html,
  function_component,
  html,
  use_effect_with,
  use_memo
};
use yew_router::{
  BrowserRouter,
  Switch
};

use crate::config;
use crate::routes::{
  Route,
  switch
};
use crate::session::SessionProvider;

#[function_component(App)]
pub fn app() -> Html {
  let config = use_memo((), |_| config::load());

  {
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        "frontend mounted and router \
         initialized"
      );
      || ()
    });
  }

  html! {
      <BrowserRouter>
          <SessionProvider config={config}>
              <Switch<Route> render={switch} />
          </SessionProvider>
      </BrowserRouter>
  }
}

pub(crate) fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
