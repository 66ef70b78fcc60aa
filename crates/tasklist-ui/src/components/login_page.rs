use tasklist_core::auth::{
  self,
  LoginForm
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
  InputEvent,
  SubmitEvent
};
use yew::{
  Callback,
  Html,
  function_component,
  html,
  use_state
};
use yew_router::prelude::{
  Link,
  use_navigator
};

use super::input_value;
use crate::routes::Route;
use crate::session::use_session;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
  let session = use_session();
  let navigator = use_navigator();
  let form = use_state(LoginForm::default);
  let error = use_state(|| None::<String>);
  let busy = use_state(|| false);

  let on_email = {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
      let mut next = (*form).clone();
      next.email = input_value(&e);
      form.set(next);
    })
  };

  let on_password = {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
      let mut next = (*form).clone();
      next.password = input_value(&e);
      form.set(next);
    })
  };

  let on_submit = {
    let form = form.clone();
    let error = error.clone();
    let busy = busy.clone();
    let session = session.clone();
    let navigator = navigator.clone();
    Callback::from(move |e: SubmitEvent| {
      e.prevent_default();
      if *busy {
        return;
      }
      busy.set(true);

      let submitted = (*form).clone();
      let client = session.client();
      let session = session.clone();
      let navigator = navigator.clone();
      let error = error.clone();
      let busy = busy.clone();
      spawn_local(async move {
        match auth::login(&client, &submitted)
          .await
        {
          | Ok(credential) => {
            error.set(None);
            session.set_credential(Some(
              credential
            ));
            if let Some(navigator) = navigator
            {
              navigator.push(&Route::Root);
            }
          }
          | Err(message) => {
            tracing::warn!(
              message = %message,
              "login failed"
            );
            error.set(Some(message));
          }
        }
        busy.set(false);
      });
    })
  };

  html! {
      <div class="auth-page">
          <form class="panel auth-form" onsubmit={on_submit}>
              <div class="header">{ "Log In" }</div>
              {
                  if let Some(err) = (*error).clone() {
                      html! { <div class="form-error">{ err }</div> }
                  } else {
                      html! {}
                  }
              }
              <div class="field">
                  <label>{ "Email" }</label>
                  <input
                      type="email"
                      value={form.email.clone()}
                      oninput={on_email}
                  />
              </div>
              <div class="field">
                  <label>{ "Password" }</label>
                  <input
                      type="password"
                      value={form.password.clone()}
                      oninput={on_password}
                  />
              </div>
              <button type="submit" class="btn" disabled={*busy}>{ "Log In" }</button>
              <div class="auth-switch">
                  { "No account yet? " }
                  <Link<Route> to={Route::Signup}>{ "Sign up" }</Link<Route>>
              </div>
          </form>
      </div>
  }
}
