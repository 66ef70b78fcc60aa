use gloo::timers::future::TimeoutFuture;
use tasklist_core::auth::{
  self,
  SignupForm
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
  InputEvent,
  SubmitEvent
};
use yew::{
  Callback,
  Html,
  UseStateHandle,
  function_component,
  html,
  use_state
};
use yew_router::prelude::{
  Link,
  use_navigator
};

use super::input_value;
use crate::app::ui_debug;
use crate::routes::Route;
use crate::session::use_session;

fn field_input(
  form: &UseStateHandle<SignupForm>,
  update: fn(&mut SignupForm, String)
) -> Callback<InputEvent> {
  let form = form.clone();
  Callback::from(move |e: InputEvent| {
    let mut next = (*form).clone();
    update(&mut next, input_value(&e));
    form.set(next);
  })
}

#[function_component(SignupPage)]
pub fn signup_page() -> Html {
  let session = use_session();
  let navigator = use_navigator();
  let form = use_state(SignupForm::default);
  let error = use_state(|| None::<String>);
  let success =
    use_state(|| None::<&'static str>);
  let busy = use_state(|| false);

  let on_submit = {
    let form = form.clone();
    let error = error.clone();
    let success = success.clone();
    let busy = busy.clone();
    let session = session.clone();
    let navigator = navigator.clone();
    Callback::from(move |e: SubmitEvent| {
      e.prevent_default();
      if *busy {
        return;
      }
      busy.set(true);
      error.set(None);

      let submitted = (*form).clone();
      let client = session.client();
      let redirect_ms =
        session.config().signup_redirect_ms;
      let form = form.clone();
      let error = error.clone();
      let success = success.clone();
      let busy = busy.clone();
      let navigator = navigator.clone();
      spawn_local(async move {
        match auth::signup(&client, &submitted)
          .await
        {
          | Ok(message) => {
            success.set(Some(message));
            form.set(SignupForm::default());
            ui_debug(
              "signup.redirect",
              &format!(
                "leaving for login in \
                 {redirect_ms}ms"
              )
            );
            TimeoutFuture::new(redirect_ms)
              .await;
            if let Some(navigator) = navigator
            {
              navigator.push(&Route::Login);
            }
          }
          | Err(message) => {
            error.set(Some(message));
            busy.set(false);
          }
        }
      });
    })
  };

  let field = |label: &'static str,
               kind: &'static str,
               value: &str,
               oninput: Callback<InputEvent>| {
    html! {
        <div class="field">
            <label>{ label }</label>
            <input type={kind} value={value.to_string()} oninput={oninput} />
        </div>
    }
  };

  html! {
      <div class="auth-page">
          <form class="panel auth-form" onsubmit={on_submit}>
              <div class="header">{ "Sign Up" }</div>
              {
                  if let Some(err) = (*error).clone() {
                      html! { <div class="form-error">{ err }</div> }
                  } else {
                      html! {}
                  }
              }
              {
                  if let Some(message) = *success {
                      html! { <div class="form-success">{ message }</div> }
                  } else {
                      html! {}
                  }
              }
              { field("First Name", "text", &form.first_name, field_input(&form, |f, v| f.first_name = v)) }
              { field("Last Name", "text", &form.last_name, field_input(&form, |f, v| f.last_name = v)) }
              { field("Email", "email", &form.email, field_input(&form, |f, v| f.email = v)) }
              { field("Confirm Email", "email", &form.confirm_email, field_input(&form, |f, v| f.confirm_email = v)) }
              { field("Password", "password", &form.password, field_input(&form, |f, v| f.password = v)) }
              { field("Confirm Password", "password", &form.confirm_password, field_input(&form, |f, v| f.confirm_password = v)) }
              <button type="submit" class="btn" disabled={*busy}>{ "Create Account" }</button>
              <div class="auth-switch">
                  { "Already have an account? " }
                  <Link<Route> to={Route::Login}>{ "Log in" }</Link<Route>>
              </div>
          </form>
      </div>
  }
}
