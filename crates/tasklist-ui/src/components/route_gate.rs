use tasklist_core::routes::{
  AppRoute,
  Gate,
  resolve
};
use yew::{
  Html,
  Properties,
  function_component,
  html
};
use yew_router::prelude::Redirect;

use super::{
  Layout,
  LoginPage,
  SignupPage
};
use crate::routes::Route;
use crate::session::use_session;

#[derive(Properties, PartialEq)]
pub struct RouteGateProps {
  pub route: AppRoute
}

#[function_component(RouteGate)]
pub fn route_gate(
  props: &RouteGateProps
) -> Html {
  let session = use_session();

  match resolve(
    &props.route,
    session.is_authenticated()
  ) {
    | Gate::Redirect(target) => {
      html! { <Redirect<Route> to={Route::from(target)} /> }
    }
    | Gate::Render(AppRoute::Login) => {
      html! { <LoginPage /> }
    }
    | Gate::Render(AppRoute::Signup) => {
      html! { <SignupPage /> }
    }
    | Gate::Render(route) => {
      html! { <Layout route={route} /> }
    }
  }
}
