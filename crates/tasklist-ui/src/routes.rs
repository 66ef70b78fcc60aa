use tasklist_core::routes::{
  AppRoute,
  Selection
};
use yew::{
  Html,
  html
};
use yew_router::Routable;
use yew_router::history::{
  BrowserHistory,
  History
};

use crate::components::RouteGate;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
  #[at("/")]
  Root,
  #[at("/login")]
  Login,
  #[at("/signup")]
  Signup,
  #[at("/lists")]
  Lists,
  #[at("/lists/:list_id")]
  List { list_id: String },
  #[at("/lists/:list_id/tasks/:task_id")]
  Task {
    list_id: String,
    task_id: String
  },
  #[not_found]
  #[at("/404")]
  NotFound
}

impl From<Route> for AppRoute {
  fn from(route: Route) -> Self {
    match route {
      | Route::Root => AppRoute::Root,
      | Route::Login => AppRoute::Login,
      | Route::Signup => AppRoute::Signup,
      | Route::Lists => AppRoute::Lists,
      | Route::List {
        list_id
      } => {
        AppRoute::List {
          list_id
        }
      }
      | Route::Task {
        list_id,
        task_id
      } => {
        AppRoute::Task {
          list_id,
          task_id
        }
      }
      | Route::NotFound => {
        AppRoute::NotFound
      }
    }
  }
}

impl From<AppRoute> for Route {
  fn from(route: AppRoute) -> Self {
    match route {
      | AppRoute::Root => Route::Root,
      | AppRoute::Login => Route::Login,
      | AppRoute::Signup => Route::Signup,
      | AppRoute::Lists => Route::Lists,
      | AppRoute::List {
        list_id
      } => {
        Route::List {
          list_id
        }
      }
      | AppRoute::Task {
        list_id,
        task_id
      } => {
        Route::Task {
          list_id,
          task_id
        }
      }
      | AppRoute::NotFound => {
        Route::NotFound
      }
    }
  }
}

/// Selection for the location the browser shows right now, for async work
/// that finishes after the rendered props may have gone stale.
pub fn current_selection() -> Selection {
  let location =
    BrowserHistory::new().location();
  Route::recognize(location.path())
    .map(AppRoute::from)
    .unwrap_or(AppRoute::NotFound)
    .selection()
}

/// Every location renders through the gate, so access is re-checked on each
/// navigation.
pub fn switch(route: Route) -> Html {
  let route = AppRoute::from(route);
  html! { <RouteGate route={route} /> }
}
