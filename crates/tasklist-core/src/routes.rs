//! Client-side routes, the selection they imply, and the route guard.

use std::fmt;

use tracing::debug;

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Hash,
)]
pub enum AppRoute {
  Root,
  Login,
  Signup,
  Lists,
  List {
    list_id: String
  },
  Task {
    list_id: String,
    task_id: String
  },
  NotFound
}

impl AppRoute {
  pub fn path(&self) -> String {
    match self {
      | Self::Root => "/".to_string(),
      | Self::Login => {
        "/login".to_string()
      }
      | Self::Signup => {
        "/signup".to_string()
      }
      | Self::Lists => {
        "/lists".to_string()
      }
      | Self::List {
        list_id
      } => format!("/lists/{list_id}"),
      | Self::Task {
        list_id,
        task_id
      } => {
        format!(
          "/lists/{list_id}/tasks/\
           {task_id}"
        )
      }
      | Self::NotFound => {
        "/404".to_string()
      }
    }
  }

  pub fn is_protected(&self) -> bool {
    matches!(
      self,
      Self::Lists
        | Self::List { .. }
        | Self::Task { .. }
    )
  }

  pub fn selection(&self) -> Selection {
    match self {
      | Self::List {
        list_id
      } => {
        Selection {
          list_id: Some(list_id.clone()),
          task_id: None
        }
      }
      | Self::Task {
        list_id,
        task_id
      } => {
        Selection {
          list_id: Some(list_id.clone()),
          task_id: Some(task_id.clone())
        }
      }
      | _ => Selection::default()
    }
  }
}

impl fmt::Display for AppRoute {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(&self.path())
  }
}

/// The `(list id, task id)` pair implied by the current location.
#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
  Hash,
)]
pub struct Selection {
  pub list_id: Option<String>,
  pub task_id: Option<String>
}

impl Selection {
  pub fn is_list_selected(
    &self,
    list_id: &str
  ) -> bool {
    self.list_id.as_deref()
      == Some(list_id)
  }

  /// The task detail panel renders only when this holds.
  pub fn has_task(&self) -> bool {
    self.task_id.is_some()
  }

  /// Where to go once the selected task is gone.
  pub fn without_task(
    &self
  ) -> AppRoute {
    match &self.list_id {
      | Some(list_id) => {
        AppRoute::List {
          list_id: list_id.clone()
        }
      }
      | None => AppRoute::Lists
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub enum Gate {
  Render(AppRoute),
  Redirect(AppRoute)
}

/// Decides what to do with `route` given whether a credential is present.
/// Called on every navigation.
pub fn resolve(
  route: &AppRoute,
  authenticated: bool
) -> Gate {
  let gate = match route {
    | AppRoute::Root => {
      Gate::Redirect(AppRoute::Lists)
    }
    | AppRoute::NotFound => {
      Gate::Redirect(AppRoute::Login)
    }
    | route
      if route.is_protected()
        && !authenticated =>
    {
      Gate::Redirect(AppRoute::Login)
    }
    | route => {
      Gate::Render(route.clone())
    }
  };

  debug!(
    route = %route,
    authenticated,
    ?gate,
    "route guard evaluated"
  );
  gate
}
