//! List sidebar: list collection, creation form, delete confirmation and the
//! signed-in user's profile.

use tasklist_shared::{
  ListCreate,
  ListDto,
  UserProfile
};
use tracing::{
  info,
  warn
};

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::fetch::FetchGuard;
use crate::routes::{
  AppRoute,
  Selection
};
use crate::transport::Transport;

pub const EMPTY_LIST_NAME: &str =
  "List name cannot be empty";
pub const LOAD_LISTS_FAILED: &str =
  "Failed to load lists";
pub const CREATE_LIST_FAILED: &str =
  "Failed to create list";
pub const DELETE_LIST_FAILED: &str =
  "Failed to delete list";

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct ListPanelState {
  pub lists:          Vec<ListDto>,
  pub profile:        UserProfile,
  pub error:          Option<String>,
  /// Draft name while the creation form is open.
  pub create_draft:   Option<String>,
  pub pending_delete: Option<ListDto>,
  pub expanded:       bool
}

impl Default for ListPanelState {
  fn default() -> Self {
    Self {
      lists:          vec![],
      profile:        UserProfile::default(),
      error:          None,
      create_draft:   None,
      pending_delete: None,
      expanded:       true
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListPanelAction {
  Loaded(ApiResult<Vec<ListDto>>),
  ProfileLoaded(UserProfile),
  OpenCreate,
  CloseCreate,
  EditDraft(String),
  /// Local validation or server rejection of a create.
  CreateFailed(String),
  Created,
  RequestDelete(ListDto),
  CancelDelete,
  Deleted,
  DeleteFailed(String),
  ToggleExpanded
}

impl ListPanelAction {
  /// Whether the list collection must be re-fetched after this action.
  pub fn needs_refresh(&self) -> bool {
    matches!(
      self,
      Self::Created | Self::Deleted
    )
  }
}

impl ListPanelState {
  pub fn apply(
    &mut self,
    action: ListPanelAction
  ) {
    match action {
      | ListPanelAction::Loaded(Ok(
        lists
      )) => {
        self.lists = lists;
        self.error = None;
      }
      | ListPanelAction::Loaded(Err(
        err
      )) => {
        self.lists.clear();
        self.error = Some(
          err.user_message(
            LOAD_LISTS_FAILED
          )
        );
      }
      | ListPanelAction::ProfileLoaded(
        profile
      ) => {
        self.profile = profile;
      }
      | ListPanelAction::OpenCreate => {
        self.create_draft =
          Some(String::new());
        self.error = None;
      }
      | ListPanelAction::CloseCreate => {
        self.create_draft = None;
      }
      | ListPanelAction::EditDraft(
        name
      ) => {
        if let Some(draft) =
          self.create_draft.as_mut()
        {
          *draft = name;
        }
      }
      | ListPanelAction::CreateFailed(
        message
      ) => {
        self.error = Some(message);
      }
      | ListPanelAction::Created => {
        self.create_draft = None;
        self.error = None;
      }
      | ListPanelAction::RequestDelete(
        list
      ) => {
        self.pending_delete = Some(list);
      }
      | ListPanelAction::CancelDelete => {
        self.pending_delete = None;
      }
      | ListPanelAction::Deleted => {
        self.pending_delete = None;
        self.error = None;
      }
      | ListPanelAction::DeleteFailed(
        message
      ) => {
        self.error = Some(message);
      }
      | ListPanelAction::ToggleExpanded => {
        self.expanded = !self.expanded;
      }
    }
  }

  pub fn is_creating(&self) -> bool {
    self.create_draft.is_some()
  }
}

/// Trims and checks a list name before anything is sent.
pub fn validate_list_name(
  draft: &str
) -> Result<ListCreate, String> {
  let name = draft.trim();
  if name.is_empty() {
    return Err(
      EMPTY_LIST_NAME.to_string()
    );
  }
  Ok(ListCreate {
    name: name.to_string()
  })
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteOutcome {
  pub action:   ListPanelAction,
  /// Set when the deleted list was open in the URL at the time the server
  /// confirmed the delete.
  pub navigate: Option<AppRoute>
}

/// Async operations of the list sidebar. Each returns the action to apply;
/// loads return `None` when superseded by a newer load.
#[derive(Debug, Clone)]
pub struct ListPanel<T> {
  client: ApiClient<T>,
  guard:  FetchGuard
}

impl<T: Transport> ListPanel<T> {
  pub fn new(
    client: ApiClient<T>
  ) -> Self {
    Self {
      client,
      guard: FetchGuard::new()
    }
  }

  pub async fn load(
    &self
  ) -> Option<ListPanelAction> {
    let ticket = self.guard.issue("lists");
    let result = self.client.lists().await;
    if let Ok(lists) = &result {
      info!(
        count = lists.len(),
        "loaded lists"
      );
    }
    self.guard.settle(
      &ticket,
      ListPanelAction::Loaded(result)
    )
  }

  pub async fn load_profile(
    &self
  ) -> Option<ListPanelAction> {
    match self.client.profile().await {
      | Ok(profile) => {
        Some(
          ListPanelAction::ProfileLoaded(
            profile
          )
        )
      }
      | Err(err) => {
        warn!(error = %err, "failed fetching profile");
        None
      }
    }
  }

  pub async fn create(
    &self,
    draft: &str
  ) -> ListPanelAction {
    let request =
      match validate_list_name(draft) {
        | Ok(request) => request,
        | Err(message) => {
          return ListPanelAction::CreateFailed(
            message
          );
        }
      };

    match self
      .client
      .create_list(&request)
      .await
    {
      | Ok(()) => {
        info!(name = %request.name, "created list");
        ListPanelAction::Created
      }
      | Err(err) => {
        ListPanelAction::CreateFailed(
          err.user_message(
            CREATE_LIST_FAILED
          )
        )
      }
    }
  }

  /// Deletes `list`. `current` is consulted once the server answers, so a
  /// navigation made while the request was in flight is respected.
  pub async fn delete<F>(
    &self,
    list: &ListDto,
    current: F
  ) -> DeleteOutcome
  where
    F: Fn() -> Selection
  {
    match self
      .client
      .delete_list(&list.id)
      .await
    {
      | Ok(()) => {
        let navigate = current()
          .is_list_selected(&list.id)
          .then_some(AppRoute::Lists);
        info!(
          list_id = %list.id,
          was_open = navigate.is_some(),
          "deleted list"
        );
        DeleteOutcome {
          action: ListPanelAction::Deleted,
          navigate
        }
      }
      | Err(err) => {
        DeleteOutcome {
          action:
            ListPanelAction::DeleteFailed(
              err.user_message(
                DELETE_LIST_FAILED
              )
            ),
          navigate: None
        }
      }
    }
  }
}
