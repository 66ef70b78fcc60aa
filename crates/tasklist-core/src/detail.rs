//! Detail sidebar for the task selected in the URL.

use tasklist_shared::TaskDto;
use tracing::info;

use crate::client::ApiClient;
use crate::datetime::format_display_date;
use crate::error::ApiResult;
use crate::fetch::FetchGuard;
use crate::routes::{
  AppRoute,
  Selection
};
use crate::transport::Transport;

pub const NO_DESCRIPTION: &str =
  "No description provided";
pub const LOAD_TASK_FAILED: &str =
  "Failed to load task details";
pub const DELETE_TASK_FAILED: &str =
  "Failed to delete task";

#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
)]
pub struct TaskDetailState {
  /// Id the current `task`/`error` belong to.
  pub task_id:        Option<String>,
  pub task:           Option<TaskDto>,
  pub error:          Option<String>,
  pub confirm_delete: bool
}

#[derive(Debug, Clone, PartialEq)]
pub enum TaskDetailAction {
  Loaded {
    task_id: String,
    result:  ApiResult<TaskDto>
  },
  /// The selection changed to another task (or none).
  Select(Option<String>),
  OpenConfirm,
  CancelConfirm,
  DeleteFailed {
    task_id: String,
    message: String
  }
}

impl TaskDetailState {
  pub fn apply(
    &mut self,
    action: TaskDetailAction
  ) {
    match action {
      | TaskDetailAction::Select(
        task_id
      ) => {
        if self.task_id != task_id {
          *self = Self {
            task_id,
            ..Self::default()
          };
        }
      }
      | TaskDetailAction::Loaded {
        task_id,
        result
      } => {
        if self.task_id.as_deref()
          != Some(task_id.as_str())
        {
          return;
        }
        match result {
          | Ok(task) => {
            self.task = Some(task);
            self.error = None;
          }
          | Err(err) => {
            self.error = Some(
              err.user_message(
                LOAD_TASK_FAILED
              )
            );
          }
        }
      }
      | TaskDetailAction::OpenConfirm => {
        self.confirm_delete = true;
      }
      | TaskDetailAction::CancelConfirm => {
        self.confirm_delete = false;
      }
      | TaskDetailAction::DeleteFailed {
        task_id,
        message
      } => {
        if self.task_id.as_deref()
          == Some(task_id.as_str())
        {
          self.error = Some(message);
        }
      }
    }
  }

  /// The loaded task, if it matches the selected id.
  pub fn current_task(
    &self,
    selection: &Selection
  ) -> Option<&TaskDto> {
    let selected =
      selection.task_id.as_deref()?;
    self
      .task
      .as_ref()
      .filter(|task| task.id == selected)
  }
}

/// Display strings for the detail panel.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct TaskDetailView {
  pub title:       String,
  pub description: String,
  pub created_on:  Option<String>,
  pub due_on:      String,
  pub completed:   bool
}

impl From<&TaskDto> for TaskDetailView {
  fn from(task: &TaskDto) -> Self {
    let description = task
      .long_desc
      .as_deref()
      .map(str::trim)
      .filter(|text| !text.is_empty())
      .unwrap_or(NO_DESCRIPTION)
      .to_string();

    Self {
      title: task.short_desc.clone(),
      description,
      created_on: task
        .created_at
        .as_deref()
        .map(format_display_date),
      due_on: format_display_date(
        &task.due_date
      ),
      completed: task.completed
    }
  }
}

#[derive(Debug, Clone)]
pub struct TaskDetail<T> {
  client: ApiClient<T>,
  guard:  FetchGuard
}

impl<T: Transport> TaskDetail<T> {
  pub fn new(
    client: ApiClient<T>
  ) -> Self {
    Self {
      client,
      guard: FetchGuard::new()
    }
  }

  /// `None` when superseded by a load for another task.
  #[tracing::instrument(skip(self))]
  pub async fn load(
    &self,
    task_id: &str
  ) -> Option<TaskDetailAction> {
    let ticket = self
      .guard
      .issue(task_id.to_string());
    let result =
      self.client.task(task_id).await;
    self.guard.settle(
      &ticket,
      TaskDetailAction::Loaded {
        task_id: task_id.to_string(),
        result
      }
    )
  }

  /// Deletes `task_id`. `current` is read once the server answers: the
  /// panel navigates back to the list only while that task is still the
  /// one in the URL.
  pub async fn delete<F>(
    &self,
    task_id: &str,
    current: F
  ) -> Result<Option<AppRoute>, TaskDetailAction>
  where
    F: Fn() -> Selection
  {
    match self
      .client
      .delete_task(task_id)
      .await
    {
      | Ok(()) => {
        let selection = current();
        let still_open = selection
          .task_id
          .as_deref()
          == Some(task_id);
        info!(
          task_id,
          still_open,
          "deleted task"
        );
        Ok(still_open
          .then(|| selection.without_task()))
      }
      | Err(err) => {
        Err(TaskDetailAction::DeleteFailed {
          task_id: task_id.to_string(),
          message: err
            .user_message(DELETE_TASK_FAILED)
        })
      }
    }
  }
}
