//! Task board for one list: active and completed partitions, the creation
//! form and completion toggles.

use std::collections::HashSet;

use tasklist_shared::{
  TaskCreate,
  TaskDto,
  TaskPatch
};
use tracing::info;

use crate::client::ApiClient;
use crate::datetime::parse_date_input;
use crate::fetch::FetchGuard;
use crate::transport::Transport;

pub const REQUIRED_FIELDS: &str =
  "Short description and due date are \
   required";
pub const INVALID_DUE_DATE: &str =
  "Due date must be a valid date";
pub const LOAD_TASKS_FAILED: &str =
  "Failed to load tasks";
pub const CREATE_TASK_FAILED: &str =
  "Failed to create task";
pub const UPDATE_TASK_FAILED: &str =
  "Failed to update task";

const PREVIEW_CHARS: usize = 25;

#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
)]
pub struct TaskDraft {
  pub short_desc: String,
  pub long_desc:  String,
  pub due_date:   String
}

impl TaskDraft {
  /// Builds the create payload. A blank long description is left out.
  pub fn validate(
    &self
  ) -> Result<TaskCreate, String> {
    let short_desc =
      self.short_desc.trim();
    let due_date = self.due_date.trim();
    if short_desc.is_empty()
      || due_date.is_empty()
    {
      return Err(
        REQUIRED_FIELDS.to_string()
      );
    }
    if parse_date_input(due_date)
      .is_none()
    {
      return Err(
        INVALID_DUE_DATE.to_string()
      );
    }

    let long_desc = Some(
      self.long_desc.trim()
    )
    .filter(|text| !text.is_empty())
    .map(str::to_string);

    Ok(TaskCreate {
      short_desc: short_desc.to_string(),
      long_desc,
      due_date: due_date.to_string()
    })
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum DraftField {
  ShortDesc,
  LongDesc,
  DueDate
}

#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
)]
pub struct TaskBoardState {
  /// Active partition followed by the completed one, as fetched.
  pub tasks:          Vec<TaskDto>,
  pub show_completed: bool,
  pub draft:          TaskDraft,
  pub error:          Option<String>
}

#[derive(Debug, Clone, PartialEq)]
pub enum TaskBoardAction {
  Loaded(TasksLoaded),
  Edit(DraftField, String),
  CreateFailed(String),
  Created,
  Toggled,
  ToggleFailed(String),
  ToggleShowCompleted
}

impl TaskBoardAction {
  /// Whether a mutation succeeded and the board must be reloaded. The
  /// visibility toggle reloads through its change of [`BoardKey`] instead.
  pub fn needs_reload(&self) -> bool {
    matches!(
      self,
      Self::Created | Self::Toggled
    )
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct TasksLoaded {
  pub tasks: Vec<TaskDto>,
  pub error: Option<String>
}

impl TaskBoardState {
  pub fn apply(
    &mut self,
    action: TaskBoardAction
  ) {
    match action {
      | TaskBoardAction::Loaded(
        loaded
      ) => {
        self.tasks = loaded.tasks;
        self.error = loaded.error;
      }
      | TaskBoardAction::Edit(
        field,
        value
      ) => {
        match field {
          | DraftField::ShortDesc => {
            self.draft.short_desc = value;
          }
          | DraftField::LongDesc => {
            self.draft.long_desc = value;
          }
          | DraftField::DueDate => {
            self.draft.due_date = value;
          }
        }
      }
      | TaskBoardAction::CreateFailed(
        message
      )
      | TaskBoardAction::ToggleFailed(
        message
      ) => {
        self.error = Some(message);
      }
      | TaskBoardAction::Created => {
        self.draft = TaskDraft::default();
        self.error = None;
      }
      | TaskBoardAction::Toggled => {}
      | TaskBoardAction::ToggleShowCompleted => {
        self.show_completed =
          !self.show_completed;
      }
    }
  }

  pub fn active_tasks(
    &self
  ) -> Vec<&TaskDto> {
    section(&self.tasks, false)
  }

  /// Empty while the completed partition is hidden.
  pub fn completed_tasks(
    &self
  ) -> Vec<&TaskDto> {
    if !self.show_completed {
      return vec![];
    }
    section(&self.tasks, true)
  }
}

/// Tasks with the given `completed` flag, each id at most once.
fn section(
  tasks: &[TaskDto],
  completed: bool
) -> Vec<&TaskDto> {
  let mut seen = HashSet::new();
  tasks
    .iter()
    .filter(|task| {
      task.completed == completed
    })
    .filter(|&task| {
      seen.insert(task.id.as_str())
    })
    .collect()
}

/// Label of the row button that flips completion.
pub fn toggle_label(
  completed: bool
) -> &'static str {
  if completed { "Undo" } else { "Done" }
}

/// Short preview of a long description for board rows.
pub fn long_desc_preview(
  text: &str
) -> String {
  let mut chars = text.chars();
  let head: String = chars
    .by_ref()
    .take(PREVIEW_CHARS)
    .collect();
  if chars.next().is_some() {
    format!("{head}...")
  } else {
    head
  }
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Hash,
)]
pub struct BoardKey {
  pub list_id:        String,
  pub show_completed: bool
}

#[derive(Debug, Clone)]
pub struct TaskBoard<T> {
  client: ApiClient<T>,
  guard:  FetchGuard
}

impl<T: Transport> TaskBoard<T> {
  pub fn new(
    client: ApiClient<T>
  ) -> Self {
    Self {
      client,
      guard: FetchGuard::new()
    }
  }

  /// Fetches the active partition and, when `show_completed` is set, the
  /// completed one. Both fetches share one ticket; `None` means a newer load
  /// started before this one finished.
  #[tracing::instrument(skip(self))]
  pub async fn load(
    &self,
    list_id: &str,
    show_completed: bool
  ) -> Option<TaskBoardAction> {
    let ticket =
      self.guard.issue(BoardKey {
        list_id: list_id.to_string(),
        show_completed
      });

    let mut tasks = Vec::new();
    let mut error = None;

    match self
      .client
      .tasks(list_id, false)
      .await
    {
      | Ok(active) => tasks.extend(active),
      | Err(err) => {
        error = Some(err.user_message(
          LOAD_TASKS_FAILED
        ));
      }
    }

    if show_completed {
      match self
        .client
        .tasks(list_id, true)
        .await
      {
        | Ok(done) => tasks.extend(done),
        | Err(err) => {
          error = Some(
            err.user_message(
              LOAD_TASKS_FAILED
            )
          );
        }
      }
    }

    info!(
      list_id,
      show_completed,
      count = tasks.len(),
      failed = error.is_some(),
      "loaded tasks"
    );

    self.guard.settle(
      &ticket,
      TaskBoardAction::Loaded(
        TasksLoaded {
          tasks,
          error
        }
      )
    )
  }

  pub async fn create(
    &self,
    list_id: &str,
    draft: &TaskDraft
  ) -> TaskBoardAction {
    let request = match draft.validate()
    {
      | Ok(request) => request,
      | Err(message) => {
        return TaskBoardAction::CreateFailed(
          message
        );
      }
    };

    match self
      .client
      .create_task(list_id, &request)
      .await
    {
      | Ok(()) => {
        info!(list_id, "created task");
        TaskBoardAction::Created
      }
      | Err(err) => {
        TaskBoardAction::CreateFailed(
          err.user_message(
            CREATE_TASK_FAILED
          )
        )
      }
    }
  }

  /// Flips only the `completed` flag.
  pub async fn toggle(
    &self,
    task: &TaskDto
  ) -> TaskBoardAction {
    let patch =
      TaskPatch::completed(!task.completed);
    match self
      .client
      .update_task(&task.id, &patch)
      .await
    {
      | Ok(()) => {
        info!(
          task_id = %task.id,
          completed = !task.completed,
          "toggled task"
        );
        TaskBoardAction::Toggled
      }
      | Err(err) => {
        TaskBoardAction::ToggleFailed(
          err.user_message(
            UPDATE_TASK_FAILED
          )
        )
      }
    }
  }
}
