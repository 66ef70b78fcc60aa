use tasklist_core::board::{
  self,
  DraftField,
  TaskBoardAction,
  TaskBoardState
};
use tasklist_core::routes::AppRoute;
use tasklist_shared::TaskDto;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
  InputEvent,
  SubmitEvent
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html,
  use_effect_with,
  use_memo,
  use_reducer
};
use yew_router::prelude::use_navigator;

use super::{
  TaskRow,
  input_value,
  textarea_value
};
use crate::app::ui_debug;
use crate::routes::Route;
use crate::session::use_session;
use crate::store::Store;

pub const NO_ACTIVE_TASKS: &str =
  "No active tasks.";
pub const NO_COMPLETED_TASKS: &str =
  "No completed tasks.";

#[derive(Properties, PartialEq)]
pub struct TaskBoardProps {
  pub list_id: String,
  /// Current location; a change re-runs the load.
  pub route:   AppRoute
}

#[function_component(TaskBoard)]
pub fn task_board(
  props: &TaskBoardProps
) -> Html {
  let session = use_session();
  let navigator = use_navigator();
  let store = use_reducer(
    Store::<TaskBoardState>::default
  );
  let controller = {
    let client = session.client();
    use_memo((), move |_| {
      board::TaskBoard::new(client)
    })
  };

  {
    let controller = controller.clone();
    let dispatcher = store.dispatcher();
    use_effect_with(
      (
        props.list_id.clone(),
        store.show_completed,
        props.route.clone(),
        store.reloads
      ),
      move |(list_id, show_completed, _, _)| {
        let list_id = list_id.clone();
        let show_completed =
          *show_completed;
        ui_debug(
          "tasks.load",
          &format!(
            "list={list_id} \
             completed={show_completed}"
          )
        );
        spawn_local(async move {
          if let Some(action) = controller
            .load(&list_id, show_completed)
            .await
          {
            dispatcher.dispatch(action);
          }
        });
        || ()
      }
    );
  }

  let on_edit = |field: DraftField| {
    let dispatcher = store.dispatcher();
    Callback::from(move |e: InputEvent| {
      dispatcher.dispatch(
        TaskBoardAction::Edit(
          field,
          input_value(&e)
        )
      );
    })
  };

  let on_edit_long_desc = {
    let dispatcher = store.dispatcher();
    Callback::from(move |e: InputEvent| {
      dispatcher.dispatch(
        TaskBoardAction::Edit(
          DraftField::LongDesc,
          textarea_value(&e)
        )
      );
    })
  };

  let on_submit = {
    let dispatcher = store.dispatcher();
    let controller = controller.clone();
    let list_id = props.list_id.clone();
    let draft = store.draft.clone();
    Callback::from(move |e: SubmitEvent| {
      e.prevent_default();
      let dispatcher = dispatcher.clone();
      let controller = controller.clone();
      let list_id = list_id.clone();
      let draft = draft.clone();
      spawn_local(async move {
        let action = controller
          .create(&list_id, &draft)
          .await;
        dispatcher.dispatch(action);
      });
    })
  };

  let on_toggle = {
    let dispatcher = store.dispatcher();
    let controller = controller.clone();
    Callback::from(move |task: TaskDto| {
      let dispatcher = dispatcher.clone();
      let controller = controller.clone();
      spawn_local(async move {
        let action =
          controller.toggle(&task).await;
        dispatcher.dispatch(action);
      });
    })
  };

  let on_select = {
    let navigator = navigator.clone();
    let list_id = props.list_id.clone();
    Callback::from(move |task_id: String| {
      if let Some(navigator) = &navigator {
        navigator.push(&Route::Task {
          list_id: list_id.clone(),
          task_id
        });
      }
    })
  };

  let on_toggle_show_completed = {
    let dispatcher = store.dispatcher();
    Callback::from(move |_: MouseEvent| {
      dispatcher.dispatch(
        TaskBoardAction::ToggleShowCompleted
      );
    })
  };

  let selected_task = props
    .route
    .selection()
    .task_id;
  let render_section =
    |tasks: Vec<&TaskDto>, empty: &'static str| {
      if tasks.is_empty() {
        return html! {
            <div class="empty">{ empty.to_string() }</div>
        };
      }
      html! {
          <ul class="tasks">
              {
                  for tasks.into_iter().map(|task| html! {
                      <TaskRow
                          key={task.id.clone()}
                          task={task.clone()}
                          selected={selected_task.as_deref() == Some(task.id.as_str())}
                          on_select={on_select.clone()}
                          on_toggle={on_toggle.clone()}
                      />
                  })
              }
          </ul>
      }
    };

  let draft = &store.draft;

  html! {
      <section class="panel board">
          <form class="task-form" onsubmit={on_submit}>
              <div class="field">
                  <label>{ "Short Description" }</label>
                  <input
                      value={draft.short_desc.clone()}
                      oninput={on_edit(DraftField::ShortDesc)}
                      placeholder="What needs doing?"
                  />
              </div>
              <div class="field">
                  <label>{ "Details (optional)" }</label>
                  <textarea
                      value={draft.long_desc.clone()}
                      oninput={on_edit_long_desc}
                  />
              </div>
              <div class="field">
                  <label>{ "Due Date" }</label>
                  <input
                      type="date"
                      value={draft.due_date.clone()}
                      oninput={on_edit(DraftField::DueDate)}
                  />
              </div>
              <button type="submit" class="btn">{ "Add Task" }</button>
          </form>

          {
              if let Some(err) = store.error.clone() {
                  html! { <div class="form-error">{ err }</div> }
              } else {
                  html! {}
              }
          }

          <div class="header">{ "Active" }</div>
          { render_section(store.active_tasks(), NO_ACTIVE_TASKS) }

          <button type="button" class="btn small" onclick={on_toggle_show_completed}>
              { if store.show_completed { "Hide Completed" } else { "Show Completed" } }
          </button>
          {
              if store.show_completed {
                  html! {
                      <>
                          <div class="header">{ "Completed" }</div>
                          { render_section(store.completed_tasks(), NO_COMPLETED_TASKS) }
                      </>
                  }
              } else {
                  html! {}
              }
          }
      </section>
  }
}
