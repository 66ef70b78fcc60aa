use tasklist_core::detail::{
  self,
  TaskDetailAction,
  TaskDetailState,
  TaskDetailView
};
use tasklist_core::routes::Selection;
use wasm_bindgen_futures::spawn_local;
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

use super::ConfirmModal;
use crate::app::ui_debug;
use crate::routes::{
  Route,
  current_selection
};
use crate::session::use_session;
use crate::store::Store;

#[derive(Properties, PartialEq)]
pub struct TaskDetailProps {
  pub selection: Selection
}

#[function_component(TaskDetail)]
pub fn task_detail(
  props: &TaskDetailProps
) -> Html {
  let session = use_session();
  let navigator = use_navigator();
  let store = use_reducer(
    Store::<TaskDetailState>::default
  );
  let controller = {
    let client = session.client();
    use_memo((), move |_| {
      detail::TaskDetail::new(client)
    })
  };

  {
    let controller = controller.clone();
    let dispatcher = store.dispatcher();
    use_effect_with(
      props.selection.task_id.clone(),
      move |task_id| {
        dispatcher.dispatch(
          TaskDetailAction::Select(
            task_id.clone()
          )
        );
        if let Some(task_id) =
          task_id.clone()
        {
          ui_debug(
            "task.load",
            &format!("task={task_id}")
          );
          spawn_local(async move {
            if let Some(action) =
              controller
                .load(&task_id)
                .await
            {
              dispatcher.dispatch(action);
            }
          });
        }
        || ()
      }
    );
  }

  if !props.selection.has_task() {
    return html! {};
  }

  let on_open_confirm = {
    let dispatcher = store.dispatcher();
    Callback::from(move |_: MouseEvent| {
      dispatcher.dispatch(
        TaskDetailAction::OpenConfirm
      );
    })
  };

  let on_cancel_confirm = {
    let dispatcher = store.dispatcher();
    Callback::from(move |_: ()| {
      dispatcher.dispatch(
        TaskDetailAction::CancelConfirm
      );
    })
  };

  let on_confirm_delete = {
    let dispatcher = store.dispatcher();
    let controller = controller.clone();
    let navigator = navigator.clone();
    let task_id =
      props.selection.task_id.clone();
    Callback::from(move |_: ()| {
      let Some(task_id) = task_id.clone()
      else {
        return;
      };
      let dispatcher = dispatcher.clone();
      let controller = controller.clone();
      let navigator = navigator.clone();
      spawn_local(async move {
        match controller
          .delete(&task_id, current_selection)
          .await
        {
          | Ok(next) => {
            if let (Some(next), Some(navigator)) =
              (next, navigator)
            {
              navigator
                .push(&Route::from(next));
            }
          }
          | Err(action) => {
            dispatcher.dispatch(action);
          }
        }
      });
    })
  };

  let body = match store
    .current_task(&props.selection)
    .map(TaskDetailView::from)
  {
    | Some(view) => {
      html! {
          <>
              <div class={if view.completed { "task-title completed" } else { "task-title" }}>
                  { view.title }
              </div>
              <div class="task-subtitle">{ view.description }</div>
              {
                  match view.created_on {
                      Some(created) => html! {
                          <div class="kv">
                              <strong>{ "created" }</strong>
                              <div>{ created }</div>
                          </div>
                      },
                      None => html! {}
                  }
              }
              <div class="kv">
                  <strong>{ "due" }</strong>
                  <div>{ view.due_on }</div>
              </div>
              <div class="actions">
                  <button class="btn danger" onclick={on_open_confirm}>{ "Delete" }</button>
              </div>
          </>
      }
    }
    | None if store.error.is_none() => {
      html! {
          <div class="loading">{ "Loading..." }</div>
      }
    }
    | None => html! {}
  };

  html! {
      <aside class="panel details">
          <div class="header">{ "Task Details" }</div>
          {
              if let Some(err) = store.error.clone().filter(|_| !store.confirm_delete) {
                  html! { <div class="form-error">{ err }</div> }
              } else {
                  html! {}
              }
          }
          <div class="details">{ body }</div>
          {
              if store.confirm_delete {
                  html! {
                      <ConfirmModal
                          title="Delete Task"
                          message="Delete this task? This cannot be undone."
                          error={store.error.clone()}
                          on_confirm={on_confirm_delete}
                          on_cancel={on_cancel_confirm}
                      />
                  }
              } else {
                  html! {}
              }
          }
      </aside>
  }
}
