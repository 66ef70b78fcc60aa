use tasklist_core::board::{
  long_desc_preview,
  toggle_label
};
use tasklist_core::datetime::format_display_date;
use tasklist_shared::TaskDto;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskRowProps {
  pub task:      TaskDto,
  pub selected:  bool,
  pub on_select: Callback<String>,
  pub on_toggle: Callback<TaskDto>
}

#[function_component(TaskRow)]
pub fn task_row(
  props: &TaskRowProps
) -> Html {
  let task = &props.task;

  let on_select = {
    let on_select =
      props.on_select.clone();
    let id = task.id.clone();
    Callback::from(move |_: MouseEvent| {
      on_select.emit(id.clone())
    })
  };
  let on_toggle = {
    let on_toggle =
      props.on_toggle.clone();
    let task = task.clone();
    Callback::from(move |e: MouseEvent| {
      e.stop_propagation();
      on_toggle.emit(task.clone());
    })
  };

  let preview = task
    .long_desc
    .as_deref()
    .map(str::trim)
    .filter(|text| !text.is_empty())
    .map(long_desc_preview);

  html! {
      <li
          class={classes!(
              "task-row",
              task.completed.then_some("completed"),
              props.selected.then_some("selected")
          )}
          onclick={on_select}
      >
          <button type="button" class="btn small toggle" onclick={on_toggle}>
              { toggle_label(task.completed) }
          </button>
          <div class="task-main">
              <div class="task-title">{ &task.short_desc }</div>
              {
                  match preview {
                      Some(text) => html! { <div class="task-subtitle">{ text }</div> },
                      None => html! {}
                  }
              }
          </div>
          <span class="badge">{ format!("due: {}", format_display_date(&task.due_date)) }</span>
      </li>
  }
}
