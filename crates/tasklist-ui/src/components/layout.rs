use tasklist_core::routes::AppRoute;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

use super::{
  ListPanel,
  TaskBoard,
  TaskDetail
};

pub const NO_LIST_SELECTED: &str =
  "Select a list to see its tasks.";

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
  pub route: AppRoute
}

#[function_component(Layout)]
pub fn layout(
  props: &LayoutProps
) -> Html {
  let selection = props.route.selection();

  let main = match &selection.list_id {
    | Some(list_id) => {
      html! {
          <TaskBoard
              list_id={list_id.clone()}
              route={props.route.clone()}
          />
      }
    }
    | None => {
      html! {
          <div class="placeholder">{ NO_LIST_SELECTED }</div>
      }
    }
  };

  html! {
      <div class="layout">
          <ListPanel selection={selection.clone()} />
          <main class="content">{ main }</main>
          <TaskDetail selection={selection} />
      </div>
  }
}
