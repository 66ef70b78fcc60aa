//! Adapts the panel states from `tasklist_core` to `use_reducer`.

use std::ops::Deref;
use std::rc::Rc;

use tasklist_core::board::{
  TaskBoardAction,
  TaskBoardState
};
use tasklist_core::detail::{
  TaskDetailAction,
  TaskDetailState
};
use tasklist_core::lists::{
  ListPanelAction,
  ListPanelState
};
use yew::Reducible;

pub trait PanelState:
  Clone + Default + PartialEq
{
  type Action;

  fn apply(&mut self, action: Self::Action);

  /// Whether the panel's collection must be fetched again after `action`.
  fn reloads_after(
    _action: &Self::Action
  ) -> bool {
    false
  }
}

impl PanelState for ListPanelState {
  type Action = ListPanelAction;

  fn apply(&mut self, action: Self::Action) {
    ListPanelState::apply(self, action);
  }

  fn reloads_after(
    action: &Self::Action
  ) -> bool {
    action.needs_refresh()
  }
}

impl PanelState for TaskBoardState {
  type Action = TaskBoardAction;

  fn apply(&mut self, action: Self::Action) {
    TaskBoardState::apply(self, action);
  }

  fn reloads_after(
    action: &Self::Action
  ) -> bool {
    action.needs_reload()
  }
}

impl PanelState for TaskDetailState {
  type Action = TaskDetailAction;

  fn apply(&mut self, action: Self::Action) {
    TaskDetailState::apply(self, action);
  }
}

/// Panel state plus a counter bumped by every action that calls for a
/// refetch. Effects list `reloads` among their dependencies.
#[derive(Debug, Default, PartialEq)]
pub struct Store<S> {
  pub state:   S,
  pub reloads: u64
}

impl<S> Deref for Store<S> {
  type Target = S;

  fn deref(&self) -> &S {
    &self.state
  }
}

impl<S: PanelState> Reducible for Store<S> {
  type Action = S::Action;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let reload = S::reloads_after(&action);
    let mut state = self.state.clone();
    state.apply(action);
    Rc::new(Self {
      state,
      reloads: self.reloads
        + u64::from(reload)
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn mutations_bump_reload_counter() {
    let store =
      Rc::new(Store::<ListPanelState>::default());

    let store = store.reduce(
      ListPanelAction::OpenCreate
    );
    assert_eq!(store.reloads, 0);
    assert!(store.is_creating());

    let store =
      store.reduce(ListPanelAction::Created);
    assert_eq!(store.reloads, 1);
    assert!(!store.is_creating());
  }

  #[test]
  fn detail_actions_never_reload() {
    let store = Rc::new(
      Store::<TaskDetailState>::default()
    );
    let store = store.reduce(
      TaskDetailAction::Select(Some(
        "t1".to_string()
      ))
    );
    assert_eq!(store.reloads, 0);
    assert_eq!(
      store.task_id.as_deref(),
      Some("t1")
    );
  }
}
