//! End-to-end walk through the app against the fake backend: every step
//! goes through the route gate, the panel controllers and their reducers the
//! same way the browser components drive them.

mod common;

use common::{
  EMAIL,
  FakeBackend,
  PASSWORD,
  boot
};
use tasklist_core::auth::{
  self,
  LoginForm
};
use tasklist_core::board::{
  DraftField,
  TaskBoard,
  TaskBoardAction,
  TaskBoardState
};
use tasklist_core::lists::{
  ListPanel,
  ListPanelAction,
  ListPanelState
};
use tasklist_core::routes::{
  AppRoute,
  Gate,
  resolve
};
use tasklist_core::session::MemoryStorage;

fn navigate(
  target: AppRoute,
  authenticated: bool
) -> AppRoute {
  let mut route = target;
  loop {
    match resolve(&route, authenticated) {
      | Gate::Render(route) => return route,
      | Gate::Redirect(next) => route = next
    }
  }
}

#[tokio::test]
async fn groceries_walkthrough() {
  let backend = FakeBackend::new();
  let (mut session, client) =
    boot(&backend, MemoryStorage::new());

  assert_eq!(
    navigate(AppRoute::Root, session.is_authenticated()),
    AppRoute::Login
  );

  let credential = auth::login(
    &client,
    &LoginForm {
      email:    EMAIL.to_string(),
      password: PASSWORD.to_string()
    }
  )
  .await
  .expect("login");
  session.set_credential(Some(credential));

  let route =
    navigate(AppRoute::Root, session.is_authenticated());
  assert_eq!(route, AppRoute::Lists);
  assert!(
    route.selection().list_id.is_none(),
    "overview shows the placeholder"
  );

  // Sidebar: create "Groceries" and pick it.
  let panel = ListPanel::new(client.clone());
  let mut lists = ListPanelState::default();
  lists.apply(ListPanelAction::OpenCreate);
  lists.apply(ListPanelAction::EditDraft(
    "Groceries".to_string()
  ));
  let created = panel
    .create(
      lists.create_draft.as_deref().unwrap_or_default()
    )
    .await;
  lists.apply(created);
  if let Some(loaded) = panel.load().await {
    lists.apply(loaded);
  }
  let groceries = lists
    .lists
    .iter()
    .find(|list| list.name == "Groceries")
    .cloned()
    .expect("new list in sidebar");

  let route = navigate(
    AppRoute::List {
      list_id: groceries.id.clone()
    },
    session.is_authenticated()
  );
  let list_id = route
    .selection()
    .list_id
    .expect("list selected");

  // Board: add a task; it shows up as active only.
  let board = TaskBoard::new(client.clone());
  let mut tasks = TaskBoardState::default();
  tasks.apply(TaskBoardAction::Edit(
    DraftField::ShortDesc,
    "Buy milk".to_string()
  ));
  tasks.apply(TaskBoardAction::Edit(
    DraftField::DueDate,
    "2024-01-01".to_string()
  ));
  let created =
    board.create(&list_id, &tasks.draft).await;
  assert!(created.needs_reload());
  tasks.apply(created);
  if let Some(loaded) = board
    .load(&list_id, tasks.show_completed)
    .await
  {
    tasks.apply(loaded);
  }
  assert_eq!(tasks.active_tasks().len(), 1);
  assert!(tasks.completed_tasks().is_empty());

  // Complete it, then reveal the completed section.
  let milk = tasks.active_tasks()[0].clone();
  tasks.apply(board.toggle(&milk).await);
  tasks.apply(
    TaskBoardAction::ToggleShowCompleted
  );
  if let Some(loaded) = board
    .load(&list_id, tasks.show_completed)
    .await
  {
    tasks.apply(loaded);
  }
  assert!(tasks.active_tasks().is_empty());
  let done = tasks.completed_tasks();
  assert_eq!(done.len(), 1);
  assert_eq!(done[0].short_desc, "Buy milk");
  assert!(done[0].completed);

  // Delete the open list from the sidebar.
  lists.apply(ListPanelAction::RequestDelete(
    groceries.clone()
  ));
  let outcome = panel
    .delete(&groceries, || route.selection())
    .await;
  assert_eq!(
    outcome.navigate,
    Some(AppRoute::Lists)
  );
  lists.apply(outcome.action);
  if let Some(loaded) = panel.load().await {
    lists.apply(loaded);
  }
  assert!(lists.lists.is_empty());
  assert!(lists.pending_delete.is_none());

  assert_eq!(
    session.logout(),
    AppRoute::Login
  );
  assert_eq!(
    navigate(AppRoute::Lists, session.is_authenticated()),
    AppRoute::Login
  );
}
