mod common;

use std::cell::RefCell;
use std::time::Duration;

use common::{
  FakeBackend,
  TOKEN,
  boot
};
use tasklist_core::lists::{
  self,
  ListPanel,
  ListPanelAction,
  ListPanelState
};
use tasklist_core::routes::{
  AppRoute,
  Selection
};
use tasklist_core::session::MemoryStorage;
use tasklist_core::transport::HttpMethod;

fn signed_in(
  backend: &FakeBackend
) -> ListPanel<FakeBackend> {
  let (_, client) = boot(
    backend,
    MemoryStorage::with_token(TOKEN)
  );
  ListPanel::new(client)
}

async fn refresh(
  panel: &ListPanel<FakeBackend>,
  state: &mut ListPanelState
) {
  if let Some(action) = panel.load().await {
    state.apply(action);
  }
}

#[tokio::test]
async fn created_list_appears_after_refresh()
{
  let backend = FakeBackend::new();
  let panel = signed_in(&backend);
  let mut state = ListPanelState::default();

  refresh(&panel, &mut state).await;
  assert!(state.lists.is_empty());

  state.apply(ListPanelAction::OpenCreate);
  state.apply(ListPanelAction::EditDraft(
    "  Groceries  ".to_string()
  ));
  let draft = state
    .create_draft
    .clone()
    .unwrap_or_default();
  let action = panel.create(&draft).await;
  assert_eq!(action, ListPanelAction::Created);
  assert!(action.needs_refresh());
  state.apply(action);
  refresh(&panel, &mut state).await;

  assert!(!state.is_creating());
  assert_eq!(
    backend.list_names(),
    vec!["Groceries".to_string()]
  );
  assert_eq!(state.lists.len(), 1);
  assert_eq!(state.lists[0].name, "Groceries");
}

#[tokio::test]
async fn blank_name_is_rejected_locally() {
  let backend = FakeBackend::new();
  let panel = signed_in(&backend);

  let action = panel.create("   ").await;
  assert_eq!(
    action,
    ListPanelAction::CreateFailed(
      lists::EMPTY_LIST_NAME.to_string()
    )
  );
  assert_eq!(backend.request_count(), 0);
}

#[tokio::test]
async fn server_rejection_is_shown_verbatim()
{
  let backend = FakeBackend::new();
  backend.fail(
    HttpMethod::Post,
    "/lists",
    400,
    r#"{"message":["name too long","name invalid"]}"#
  );
  let panel = signed_in(&backend);

  assert_eq!(
    panel.create("x").await,
    ListPanelAction::CreateFailed(
      "name too long, name invalid"
        .to_string()
    )
  );

  backend.fail(
    HttpMethod::Post,
    "/lists",
    500,
    ""
  );
  assert_eq!(
    panel.create("x").await,
    ListPanelAction::CreateFailed(
      lists::CREATE_LIST_FAILED.to_string()
    )
  );
}

#[tokio::test]
async fn deleting_open_list_navigates_to_overview()
{
  let backend = FakeBackend::new();
  let home = backend.seed_list("Home");
  let work = backend.seed_list("Work");
  let panel = signed_in(&backend);

  let open_home = AppRoute::Task {
    list_id: home.id.clone(),
    task_id: "99".to_string()
  }
  .selection();

  let outcome =
    panel.delete(&work, || open_home.clone()).await;
  assert_eq!(
    outcome.action,
    ListPanelAction::Deleted
  );
  assert_eq!(outcome.navigate, None);

  let outcome =
    panel.delete(&home, || open_home.clone()).await;
  assert_eq!(
    outcome.navigate,
    Some(AppRoute::Lists)
  );
  assert!(backend.list_names().is_empty());
}

#[tokio::test]
async fn failed_delete_keeps_confirmation_open()
{
  let backend = FakeBackend::new();
  let home = backend.seed_list("Home");
  backend.fail(
    HttpMethod::Delete,
    &format!("/lists/{}", home.id),
    500,
    "{}"
  );
  let panel = signed_in(&backend);
  let mut state = ListPanelState::default();
  refresh(&panel, &mut state).await;

  state.apply(
    ListPanelAction::RequestDelete(
      home.clone()
    )
  );
  let outcome = panel
    .delete(&home, Selection::default)
    .await;
  assert!(outcome.navigate.is_none());
  assert!(!outcome.action.needs_refresh());
  state.apply(outcome.action);

  assert_eq!(
    state.pending_delete,
    Some(home)
  );
  assert_eq!(
    state.error.as_deref(),
    Some(lists::DELETE_LIST_FAILED)
  );
  assert_eq!(state.lists.len(), 1);
}

#[tokio::test]
async fn failed_load_empties_sidebar() {
  let backend = FakeBackend::new();
  backend.seed_list("Home");
  let panel = signed_in(&backend);
  let mut state = ListPanelState::default();

  refresh(&panel, &mut state).await;
  assert_eq!(state.lists.len(), 1);

  backend.fail(
    HttpMethod::Get,
    "/lists",
    503,
    ""
  );
  refresh(&panel, &mut state).await;
  assert!(state.lists.is_empty());
  assert_eq!(
    state.error.as_deref(),
    Some(lists::LOAD_LISTS_FAILED)
  );

  backend.clear_failures();
  refresh(&panel, &mut state).await;
  assert_eq!(state.lists.len(), 1);
  assert!(state.error.is_none());
}

#[tokio::test]
async fn profile_feeds_greeting() {
  let backend = FakeBackend::new();
  let panel = signed_in(&backend);
  let mut state = ListPanelState::default();

  if let Some(action) =
    panel.load_profile().await
  {
    state.apply(action);
  }
  assert_eq!(
    state.profile.first_name,
    "Alice"
  );
}

#[tokio::test(start_paused = true)]
async fn navigation_during_delete_decides_redirect()
{
  let backend = FakeBackend::new();
  let home = backend.seed_list("Home");
  let work = backend.seed_list("Work");
  backend.delay(
    &format!("/lists/{}", home.id),
    200
  );
  backend.delay(
    &format!("/lists/{}", work.id),
    200
  );
  let panel = signed_in(&backend);

  // Home was open when Delete was clicked, then the user moved to Work.
  let location = RefCell::new(
    AppRoute::List {
      list_id: home.id.clone()
    }
    .selection()
  );
  let (outcome, ()) = tokio::join!(
    panel.delete(&home, || {
      location.borrow().clone()
    }),
    async {
      tokio::time::sleep(
        Duration::from_millis(50)
      )
      .await;
      *location.borrow_mut() = AppRoute::List {
        list_id: work.id.clone()
      }
      .selection();
    }
  );
  assert_eq!(outcome.navigate, None);

  // Work was not open when clicked, but is by the time the server answers.
  *location.borrow_mut() =
    Selection::default();
  let (outcome, ()) = tokio::join!(
    panel.delete(&work, || {
      location.borrow().clone()
    }),
    async {
      tokio::time::sleep(
        Duration::from_millis(50)
      )
      .await;
      *location.borrow_mut() = AppRoute::List {
        list_id: work.id.clone()
      }
      .selection();
    }
  );
  assert_eq!(
    outcome.navigate,
    Some(AppRoute::Lists)
  );
}
