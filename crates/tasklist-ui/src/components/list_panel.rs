use tasklist_core::lists::{
  self,
  ListPanelAction,
  ListPanelState
};
use tasklist_core::routes::Selection;
use tasklist_shared::ListDto;
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
  classes,
  function_component,
  html,
  use_effect_with,
  use_memo,
  use_reducer
};
use yew_router::prelude::use_navigator;

use super::{
  ConfirmModal,
  input_value
};
use crate::app::ui_debug;
use crate::routes::{
  Route,
  current_selection
};
use crate::session::use_session;
use crate::store::Store;

#[derive(Properties, PartialEq)]
pub struct ListPanelProps {
  pub selection: Selection
}

#[function_component(ListPanel)]
pub fn list_panel(
  props: &ListPanelProps
) -> Html {
  let session = use_session();
  let navigator = use_navigator();
  let store = use_reducer(
    Store::<ListPanelState>::default
  );
  let controller = {
    let client = session.client();
    use_memo((), move |_| {
      lists::ListPanel::new(client)
    })
  };

  {
    let controller = controller.clone();
    let dispatcher = store.dispatcher();
    use_effect_with(
      store.reloads,
      move |reloads| {
        ui_debug(
          "lists.load",
          &format!("reload #{reloads}")
        );
        spawn_local(async move {
          if let Some(action) =
            controller.load().await
          {
            dispatcher.dispatch(action);
          }
        });
        || ()
      }
    );
  }

  {
    let controller = controller.clone();
    let dispatcher = store.dispatcher();
    use_effect_with((), move |_| {
      spawn_local(async move {
        if let Some(action) = controller
          .load_profile()
          .await
        {
          dispatcher.dispatch(action);
        }
      });
      || ()
    });
  }

  let on_toggle_expanded = {
    let dispatcher = store.dispatcher();
    Callback::from(move |_: MouseEvent| {
      dispatcher.dispatch(
        ListPanelAction::ToggleExpanded
      );
    })
  };

  let on_open_create = {
    let dispatcher = store.dispatcher();
    Callback::from(move |_: MouseEvent| {
      dispatcher.dispatch(
        ListPanelAction::OpenCreate
      );
    })
  };

  let on_close_create = {
    let dispatcher = store.dispatcher();
    Callback::from(move |_: MouseEvent| {
      dispatcher.dispatch(
        ListPanelAction::CloseCreate
      );
    })
  };

  let on_draft_input = {
    let dispatcher = store.dispatcher();
    Callback::from(move |e: InputEvent| {
      dispatcher.dispatch(
        ListPanelAction::EditDraft(
          input_value(&e)
        )
      );
    })
  };

  let on_submit_create = {
    let dispatcher = store.dispatcher();
    let controller = controller.clone();
    let draft = store
      .create_draft
      .clone()
      .unwrap_or_default();
    Callback::from(move |e: SubmitEvent| {
      e.prevent_default();
      let dispatcher = dispatcher.clone();
      let controller = controller.clone();
      let draft = draft.clone();
      spawn_local(async move {
        let action =
          controller.create(&draft).await;
        dispatcher.dispatch(action);
      });
    })
  };

  let on_cancel_delete = {
    let dispatcher = store.dispatcher();
    Callback::from(move |_: ()| {
      dispatcher.dispatch(
        ListPanelAction::CancelDelete
      );
    })
  };

  let on_confirm_delete = {
    let dispatcher = store.dispatcher();
    let controller = controller.clone();
    let navigator = navigator.clone();
    let pending =
      store.pending_delete.clone();
    Callback::from(move |_: ()| {
      let Some(list) = pending.clone()
      else {
        return;
      };
      let dispatcher = dispatcher.clone();
      let controller = controller.clone();
      let navigator = navigator.clone();
      spawn_local(async move {
        let outcome = controller
          .delete(&list, current_selection)
          .await;
        dispatcher.dispatch(outcome.action);
        if let (Some(route), Some(navigator)) =
          (outcome.navigate, navigator)
        {
          navigator
            .push(&Route::from(route));
        }
      });
    })
  };

  let on_logout = {
    let session = session.clone();
    let navigator = navigator.clone();
    Callback::from(move |_: MouseEvent| {
      let next = session.logout();
      ui_debug(
        "session.logout",
        "credential cleared"
      );
      if let Some(navigator) = &navigator {
        navigator.push(&Route::from(next));
      }
    })
  };

  let list_row = |list: &ListDto| {
    let selected = props
      .selection
      .is_list_selected(&list.id);
    let on_select = {
      let navigator = navigator.clone();
      let list_id = list.id.clone();
      Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator
        {
          navigator.push(&Route::List {
            list_id: list_id.clone()
          });
        }
      })
    };
    let on_request_delete = {
      let dispatcher = store.dispatcher();
      let list = list.clone();
      Callback::from(move |e: MouseEvent| {
        e.stop_propagation();
        dispatcher.dispatch(
          ListPanelAction::RequestDelete(
            list.clone()
          )
        );
      })
    };

    html! {
        <li class={classes!("list-item", selected.then_some("selected"))} onclick={on_select}>
            <span class="list-name">{ &list.name }</span>
            <button type="button" class="btn danger small" title="Delete list" onclick={on_request_delete}>{ "×" }</button>
        </li>
    }
  };

  if !store.expanded {
    return html! {
        <aside class="panel sidebar collapsed">
            <button type="button" class="btn small" title="Expand" onclick={on_toggle_expanded}>{ "»" }</button>
        </aside>
    };
  }

  let profile = &store.profile;
  // Modal errors render inside the modal.
  let panel_error =
    store.error.clone().filter(|_| {
      !store.is_creating()
        && store.pending_delete.is_none()
    });

  html! {
      <aside class="panel sidebar">
          <div class="header">
              <span>{ "My Lists" }</span>
              <button type="button" class="btn small" title="Collapse" onclick={on_toggle_expanded}>{ "«" }</button>
          </div>
          {
              if let Some(err) = panel_error {
                  html! { <div class="form-error">{ err }</div> }
              } else {
                  html! {}
              }
          }
          <ul class="lists">
              { for store.lists.iter().map(list_row) }
          </ul>
          <button type="button" class="btn" onclick={on_open_create}>{ "New List" }</button>

          <div class="footer profile">
              <div class="profile-name">{ format!("{} {}", profile.first_name, profile.last_name) }</div>
              <div class="profile-email">{ &profile.email }</div>
              <button type="button" class="btn" onclick={on_logout}>{ "Logout" }</button>
          </div>

          {
              if let Some(draft) = store.create_draft.clone() {
                  html! {
                      <div class="modal-backdrop" onclick={on_close_create.clone()}>
                          <div class="modal modal-sm" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                              <div class="header">{ "New List" }</div>
                              <form class="content" onsubmit={on_submit_create}>
                                  {
                                      if let Some(err) = store.error.clone() {
                                          html! { <div class="form-error">{ err }</div> }
                                      } else {
                                          html! {}
                                      }
                                  }
                                  <div class="field">
                                      <label>{ "List Name" }</label>
                                      <input
                                          value={draft}
                                          oninput={on_draft_input}
                                          placeholder="List name"
                                      />
                                  </div>
                                  <div class="footer">
                                      <button type="button" class="btn" onclick={on_close_create}>{ "Cancel" }</button>
                                      <button type="submit" class="btn">{ "Create" }</button>
                                  </div>
                              </form>
                          </div>
                      </div>
                  }
              } else {
                  html! {}
              }
          }

          {
              if let Some(list) = store.pending_delete.clone() {
                  html! {
                      <ConfirmModal
                          title="Delete List"
                          message={format!("Delete \"{}\" and all of its tasks?", list.name)}
                          error={store.error.clone()}
                          on_confirm={on_confirm_delete}
                          on_cancel={on_cancel_delete}
                      />
                  }
              } else {
                  html! {}
              }
          }
      </aside>
  }
}
