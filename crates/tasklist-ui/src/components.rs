mod confirm_modal;
mod layout;
mod list_panel;
mod login_page;
mod route_gate;
mod signup_page;
mod task_board;
mod task_detail;
mod task_row;

pub use confirm_modal::ConfirmModal;
pub use layout::Layout;
pub use list_panel::ListPanel;
pub use login_page::LoginPage;
pub use route_gate::RouteGate;
pub use signup_page::SignupPage;
pub use task_board::TaskBoard;
pub use task_detail::TaskDetail;
pub use task_row::TaskRow;

use web_sys::{
  HtmlInputElement,
  HtmlTextAreaElement,
  InputEvent
};
use yew::TargetCast;

/// Current value of the `<input>` that fired `event`.
pub(crate) fn input_value(
  event: &InputEvent
) -> String {
  let input: HtmlInputElement =
    event.target_unchecked_into();
  input.value()
}

pub(crate) fn textarea_value(
  event: &InputEvent
) -> String {
  let area: HtmlTextAreaElement =
    event.target_unchecked_into();
  area.value()
}
