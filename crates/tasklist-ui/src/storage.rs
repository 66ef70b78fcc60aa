use tasklist_core::CredentialStorage;
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// Credential slot in `window.localStorage`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserStorage {
  key: String
}

impl BrowserStorage {
  pub fn new(key: impl Into<String>) -> Self {
    Self {
      key: key.into()
    }
  }
}

fn local_storage() -> Option<Storage> {
  web_sys::window().and_then(|window| {
    window
      .local_storage()
      .ok()
      .flatten()
  })
}

/// Logs a rejected `localStorage` write. Returns whether it went through.
fn write_succeeded(
  result: Result<(), JsValue>,
  key: &str,
  action: &'static str
) -> bool {
  if result.is_ok() {
    return true;
  }
  tracing::error!(
    key,
    action,
    "localStorage write failed"
  );
  false
}

impl CredentialStorage for BrowserStorage {
  fn load(&self) -> Option<String> {
    local_storage().and_then(|storage| {
      storage
        .get_item(&self.key)
        .ok()
        .flatten()
    })
  }

  fn store(&self, token: &str) {
    match local_storage() {
      | Some(storage) => {
        write_succeeded(
          storage.set_item(&self.key, token),
          &self.key,
          "persist credential"
        );
      }
      | None => {
        tracing::warn!(
          "localStorage unavailable; \
           credential kept in memory \
           only"
        );
      }
    }
  }

  fn clear(&self) {
    match local_storage() {
      | Some(storage) => {
        let removed = write_succeeded(
          storage.remove_item(&self.key),
          &self.key,
          "clear credential"
        );
        if !removed {
          tracing::warn!(
            "stale credential may be \
             restored on next load"
          );
        }
      }
      | None => {
        tracing::warn!(
          "localStorage unavailable; \
           nothing to clear"
        );
      }
    }
  }
}
