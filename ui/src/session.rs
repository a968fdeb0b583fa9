//! Session persistence in browser local storage.
//!
//! The token and admin identity live under two keys, read once at
//! startup and cleared on logout. Nothing else reads or writes these
//! keys; all other code goes through the yewdux store.

use payloads::responses::AdminIdentity;

use crate::state::Session;

const TOKEN_KEY: &str = "token";
const ADMIN_KEY: &str = "admin";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Read the persisted session, if both keys are present and the admin
/// payload still parses.
pub fn load() -> Option<Session> {
    let storage = local_storage()?;
    let token = storage.get_item(TOKEN_KEY).ok()??;
    let admin_json = storage.get_item(ADMIN_KEY).ok()??;
    let admin: AdminIdentity = serde_json::from_str(&admin_json).ok()?;
    Some(Session { admin, token })
}

pub fn store(session: &Session) {
    let Some(storage) = local_storage() else {
        return;
    };
    let _ = storage.set_item(TOKEN_KEY, &session.token);
    if let Ok(admin_json) = serde_json::to_string(&session.admin) {
        let _ = storage.set_item(ADMIN_KEY, &admin_json);
    }
}

pub fn clear() {
    let Some(storage) = local_storage() else {
        return;
    };
    let _ = storage.remove_item(TOKEN_KEY);
    let _ = storage.remove_item(ADMIN_KEY);
}
