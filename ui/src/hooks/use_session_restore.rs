use yew::prelude::*;
use yewdux::prelude::*;

use crate::state::{AuthState, State};
use crate::session;

/// Reads the persisted session from local storage once at startup and
/// settles the auth state either way.
#[hook]
pub fn use_session_restore() {
    let (_state, dispatch) = use_store::<State>();

    use_effect_with((), move |_| {
        let restored = session::load();
        match &restored {
            Some(session) => {
                tracing::debug!(
                    "restored session for {}",
                    session.admin.username
                );
            }
            None => tracing::debug!("no persisted session"),
        }
        dispatch.reduce_mut(|state| {
            state.auth_state = match restored {
                Some(session) => AuthState::LoggedIn(session),
                None => AuthState::LoggedOut,
            };
        });
    });
}
