use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::state::State;
use crate::{Route, session};

/// Clears the persisted session and returns to the record list. The
/// token is client-held only; there is no server-side logout call.
#[hook]
pub fn use_logout() -> Callback<MouseEvent> {
    let (_, dispatch) = use_store::<State>();
    let navigator = use_navigator().unwrap();

    Callback::from(move |_| {
        session::clear();
        dispatch.reduce_mut(|state| state.logout());
        navigator.push(&Route::Records);
    })
}
