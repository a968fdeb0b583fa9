use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::state::{AuthState, State};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
}

/// Gates mutating pages behind the admin session. While the persisted
/// session is still being restored nothing is rendered; once settled,
/// logged-out visitors are sent to the login page.
#[function_component]
pub fn RequireAuth(props: &Props) -> Html {
    let (state, _) = use_store::<State>();
    let navigator = use_navigator().unwrap();

    {
        let is_logged_out =
            matches!(state.auth_state, AuthState::LoggedOut);
        use_effect_with(is_logged_out, move |logged_out| {
            if *logged_out {
                navigator.push(&Route::Login);
            }
        });
    }

    match state.auth_state {
        AuthState::LoggedIn(_) => html! { <>{for props.children.iter()}</> },
        AuthState::Unknown | AuthState::LoggedOut => html! {},
    }
}
