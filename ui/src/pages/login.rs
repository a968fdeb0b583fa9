use payloads::requests::LoginCredentials;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::ErrorBanner;
use crate::state::{Session, State};
use crate::{Route, get_api_client, session};

/// Admin login. On success the token and identity are persisted to
/// local storage and pushed into the global store, then the user is
/// sent back to the record list.
#[function_component]
pub fn LoginPage() -> Html {
    let (state, dispatch) = use_store::<State>();
    let navigator = use_navigator().unwrap();

    let username = use_state(String::new);
    let password = use_state(String::new);
    let error_message = use_state(|| None::<String>);
    let is_submitting = use_state(|| false);

    // Already-authenticated visitors have nothing to do here.
    {
        let navigator = navigator.clone();
        use_effect_with(state.is_authenticated(), move |authenticated| {
            if *authenticated {
                navigator.push(&Route::Records);
            }
        });
    }

    let on_username_input = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let error_message = error_message.clone();
        let is_submitting = is_submitting.clone();
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let credentials = LoginCredentials {
                username: (*username).clone(),
                password: (*password).clone(),
            };

            let error_message = error_message.clone();
            let is_submitting = is_submitting.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();

            yew::platform::spawn_local(async move {
                is_submitting.set(true);
                error_message.set(None);

                match get_api_client().login(&credentials).await {
                    Ok(response) => {
                        let session = Session {
                            admin: response.admin,
                            token: response.token,
                        };
                        session::store(&session);
                        dispatch.reduce_mut(|state| state.login(session));
                        navigator.push(&Route::Records);
                    }
                    Err(e) => {
                        error_message.set(Some(e.to_string()));
                    }
                }

                is_submitting.set(false);
            });
        })
    };

    let input_class = "w-full px-3 py-2 border border-neutral-300 \
                       dark:border-neutral-600 rounded-md text-sm \
                       bg-white dark:bg-neutral-700 text-neutral-900 \
                       dark:text-neutral-100";
    let label_class = "block text-sm font-medium text-neutral-700 \
                       dark:text-neutral-300 mb-1";

    html! {
        <div class="max-w-md mx-auto bg-white dark:bg-neutral-800 p-6 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700 space-y-4">
            <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                {"Admin Login"}
            </h1>

            if let Some(error) = (*error_message).clone() {
                <ErrorBanner
                    message={error}
                    on_dismiss={
                        let error_message = error_message.clone();
                        Callback::from(move |_| error_message.set(None))
                    }
                />
            }

            <form onsubmit={on_submit} class="space-y-4">
                <div>
                    <label class={label_class}>{"Username"}</label>
                    <input
                        type="text"
                        value={(*username).clone()}
                        oninput={on_username_input}
                        disabled={*is_submitting}
                        class={input_class}
                    />
                </div>

                <div>
                    <label class={label_class}>{"Password"}</label>
                    <input
                        type="password"
                        value={(*password).clone()}
                        oninput={on_password_input}
                        disabled={*is_submitting}
                        class={input_class}
                    />
                </div>

                <button
                    type="submit"
                    disabled={*is_submitting}
                    class="w-full bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white px-4 py-2 rounded-md text-sm font-medium transition-colors disabled:opacity-50"
                >
                    if *is_submitting {
                        {"Logging in..."}
                    } else {
                        {"Log in"}
                    }
                </button>
            </form>
        </div>
    }
}
