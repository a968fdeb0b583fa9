use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::hooks::use_logout;
use crate::state::State;
use crate::Route;

#[function_component]
pub fn Header() -> Html {
    let (state, _) = use_store::<State>();
    let on_logout = use_logout();

    html! {
        <header class="bg-white dark:bg-neutral-800 border-b border-neutral-200 dark:border-neutral-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center space-x-6">
                        <Link<Route> to={Route::Records} classes="text-xl font-semibold text-neutral-900 dark:text-white">
                            {"Transformer Asset Manager"}
                        </Link<Route>>
                        <Link<Route> to={Route::Records} classes="text-sm text-neutral-600 dark:text-neutral-300 hover:text-neutral-900 dark:hover:text-white">
                            {"Records"}
                        </Link<Route>>
                        if state.is_authenticated() {
                            <Link<Route> to={Route::Upload} classes="text-sm text-neutral-600 dark:text-neutral-300 hover:text-neutral-900 dark:hover:text-white">
                                {"Upload"}
                            </Link<Route>>
                        }
                    </div>
                    <div class="flex items-center space-x-4">
                        if let Some(admin) = state.current_admin() {
                            <span class="text-sm text-neutral-600 dark:text-neutral-300">
                                {admin.display_label().to_string()}
                            </span>
                            <button
                                onclick={on_logout}
                                class="text-sm font-medium text-neutral-900 dark:text-neutral-100 underline"
                            >
                                {"Log out"}
                            </button>
                        } else {
                            <Link<Route> to={Route::Login} classes="text-sm font-medium text-neutral-900 dark:text-neutral-100 underline">
                                {"Admin login"}
                            </Link<Route>>
                        }
                    </div>
                </div>
            </div>
        </header>
    }
}
