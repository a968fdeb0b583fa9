use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn NotFoundPage() -> Html {
    html! {
        <div class="text-center py-12 space-y-4">
            <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                {"Page not found"}
            </h1>
            <Link<Route>
                to={Route::Records}
                classes="text-sm underline text-neutral-700 dark:text-neutral-300"
            >
                {"Back to records"}
            </Link<Route>>
        </div>
    }
}
