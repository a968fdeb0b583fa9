use payloads::{RecordId, listing, responses};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::state::State;
use crate::utils::time::format_date;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub record: responses::TransformerRecord,
    /// Asks the page to start the delete confirmation flow.
    pub on_delete: Callback<RecordId>,
}

#[function_component]
pub fn RecordCard(props: &Props) -> Html {
    let (state, _) = use_store::<State>();
    let record = &props.record;

    let on_delete_click = {
        let on_delete = props.on_delete.clone();
        let id = record.id;
        Callback::from(move |_: MouseEvent| on_delete.emit(id))
    };

    let uploaded_by = record
        .uploaded_by
        .as_ref()
        .map(|admin| admin.display_label().to_string())
        .unwrap_or_else(|| "Unknown".to_string());

    let capacity = record
        .capacity
        .map(|c| format!("{c} kVA"))
        .unwrap_or_else(|| "N/A".to_string());

    html! {
        <div class="bg-white dark:bg-neutral-800 p-6 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700">
            <div class="space-y-3">
                <h3 class="text-xl font-semibold text-neutral-900 dark:text-neutral-100">
                    {&record.name}
                </h3>
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {"Uploaded by: "}{uploaded_by}
                </p>
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {"Location: "}
                    {record.location_name.clone().unwrap_or_else(|| "N/A".into())}
                </p>
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {"Capacity: "}{capacity}
                </p>
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {"Last update: "}
                    {format_date(listing::last_update(record))}
                </p>
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {format!("{} images", record.images.len())}
                </p>

                <div class="flex gap-2 pt-2">
                    <Link<Route>
                        to={Route::RecordDetail { id: record.id }}
                        classes="px-3 py-2 rounded-md text-sm font-medium bg-neutral-100 hover:bg-neutral-200 dark:bg-neutral-700 dark:hover:bg-neutral-600 text-neutral-900 dark:text-neutral-100"
                    >
                        {"View"}
                    </Link<Route>>
                    if state.is_authenticated() {
                        <Link<Route>
                            to={Route::EditRecord { id: record.id }}
                            classes="px-3 py-2 rounded-md text-sm font-medium border border-neutral-300 dark:border-neutral-600 text-neutral-700 dark:text-neutral-300"
                        >
                            {"Edit"}
                        </Link<Route>>
                        <button
                            onclick={on_delete_click}
                            class="px-3 py-2 rounded-md text-sm font-medium border border-red-300 text-red-700 dark:text-red-400 hover:bg-red-50 dark:hover:bg-red-900/20"
                        >
                            {"Delete"}
                        </button>
                    }
                </div>
            </div>
        </div>
    }
}
