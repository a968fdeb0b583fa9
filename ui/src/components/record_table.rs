use payloads::{RecordId, listing, responses};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::state::State;
use crate::utils::time::format_date;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub records: Vec<responses::TransformerRecord>,
    pub on_delete: Callback<RecordId>,
}

/// Table rendering of the current list page; same data and actions as
/// the cards view.
#[function_component]
pub fn RecordTable(props: &Props) -> Html {
    let (state, _) = use_store::<State>();

    let header_class = "px-4 py-3 text-left text-xs font-medium \
                        text-neutral-500 dark:text-neutral-400 uppercase";
    let cell_class =
        "px-4 py-3 text-sm text-neutral-900 dark:text-neutral-100";

    html! {
        <div class="bg-white dark:bg-neutral-800 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700 overflow-x-auto">
            <table class="min-w-full divide-y divide-neutral-200 dark:divide-neutral-700">
                <thead>
                    <tr>
                        <th class={header_class}>{"Name"}</th>
                        <th class={header_class}>{"Admin"}</th>
                        <th class={header_class}>{"Capacity"}</th>
                        <th class={header_class}>{"Last update"}</th>
                        <th class={header_class}>{"Images"}</th>
                        <th class={header_class}>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-neutral-200 dark:divide-neutral-700">
                    {for props.records.iter().map(|record| {
                        let on_delete_click = {
                            let on_delete = props.on_delete.clone();
                            let id = record.id;
                            Callback::from(move |_: MouseEvent| {
                                on_delete.emit(id)
                            })
                        };
                        html! {
                            <tr key={record.id.to_string()}>
                                <td class={cell_class}>{&record.name}</td>
                                <td class={cell_class}>
                                    {record
                                        .uploaded_by
                                        .as_ref()
                                        .map(|a| a.display_label().to_string())
                                        .unwrap_or_else(|| "-".into())}
                                </td>
                                <td class={cell_class}>
                                    {record
                                        .capacity
                                        .map(|c| c.to_string())
                                        .unwrap_or_else(|| "-".into())}
                                </td>
                                <td class={cell_class}>
                                    {format_date(listing::last_update(record))}
                                </td>
                                <td class={cell_class}>
                                    {record.images.len()}
                                </td>
                                <td class={cell_class}>
                                    <div class="flex gap-2">
                                        <Link<Route>
                                            to={Route::RecordDetail { id: record.id }}
                                            classes="text-sm underline"
                                        >
                                            {"View"}
                                        </Link<Route>>
                                        if state.is_authenticated() {
                                            <Link<Route>
                                                to={Route::EditRecord { id: record.id }}
                                                classes="text-sm underline"
                                            >
                                                {"Edit"}
                                            </Link<Route>>
                                            <button
                                                onclick={on_delete_click}
                                                class="text-sm text-red-700 dark:text-red-400 underline"
                                            >
                                                {"Delete"}
                                            </button>
                                        }
                                    </div>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}
