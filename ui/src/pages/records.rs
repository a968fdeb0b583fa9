use payloads::RecordId;
use payloads::listing::{self, ListQuery};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::{
    ConfirmationModal, PaginationControls, RecordCard, RecordFilterBar,
    RecordTable,
};
use crate::get_api_client;
use crate::hooks::use_records;
use crate::state::State;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
enum ViewMode {
    #[default]
    Cards,
    Table,
}

/// The record list page. The collection is fetched whole; searching,
/// filtering, sorting, and paging all run client-side over it.
#[function_component]
pub fn RecordsPage() -> Html {
    let (state, _) = use_store::<State>();
    let records = use_records();

    let query = use_state(ListQuery::default);
    let view_mode = use_state(ViewMode::default);

    let record_to_delete = use_state(|| None::<RecordId>);
    let is_deleting = use_state(|| false);
    let delete_error = use_state(|| None::<String>);

    let on_query_change = {
        let query = query.clone();
        Callback::from(move |next: ListQuery| query.set(next))
    };

    let on_page_change = {
        let query = query.clone();
        Callback::from(move |page: usize| {
            let mut next = (*query).clone();
            next.page = page;
            query.set(next);
        })
    };

    // A delete can empty the last page; fall back to the new last page
    // once the refetched collection lands.
    {
        let query = query.clone();
        use_effect_with(
            (records.data.clone(), (*query).clone()),
            move |(data, q)| {
                if let Some(all_records) = data.as_ref() {
                    let total = listing::apply(all_records, q).total_pages;
                    let clamped = listing::clamp_page(q.page, total);
                    if clamped != q.page {
                        let mut next = q.clone();
                        next.page = clamped;
                        query.set(next);
                    }
                }
            },
        );
    }

    let on_delete_request = {
        let record_to_delete = record_to_delete.clone();
        Callback::from(move |id: RecordId| {
            record_to_delete.set(Some(id));
        })
    };

    let on_confirm_delete = {
        let record_to_delete = record_to_delete.clone();
        let is_deleting = is_deleting.clone();
        let delete_error = delete_error.clone();
        let refetch = records.refetch.clone();

        Callback::from(move |_| {
            let Some(record_id) = *record_to_delete else {
                return;
            };
            let record_to_delete = record_to_delete.clone();
            let is_deleting = is_deleting.clone();
            let delete_error = delete_error.clone();
            let refetch = refetch.clone();

            yew::platform::spawn_local(async move {
                is_deleting.set(true);
                delete_error.set(None);

                match get_api_client()
                    .delete_transformer_record(&record_id)
                    .await
                {
                    Ok(()) => {
                        record_to_delete.set(None);
                        refetch.emit(());
                    }
                    Err(e) => {
                        delete_error.set(Some(e.to_string()));
                    }
                }

                is_deleting.set(false);
            });
        })
    };

    let on_close_modal = {
        let record_to_delete = record_to_delete.clone();
        let delete_error = delete_error.clone();
        Callback::from(move |_| {
            record_to_delete.set(None);
            delete_error.set(None);
        })
    };

    let toggle_class = |active: bool| {
        if active {
            "px-3 py-2 rounded-md text-sm font-medium bg-neutral-900 \
             text-white dark:bg-neutral-100 dark:text-neutral-900"
        } else {
            "px-3 py-2 rounded-md text-sm font-medium border \
             border-neutral-300 dark:border-neutral-600 text-neutral-700 \
             dark:text-neutral-300"
        }
    };

    html! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Transformer Records"}
                </h1>
                <div class="flex gap-2">
                    <button
                        onclick={
                            let view_mode = view_mode.clone();
                            Callback::from(move |_| {
                                view_mode.set(ViewMode::Cards)
                            })
                        }
                        class={toggle_class(*view_mode == ViewMode::Cards)}
                    >
                        {"Cards"}
                    </button>
                    <button
                        onclick={
                            let view_mode = view_mode.clone();
                            Callback::from(move |_| {
                                view_mode.set(ViewMode::Table)
                            })
                        }
                        class={toggle_class(*view_mode == ViewMode::Table)}
                    >
                        {"Table"}
                    </button>
                </div>
            </div>

            <RecordFilterBar
                query={(*query).clone()}
                on_change={on_query_change}
            />

            {records.render("records", |all_records, is_loading, _| {
                let page = listing::apply(all_records, &query);

                html! {
                    <div class="space-y-4">
                        <p class="text-sm text-neutral-600 dark:text-neutral-400">
                            {format!(
                                "{} of {} records",
                                page.records.len(),
                                page.total_matches
                            )}
                        </p>

                        if page.records.is_empty() {
                            <div class="text-center py-12">
                                <p class="text-neutral-600 dark:text-neutral-400">
                                    {"No records match the current filters."}
                                </p>
                            </div>
                        } else if *view_mode == ViewMode::Table {
                            <RecordTable
                                records={page.records.clone()}
                                on_delete={on_delete_request.clone()}
                            />
                        } else {
                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                                {for page.records.iter().map(|record| html! {
                                    <RecordCard
                                        key={record.id.to_string()}
                                        record={record.clone()}
                                        on_delete={on_delete_request.clone()}
                                    />
                                })}
                            </div>
                        }

                        <PaginationControls
                            current_page={query.page}
                            total_pages={page.total_pages}
                            on_page_change={on_page_change.clone()}
                            is_loading={is_loading}
                        />
                    </div>
                }
            })}

            if record_to_delete.is_some() && state.is_authenticated() {
                <ConfirmationModal
                    title="Delete Record"
                    message="The record and all of its images and inspections will be removed."
                    confirm_text="Delete"
                    on_confirm={on_confirm_delete}
                    on_close={on_close_modal}
                    is_loading={*is_deleting}
                    error_message={
                        delete_error.as_ref().map(|e| AttrValue::from(e.clone()))
                    }
                />
            }
        </div>
    }
}
