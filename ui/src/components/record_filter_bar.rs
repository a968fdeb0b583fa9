use payloads::listing::{
    CapacityFilter, ListQuery, SearchField, SortDirection, SortKey,
};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub query: ListQuery,
    /// Emitted with the page already reset to 1 for filter/sort edits.
    pub on_change: Callback<ListQuery>,
}

/// Search, capacity filter, and sort controls for the record list.
/// Every edit here resets the page to 1; only the pagination controls
/// change the page alone.
#[function_component]
pub fn RecordFilterBar(props: &Props) -> Html {
    let emit = |update: fn(&mut ListQuery, String)| {
        let query = props.query.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |value: String| {
            let mut next = query.clone();
            update(&mut next, value);
            next.page = 1;
            on_change.emit(next);
        })
    };

    let on_search_input = {
        let emit = emit(|q, v| q.search_term = v);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            emit.emit(input.value());
        })
    };

    let on_field_change = {
        let emit = emit(|q, v| {
            q.search_field = match v.as_str() {
                "location" => SearchField::Location,
                "admin" => SearchField::Admin,
                _ => SearchField::Name,
            };
        });
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            emit.emit(select.value());
        })
    };

    let on_capacity_change = {
        let emit = emit(|q, v| {
            q.capacity_filter = match v.as_str() {
                "small" => CapacityFilter::Small,
                "medium" => CapacityFilter::Medium,
                "large" => CapacityFilter::Large,
                _ => CapacityFilter::All,
            };
        });
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            emit.emit(select.value());
        })
    };

    let on_sort_change = {
        let emit = emit(|q, v| {
            q.sort_key = match v.as_str() {
                "name" => SortKey::Name,
                "created" => SortKey::CreatedAt,
                _ => SortKey::LastUpdate,
            };
        });
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            emit.emit(select.value());
        })
    };

    let on_direction_toggle = {
        let query = props.query.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = query.clone();
            next.sort_direction = next.sort_direction.toggled();
            next.page = 1;
            on_change.emit(next);
        })
    };

    let select_class = "px-3 py-2 border border-neutral-300 \
                        dark:border-neutral-600 rounded-md text-sm \
                        bg-white dark:bg-neutral-700 text-neutral-900 \
                        dark:text-neutral-100";

    let direction_label = match props.query.sort_direction {
        SortDirection::Ascending => "↑",
        SortDirection::Descending => "↓",
    };

    html! {
        <div class="bg-white dark:bg-neutral-800 p-4 rounded-lg shadow-sm \
                    border border-neutral-200 dark:border-neutral-700 \
                    flex flex-wrap items-center gap-3">
            <select class={select_class} onchange={on_field_change}>
                <option value="name" selected={props.query.search_field == SearchField::Name}>
                    {SearchField::Name.label()}
                </option>
                <option value="location" selected={props.query.search_field == SearchField::Location}>
                    {SearchField::Location.label()}
                </option>
                <option value="admin" selected={props.query.search_field == SearchField::Admin}>
                    {SearchField::Admin.label()}
                </option>
            </select>

            <input
                type="text"
                placeholder={format!(
                    "Search by {}...",
                    props.query.search_field.label().to_lowercase()
                )}
                value={props.query.search_term.clone()}
                oninput={on_search_input}
                class="flex-1 min-w-48 px-3 py-2 border border-neutral-300 \
                       dark:border-neutral-600 rounded-md text-sm \
                       bg-white dark:bg-neutral-700 text-neutral-900 \
                       dark:text-neutral-100"
            />

            <select class={select_class} onchange={on_capacity_change}>
                <option value="all" selected={props.query.capacity_filter == CapacityFilter::All}>
                    {CapacityFilter::All.label()}
                </option>
                <option value="small" selected={props.query.capacity_filter == CapacityFilter::Small}>
                    {CapacityFilter::Small.label()}
                </option>
                <option value="medium" selected={props.query.capacity_filter == CapacityFilter::Medium}>
                    {CapacityFilter::Medium.label()}
                </option>
                <option value="large" selected={props.query.capacity_filter == CapacityFilter::Large}>
                    {CapacityFilter::Large.label()}
                </option>
            </select>

            <select class={select_class} onchange={on_sort_change}>
                <option value="name" selected={props.query.sort_key == SortKey::Name}>
                    {format!("Sort: {}", SortKey::Name.label())}
                </option>
                <option value="created" selected={props.query.sort_key == SortKey::CreatedAt}>
                    {format!("Sort: {}", SortKey::CreatedAt.label())}
                </option>
                <option value="updated" selected={props.query.sort_key == SortKey::LastUpdate}>
                    {format!("Sort: {}", SortKey::LastUpdate.label())}
                </option>
            </select>

            <button
                onclick={on_direction_toggle}
                title="Toggle sort direction"
                class="px-3 py-2 border border-neutral-300 \
                       dark:border-neutral-600 rounded-md text-sm \
                       text-neutral-700 dark:text-neutral-300"
            >
                {direction_label}
            </button>
        </div>
    }
}
