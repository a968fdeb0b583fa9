use payloads::listing::{PageItem, page_items};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Current page (1-based)
    pub current_page: usize,
    pub total_pages: usize,
    /// Callback when the user picks a page
    pub on_page_change: Callback<usize>,
    /// Whether currently loading (to disable buttons)
    #[prop_or(false)]
    pub is_loading: bool,
}

/// Windowed page-number strip: first and last page, the current page
/// with one neighbor on each side, ellipses for the gaps.
#[function_component]
pub fn PaginationControls(props: &Props) -> Html {
    let Props {
        current_page,
        total_pages,
        is_loading,
        ..
    } = *props;

    if total_pages <= 1 {
        return html! {};
    }

    let go_to = |page: usize| {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_: MouseEvent| on_page_change.emit(page))
    };

    let nav_button_class = |disabled: bool| {
        if disabled {
            "px-3 py-2 border border-neutral-300 dark:border-neutral-600 \
             rounded-md text-sm font-medium text-neutral-400 \
             dark:text-neutral-500 bg-neutral-100 dark:bg-neutral-800 \
             cursor-not-allowed"
        } else {
            "px-3 py-2 border border-neutral-300 dark:border-neutral-600 \
             rounded-md text-sm font-medium text-neutral-700 \
             dark:text-neutral-300 bg-white dark:bg-neutral-700 \
             hover:bg-neutral-50 dark:hover:bg-neutral-600 \
             transition-colors duration-200"
        }
    };

    let page_button_class = |active: bool| {
        if active {
            "px-3 py-2 border border-neutral-900 dark:border-neutral-100 \
             rounded-md text-sm font-medium bg-neutral-900 text-white \
             dark:bg-neutral-100 dark:text-neutral-900"
        } else {
            "px-3 py-2 border border-neutral-300 dark:border-neutral-600 \
             rounded-md text-sm font-medium text-neutral-700 \
             dark:text-neutral-300 bg-white dark:bg-neutral-700 \
             hover:bg-neutral-50 dark:hover:bg-neutral-600"
        }
    };

    let prev_disabled = current_page == 1 || is_loading;
    let next_disabled = current_page == total_pages || is_loading;

    html! {
        <div class="flex items-center justify-center gap-2 mt-4 pt-4 \
                    border-t border-neutral-200 dark:border-neutral-700">
            <button
                onclick={go_to(current_page.saturating_sub(1).max(1))}
                disabled={prev_disabled}
                class={nav_button_class(prev_disabled)}
            >
                {"Previous"}
            </button>

            {for page_items(current_page, total_pages).into_iter().map(|item| {
                match item {
                    PageItem::Page(page) => html! {
                        <button
                            onclick={go_to(page)}
                            disabled={is_loading}
                            class={page_button_class(page == current_page)}
                        >
                            {page}
                        </button>
                    },
                    PageItem::Ellipsis => html! {
                        <span class="px-2 text-neutral-500">{"…"}</span>
                    },
                }
            })}

            <button
                onclick={go_to((current_page + 1).min(total_pages))}
                disabled={next_disabled}
                class={nav_button_class(next_disabled)}
            >
                {"Next"}
            </button>
        </div>
    }
}
