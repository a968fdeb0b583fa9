use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Fully-resolved image URL
    pub url: AttrValue,
    pub on_close: Callback<()>,
}

/// Full-size preview of a single image.
#[function_component]
pub fn ImagePreviewModal(props: &Props) -> Html {
    let backdrop_ref = use_node_ref();

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let backdrop_ref = backdrop_ref.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(backdrop_element) =
                backdrop_ref.cast::<web_sys::Element>()
                && let Some(target) = e.target()
                && target.dyn_ref::<web_sys::Element>()
                    == Some(&backdrop_element)
            {
                on_close.emit(());
            }
        })
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div
            ref={backdrop_ref.clone()}
            onclick={on_backdrop_click}
            class="fixed inset-0 bg-neutral-900 bg-opacity-75 z-50 flex items-center justify-center p-4"
        >
            <div class="bg-white dark:bg-neutral-800 rounded-lg shadow-xl max-w-4xl w-full p-4">
                <div class="flex justify-end mb-2">
                    <button
                        onclick={on_close_click}
                        class="text-sm text-neutral-500 hover:text-neutral-700 dark:text-neutral-400"
                    >
                        {"Close"}
                    </button>
                </div>
                <img
                    src={props.url.clone()}
                    alt="Preview"
                    class="max-h-[80vh] w-auto mx-auto rounded"
                />
            </div>
        </div>
    }
}
