use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub message: AttrValue,
    /// Called when the user dismisses the banner.
    pub on_dismiss: Callback<()>,
    /// Render the success variant instead of the error one.
    #[prop_or_default]
    pub success: bool,
}

/// Dismissible banner for errors and success notices. All three error
/// classes (transport, non-success status, client validation) end up
/// here as a plain message.
#[function_component]
pub fn ErrorBanner(props: &Props) -> Html {
    let on_dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    let (container, text) = if props.success {
        (
            "p-4 rounded-md bg-green-50 dark:bg-green-900/20 border \
             border-green-200 dark:border-green-800 flex justify-between \
             items-start",
            "text-sm text-green-700 dark:text-green-400",
        )
    } else {
        (
            "p-4 rounded-md bg-red-50 dark:bg-red-900/20 border \
             border-red-200 dark:border-red-800 flex justify-between \
             items-start",
            "text-sm text-red-700 dark:text-red-400",
        )
    };

    html! {
        <div class={container}>
            <p class={text}>{&props.message}</p>
            <button
                onclick={on_dismiss}
                class="text-sm text-neutral-500 hover:text-neutral-700 \
                       dark:text-neutral-400 dark:hover:text-neutral-200 ml-4"
            >
                {"Dismiss"}
            </button>
        </div>
    }
}
