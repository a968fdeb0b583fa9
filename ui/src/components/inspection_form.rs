use payloads::RecordId;
use payloads::pending::FileHandle;
use payloads::requests::CreateInspection;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::ErrorBanner;
use crate::get_api_client;
use crate::utils::files::{data_url, read_file};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub record_id: RecordId,
    /// Emitted after the backend confirms the create, so the parent
    /// can refresh its inspection list.
    pub on_created: Callback<()>,
}

/// Form for logging a new inspection under a record: date, notes, and
/// any number of photos taken during the visit.
#[function_component]
pub fn InspectionForm(props: &Props) -> Html {
    let date_input = use_state(String::new);
    let notes = use_state(String::new);
    let files = use_state(Vec::<FileHandle>::new);
    let error_message = use_state(|| None::<String>);
    let is_submitting = use_state(|| false);

    let on_date_input = {
        let date_input = date_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            date_input.set(input.value());
        })
    };

    let on_notes_input = {
        let notes = notes.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            notes.set(input.value());
        })
    };

    let on_file_select = {
        let files = files.clone();
        let error_message = error_message.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|list| list.get(0))
            else {
                return;
            };
            // Allow re-selecting the same file later.
            input.set_value("");

            let files = files.clone();
            let error_message = error_message.clone();
            read_file(
                file,
                Callback::from(move |handle| {
                    let mut next = (*files).clone();
                    next.push(handle);
                    files.set(next);
                }),
                Callback::from(move |message: String| {
                    error_message.set(Some(message));
                }),
            );
        })
    };

    let on_submit = {
        let date_input = date_input.clone();
        let notes = notes.clone();
        let files = files.clone();
        let error_message = error_message.clone();
        let is_submitting = is_submitting.clone();
        let record_id = props.record_id;
        let on_created = props.on_created.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let inspection_date = match date_input.parse() {
                Ok(date) => date,
                Err(_) => {
                    error_message
                        .set(Some("Inspection date is required.".to_string()));
                    return;
                }
            };

            let details = CreateInspection {
                transformer_record_id: record_id,
                inspection_date,
                notes: (*notes).clone(),
                images: (*files).clone(),
            };

            let date_input = date_input.clone();
            let notes = notes.clone();
            let files = files.clone();
            let error_message = error_message.clone();
            let is_submitting = is_submitting.clone();
            let on_created = on_created.clone();

            yew::platform::spawn_local(async move {
                is_submitting.set(true);
                error_message.set(None);

                match get_api_client().create_inspection(&details).await {
                    Ok(_) => {
                        date_input.set(String::new());
                        notes.set(String::new());
                        files.set(Vec::new());
                        on_created.emit(());
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
        <div class="bg-white dark:bg-neutral-800 p-6 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700 space-y-4">
            <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100">
                {"New Inspection"}
            </h3>

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
                    <label class={label_class}>{"Inspection date"}</label>
                    <input
                        type="date"
                        value={(*date_input).clone()}
                        oninput={on_date_input}
                        disabled={*is_submitting}
                        class={input_class}
                    />
                </div>

                <div>
                    <label class={label_class}>{"Notes"}</label>
                    <textarea
                        rows="3"
                        value={(*notes).clone()}
                        oninput={on_notes_input}
                        disabled={*is_submitting}
                        class={input_class}
                    />
                </div>

                <div>
                    <label class={label_class}>{"Photos"}</label>
                    <input
                        type="file"
                        accept="image/*"
                        onchange={on_file_select}
                        disabled={*is_submitting}
                        class="text-sm text-neutral-700 dark:text-neutral-300"
                    />
                    if !files.is_empty() {
                        <div class="flex flex-wrap gap-3 mt-2">
                            {for files.iter().enumerate().map(|(index, file)| {
                                let on_remove = {
                                    let files = files.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        let mut next = (*files).clone();
                                        next.remove(index);
                                        files.set(next);
                                    })
                                };
                                html! {
                                    <div class="flex items-center gap-2">
                                        <img
                                            src={data_url(&file.bytes)}
                                            alt={file.name.clone()}
                                            class="h-16 w-16 object-cover rounded border border-neutral-200 dark:border-neutral-600"
                                        />
                                        <button
                                            type="button"
                                            onclick={on_remove}
                                            class="text-sm text-red-700 dark:text-red-400"
                                        >
                                            {"Remove"}
                                        </button>
                                    </div>
                                }
                            })}
                        </div>
                    }
                </div>

                <button
                    type="submit"
                    disabled={*is_submitting}
                    class="bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white px-4 py-2 rounded-md text-sm font-medium transition-colors disabled:opacity-50"
                >
                    if *is_submitting {
                        {"Saving..."}
                    } else {
                        {"Log inspection"}
                    }
                </button>
            </form>
        </div>
    }
}
