use gloo_timers::future::TimeoutFuture;
use payloads::pending::{FormMode, PendingImages, validate_record_form};
use payloads::requests::{Location, SaveRecord};
use payloads::responses;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{ExistingImageList, ImageFieldEditor, LocationPicker};
use crate::components::ErrorBanner;
use crate::{Route, get_api_client};

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Present when editing; absent when creating.
    #[prop_or_default]
    pub record: Option<responses::TransformerRecord>,
}

/// Create/edit form for a transformer record: scalar fields, the
/// pending-image slots, and (in edit mode) the persisted images with
/// inline delete. Everything is validated together before one
/// multipart submission; a failed submit preserves the entered state.
#[function_component]
pub fn RecordForm(props: &Props) -> Html {
    let mode = match props.record {
        Some(_) => FormMode::Edit,
        None => FormMode::Create,
    };

    let name = use_state(|| {
        props
            .record
            .as_ref()
            .map(|r| r.name.clone())
            .unwrap_or_default()
    });
    let location = use_state(|| {
        props.record.as_ref().map(|r| Location {
            name: r.location_name.clone().unwrap_or_default(),
            lat: r.location_lat,
            lng: r.location_lng,
        })
    });
    let capacity = use_state(|| {
        props
            .record
            .as_ref()
            .and_then(|r| r.capacity.map(|c| c.to_string()))
            .unwrap_or_default()
    });
    let pending = use_state(|| PendingImages::new(mode));
    let existing_images = use_state(|| {
        props
            .record
            .as_ref()
            .map(|r| r.images.clone())
            .unwrap_or_default()
    });
    let error_message = use_state(|| None::<String>);
    let success_message = use_state(|| None::<String>);
    let is_submitting = use_state(|| false);

    let navigator = use_navigator().unwrap();

    let on_submit = {
        let name = name.clone();
        let location = location.clone();
        let capacity = capacity.clone();
        let pending = pending.clone();
        let existing_images = existing_images.clone();
        let error_message = error_message.clone();
        let success_message = success_message.clone();
        let is_submitting = is_submitting.clone();
        let navigator = navigator.clone();
        let record_id = props.record.as_ref().map(|r| r.id);

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // Client-side validation happens before any network call.
            if let Err(validation) = validate_record_form(
                &name,
                (*location).as_ref(),
                &capacity,
                &pending,
            ) {
                error_message.set(Some(validation.to_string()));
                return;
            }

            let details = SaveRecord {
                name: (*name).clone(),
                location: (*location).clone().unwrap(),
                capacity: (*capacity).clone(),
                images: pending.slots().to_vec(),
            };

            let name = name.clone();
            let location = location.clone();
            let capacity = capacity.clone();
            let pending = pending.clone();
            let existing_images = existing_images.clone();
            let error_message = error_message.clone();
            let success_message = success_message.clone();
            let is_submitting = is_submitting.clone();
            let navigator = navigator.clone();

            yew::platform::spawn_local(async move {
                is_submitting.set(true);
                error_message.set(None);
                success_message.set(None);

                let api_client = get_api_client();
                let result = match record_id {
                    Some(id) => {
                        api_client
                            .update_transformer_record(&id, &details)
                            .await
                    }
                    None => {
                        api_client.create_transformer_record(&details).await
                    }
                };

                match result {
                    Ok(saved) => {
                        let mut cleared = (*pending).clone();
                        cleared.clear();
                        pending.set(cleared);

                        match record_id {
                            Some(_) => {
                                // The response is authoritative for the
                                // record's current image set.
                                existing_images.set(saved.images);
                                success_message
                                    .set(Some("Record updated.".to_string()));
                            }
                            None => {
                                name.set(String::new());
                                location.set(None);
                                capacity.set(String::new());
                                success_message.set(Some(
                                    "Record uploaded successfully."
                                        .to_string(),
                                ));
                                TimeoutFuture::new(1_500).await;
                                navigator.push(&Route::Records);
                            }
                        }
                    }
                    Err(e) => {
                        // Backend message verbatim; entered state is
                        // preserved so the user can retry.
                        error_message.set(Some(e.to_string()));
                    }
                }

                is_submitting.set(false);
            });
        })
    };

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_capacity_input = {
        let capacity = capacity.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            capacity.set(input.value());
        })
    };

    let on_location_change = {
        let location = location.clone();
        Callback::from(move |value: Location| {
            location.set(Some(value));
        })
    };

    let on_pending_change = {
        let pending = pending.clone();
        Callback::from(move |value: PendingImages| pending.set(value))
    };

    let on_file_error = {
        let error_message = error_message.clone();
        Callback::from(move |message: String| {
            error_message.set(Some(message));
        })
    };

    let on_image_deleted = {
        let existing_images = existing_images.clone();
        Callback::from(move |image_id| {
            let remaining: Vec<_> = existing_images
                .iter()
                .filter(|image| image.id != image_id)
                .cloned()
                .collect();
            existing_images.set(remaining);
        })
    };

    let input_class = "w-full px-3 py-2 border border-neutral-300 \
                       dark:border-neutral-600 rounded-md text-sm \
                       bg-white dark:bg-neutral-700 text-neutral-900 \
                       dark:text-neutral-100";
    let label_class = "block text-sm font-medium text-neutral-700 \
                       dark:text-neutral-300 mb-1";

    let (heading, submit_label, images_heading) = match mode {
        FormMode::Create => ("Upload Record", "Upload", "Images"),
        FormMode::Edit => {
            ("Edit Record", "Save changes", "Add new images (optional)")
        }
    };

    html! {
        <div class="bg-white dark:bg-neutral-800 p-6 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700 space-y-6">
            <h2 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                {heading}
            </h2>

            if let Some(error) = (*error_message).clone() {
                <ErrorBanner
                    message={error}
                    on_dismiss={
                        let error_message = error_message.clone();
                        Callback::from(move |_| error_message.set(None))
                    }
                />
            }
            if let Some(success) = (*success_message).clone() {
                <ErrorBanner
                    message={success}
                    success=true
                    on_dismiss={
                        let success_message = success_message.clone();
                        Callback::from(move |_| success_message.set(None))
                    }
                />
            }

            <form onsubmit={on_submit} class="space-y-4">
                <div>
                    <label class={label_class}>{"Name"}</label>
                    <input
                        type="text"
                        value={(*name).clone()}
                        oninput={on_name_input}
                        disabled={*is_submitting}
                        class={input_class}
                    />
                </div>

                <div>
                    <label class={label_class}>{"Location"}</label>
                    <LocationPicker
                        value={(*location).clone()}
                        on_change={on_location_change}
                        disabled={*is_submitting}
                    />
                </div>

                <div>
                    <label class={label_class}>{"Capacity (kVA)"}</label>
                    <input
                        type="text"
                        value={(*capacity).clone()}
                        oninput={on_capacity_input}
                        disabled={*is_submitting}
                        class={input_class}
                    />
                </div>

                if mode == FormMode::Edit {
                    <div>
                        <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-2">
                            {"Existing images"}
                        </h3>
                        <ExistingImageList
                            images={(*existing_images).clone()}
                            on_deleted={on_image_deleted}
                        />
                    </div>
                }

                <div>
                    <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-2">
                        {images_heading}
                    </h3>
                    <ImageFieldEditor
                        pending={(*pending).clone()}
                        on_change={on_pending_change}
                        on_file_error={on_file_error}
                        disabled={*is_submitting}
                    />
                </div>

                <div class="pt-2">
                    <button
                        type="submit"
                        disabled={*is_submitting}
                        class="bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white px-4 py-2 rounded-md text-sm font-medium transition-colors disabled:opacity-50"
                    >
                        if *is_submitting {
                            {"Submitting..."}
                        } else {
                            {submit_label}
                        }
                    </button>
                </div>
            </form>
        </div>
    }
}
