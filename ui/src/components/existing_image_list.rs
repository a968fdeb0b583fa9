use payloads::{ImageId, responses};
use yew::prelude::*;

use crate::components::{ConfirmationModal, ImagePreviewModal};
use crate::get_api_client;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Images already persisted on the record being edited.
    pub images: Vec<responses::Image>,
    /// Emitted after the backend confirms a delete, so the parent can
    /// drop exactly that image from its local list.
    pub on_deleted: Callback<ImageId>,
}

/// Edit-mode list of persisted images with inline delete. A successful
/// delete patches the parent's local list; no record re-fetch happens
/// here.
#[function_component]
pub fn ExistingImageList(props: &Props) -> Html {
    let image_to_delete = use_state(|| None::<ImageId>);
    let is_deleting = use_state(|| false);
    let delete_error = use_state(|| None::<String>);
    let preview_url = use_state(|| None::<String>);

    let on_confirm_delete = {
        let image_to_delete = image_to_delete.clone();
        let is_deleting = is_deleting.clone();
        let delete_error = delete_error.clone();
        let on_deleted = props.on_deleted.clone();

        Callback::from(move |_| {
            let Some(image_id) = *image_to_delete else {
                return;
            };
            let image_to_delete = image_to_delete.clone();
            let is_deleting = is_deleting.clone();
            let delete_error = delete_error.clone();
            let on_deleted = on_deleted.clone();

            yew::platform::spawn_local(async move {
                is_deleting.set(true);
                delete_error.set(None);

                match get_api_client().delete_record_image(&image_id).await {
                    Ok(()) => {
                        image_to_delete.set(None);
                        on_deleted.emit(image_id);
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
        let image_to_delete = image_to_delete.clone();
        let delete_error = delete_error.clone();
        Callback::from(move |_| {
            image_to_delete.set(None);
            delete_error.set(None);
        })
    };

    let api_client = get_api_client();

    html! {
        <div class="space-y-2">
            if props.images.is_empty() {
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {"No images on this record."}
                </p>
            }

            {for props.images.iter().map(|image| {
                let url = api_client.image_url(&image.file_path);
                let on_preview = {
                    let preview_url = preview_url.clone();
                    let url = url.clone();
                    Callback::from(move |_: MouseEvent| {
                        preview_url.set(Some(url.clone()));
                    })
                };
                let on_delete_click = {
                    let image_to_delete = image_to_delete.clone();
                    let id = image.id;
                    Callback::from(move |_: MouseEvent| {
                        image_to_delete.set(Some(id));
                    })
                };

                html! {
                    <div
                        key={image.id.to_string()}
                        class="flex items-center justify-between p-3 rounded-md border border-neutral-200 dark:border-neutral-700"
                    >
                        <div class="flex items-center gap-4">
                            <img
                                src={url.clone()}
                                alt=""
                                onclick={on_preview}
                                class="h-20 w-auto object-cover rounded cursor-pointer border border-neutral-200 dark:border-neutral-600"
                            />
                            <div class="text-sm text-neutral-700 dark:text-neutral-300">
                                <span class="font-medium">
                                    {image.image_type.as_str()}
                                </span>
                                if let Some(weather) = image.weather_condition {
                                    <span>
                                        {format!(" · {}", weather.as_str())}
                                    </span>
                                }
                            </div>
                        </div>
                        <button
                            type="button"
                            onclick={on_delete_click}
                            class="px-3 py-2 rounded-md text-sm font-medium border border-red-300 text-red-700 dark:text-red-400"
                        >
                            {"Delete"}
                        </button>
                    </div>
                }
            })}

            if image_to_delete.is_some() {
                <ConfirmationModal
                    title="Delete Image"
                    message="This image will be removed from the record."
                    confirm_text="Delete"
                    on_confirm={on_confirm_delete}
                    on_close={on_close_modal}
                    is_loading={*is_deleting}
                    error_message={
                        delete_error.as_ref().map(|e| AttrValue::from(e.clone()))
                    }
                />
            }

            if let Some(url) = (*preview_url).clone() {
                <ImagePreviewModal
                    url={url}
                    on_close={
                        let preview_url = preview_url.clone();
                        Callback::from(move |_| preview_url.set(None))
                    }
                />
            }
        </div>
    }
}
