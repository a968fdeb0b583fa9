use payloads::InspectionId;
use payloads::requests::UploadInspectionImages;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::{ErrorBanner, ImagePreviewModal};
use crate::get_api_client;
use crate::hooks::use_inspection;
use crate::state::State;
use crate::utils::files::read_file;
use crate::utils::time::{format_civil_date, format_date};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: InspectionId,
}

/// Detail view of one inspection with its photo gallery. Admins can
/// append photos directly from here; each selected file is uploaded
/// immediately and the inspection is refetched on success.
#[function_component]
pub fn InspectionDetailPage(props: &Props) -> Html {
    let (state, _) = use_store::<State>();
    let inspection = use_inspection(props.id);

    let preview_url = use_state(|| None::<String>);
    let is_uploading = use_state(|| false);
    let upload_error = use_state(|| None::<String>);

    let on_file_select = {
        let is_uploading = is_uploading.clone();
        let upload_error = upload_error.clone();
        let refetch = inspection.refetch.clone();
        let inspection_id = props.id;

        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|list| list.get(0))
            else {
                return;
            };
            input.set_value("");

            let is_uploading = is_uploading.clone();
            let upload_error = upload_error.clone();
            let refetch = refetch.clone();
            let on_error = {
                let upload_error = upload_error.clone();
                Callback::from(move |message: String| {
                    upload_error.set(Some(message));
                })
            };

            read_file(
                file,
                Callback::from(move |handle| {
                    let is_uploading = is_uploading.clone();
                    let upload_error = upload_error.clone();
                    let refetch = refetch.clone();
                    let details = UploadInspectionImages {
                        inspection_id,
                        images: vec![handle],
                    };

                    yew::platform::spawn_local(async move {
                        is_uploading.set(true);
                        upload_error.set(None);

                        match get_api_client()
                            .upload_inspection_images(&details)
                            .await
                        {
                            Ok(_) => refetch.emit(()),
                            Err(e) => {
                                upload_error.set(Some(e.to_string()));
                            }
                        }

                        is_uploading.set(false);
                    });
                }),
                on_error,
            );
        })
    };

    let api_client = get_api_client();
    let detail_class = "text-sm text-neutral-600 dark:text-neutral-400";

    html! {
        <div class="space-y-6">
            {inspection.render("inspection", |inspection, _, _| {
                let conducted_by = inspection
                    .conducted_by
                    .as_ref()
                    .map(|admin| admin.display_label().to_string())
                    .unwrap_or_else(|| "Unknown".to_string());

                html! {
                    <div class="bg-white dark:bg-neutral-800 p-6 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700 space-y-4">
                        <div class="flex items-center justify-between">
                            <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                                {"Inspection on "}
                                {format_civil_date(inspection.inspection_date)}
                            </h1>
                            <Link<Route>
                                to={Route::RecordDetail {
                                    id: inspection.transformer_record_id,
                                }}
                                classes="px-3 py-2 rounded-md text-sm font-medium border border-neutral-300 dark:border-neutral-600 text-neutral-700 dark:text-neutral-300"
                            >
                                {"Back to record"}
                            </Link<Route>>
                        </div>

                        <div class="space-y-1">
                            <p class={detail_class}>
                                {"Conducted by: "}{conducted_by}
                            </p>
                            <p class={detail_class}>
                                {"Logged: "}{format_date(inspection.created_at)}
                            </p>
                            if !inspection.notes.is_empty() {
                                <p class="text-sm text-neutral-900 dark:text-neutral-100 whitespace-pre-wrap">
                                    {&inspection.notes}
                                </p>
                            }
                        </div>

                        <div class="space-y-2">
                            <h2 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100">
                                {"Photos"}
                            </h2>

                            if let Some(error) = (*upload_error).clone() {
                                <ErrorBanner
                                    message={error}
                                    on_dismiss={
                                        let upload_error = upload_error.clone();
                                        Callback::from(move |_| {
                                            upload_error.set(None)
                                        })
                                    }
                                />
                            }

                            if inspection.images.is_empty() {
                                <p class={detail_class}>
                                    {"No photos for this inspection."}
                                </p>
                            } else {
                                <div class="flex flex-wrap gap-4">
                                    {for inspection.images.iter().map(|image| {
                                        let url = api_client.image_url(&image.file_path);
                                        let on_preview = {
                                            let preview_url = preview_url.clone();
                                            let url = url.clone();
                                            Callback::from(move |_: MouseEvent| {
                                                preview_url.set(Some(url.clone()));
                                            })
                                        };
                                        html! {
                                            <img
                                                key={image.id.to_string()}
                                                src={url.clone()}
                                                alt=""
                                                onclick={on_preview}
                                                class="h-32 w-auto object-cover rounded cursor-pointer border border-neutral-200 dark:border-neutral-600"
                                            />
                                        }
                                    })}
                                </div>
                            }

                            if state.is_authenticated() {
                                <div class="pt-2">
                                    <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-1">
                                        if *is_uploading {
                                            {"Uploading..."}
                                        } else {
                                            {"Add a photo"}
                                        }
                                    </label>
                                    <input
                                        type="file"
                                        accept="image/*"
                                        onchange={on_file_select.clone()}
                                        disabled={*is_uploading}
                                        class="text-sm text-neutral-700 dark:text-neutral-300"
                                    />
                                </div>
                            }
                        </div>
                    </div>
                }
            })}

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
