use payloads::{ImageId, RecordId};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::{ConfirmationModal, ImagePreviewModal, InspectionForm};
use crate::get_api_client;
use crate::hooks::{use_inspections, use_record};
use crate::state::State;
use crate::utils::time::{format_civil_date, format_date};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: RecordId,
}

/// Detail view of one record: its metadata, images, and the inspection
/// history, plus the form for logging a new inspection.
#[function_component]
pub fn RecordDetailPage(props: &Props) -> Html {
    let (state, _) = use_store::<State>();
    let record = use_record(props.id);
    let inspections = use_inspections(props.id);

    let preview_url = use_state(|| None::<String>);
    let image_to_delete = use_state(|| None::<ImageId>);
    let is_deleting = use_state(|| false);
    let delete_error = use_state(|| None::<String>);

    let on_confirm_delete = {
        let image_to_delete = image_to_delete.clone();
        let is_deleting = is_deleting.clone();
        let delete_error = delete_error.clone();
        let refetch = record.refetch.clone();

        Callback::from(move |_| {
            let Some(image_id) = *image_to_delete else {
                return;
            };
            let image_to_delete = image_to_delete.clone();
            let is_deleting = is_deleting.clone();
            let delete_error = delete_error.clone();
            let refetch = refetch.clone();

            yew::platform::spawn_local(async move {
                is_deleting.set(true);
                delete_error.set(None);

                match get_api_client().delete_record_image(&image_id).await {
                    Ok(()) => {
                        image_to_delete.set(None);
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
        let image_to_delete = image_to_delete.clone();
        let delete_error = delete_error.clone();
        Callback::from(move |_| {
            image_to_delete.set(None);
            delete_error.set(None);
        })
    };

    let on_inspection_created = {
        let refetch = inspections.refetch.clone();
        Callback::from(move |_| refetch.emit(()))
    };

    let api_client = get_api_client();
    let detail_class = "text-sm text-neutral-600 dark:text-neutral-400";

    html! {
        <div class="space-y-6">
            {record.render("record", |record, _, _| {
                let capacity = record
                    .capacity
                    .map(|c| format!("{c} kVA"))
                    .unwrap_or_else(|| "N/A".to_string());
                let uploaded_by = record
                    .uploaded_by
                    .as_ref()
                    .map(|admin| admin.display_label().to_string())
                    .unwrap_or_else(|| "Unknown".to_string());
                let coordinates = match (record.location_lat, record.location_lng) {
                    (Some(lat), Some(lng)) => {
                        Some(format!("{lat:.5}, {lng:.5}"))
                    }
                    _ => None,
                };

                html! {
                    <div class="bg-white dark:bg-neutral-800 p-6 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700 space-y-4">
                        <div class="flex items-center justify-between">
                            <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                                {&record.name}
                            </h1>
                            if state.is_authenticated() {
                                <Link<Route>
                                    to={Route::EditRecord { id: record.id }}
                                    classes="px-3 py-2 rounded-md text-sm font-medium border border-neutral-300 dark:border-neutral-600 text-neutral-700 dark:text-neutral-300"
                                >
                                    {"Edit"}
                                </Link<Route>>
                            }
                        </div>

                        <div class="space-y-1">
                            <p class={detail_class}>
                                {"Location: "}
                                {record
                                    .location_name
                                    .clone()
                                    .unwrap_or_else(|| "N/A".into())}
                            </p>
                            if let Some(coordinates) = coordinates {
                                <p class={detail_class}>
                                    {"Coordinates: "}{coordinates}
                                </p>
                            }
                            <p class={detail_class}>
                                {"Capacity: "}{capacity}
                            </p>
                            <p class={detail_class}>
                                {"Uploaded by: "}{uploaded_by}
                            </p>
                            <p class={detail_class}>
                                {"Created: "}{format_date(record.created_at)}
                            </p>
                        </div>

                        <div>
                            <h2 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-2">
                                {"Images"}
                            </h2>
                            if record.images.is_empty() {
                                <p class={detail_class}>
                                    {"No images on this record."}
                                </p>
                            } else {
                                <div class="flex flex-wrap gap-4">
                                    {for record.images.iter().map(|image| {
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
                                                class="space-y-1"
                                            >
                                                <img
                                                    src={url.clone()}
                                                    alt=""
                                                    onclick={on_preview}
                                                    class="h-32 w-auto object-cover rounded cursor-pointer border border-neutral-200 dark:border-neutral-600"
                                                />
                                                <p class={detail_class}>
                                                    {image.image_type.as_str()}
                                                    if let Some(weather) = image.weather_condition {
                                                        {format!(" · {}", weather.as_str())}
                                                    }
                                                </p>
                                                if state.is_authenticated() {
                                                    <button
                                                        onclick={on_delete_click}
                                                        class="text-sm text-red-700 dark:text-red-400 underline"
                                                    >
                                                        {"Delete"}
                                                    </button>
                                                }
                                            </div>
                                        }
                                    })}
                                </div>
                            }
                        </div>
                    </div>
                }
            })}

            <div class="space-y-4">
                <h2 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Inspections"}
                </h2>

                {inspections.render("inspections", |inspections, _, _| {
                    if inspections.is_empty() {
                        return html! {
                            <p class={detail_class}>
                                {"No inspections recorded yet."}
                            </p>
                        };
                    }
                    html! {
                        <div class="space-y-3">
                            {for inspections.iter().map(|inspection| html! {
                                <div
                                    key={inspection.id.to_string()}
                                    class="bg-white dark:bg-neutral-800 p-4 rounded-lg shadow-sm border border-neutral-200 dark:border-neutral-700 flex items-center justify-between"
                                >
                                    <div class="space-y-1">
                                        <p class="text-sm font-medium text-neutral-900 dark:text-neutral-100">
                                            {format_civil_date(inspection.inspection_date)}
                                        </p>
                                        if !inspection.notes.is_empty() {
                                            <p class={detail_class}>
                                                {&inspection.notes}
                                            </p>
                                        }
                                        <p class={detail_class}>
                                            {format!("{} images", inspection.images.len())}
                                            if let Some(admin) = &inspection.conducted_by {
                                                {format!(" · {}", admin.display_label())}
                                            }
                                        </p>
                                    </div>
                                    <Link<Route>
                                        to={Route::InspectionDetail { id: inspection.id }}
                                        classes="px-3 py-2 rounded-md text-sm font-medium bg-neutral-100 hover:bg-neutral-200 dark:bg-neutral-700 dark:hover:bg-neutral-600 text-neutral-900 dark:text-neutral-100"
                                    >
                                        {"View"}
                                    </Link<Route>>
                                </div>
                            })}
                        </div>
                    }
                })}

                if state.is_authenticated() {
                    <InspectionForm
                        record_id={props.id}
                        on_created={on_inspection_created}
                    />
                }
            </div>

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
