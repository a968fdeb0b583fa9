use payloads::pending::{FormMode, PendingImages};
use payloads::{ImageType, WeatherCondition};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::utils::files::{data_url, read_file};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub pending: PendingImages,
    pub on_change: Callback<PendingImages>,
    /// Surfaced when a selected file is rejected before reading.
    pub on_file_error: Callback<String>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Editor for the pending image slots of the upload/edit form. All
/// state transitions go through `PendingImages`; this component only
/// wires DOM events to them.
#[function_component]
pub fn ImageFieldEditor(props: &Props) -> Html {
    let on_add = {
        let pending = props.pending.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = pending.clone();
            next.add_slot();
            on_change.emit(next);
        })
    };

    let slot_count = props.pending.slots().len();
    let can_remove =
        props.pending.mode() == FormMode::Edit || slot_count > 1;

    let select_class = "px-3 py-2 border border-neutral-300 \
                        dark:border-neutral-600 rounded-md text-sm \
                        bg-white dark:bg-neutral-700 text-neutral-900 \
                        dark:text-neutral-100";

    html! {
        <div class="space-y-3">
            {for props.pending.slots().iter().enumerate().map(|(index, slot)| {
                let on_file_select = {
                    let pending = props.pending.clone();
                    let on_change = props.on_change.clone();
                    let on_file_error = props.on_file_error.clone();
                    Callback::from(move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        let Some(file) =
                            input.files().and_then(|files| files.get(0))
                        else {
                            return;
                        };

                        let pending = pending.clone();
                        let on_change = on_change.clone();
                        read_file(
                            file,
                            Callback::from(move |handle| {
                                let mut next = pending.clone();
                                next.set_file(index, handle);
                                on_change.emit(next);
                            }),
                            on_file_error.clone(),
                        );
                    })
                };

                let on_type_change = {
                    let pending = props.pending.clone();
                    let on_change = props.on_change.clone();
                    Callback::from(move |e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        let image_type = match select.value().as_str() {
                            "Maintenance" => ImageType::Maintenance,
                            _ => ImageType::Baseline,
                        };
                        let mut next = pending.clone();
                        next.set_image_type(index, image_type);
                        on_change.emit(next);
                    })
                };

                let on_weather_change = {
                    let pending = props.pending.clone();
                    let on_change = props.on_change.clone();
                    Callback::from(move |e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        if let Ok(weather) = select.value().parse::<WeatherCondition>() {
                            let mut next = pending.clone();
                            next.set_weather(index, weather);
                            on_change.emit(next);
                        }
                    })
                };

                let on_remove = {
                    let pending = props.pending.clone();
                    let on_change = props.on_change.clone();
                    Callback::from(move |_: MouseEvent| {
                        let mut next = pending.clone();
                        next.remove_slot(index);
                        on_change.emit(next);
                    })
                };

                html! {
                    <div class="bg-neutral-50 dark:bg-neutral-700/50 p-4 rounded-md border border-neutral-200 dark:border-neutral-600 space-y-3">
                        <div class="flex flex-wrap items-center gap-3">
                            <input
                                type="file"
                                accept="image/*"
                                onchange={on_file_select}
                                disabled={props.disabled}
                                class="text-sm text-neutral-700 dark:text-neutral-300"
                            />

                            <select
                                class={select_class}
                                onchange={on_type_change}
                                disabled={props.disabled}
                            >
                                {for ImageType::ALL.iter().map(|ty| html! {
                                    <option
                                        value={ty.as_str()}
                                        selected={slot.image_type == *ty}
                                    >
                                        {ty.as_str()}
                                    </option>
                                })}
                            </select>

                            if slot.image_type == ImageType::Baseline {
                                <select
                                    class={select_class}
                                    onchange={on_weather_change}
                                    disabled={props.disabled}
                                >
                                    // Once a weather is chosen the
                                    // placeholder is no longer a valid
                                    // selection.
                                    <option
                                        value=""
                                        selected={slot.weather_condition.is_none()}
                                        disabled={slot.weather_condition.is_some()}
                                    >
                                        {"Select weather"}
                                    </option>
                                    {for WeatherCondition::ALL.iter().map(|w| html! {
                                        <option
                                            value={w.as_str()}
                                            selected={slot.weather_condition == Some(*w)}
                                        >
                                            {w.as_str()}
                                        </option>
                                    })}
                                </select>
                            }

                            if can_remove {
                                <button
                                    type="button"
                                    onclick={on_remove}
                                    disabled={props.disabled}
                                    class="px-3 py-2 rounded-md text-sm font-medium border border-red-300 text-red-700 dark:text-red-400"
                                >
                                    {"Remove"}
                                </button>
                            }
                        </div>

                        if let Some(file) = &slot.file {
                            <div class="flex items-center gap-3">
                                <img
                                    src={data_url(&file.bytes)}
                                    alt={file.name.clone()}
                                    class="h-16 w-16 object-cover rounded border border-neutral-200 dark:border-neutral-600"
                                />
                                <span class="text-sm text-neutral-600 dark:text-neutral-400">
                                    {&file.name}
                                </span>
                            </div>
                        }
                    </div>
                }
            })}

            <button
                type="button"
                onclick={on_add}
                disabled={props.disabled}
                class="px-4 py-2 rounded-md text-sm font-medium border border-neutral-300 dark:border-neutral-600 text-neutral-700 dark:text-neutral-300"
            >
                {"Add another image"}
            </button>
        </div>
    }
}
