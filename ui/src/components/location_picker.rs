use payloads::requests::Location;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub value: Option<Location>,
    pub on_change: Callback<Location>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Stand-in for the map-based location widget: produces the same
/// `{name, lat, lng}` triple from plain inputs. Map tile rendering is
/// an external collaborator and out of scope here.
#[function_component]
pub fn LocationPicker(props: &Props) -> Html {
    let current = props.value.clone().unwrap_or(Location {
        name: String::new(),
        lat: None,
        lng: None,
    });

    let on_name_input = {
        let current = current.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(Location {
                name: input.value(),
                ..current.clone()
            });
        })
    };

    let on_lat_input = {
        let current = current.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(Location {
                lat: input.value().parse().ok(),
                ..current.clone()
            });
        })
    };

    let on_lng_input = {
        let current = current.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(Location {
                lng: input.value().parse().ok(),
                ..current.clone()
            });
        })
    };

    let input_class = "px-3 py-2 border border-neutral-300 \
                       dark:border-neutral-600 rounded-md text-sm \
                       bg-white dark:bg-neutral-700 text-neutral-900 \
                       dark:text-neutral-100";

    html! {
        <div class="flex flex-wrap gap-3">
            <input
                type="text"
                placeholder="Location name"
                value={current.name.clone()}
                oninput={on_name_input}
                disabled={props.disabled}
                class={classes!(input_class, "flex-1", "min-w-48")}
            />
            <input
                type="number"
                step="any"
                placeholder="Latitude"
                value={current.lat.map(|v| v.to_string()).unwrap_or_default()}
                oninput={on_lat_input}
                disabled={props.disabled}
                class={classes!(input_class, "w-32")}
            />
            <input
                type="number"
                step="any"
                placeholder="Longitude"
                value={current.lng.map(|v| v.to_string()).unwrap_or_default()}
                oninput={on_lng_input}
                disabled={props.disabled}
                class={classes!(input_class, "w-32")}
            />
        </div>
    }
}
