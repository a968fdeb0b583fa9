use payloads::RecordId;
use yew::prelude::*;

use crate::components::{RecordForm, RequireAuth};
use crate::hooks::use_record;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: RecordId,
}

/// The edit form mounts only after the record has loaded, so its field
/// state can be seeded from the fetched values.
#[function_component]
pub fn EditRecordPage(props: &Props) -> Html {
    let record = use_record(props.id);

    html! {
        <RequireAuth>
            <div class="max-w-2xl mx-auto">
                {record.render("record", |record, _, _| html! {
                    <RecordForm record={record.clone()} />
                })}
            </div>
        </RequireAuth>
    }
}
