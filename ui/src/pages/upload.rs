use yew::prelude::*;

use crate::components::{RecordForm, RequireAuth};

#[function_component]
pub fn UploadPage() -> Html {
    html! {
        <RequireAuth>
            <div class="max-w-2xl mx-auto">
                <RecordForm />
            </div>
        </RequireAuth>
    }
}
