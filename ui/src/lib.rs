use payloads::{APIClient, InspectionId, RecordId};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

pub mod components;
pub mod hooks;
mod logs;
pub mod pages;
mod session;
mod state;
mod utils;

pub use state::{AuthState, Session, State};

use components::layout::MainLayout;
use hooks::use_session_restore;
use pages::{
    EditRecordPage, InspectionDetailPage, LoginPage, NotFoundPage,
    RecordDetailPage, RecordsPage, UploadPage,
};

/// Build an API client against the configured backend, carrying the
/// current session's bearer token for mutating calls.
pub fn get_api_client() -> APIClient {
    // Backend address from build time, falling back to same origin.
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            let window = web_sys::window().unwrap();
            let location = window.location();
            location.origin().unwrap()
        });

    let bearer_token = Dispatch::<State>::global().get().bearer_token();

    APIClient {
        address,
        bearer_token,
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    logs::init_logging();
    html! {
        <BrowserRouter>
            <AppContent />
        </BrowserRouter>
    }
}

#[function_component]
fn AppContent() -> Html {
    // Restore the persisted session once at startup.
    use_session_restore();

    html! {
        <MainLayout>
            <Switch<Route> render={switch} />
        </MainLayout>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Records,
    #[at("/records/:id")]
    RecordDetail { id: RecordId },
    #[at("/records/:id/edit")]
    EditRecord { id: RecordId },
    #[at("/upload")]
    Upload,
    #[at("/inspections/:id")]
    InspectionDetail { id: InspectionId },
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Records => html! { <RecordsPage /> },
        Route::RecordDetail { id } => html! { <RecordDetailPage {id} /> },
        Route::EditRecord { id } => html! { <EditRecordPage {id} /> },
        Route::Upload => html! { <UploadPage /> },
        Route::InspectionDetail { id } => {
            html! { <InspectionDetailPage {id} /> }
        }
        Route::Login => html! { <LoginPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
