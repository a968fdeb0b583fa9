use payloads::responses;
use yew::prelude::*;

use super::{FetchHookReturn, use_fetch};
use crate::get_api_client;

/// Fetches the full transformer record collection once per mount. The
/// list page narrows and pages it client-side.
#[hook]
pub fn use_records() -> FetchHookReturn<Vec<responses::TransformerRecord>> {
    use_fetch((), || async move {
        get_api_client()
            .list_transformer_records()
            .await
            .map_err(|e| e.to_string())
    })
}
