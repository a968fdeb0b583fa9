use payloads::{RecordId, responses};
use yew::prelude::*;

use super::{FetchHookReturn, use_fetch};
use crate::get_api_client;

#[hook]
pub fn use_record(
    record_id: RecordId,
) -> FetchHookReturn<responses::TransformerRecord> {
    use_fetch(record_id, move || async move {
        get_api_client()
            .get_transformer_record(&record_id)
            .await
            .map_err(|e| e.to_string())
    })
}
