use payloads::{RecordId, responses};
use yew::prelude::*;

use super::{FetchHookReturn, use_fetch};
use crate::get_api_client;

/// Inspections conducted for a record.
#[hook]
pub fn use_inspections(
    record_id: RecordId,
) -> FetchHookReturn<Vec<responses::Inspection>> {
    use_fetch(record_id, move || async move {
        get_api_client()
            .list_inspections(&record_id)
            .await
            .map_err(|e| e.to_string())
    })
}
