use payloads::{InspectionId, responses};
use yew::prelude::*;

use super::{FetchHookReturn, use_fetch};
use crate::get_api_client;

#[hook]
pub fn use_inspection(
    inspection_id: InspectionId,
) -> FetchHookReturn<responses::Inspection> {
    use_fetch(inspection_id, move || async move {
        get_api_client()
            .get_inspection(&inspection_id)
            .await
            .map_err(|e| e.to_string())
    })
}
