use crate::pending::FileHandle;
use crate::{ImageId, ImageType, InspectionId, RecordId, requests, responses};
use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend. Mutating calls
/// attach the bearer token when one is present.
pub struct APIClient {
    pub address: String,
    pub bearer_token: Option<String>,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    fn authorize(
        &self,
        request: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        match &self.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get(&self, path: &str) -> ReqwestResult {
        self.inner_client.get(self.format_url(path)).send().await
    }

    async fn post_json(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path)).json(body);
        request.send().await
    }

    async fn post_multipart(&self, path: &str, form: Form) -> ReqwestResult {
        let request =
            self.inner_client.post(self.format_url(path)).multipart(form);
        self.authorize(request).send().await
    }

    async fn put_multipart(&self, path: &str, form: Form) -> ReqwestResult {
        let request =
            self.inner_client.put(self.format_url(path)).multipart(form);
        self.authorize(request).send().await
    }

    async fn delete(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.delete(self.format_url(path));
        self.authorize(request).send().await
    }
}

/// Methods on the backend API
impl APIClient {
    pub async fn login(
        &self,
        credentials: &requests::LoginCredentials,
    ) -> Result<responses::LoginResponse, ClientError> {
        let response = self.post_json("auth/login", credentials).await?;
        ok_body(response).await
    }

    pub async fn list_transformer_records(
        &self,
    ) -> Result<Vec<responses::TransformerRecord>, ClientError> {
        let response = self.get("transformer-records").await?;
        ok_body(response).await
    }

    pub async fn get_transformer_record(
        &self,
        record_id: &RecordId,
    ) -> Result<responses::TransformerRecord, ClientError> {
        let response =
            self.get(&format!("transformer-records/{record_id}")).await?;
        ok_body(response).await
    }

    pub async fn create_transformer_record(
        &self,
        details: &requests::SaveRecord,
    ) -> Result<responses::TransformerRecord, ClientError> {
        let response = self
            .post_multipart("transformer-records", record_form(details))
            .await?;
        ok_body(response).await
    }

    pub async fn update_transformer_record(
        &self,
        record_id: &RecordId,
        details: &requests::SaveRecord,
    ) -> Result<responses::TransformerRecord, ClientError> {
        let response = self
            .put_multipart(
                &format!("transformer-records/{record_id}"),
                record_form(details),
            )
            .await?;
        ok_body(response).await
    }

    pub async fn delete_transformer_record(
        &self,
        record_id: &RecordId,
    ) -> Result<(), ClientError> {
        let response =
            self.delete(&format!("transformer-records/{record_id}")).await?;
        ok_empty(response).await
    }

    /// Delete a single image from a record without touching its
    /// siblings.
    pub async fn delete_record_image(
        &self,
        image_id: &ImageId,
    ) -> Result<(), ClientError> {
        let response = self
            .delete(&format!("transformer-records/images/{image_id}"))
            .await?;
        ok_empty(response).await
    }

    /// List inspections conducted for a record.
    pub async fn list_inspections(
        &self,
        record_id: &RecordId,
    ) -> Result<Vec<responses::Inspection>, ClientError> {
        let response = self.get(&format!("inspections/{record_id}")).await?;
        ok_body(response).await
    }

    pub async fn get_inspection(
        &self,
        inspection_id: &InspectionId,
    ) -> Result<responses::Inspection, ClientError> {
        let response =
            self.get(&format!("inspections/detail/{inspection_id}")).await?;
        ok_body(response).await
    }

    pub async fn create_inspection(
        &self,
        details: &requests::CreateInspection,
    ) -> Result<responses::Inspection, ClientError> {
        let mut form = Form::new()
            .text(
                "transformerRecordId",
                details.transformer_record_id.to_string(),
            )
            .text("inspectionDate", details.inspection_date.to_string())
            .text("notes", details.notes.clone());
        for file in &details.images {
            form = form.part("images", file_part(file));
        }
        let response = self.post_multipart("inspections", form).await?;
        ok_body(response).await
    }

    /// Append images to an existing inspection.
    pub async fn upload_inspection_images(
        &self,
        details: &requests::UploadInspectionImages,
    ) -> Result<responses::Inspection, ClientError> {
        let mut form = Form::new();
        for file in &details.images {
            form = form.part("images", file_part(file));
        }
        let response = self
            .post_multipart(
                &format!("inspections/{}/upload-image", details.inspection_id),
                form,
            )
            .await?;
        ok_body(response).await
    }

    /// Resolve a server-relative image path against the backend origin.
    /// Use this for `<img src>` attributes in the UI.
    pub fn image_url(&self, file_path: &str) -> String {
        format!("{}{}", self.address, file_path)
    }
}

fn file_part(file: &FileHandle) -> Part {
    Part::bytes(file.bytes.clone()).file_name(file.name.clone())
}

/// Assemble the multipart payload for a record create/update. The
/// backend zips the `types` and `weatherConditions` arrays positionally
/// with the `images` file parts, so both arrays always carry one entry
/// per file, with an empty weather string for non-baseline images.
fn record_form(details: &requests::SaveRecord) -> Form {
    let lat = details
        .location
        .lat
        .map(|v| v.to_string())
        .unwrap_or_default();
    let lng = details
        .location
        .lng
        .map(|v| v.to_string())
        .unwrap_or_default();

    let mut form = Form::new()
        .text("name", details.name.clone())
        .text("locationName", details.location.name.clone())
        .text("locationLat", lat)
        .text("locationLng", lng)
        .text("capacity", details.capacity.clone());

    for image in &details.images {
        // Validated upstream; a slot without a file never reaches here.
        if let Some(file) = &image.file {
            form = form.part("images", file_part(file));
            form = form.text("types", image.image_type.as_str());
            let weather = match image.image_type {
                ImageType::Baseline => image
                    .weather_condition
                    .map(|w| w.as_str())
                    .unwrap_or_default(),
                ImageType::Maintenance => "",
            };
            form = form.text("weatherConditions", weather);
        }
    }
    form
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}
