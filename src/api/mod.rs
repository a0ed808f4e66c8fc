//! REST client for the bakery API.
//!
//! Every call goes through [`ApiClient`], which attaches the stored bearer
//! token, unwraps the `{ success, data, message }` envelope and turns non-2xx
//! responses into [`ApiError::Status`] carrying the server's message.

mod auth;
mod categories;
mod faqs;
mod gallery;
mod menu;
mod specials;
mod stats;

pub use auth::AuthApi;
pub use categories::CategoriesApi;
pub use faqs::FaqsApi;
pub use gallery::GalleryApi;
pub use menu::{Availability, MenuApi};
pub use specials::SpecialsApi;
pub use stats::StatsApi;

use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::logging::{error, log};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{File, FormData};

use crate::config::API_BASE_URL;
use crate::error::ApiError;
use crate::models::{ApiEnvelope, ApiErrorBody};
use crate::session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: &'static str,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(API_BASE_URL)
    }
}

impl ApiClient {
    pub const fn new(base_url: &'static str) -> Self {
        Self { base_url }
    }

    pub fn base_url(&self) -> &'static str {
        self.base_url
    }

    /// Absolute URL for a resource path such as `menu/3/images`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn categories(self) -> CategoriesApi {
        CategoriesApi::new(self)
    }

    pub fn menu(self) -> MenuApi {
        MenuApi::new(self)
    }

    pub fn specials(self) -> SpecialsApi {
        SpecialsApi::new(self)
    }

    pub fn faqs(self) -> FaqsApi {
        FaqsApi::new(self)
    }

    pub fn gallery(self) -> GalleryApi {
        GalleryApi::new(self)
    }

    pub fn auth(self) -> AuthApi {
        AuthApi::new(self)
    }

    pub fn stats(self) -> StatsApi {
        StatsApi::new(self)
    }

    /// Client provided by the app root, or one for the configured base URL.
    pub fn use_client() -> Self {
        leptos::use_context::<ApiClient>().unwrap_or_default()
    }

    fn authorize(builder: RequestBuilder) -> RequestBuilder {
        match session::authorization_header() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    pub(crate) async fn get<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Default,
    {
        let url = self.endpoint(path);
        log!("[API] GET {}", url);
        let response = Self::authorize(Request::get(&url)).send().await?;
        Self::decode(&url, response).await
    }

    pub(crate) async fn send_json<B, T>(
        &self,
        url: &str,
        builder: RequestBuilder,
        body: &B,
    ) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned + Default,
    {
        log!("[API] {} (json)", url);
        let response = Self::authorize(builder).json(body)?.send().await?;
        Self::decode(url, response).await
    }

    pub(crate) async fn send_multipart<T>(
        &self,
        url: &str,
        builder: RequestBuilder,
        multipart: Multipart,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Default,
    {
        log!("[API] {} (multipart: {:?})", url, multipart.field_names());
        let form = multipart.into_form_data()?;
        let response = Self::authorize(builder).body(form)?.send().await?;
        Self::decode(url, response).await
    }

    /// Sends a bodiless request and only checks the status.
    pub(crate) async fn send_empty(&self, url: &str, builder: RequestBuilder) -> Result<(), ApiError> {
        log!("[API] {}", url);
        let response = Self::authorize(builder).send().await?;
        Self::expect_ok(url, response).await
    }

    /// Sends a multipart request and only checks the status.
    pub(crate) async fn send_multipart_empty(
        &self,
        url: &str,
        builder: RequestBuilder,
        multipart: Multipart,
    ) -> Result<(), ApiError> {
        log!("[API] {} (multipart: {:?})", url, multipart.field_names());
        let form = multipart.into_form_data()?;
        let response = Self::authorize(builder).body(form)?.send().await?;
        Self::expect_ok(url, response).await
    }

    async fn decode<T>(url: &str, response: Response) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Default,
    {
        if !response.ok() {
            return Err(Self::status_error(url, response).await);
        }
        let envelope: ApiEnvelope<T> = response.json().await?;
        Ok(envelope.data)
    }

    async fn expect_ok(url: &str, response: Response) -> Result<(), ApiError> {
        if response.ok() {
            Ok(())
        } else {
            Err(Self::status_error(url, response).await)
        }
    }

    async fn status_error(url: &str, response: Response) -> ApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = parse_error_message(&body).unwrap_or_default();
        error!("[API ERROR] {} -> {} {}", url, status, message);
        ApiError::Status { status, message }
    }
}

/// Extracts the `message` of a JSON error body.
pub fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(ApiErrorBody::into_message)
}

/// Fields and files for a `multipart/form-data` request.
#[derive(Debug, Clone, Default)]
pub struct Multipart {
    fields: Vec<(&'static str, String)>,
    files: Vec<(&'static str, File)>,
}

impl Multipart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.fields.push((name, value.into()));
        self
    }

    /// Adds the field only when it holds something; the API treats an
    /// omitted field as "leave unchanged".
    pub fn text_if_present(self, name: &'static str, value: &str) -> Self {
        if value.trim().is_empty() {
            self
        } else {
            self.text(name, value)
        }
    }

    pub fn file(mut self, name: &'static str, file: File) -> Self {
        self.files.push((name, file));
        self
    }

    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .map(|(n, _)| *n)
            .chain(self.files.iter().map(|(n, _)| *n))
            .collect()
    }

    fn into_form_data(self) -> Result<FormData, ApiError> {
        let form = FormData::new()?;
        for (name, value) in &self.fields {
            form.append_with_str(name, value)?;
        }
        for (name, file) in &self.files {
            form.append_with_blob_and_filename(name, file, &file.name())?;
        }
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_cleanly() {
        let client = ApiClient::new("https://api.zelan.id/api/");
        assert_eq!(client.endpoint("/menu/3"), "https://api.zelan.id/api/menu/3");
        assert_eq!(ApiClient::new("/api").endpoint("faqs"), "/api/faqs");
    }

    #[test]
    fn test_multipart_skips_blank_fields() {
        let form = Multipart::new()
            .text_if_present("name", "Bolu Pandan")
            .text_if_present("tag", "")
            .text_if_present("price_display", "   ")
            .text("is_featured", "false");
        assert_eq!(form.field_names(), vec!["name", "is_featured"]);
        assert_eq!(form.field("name"), Some("Bolu Pandan"));
        assert_eq!(form.field("tag"), None);
    }

    #[test]
    fn test_parse_error_message() {
        assert_eq!(
            parse_error_message(r#"{"success":false,"message":"Category has items"}"#).as_deref(),
            Some("Category has items")
        );
        assert_eq!(parse_error_message("<html>502</html>"), None);
    }
}
