//! reqwest-backed implementation of [`RosterApi`].

use log::debug;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::api::{ApiError, ApiResult, RosterApi};
use crate::domain::client::ClientRecord;
use crate::domain::gender::GenderSummary;
use crate::domain::selection::Selection;

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

#[derive(Clone, Debug)]
pub struct HttpRosterApi {
    client: Client,
    base_url: String,
}

impl HttpRosterApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    async fn get_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl RosterApi for HttpRosterApi {
    async fn gender_list(&self) -> ApiResult<Vec<GenderSummary>> {
        let url = self.url_for("getGenderList");
        debug!("Fetching gender list from {url}");
        self.get_json(self.client.get(url)).await
    }

    async fn clients_for_age(&self, selection: &Selection) -> ApiResult<Vec<ClientRecord>> {
        let url = self.url_for("getClientsForAge");
        debug!(
            "Fetching {} clients aged {} from {url}",
            selection.gender, selection.range
        );
        let request = self.client.get(url).query(&[
            ("lowAge", selection.range.low().to_string()),
            ("highAge", selection.range.high().to_string()),
            ("gender", selection.gender.to_string()),
        ]);
        self.get_json(request).await
    }
}
