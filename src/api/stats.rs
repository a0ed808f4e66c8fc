use super::ApiClient;
use crate::error::ApiError;
use crate::models::stats::Stats;

#[derive(Clone, Copy, Debug)]
pub struct StatsApi {
    client: ApiClient,
}

impl StatsApi {
    pub(super) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get(self) -> Result<Stats, ApiError> {
        self.client.get("stats").await
    }
}
