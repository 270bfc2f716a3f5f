//! HTTP client for the single-document backend.

use async_trait::async_trait;
use std::time::Duration;

use super::models::{DocumentEnvelope, DocumentRecord};
use crate::board::{
    domain::{BoardChange, Snapshot},
    ports::{GatewayResult, ProjectGateway, TransportError},
};

/// Header carrying the static access key.
pub const ACCESS_KEY_HEADER: &str = "X-Access-Key";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for a document resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentGatewaySettings {
    /// Base URL of the document service, without trailing slash.
    pub base_url: String,
    /// Identifier of the document holding the board.
    pub document_id: String,
    /// Static access key sent with every request.
    pub access_key: String,
}

impl DocumentGatewaySettings {
    /// Creates settings for one document.
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        document_id: impl Into<String>,
        access_key: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            document_id: document_id.into(),
            access_key: access_key.into(),
        }
    }

    fn document_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.document_id
        )
    }

    fn latest_url(&self) -> String {
        format!("{}/latest", self.document_url())
    }
}

/// Gateway storing the board as one JSON document.
///
/// Every save writes the full snapshot; the [`BoardChange`] is only used for
/// logging.
#[derive(Debug, Clone)]
pub struct DocumentProjectGateway {
    client: reqwest::Client,
    settings: DocumentGatewaySettings,
}

impl DocumentProjectGateway {
    /// Creates a gateway with a default HTTP client.
    #[must_use]
    pub fn new(settings: DocumentGatewaySettings) -> Self {
        Self::with_client(reqwest::Client::new(), settings)
    }

    /// Creates a gateway reusing an existing HTTP client.
    #[must_use]
    pub const fn with_client(client: reqwest::Client, settings: DocumentGatewaySettings) -> Self {
        Self { client, settings }
    }
}

fn ensure_success(response: reqwest::Response) -> GatewayResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(TransportError::HttpStatus {
            status: status.as_u16(),
        })
    }
}

#[async_trait]
impl ProjectGateway for DocumentProjectGateway {
    async fn load(&self) -> GatewayResult<Snapshot> {
        let response = self
            .client
            .get(self.settings.latest_url())
            .header(ACCESS_KEY_HEADER, &self.settings.access_key)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(TransportError::network)?;
        let envelope: DocumentEnvelope = ensure_success(response)?
            .json()
            .await
            .map_err(TransportError::decode)?;

        Ok(envelope
            .record
            .map(Snapshot::from)
            .unwrap_or_else(Snapshot::empty))
    }

    async fn save(&self, snapshot: &Snapshot, change: &BoardChange) -> GatewayResult<()> {
        let record = DocumentRecord::from(snapshot);
        let response = self
            .client
            .put(self.settings.document_url())
            .header(ACCESS_KEY_HEADER, &self.settings.access_key)
            .json(&record)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(TransportError::network)?;
        ensure_success(response)?;
        tracing::debug!(change = change.kind(), "document written");
        Ok(())
    }
}
