use super::error::ApiError;
use super::model::{decode_services, ErrorBody, Service, ServicePayload};
use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Remote catalog operations used by the admin panel.
///
/// The HTTP implementation is [`HttpCatalogApi`]; tests substitute an
/// in-memory fake.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// GET the full collection. A 2xx body that is not an array yields an empty list.
    async fn list(&self) -> Result<Vec<Service>, ApiError>;

    /// POST a new service.
    async fn create(&self, payload: &ServicePayload) -> Result<(), ApiError>;

    /// PATCH (full replace) an existing service.
    async fn update(&self, id: &str, payload: &ServicePayload) -> Result<(), ApiError>;

    /// DELETE a service.
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

/// `reqwest`-backed client for `<base>/servicos`.
pub struct HttpCatalogApi {
    http_client: Client,
    collection_url: String,
}

impl HttpCatalogApi {
    /// Create a client for the given API base (e.g. `https://host/api`).
    pub fn new(api_base: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http_client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("catalog-admin/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http_client,
            collection_url: format!("{}/servicos", api_base.trim_end_matches('/')),
        })
    }

    /// URL of the collection endpoint.
    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url, id)
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        payload: Option<&ServicePayload>,
    ) -> Result<Response, ApiError> {
        info!("{} {}", method, url);
        if let Some(payload) = payload {
            debug!(
                "Request body: nome={}, preco={}, duracao={}, imagens={}",
                payload.nome,
                payload.preco,
                payload.duracao,
                payload.imagens.len()
            );
        }

        let mut request = self.http_client.request(method.clone(), url);
        if let Some(payload) = payload {
            request = request.json(payload);
        }

        let response = request.send().await.map_err(|e| {
            error!("{} {} failed: {}", method, url, e);
            ApiError::Transport(e)
        })?;

        let status = response.status();
        info!("{} {} -> {}", method, url, status.as_u16());

        if status.is_success() {
            return Ok(response);
        }

        // Error bodies are best effort: anything that is not JSON with a
        // non-empty `message` falls back to the caller's generic text.
        let body = response.text().await.unwrap_or_default();
        error!("Error response body: {}", body);
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());

        Err(ApiError::Server {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn list(&self) -> Result<Vec<Service>, ApiError> {
        let response = self.send(Method::GET, &self.collection_url, None).await?;

        let body: Value = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        let Value::Array(items) = body else {
            warn!("List response is not an array, treating as empty");
            return Ok(Vec::new());
        };

        Ok(decode_services(items))
    }

    async fn create(&self, payload: &ServicePayload) -> Result<(), ApiError> {
        self.send(Method::POST, &self.collection_url, Some(payload))
            .await?;
        Ok(())
    }

    async fn update(&self, id: &str, payload: &ServicePayload) -> Result<(), ApiError> {
        let url = self.item_url(id);
        self.send(Method::PATCH, &url, Some(payload)).await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let url = self.item_url(id);
        self.send(Method::DELETE, &url, None).await?;
        Ok(())
    }
}
