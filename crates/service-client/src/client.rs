use opsfabric_core::DomainError;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ServiceClientConfig;

/// A caller bound to one downstream service's base URL, sharing a single
/// pooled transport ("single long-lived transport per target
/// service... pool limits are configurable").
#[derive(Clone)]
pub struct ServiceClient {
    http: Client,
    base_url: String,
}

impl ServiceClient {
    pub fn new(config: ServiceClientConfig) -> Result<Self, DomainError> {
        let http = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .pool_max_idle_per_host(16)
            .build()
            .map_err(|e| DomainError::internal(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    pub async fn get<R>(&self, path: &str, query: &[(&str, String)]) -> Result<R, DomainError>
    where
        R: DeserializeOwned,
    {
        let request = self.http.get(self.url(path)).query(query);
        self.send(request).await
    }

    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, DomainError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let request = self.http.post(self.url(path)).json(body);
        self.send(request).await
    }

    pub async fn patch<B, R>(&self, path: &str, body: &B) -> Result<R, DomainError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let request = self.http.patch(self.url(path)).json(body);
        self.send(request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn send<R>(&self, request: reqwest::RequestBuilder) -> Result<R, DomainError>
    where
        R: DeserializeOwned,
    {
        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();

        if status.is_success() {
            return response
                .json::<R>()
                .await
                .map_err(|e| DomainError::remote(format!("could not decode response body: {e}")));
        }

        let body = response.text().await.unwrap_or_default();
        Err(map_status_error(status, body))
    }
}

fn map_transport_error(e: reqwest::Error) -> DomainError {
    if e.is_timeout() {
        DomainError::timeout(e.to_string())
    } else if e.is_connect() {
        DomainError::unreachable(e.to_string())
    } else {
        DomainError::unreachable(e.to_string())
    }
}

fn map_status_error(status: StatusCode, body: String) -> DomainError {
    match status {
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            DomainError::validation(body)
        }
        StatusCode::NOT_FOUND => DomainError::not_found(body),
        StatusCode::CONFLICT => DomainError::conflict(body),
        StatusCode::UNAUTHORIZED => DomainError::Unauthorized,
        StatusCode::FORBIDDEN => DomainError::forbidden(body),
        s if s.is_client_error() || s.is_server_error() => DomainError::remote(format!(
            "{status}: {body}"
        )),
        _ => DomainError::internal(format!("unexpected status {status}: {body}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path_without_double_slash() {
        let client = ServiceClient::new(ServiceClientConfig::new(
            "http://inventory.local/",
            100,
            100,
        ))
        .unwrap();
        assert_eq!(client.url("/items/1"), "http://inventory.local/items/1");
    }

    #[test]
    fn maps_404_to_not_found() {
        let err = map_status_error(StatusCode::NOT_FOUND, "missing".into());
        assert_eq!(err.code(), "not_found");
    }

    #[test]
    fn maps_409_to_conflict() {
        let err = map_status_error(StatusCode::CONFLICT, "insufficient".into());
        assert_eq!(err.code(), "conflict");
    }

    #[test]
    fn maps_422_and_400_to_validation_rejected() {
        assert_eq!(
            map_status_error(StatusCode::UNPROCESSABLE_ENTITY, String::new()).code(),
            "validation_rejected"
        );
        assert_eq!(
            map_status_error(StatusCode::BAD_REQUEST, String::new()).code(),
            "validation_rejected"
        );
    }

    #[test]
    fn maps_other_5xx_to_remote_error() {
        let err = map_status_error(StatusCode::BAD_GATEWAY, "down".into());
        assert_eq!(err.code(), "remote_error");
    }
}
