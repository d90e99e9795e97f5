use reqwest::StatusCode;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        for (k, v) in [
            ("CLIENT_SERVICE_URL", "http://clients.local"),
            ("CATALOG_SERVICE_URL", "http://catalog.local"),
            ("INVENTORY_SERVICE_URL", "http://inventory.local"),
            ("QUEUE_URL", "http://queue.local"),
            ("EVIDENCE_BUCKET", "evidence"),
        ] {
            std::env::set_var(k, v);
        }
        let config = opsfabric_infra::AppConfig::from_env().expect("test config");
        let app = opsfabric_api::app::build_app(&config);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{addr}");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let server = TestServer::spawn().await;
    let response = reqwest::get(format!("{}/health", server.base_url)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn creating_an_order_for_an_unknown_customer_returns_not_found() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/orders", server.base_url))
        .json(&serde_json::json!({
            "customer_id": "018f0000-0000-7000-8000-000000000000",
            "creation_method": "client_app",
            "delivery_address": "Calle 1",
            "delivery_city": "Bogotá",
            "delivery_country": "CO",
            "items": [],
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
