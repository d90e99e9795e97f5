#[tokio::main]
async fn main() {
    opsfabric_observability::init();

    let config = opsfabric_infra::AppConfig::from_env().unwrap_or_else(|error| {
        tracing::error!(%error, "invalid configuration");
        std::process::exit(1);
    });

    let app = opsfabric_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080")
        .await
        .expect("failed to bind 0.0.0.0:8080");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
