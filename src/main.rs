mod config;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::PortalConfig::from_env();
    let port = config.port;
    let state = state::AppState::new(config);

    let _sweeper = services::sweeper::spawn_sweeper_task(state.clone());

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "learnpath listening");
    axum::serve(listener, app).await.expect("server failed");
}
