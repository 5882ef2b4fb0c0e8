use barista_api::{logging::init_tracing_to_file, routes, settings::Settings, state::AppState};
use tokio::{
    net::TcpListener,
    signal::{
        ctrl_c,
        unix::{signal, SignalKind},
    },
};

#[tokio::main]
async fn main() {
    let _guard = init_tracing_to_file();

    let settings = Settings::load("config/services.toml").unwrap();

    let state = AppState::new(&settings);
    let router = routes::create_routes(state);

    let address = format!("0.0.0.0:{}", settings.http.port);
    let listener = TcpListener::bind(&address).await.unwrap();

    tracing::info!("Barista API server started on port {}", settings.http.port);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        tracing::info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
