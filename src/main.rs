use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use boxfit::{
    routes::{health, status, websocket},
    state::AppState,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing; override the default filter via RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "boxfit=info,tower_http=warn".into()),
        )
        .init();

    println!("🧩 BoxFit game server starting...");

    // Create application state
    let state = AppState::new();
    println!("🔗 Room registry initialized");

    // Browser clients connect from arbitrary origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all routes
    let app = Router::new()
        // API banner and health
        .route("/api", get(health::root))
        .route("/health", get(health::health_check))
        // Status check log
        .route(
            "/api/status",
            post(status::create_status_check).get(status::list_status_checks),
        )
        // WebSocket
        .route(
            "/api/ws/:room_key/:player_name",
            get(websocket::websocket_handler),
        )
        // Add state
        .with_state(state)
        // Add middleware layers (applied in reverse order)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        );

    // Bind to address
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);
    let addr = format!("0.0.0.0:{}", port);

    println!("🚀 Server starting on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    println!("✅ Server listening on http://{}", addr);

    axum::serve(listener, app).await.expect("Server error");
}
