/**
 * CodeCollab Server Entry Point
 *
 * This is the main entry point for the CodeCollab backend server.
 * It initializes the Axum HTTP server with the realtime relay, the
 * authentication endpoints and the project persistence endpoints.
 */

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    // Initialize tracing with DEBUG level by default
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".to_string());

    eprintln!("[STARTUP] Setting RUST_LOG={}", env_filter);

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    eprintln!("[STARTUP] Tracing initialized");
    tracing::info!("[STARTUP] Server initialization started");

    // Create the Axum app
    let app = codecollab::backend::server::init::create_app().await;

    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "5000".to_string())
        .parse::<u16>()
        .unwrap_or(5000);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    eprintln!("[STARTUP] Starting server on {}", addr);
    tracing::info!("Server is running on port {}", port);

    // Run the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    eprintln!("[STARTUP] Listening on {}", addr);
    eprintln!("[STARTUP] Relay endpoint at ws://127.0.0.1:{}/ws", port);
    axum::serve(listener, app).await?;

    Ok(())
}
