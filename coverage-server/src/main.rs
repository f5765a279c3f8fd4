use std::net::SocketAddr;

use coverage_server::coverage::{CoverageChecker, east_london_coverage, east_london_names};
use coverage_server::payments::{PaymentClient, PaymentConfig};
use coverage_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Get credentials from environment
    let secret_key = std::env::var("PAYMENT_SECRET_KEY").unwrap_or_else(|_| {
        eprintln!("Warning: PAYMENT_SECRET_KEY not set. Checkout calls will fail.");
        String::new()
    });

    // Create the payment client
    let payment_config = PaymentConfig::new(&secret_key);
    let payments = PaymentClient::new(payment_config).expect("Failed to create payment client");

    // Build the coverage checker from the static tables
    let checker = CoverageChecker::new(east_london_coverage(), east_london_names());

    // Build app state
    let state = AppState::new(checker, payments);

    // Create router
    let app = create_router(state, "static");

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Booking server listening on http://{addr}");
    println!();
    println!("Open http://{addr} in your browser for the web interface.");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health              - Health check");
    println!("  GET  /api/coverage/check  - Check postcode coverage");
    println!("  GET  /api/packages        - List lesson packages");
    println!("  POST /api/checkout        - Start a checkout session");
    println!("  GET  /api/checkout/:id    - Retrieve a checkout session");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
