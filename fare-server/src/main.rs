use std::net::SocketAddr;
use std::time::Duration;

use fare_server::accounts::AccountStore;
use fare_server::cache::{CacheConfig, CachedCatalogClient};
use fare_server::catalog::{CatalogClient, CatalogClientConfig, CatalogConfig, CatalogSource};
use fare_server::kv::BookingStore;
use fare_server::search::PipelineConfig;
use fare_server::web::{AppState, create_router};

/// How often to refresh the catalog (10 minutes).
const CATALOG_REFRESH_INTERVAL: Duration = Duration::from_secs(10 * 60);

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Optional catalog sources from the environment
    let catalog_url = std::env::var("CATALOG_URL").ok();
    if catalog_url.is_none() {
        eprintln!("Warning: CATALOG_URL not set. Serving the built-in sample catalog.");
    }
    let override_path = std::env::var("CATALOG_OVERRIDE").ok().map(Into::into);

    // Create catalog client and cache
    let client = CatalogClient::new(CatalogClientConfig::default())
        .expect("Failed to create catalog client");
    let cached_client = std::sync::Arc::new(CachedCatalogClient::new(
        client,
        &CacheConfig::default(),
    ));

    // Create the catalog source and do the initial load
    let catalog_config = CatalogConfig {
        url: catalog_url,
        override_path,
    };
    let catalog = CatalogSource::new(cached_client, catalog_config);
    let origin = catalog.reload().await;
    println!("Catalog loaded from {} source", origin.as_str());

    // Open the account store
    let accounts_path =
        std::env::var("ACCOUNTS_PATH").unwrap_or_else(|_| "accounts.csv".to_string());
    let accounts = AccountStore::open(&accounts_path).expect("Failed to open account store");

    // Build app state
    let config = PipelineConfig::default();
    let state = AppState::new(catalog, accounts, BookingStore::new(), config);

    // Spawn background task to refresh the catalog periodically
    let catalog_refresh = state.catalog.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(CATALOG_REFRESH_INTERVAL);
        interval.tick().await; // First tick is immediate, skip it
        loop {
            interval.tick().await;
            let origin = catalog_refresh.reload().await;
            println!("Refreshed catalog from {} source", origin.as_str());
        }
    });

    // Create router
    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());
    let app = create_router(state, &static_dir);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Fare Search listening on http://{addr}");
    println!();
    println!("Open http://{addr} in your browser for the web interface.");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health              - Health check");
    println!("  GET  /about               - About page");
    println!("  GET  /search/offers       - Search offerings");
    println!("  GET  /api/facets          - Facet options");
    println!("  POST /api/catalog/reload  - Reload the catalog");
    println!("  POST /register            - Register an account");
    println!("  POST /login               - Log in");
    println!("  GET/POST /api/booking     - Booking state");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
