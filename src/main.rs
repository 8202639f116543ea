use std::net::SocketAddr;

use bandwatch::{AppState, config, routes, services};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let settings = config::load();

    let registry = services::registry::RegistryClient::new(
        settings.supabase_url.clone(),
        settings.supabase_key.clone(),
    );
    let market = services::market_data::MarketDataClient::new(settings.market_data_url.clone());

    let state = AppState {
        settings: settings.clone(),
        registry,
        market,
    };

    let app = routes::app(state);

    let addr = SocketAddr::from((
        settings.host.parse::<std::net::IpAddr>().unwrap(),
        settings.port,
    ));
    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
