use std::env;

#[derive(Debug, Clone)]
pub struct Settings {
    pub supabase_url: String,
    pub supabase_key: String,
    pub market_data_url: String,
    pub host: String,
    pub port: u16,
}

pub fn load() -> Settings {
    // Loads .env if present (no crash if missing)
    dotenvy::dotenv().ok();

    // The store credentials have no sane default; refuse to start without them.
    let supabase_url = env::var("SUPABASE_URL").expect("SUPABASE_URL must be set");
    let supabase_key = env::var("SUPABASE_KEY").expect("SUPABASE_KEY must be set");

    let market_data_url = env::var("MARKET_DATA_URL")
        .unwrap_or_else(|_| "https://query1.finance.yahoo.com".to_string());

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

    let port = env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    Settings {
        supabase_url,
        supabase_key,
        market_data_url,
        host,
        port,
    }
}
