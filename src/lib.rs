//! Library entrypoint for bandwatch.
//!
//! This file exists mainly to make controller tests easy (integration tests
//! under `tests/` can import the app state, routers, controllers, services).

pub mod config;
pub mod models;

pub mod services;

pub mod controllers;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub settings: config::Settings,
    pub registry: services::registry::RegistryClient,
    pub market: services::market_data::MarketDataClient,
}
