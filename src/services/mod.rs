pub mod indicators;
pub mod market_data;
pub mod registry;

pub mod alerts_service;
pub mod setups_service;
