//! Gateways - Repository implementations backed by files

pub mod json_frequent_locations_gateway;
pub mod json_tab_history_gateway;

pub use json_frequent_locations_gateway::JsonFrequentLocationsGateway;
pub use json_tab_history_gateway::JsonTabHistoryGateway;
