pub mod auth;
pub mod db;
pub mod domain;
pub mod forms;
pub mod middleware;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// How many orders the dashboard shows in its recent-orders card.
pub const RECENT_ORDERS_LIMIT: i64 = 5;
