pub mod catalog;
pub mod composer;
pub mod config;
pub mod controller;
pub mod fallback;
pub mod gemini;
pub mod models;
pub mod normalize;
pub mod routes;
pub mod site;
pub mod transport;
