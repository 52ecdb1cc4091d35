// Application layer - Use cases
pub mod chart_backend;
pub mod plot_service;
pub mod sample_parser;
