// Domain layer - Chart models
pub mod chart;
