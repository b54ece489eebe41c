//! Application use cases. Orchestrate domain logic via ports.

pub mod seed_service;
pub mod statistics_service;

pub use seed_service::SeedService;
pub use statistics_service::StatisticsService;
