// Infrastructure layer (shared components)
pub mod infrastructure;

pub use infrastructure::config;
pub use infrastructure::error;
pub use infrastructure::metrics;

// Domain layer (business logic)
pub mod domain;

pub use domain::discount;
pub use domain::shop;
pub use domain::template;

// Application layer
pub mod api;
pub mod server;

// Supporting modules
pub mod telemetry;
