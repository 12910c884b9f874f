// Services layer - Resource pipelines shared by the HTTP handlers
pub mod resource_service;

pub use resource_service::{ResourceAccessor, ResourceError, ResourceService};
