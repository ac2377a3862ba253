pub mod consultant_routes;
pub mod dashboard_routes;
pub mod email_routes;
pub mod health_routes;
pub mod job_requirement_routes;

pub use consultant_routes::*;
pub use dashboard_routes::*;
pub use email_routes::*;
pub use health_routes::*;
pub use job_requirement_routes::*;
