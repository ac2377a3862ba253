pub mod consultant_dto;
pub mod dashboard_dto;
pub mod email_dto;
pub mod job_requirement_dto;
pub mod pagination_dto;
pub mod response_dto;

pub use consultant_dto::*;
pub use dashboard_dto::*;
pub use email_dto::*;
pub use job_requirement_dto::*;
pub use pagination_dto::*;
pub use response_dto::*;
