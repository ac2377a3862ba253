pub mod consultant_model;
pub mod email_model;
pub mod job_requirement_model;
pub mod json_list;
pub mod match_model;
pub mod submission_model;

pub use consultant_model::*;
pub use email_model::*;
pub use job_requirement_model::*;
pub use match_model::*;
pub use submission_model::*;
