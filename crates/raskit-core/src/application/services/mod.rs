//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "assemble a project" or "run a simulation".

pub mod model_service;
pub mod project_service;
pub mod session_service;

pub use model_service::{ModelInfo, ModelService};
pub use project_service::ProjectService;
pub use session_service::{RasSession, SessionState};
