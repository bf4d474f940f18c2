//! UI-free logic of the LeadLoop admin console.
//!
//! The generic table core lives in [`table`]; the pages built on it keep
//! their records and state in [`leads`] and [`applicants`].

pub mod api;
pub mod applicants;
mod config;
mod error;
pub mod http;
pub mod leads;
pub mod table;

pub use config::{BusinessConfig, DEFAULT_API_BASE_URL};
pub use error::{ApiError, ApiResult};
