//! Domain layer - Pure business abstractions
//!
//! No Axum in here. Request/response shapes, repository traits, and the
//! rules every handler shares (ids, pagination, validation, visibility).

pub mod errors;
pub mod ids;
pub mod pagination;
pub mod repositories;
pub mod validation;
pub mod visibility;

pub use errors::DomainError;
pub use pagination::Pagination;
pub use repositories::*;
pub use visibility::{VideoCard, VideoDetails};
