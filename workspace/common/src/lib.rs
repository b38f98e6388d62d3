//! Common transport-layer types shared between backend and any frontend.
//! These structs mirror the backend handlers' response payloads so a
//! rendering layer can deserialize API responses without duplicating shapes.

pub mod datasets;
mod market;
mod savings;

pub use market::{
    CoverageCategory, CoverageGap, DatasetError, MarketShare, PremiumPoint, PremiumTrend,
    ProviderShare, SHARE_SUM_TOLERANCE,
};
pub use savings::SavingsEstimate;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic API response wrapper used by the backend.
/// Note: The backend has its own definition in src/schemas.rs with the
/// same field names. We mirror it here for frontends to reuse.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}
