pub mod dynamodb_service;

pub use dynamodb_service::*;

use async_trait::async_trait;

use crate::{ProfileResult, UserProfileRecord};

/// Persistence seam for profile records
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Unconditionally write the record, replacing any existing row
    async fn put_profile(&self, record: &UserProfileRecord) -> ProfileResult<()>;
}
