//! Record store - async persistence for user fields
//!
//! [`UserFieldsController`](crate::UserFieldsController) never talks to the
//! network directly; it goes through a [`RecordStore`].

mod http;
mod memory;

pub use http::HttpRecordStore;
pub use memory::MemoryRecordStore;

use crate::ClientResult;
use async_trait::async_trait;
use shared::models::{UserField, UserFieldUpdate};

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All fields, in server order
    async fn find_all(&self) -> ClientResult<Vec<UserField>>;

    /// Persist a new field, returning it with its assigned id
    async fn create(&self, field: &UserField) -> ClientResult<UserField>;

    /// Apply a partial update to a persisted field
    async fn update(&self, id: i64, changes: &UserFieldUpdate) -> ClientResult<UserField>;

    async fn destroy(&self, id: i64) -> ClientResult<()>;
}
