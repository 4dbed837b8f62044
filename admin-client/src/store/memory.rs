use async_trait::async_trait;
use parking_lot::Mutex;
use shared::models::{UserField, UserFieldUpdate};

use super::RecordStore;
use crate::{ClientError, ClientResult};

/// [`RecordStore`] kept in process memory
///
/// Ids are assigned sequentially starting at 1. Useful for offline editing
/// and for driving the field manager in tests.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    fields: Vec<UserField>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `fields`; fields without an id get one
    pub fn with_fields(fields: Vec<UserField>) -> Self {
        let store = Self::new();
        {
            let mut inner = store.inner.lock();
            for mut field in fields {
                let id = field.id.unwrap_or(inner.next_id + 1);
                inner.next_id = inner.next_id.max(id);
                field.id = Some(id);
                inner.fields.push(field);
            }
        }
        store
    }

    /// Snapshot of the stored fields
    pub fn fields(&self) -> Vec<UserField> {
        self.inner.lock().fields.clone()
    }

    pub fn get(&self, id: i64) -> Option<UserField> {
        self.inner
            .lock()
            .fields
            .iter()
            .find(|f| f.id == Some(id))
            .cloned()
    }
}

fn not_found(id: i64) -> ClientError {
    ClientError::NotFound(format!("User field {id} not found"))
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn find_all(&self) -> ClientResult<Vec<UserField>> {
        let mut fields = self.fields();
        fields.sort_by_key(|f| (f.position, f.id));
        Ok(fields)
    }

    async fn create(&self, field: &UserField) -> ClientResult<UserField> {
        let mut inner = self.inner.lock();
        inner.next_id += 1;
        let mut stored = field.clone();
        stored.id = Some(inner.next_id);
        inner.fields.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: i64, changes: &UserFieldUpdate) -> ClientResult<UserField> {
        let mut inner = self.inner.lock();
        let field = inner
            .fields
            .iter_mut()
            .find(|f| f.id == Some(id))
            .ok_or_else(|| not_found(id))?;
        field.apply(changes);
        Ok(field.clone())
    }

    async fn destroy(&self, id: i64) -> ClientResult<()> {
        let mut inner = self.inner.lock();
        let before = inner.fields.len();
        inner.fields.retain(|f| f.id != Some(id));
        if inner.fields.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }
}
