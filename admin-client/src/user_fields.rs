//! Field manager - ordered, in-memory list of user-profile fields
//!
//! The controller owns the fields the admin is editing. Reordering swaps
//! `position` values between neighbours in the position-sorted view and
//! persists both fields; destroying a saved field asks for confirmation
//! first.
//!
//! Fields are addressed by [`FieldKey`], a handle that stays valid for the
//! life of the controller whether or not the field has been saved.

use std::sync::Arc;

use shared::models::{FieldType, MAX_USER_FIELDS, UserField, UserFieldUpdate};

use crate::i18n::DELETE_CONFIRM_KEY;
use crate::{ClientError, ClientResult, ConfirmDialog, ErrorPopup, RecordStore, Translations};

/// Maximum number of fields before creation is disabled
pub const MAX_FIELDS: usize = MAX_USER_FIELDS;

/// Stable handle to a field held by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldKey(u64);

/// Result of [`UserFieldsController::destroy`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestroyOutcome {
    Removed,
    /// The user declined the confirmation prompt
    Cancelled,
}

#[derive(Debug, Clone)]
struct TrackedField {
    key: FieldKey,
    field: UserField,
}

pub struct UserFieldsController {
    store: Arc<dyn RecordStore>,
    dialog: Arc<dyn ConfirmDialog>,
    popup: Arc<dyn ErrorPopup>,
    translations: Translations,
    fields: Vec<TrackedField>,
    next_key: u64,
}

impl UserFieldsController {
    pub fn new(
        store: Arc<dyn RecordStore>,
        dialog: Arc<dyn ConfirmDialog>,
        popup: Arc<dyn ErrorPopup>,
    ) -> Self {
        Self {
            store,
            dialog,
            popup,
            translations: Translations::default(),
            fields: Vec::new(),
            next_key: 0,
        }
    }

    pub fn with_translations(mut self, translations: Translations) -> Self {
        self.translations = translations;
        self
    }

    /// Replace the held fields without touching the store
    pub fn set_fields(&mut self, fields: Vec<UserField>) -> Vec<FieldKey> {
        self.fields.clear();
        fields.into_iter().map(|f| self.track(f)).collect()
    }

    fn track(&mut self, field: UserField) -> FieldKey {
        self.next_key += 1;
        let key = FieldKey(self.next_key);
        self.fields.push(TrackedField { key, field });
        key
    }

    fn index_of(&self, key: FieldKey) -> ClientResult<usize> {
        self.fields
            .iter()
            .position(|t| t.key == key)
            .ok_or(ClientError::UnknownField)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, key: FieldKey) -> Option<&UserField> {
        self.fields.iter().find(|t| t.key == key).map(|t| &t.field)
    }

    /// Edit a field's attributes locally; call [`save`](Self::save) to persist
    pub fn field_mut(&mut self, key: FieldKey) -> ClientResult<&mut UserField> {
        let idx = self.index_of(key)?;
        Ok(&mut self.fields[idx].field)
    }

    /// Keys in display order: ascending `position`, ties keep insertion order
    pub fn sorted_keys(&self) -> Vec<FieldKey> {
        let mut tracked: Vec<&TrackedField> = self.fields.iter().collect();
        tracked.sort_by_key(|t| t.field.position);
        tracked.into_iter().map(|t| t.key).collect()
    }

    /// Fields in display order
    pub fn sorted_fields(&self) -> Vec<(FieldKey, &UserField)> {
        let mut tracked: Vec<&TrackedField> = self.fields.iter().collect();
        tracked.sort_by_key(|t| t.field.position);
        tracked.into_iter().map(|t| (t.key, &t.field)).collect()
    }

    /// `true` once the maximum number of fields is held
    pub fn create_disabled(&self) -> bool {
        self.fields.len() >= MAX_FIELDS
    }

    /// Append a new unsaved text field at the end of the list
    pub fn create_field(&mut self) -> ClientResult<FieldKey> {
        if self.create_disabled() {
            return Err(ClientError::FieldLimitReached(MAX_FIELDS));
        }
        Ok(self.track(UserField::new(FieldType::Text, MAX_FIELDS as i32)))
    }

    /// Replace the held fields with the store's
    pub async fn load(&mut self) -> ClientResult<Vec<FieldKey>> {
        let fields = self.store.find_all().await?;
        tracing::debug!(count = fields.len(), "User fields loaded");
        Ok(self.set_fields(fields))
    }

    /// Persist a field: create it when unsaved, otherwise write every attribute
    pub async fn save(&mut self, key: FieldKey) -> ClientResult<()> {
        let idx = self.index_of(key)?;
        let field = self.fields[idx].field.clone();

        let saved = match field.id {
            None => self.store.create(&field).await?,
            Some(id) => self.store.update(id, &field.to_update()).await?,
        };

        // 保存期间列表可能已变化，按 key 重新定位
        let idx = self.index_of(key)?;
        self.fields[idx].field = saved;
        Ok(())
    }

    /// Swap the field with its predecessor in display order
    pub async fn move_up(&mut self, key: FieldKey) -> ClientResult<()> {
        let order = self.sorted_keys();
        let idx = order
            .iter()
            .position(|k| *k == key)
            .ok_or(ClientError::UnknownField)?;
        if idx == 0 {
            return Ok(());
        }
        self.swap_positions(key, order[idx - 1]).await
    }

    /// Swap the field with its successor in display order
    pub async fn move_down(&mut self, key: FieldKey) -> ClientResult<()> {
        let order = self.sorted_keys();
        let idx = order
            .iter()
            .position(|k| *k == key)
            .ok_or(ClientError::UnknownField)?;
        if idx + 1 >= order.len() {
            return Ok(());
        }
        self.swap_positions(key, order[idx + 1]).await
    }

    /// Swap two fields' positions locally, then persist both concurrently
    ///
    /// The two updates are independent: if one fails the other is not
    /// rolled back, and the first error is returned.
    async fn swap_positions(&mut self, a: FieldKey, b: FieldKey) -> ClientResult<()> {
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;

        let pos_a = self.fields[ia].field.position;
        let pos_b = self.fields[ib].field.position;
        self.fields[ia].field.position = pos_b;
        self.fields[ib].field.position = pos_a;

        let id_a = self.fields[ia].field.id;
        let id_b = self.fields[ib].field.id;
        let store = self.store.as_ref();

        let (ra, rb) = futures::join!(
            persist_position(store, id_a, pos_b),
            persist_position(store, id_b, pos_a)
        );

        if let Err(e) = &ra {
            tracing::warn!(error = %e, "Failed to persist field position");
        }
        if let Err(e) = &rb {
            tracing::warn!(error = %e, "Failed to persist field position");
        }
        ra.and(rb)
    }

    /// Remove a field
    ///
    /// Unsaved fields are dropped immediately. Saved fields need the user to
    /// confirm; the field is removed locally only after the store deletes
    /// it, and a store failure is shown through the error popup.
    pub async fn destroy(&mut self, key: FieldKey) -> ClientResult<DestroyOutcome> {
        let idx = self.index_of(key)?;

        let Some(id) = self.fields[idx].field.id else {
            self.fields.remove(idx);
            return Ok(DestroyOutcome::Removed);
        };

        let message = self.translations.t(DELETE_CONFIRM_KEY);
        if !self.dialog.yes_no_confirm(&message).await {
            return Ok(DestroyOutcome::Cancelled);
        }

        match self.store.destroy(id).await {
            Ok(()) => {
                let idx = self.index_of(key)?;
                self.fields.remove(idx);
                tracing::info!(id = id, "User field destroyed");
                Ok(DestroyOutcome::Removed)
            }
            Err(e) => {
                self.popup.popup(&e);
                Err(e)
            }
        }
    }
}

async fn persist_position(
    store: &dyn RecordStore,
    id: Option<i64>,
    position: i32,
) -> ClientResult<()> {
    match id {
        Some(id) => store
            .update(id, &UserFieldUpdate::position(position))
            .await
            .map(|_| ()),
        // 未保存的字段只在本地调整
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryRecordStore;
    use async_trait::async_trait;

    struct AlwaysYes;

    #[async_trait]
    impl ConfirmDialog for AlwaysYes {
        async fn yes_no_confirm(&self, _message: &str) -> bool {
            true
        }
    }

    struct NoPopup;

    impl ErrorPopup for NoPopup {
        fn popup(&self, _error: &ClientError) {}
    }

    fn controller() -> UserFieldsController {
        UserFieldsController::new(
            Arc::new(MemoryRecordStore::new()),
            Arc::new(AlwaysYes),
            Arc::new(NoPopup),
        )
    }

    fn unsaved(position: i32) -> UserField {
        UserField::new(FieldType::Text, position)
    }

    #[test]
    fn test_sorted_keys_are_stable_for_equal_positions() {
        let mut c = controller();
        let keys = c.set_fields(vec![unsaved(2), unsaved(1), unsaved(2)]);
        assert_eq!(c.sorted_keys(), vec![keys[1], keys[0], keys[2]]);
    }

    #[test]
    fn test_create_field_appends_unsaved_text_field() {
        let mut c = controller();
        let key = c.create_field().unwrap();
        let field = c.field(key).unwrap();
        assert!(!field.is_persisted());
        assert_eq!(field.field_type, FieldType::Text);
        assert_eq!(field.position, MAX_FIELDS as i32);
    }

    #[test]
    fn test_unknown_key() {
        let mut c = controller();
        let key = c.create_field().unwrap();
        c.set_fields(Vec::new());
        assert!(matches!(c.field_mut(key), Err(ClientError::UnknownField)));
    }

    #[tokio::test]
    async fn test_move_unsaved_fields_swaps_locally() {
        let mut c = controller();
        let keys = c.set_fields(vec![unsaved(1), unsaved(2)]);

        c.move_down(keys[0]).await.unwrap();
        assert_eq!(c.field(keys[0]).unwrap().position, 2);
        assert_eq!(c.field(keys[1]).unwrap().position, 1);
        assert_eq!(c.sorted_keys(), vec![keys[1], keys[0]]);
    }
}
