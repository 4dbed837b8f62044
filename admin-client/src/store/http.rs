use async_trait::async_trait;
use shared::SuccessBody;
use shared::models::{UserField, UserFieldEnvelope, UserFieldList, UserFieldUpdate};

use super::RecordStore;
use crate::{ClientResult, HttpClient};

const BASE_PATH: &str = "/admin/config/user_fields";

/// [`RecordStore`] backed by the admin server's user field endpoints
#[derive(Debug, Clone)]
pub struct HttpRecordStore {
    client: HttpClient,
}

impl HttpRecordStore {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RecordStore for HttpRecordStore {
    async fn find_all(&self) -> ClientResult<Vec<UserField>> {
        let list: UserFieldList = self.client.get(&format!("{BASE_PATH}.json")).await?;
        Ok(list.user_fields)
    }

    async fn create(&self, field: &UserField) -> ClientResult<UserField> {
        let body = UserFieldEnvelope {
            user_field: field.to_create(),
        };
        let created: UserFieldEnvelope<UserField> = self
            .client
            .post(&format!("{BASE_PATH}.json"), &body)
            .await?;
        Ok(created.user_field)
    }

    async fn update(&self, id: i64, changes: &UserFieldUpdate) -> ClientResult<UserField> {
        let body = UserFieldEnvelope {
            user_field: changes,
        };
        let updated: UserFieldEnvelope<UserField> = self
            .client
            .put(&format!("{BASE_PATH}/{id}.json"), &body)
            .await?;
        Ok(updated.user_field)
    }

    async fn destroy(&self, id: i64) -> ClientResult<()> {
        self.client
            .delete::<SuccessBody>(&format!("{BASE_PATH}/{id}.json"))
            .await?;
        Ok(())
    }
}
