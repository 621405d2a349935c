use async_trait::async_trait;
use aws_sdk_dynamodb::{
    operation::put_item::builders::PutItemFluentBuilder, types::AttributeValue,
    Client as DynamoClient,
};
use std::collections::HashMap;
use tracing::debug;

use crate::{iso_timestamp, ProfileResult, ProfileStore, UserProfileRecord};

pub struct DynamoDBService {
    client: DynamoClient,
    table_name: String,
}

impl DynamoDBService {
    pub fn new(client: DynamoClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    /// Build the DynamoDB item for a profile record
    pub fn to_item(record: &UserProfileRecord) -> HashMap<String, AttributeValue> {
        let mut item = HashMap::new();
        item.insert("PK".to_string(), AttributeValue::S(record.partition_key()));
        item.insert("SK".to_string(), AttributeValue::S(record.sort_key().to_string()));
        if let Some(email) = &record.email {
            item.insert("email".to_string(), AttributeValue::S(email.clone()));
        }
        item.insert("nickname".to_string(), AttributeValue::S(record.nickname.clone()));
        item.insert("created_at".to_string(), AttributeValue::S(iso_timestamp(record.created_at)));
        item
    }

    /// Unconditional put of the profile item, last write wins
    fn put_profile_request(&self, record: &UserProfileRecord) -> PutItemFluentBuilder {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(Self::to_item(record)))
    }
}

#[async_trait]
impl ProfileStore for DynamoDBService {
    async fn put_profile(&self, record: &UserProfileRecord) -> ProfileResult<()> {
        debug!(table = %self.table_name, user_id = %record.user_id, "Putting profile item");

        self.put_profile_request(record)
            .send()
            .await
            .map_err(aws_sdk_dynamodb::Error::from)?;

        Ok(())
    }
}
