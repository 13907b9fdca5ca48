//! DynamoDB implementation of the single-table store.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use goaltrack_core::storage::{
    Attributes, Result, TableStore, ATTR_PARTITION_KEY, ATTR_SORT_KEY,
};

use super::error::{map_get_item_error, map_put_item_error, map_query_error};
use crate::config::Config;

/// DynamoDB-backed table store.
///
/// Holds no client-side cache; every call round-trips to the service.
pub struct DynamoDbStore {
    client: Client,
    table_name: String,
}

impl DynamoDbStore {
    /// Creates a new store with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a store from environment configuration.
    ///
    /// Uses the AWS SDK default credential chain and the table name from
    /// [`Config`].
    pub async fn from_env(config: &Config) -> anyhow::Result<Self> {
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = Client::new(&aws_config);
        Ok(Self::new(client, config.table_name.clone()))
    }

    /// Get the table name.
    #[allow(dead_code)]
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl TableStore for DynamoDbStore {
    async fn get_item(&self, partition_key: &str, sort_key: &str) -> Result<Option<Attributes>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(
                ATTR_PARTITION_KEY,
                AttributeValue::S(partition_key.to_string()),
            )
            .key(ATTR_SORT_KEY, AttributeValue::S(sort_key.to_string()))
            .send()
            .await
            .map_err(map_get_item_error)?;

        Ok(result.item.as_ref().map(item_to_attributes))
    }

    async fn put_item_if_absent(
        &self,
        partition_key: &str,
        sort_key: &str,
        attributes: Attributes,
    ) -> Result<()> {
        let item = attributes_to_item(partition_key, sort_key, attributes);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_not_exists(PK)")
            .send()
            .await
            .map_err(|e| map_put_item_error(e, partition_key, sort_key))?;

        Ok(())
    }

    async fn query_by_index(
        &self,
        index_name: &str,
        attribute: &str,
        value: &str,
    ) -> Result<Vec<Attributes>> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .index_name(index_name)
            .key_condition_expression("#attr = :value")
            .expression_attribute_names("#attr", attribute)
            .expression_attribute_values(":value", AttributeValue::S(value.to_string()))
            .send()
            .await
            .map_err(map_query_error)?;

        let items = result.items.unwrap_or_default();
        Ok(items.iter().map(item_to_attributes).collect())
    }
}

/// Flatten a DynamoDB item to the backend-neutral string map.
///
/// Every attribute this service writes is a string; attributes of any other
/// type are skipped.
fn item_to_attributes(item: &HashMap<String, AttributeValue>) -> Attributes {
    item.iter()
        .filter_map(|(k, v)| v.as_s().ok().map(|s| (k.clone(), s.clone())))
        .collect()
}

/// Build the stored item, adding the structural key attributes.
fn attributes_to_item(
    partition_key: &str,
    sort_key: &str,
    attributes: Attributes,
) -> HashMap<String, AttributeValue> {
    let mut item: HashMap<String, AttributeValue> = attributes
        .into_iter()
        .map(|(k, v)| (k, AttributeValue::S(v)))
        .collect();
    item.insert(
        ATTR_PARTITION_KEY.to_string(),
        AttributeValue::S(partition_key.to_string()),
    );
    item.insert(
        ATTR_SORT_KEY.to_string(),
        AttributeValue::S(sort_key.to_string()),
    );
    item
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_to_item_adds_keys() {
        let mut attributes = Attributes::new();
        attributes.insert("email".to_string(), "alice@example.com".to_string());

        let item = attributes_to_item("USER#abc", "METADATA", attributes);

        assert_eq!(item.get("PK").unwrap().as_s().unwrap(), "USER#abc");
        assert_eq!(item.get("SK").unwrap().as_s().unwrap(), "METADATA");
        assert_eq!(
            item.get("email").unwrap().as_s().unwrap(),
            "alice@example.com"
        );
    }

    #[test]
    fn test_item_to_attributes_round_trip() {
        let mut attributes = Attributes::new();
        attributes.insert("email".to_string(), "alice@example.com".to_string());

        let item = attributes_to_item("USER#abc", "METADATA", attributes);
        let parsed = item_to_attributes(&item);

        assert_eq!(parsed.get("PK").unwrap(), "USER#abc");
        assert_eq!(parsed.get("SK").unwrap(), "METADATA");
        assert_eq!(parsed.get("email").unwrap(), "alice@example.com");
    }

    #[test]
    fn test_item_to_attributes_skips_non_string_values() {
        let mut item = HashMap::new();
        item.insert("PK".to_string(), AttributeValue::S("USER#abc".to_string()));
        item.insert("count".to_string(), AttributeValue::N("3".to_string()));

        let parsed = item_to_attributes(&item);
        assert_eq!(parsed.get("PK").unwrap(), "USER#abc");
        assert!(parsed.get("count").is_none());
    }
}
