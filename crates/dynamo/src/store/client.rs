//! DynamoDB-backed document store.

use async_trait::async_trait;
use aws_sdk_dynamodb::operation::batch_get_item::{BatchGetItemInput, BatchGetItemOutput};
use aws_sdk_dynamodb::operation::batch_write_item::{BatchWriteItemInput, BatchWriteItemOutput};
use aws_sdk_dynamodb::operation::get_item::{GetItemInput, GetItemOutput};
use aws_sdk_dynamodb::operation::put_item::{PutItemInput, PutItemOutput};
use aws_sdk_dynamodb::operation::query::{QueryInput, QueryOutput};
use aws_sdk_dynamodb::operation::scan::{ScanInput, ScanOutput};
use aws_sdk_dynamodb::operation::update_item::{UpdateItemInput, UpdateItemOutput};
use aws_sdk_dynamodb::Client;

use crate::config::AwsConfig;

use super::traits::DocumentStore;

/// Document store backed by `aws-sdk-dynamodb`.
///
/// Every field of an operation input is copied onto the SDK request as is.
/// Failures surface as the SDK's unified [`aws_sdk_dynamodb::Error`].
#[derive(Debug, Clone)]
pub struct DynamoStore {
    client: Client,
}

impl DynamoStore {
    /// Wraps an existing DynamoDB client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates a store with a client built from `config`.
    pub async fn from_config(config: &AwsConfig) -> Self {
        Self::new(config.create_client().await)
    }

    /// Get the underlying client.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl DocumentStore for DynamoStore {
    type Error = aws_sdk_dynamodb::Error;

    async fn put_item(&self, input: PutItemInput) -> Result<PutItemOutput, Self::Error> {
        self.client
            .put_item()
            .set_table_name(input.table_name)
            .set_item(input.item)
            .set_expected(input.expected)
            .set_return_values(input.return_values)
            .set_return_consumed_capacity(input.return_consumed_capacity)
            .set_return_item_collection_metrics(input.return_item_collection_metrics)
            .set_conditional_operator(input.conditional_operator)
            .set_condition_expression(input.condition_expression)
            .set_expression_attribute_names(input.expression_attribute_names)
            .set_expression_attribute_values(input.expression_attribute_values)
            .set_return_values_on_condition_check_failure(
                input.return_values_on_condition_check_failure,
            )
            .send()
            .await
            .map_err(Into::into)
    }

    async fn get_item(&self, input: GetItemInput) -> Result<GetItemOutput, Self::Error> {
        self.client
            .get_item()
            .set_table_name(input.table_name)
            .set_key(input.key)
            .set_attributes_to_get(input.attributes_to_get)
            .set_consistent_read(input.consistent_read)
            .set_return_consumed_capacity(input.return_consumed_capacity)
            .set_projection_expression(input.projection_expression)
            .set_expression_attribute_names(input.expression_attribute_names)
            .send()
            .await
            .map_err(Into::into)
    }

    async fn update_item(&self, input: UpdateItemInput) -> Result<UpdateItemOutput, Self::Error> {
        self.client
            .update_item()
            .set_table_name(input.table_name)
            .set_key(input.key)
            .set_attribute_updates(input.attribute_updates)
            .set_expected(input.expected)
            .set_conditional_operator(input.conditional_operator)
            .set_return_values(input.return_values)
            .set_return_consumed_capacity(input.return_consumed_capacity)
            .set_return_item_collection_metrics(input.return_item_collection_metrics)
            .set_update_expression(input.update_expression)
            .set_condition_expression(input.condition_expression)
            .set_expression_attribute_names(input.expression_attribute_names)
            .set_expression_attribute_values(input.expression_attribute_values)
            .set_return_values_on_condition_check_failure(
                input.return_values_on_condition_check_failure,
            )
            .send()
            .await
            .map_err(Into::into)
    }

    async fn batch_write_item(
        &self,
        input: BatchWriteItemInput,
    ) -> Result<BatchWriteItemOutput, Self::Error> {
        self.client
            .batch_write_item()
            .set_request_items(input.request_items)
            .set_return_consumed_capacity(input.return_consumed_capacity)
            .set_return_item_collection_metrics(input.return_item_collection_metrics)
            .send()
            .await
            .map_err(Into::into)
    }

    async fn batch_get_item(
        &self,
        input: BatchGetItemInput,
    ) -> Result<BatchGetItemOutput, Self::Error> {
        self.client
            .batch_get_item()
            .set_request_items(input.request_items)
            .set_return_consumed_capacity(input.return_consumed_capacity)
            .send()
            .await
            .map_err(Into::into)
    }

    async fn query(&self, input: QueryInput) -> Result<QueryOutput, Self::Error> {
        self.client
            .query()
            .set_table_name(input.table_name)
            .set_index_name(input.index_name)
            .set_select(input.select)
            .set_attributes_to_get(input.attributes_to_get)
            .set_limit(input.limit)
            .set_consistent_read(input.consistent_read)
            .set_key_conditions(input.key_conditions)
            .set_query_filter(input.query_filter)
            .set_conditional_operator(input.conditional_operator)
            .set_scan_index_forward(input.scan_index_forward)
            .set_exclusive_start_key(input.exclusive_start_key)
            .set_return_consumed_capacity(input.return_consumed_capacity)
            .set_projection_expression(input.projection_expression)
            .set_filter_expression(input.filter_expression)
            .set_key_condition_expression(input.key_condition_expression)
            .set_expression_attribute_names(input.expression_attribute_names)
            .set_expression_attribute_values(input.expression_attribute_values)
            .send()
            .await
            .map_err(Into::into)
    }

    async fn scan(&self, input: ScanInput) -> Result<ScanOutput, Self::Error> {
        self.client
            .scan()
            .set_table_name(input.table_name)
            .set_index_name(input.index_name)
            .set_attributes_to_get(input.attributes_to_get)
            .set_limit(input.limit)
            .set_select(input.select)
            .set_scan_filter(input.scan_filter)
            .set_conditional_operator(input.conditional_operator)
            .set_exclusive_start_key(input.exclusive_start_key)
            .set_return_consumed_capacity(input.return_consumed_capacity)
            .set_total_segments(input.total_segments)
            .set_segment(input.segment)
            .set_projection_expression(input.projection_expression)
            .set_filter_expression(input.filter_expression)
            .set_expression_attribute_names(input.expression_attribute_names)
            .set_expression_attribute_values(input.expression_attribute_values)
            .set_consistent_read(input.consistent_read)
            .send()
            .await
            .map_err(Into::into)
    }
}
