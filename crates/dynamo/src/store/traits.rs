use async_trait::async_trait;
use aws_sdk_dynamodb::operation::batch_get_item::{BatchGetItemInput, BatchGetItemOutput};
use aws_sdk_dynamodb::operation::batch_write_item::{BatchWriteItemInput, BatchWriteItemOutput};
use aws_sdk_dynamodb::operation::get_item::{GetItemInput, GetItemOutput};
use aws_sdk_dynamodb::operation::put_item::{PutItemInput, PutItemOutput};
use aws_sdk_dynamodb::operation::query::{QueryInput, QueryOutput};
use aws_sdk_dynamodb::operation::scan::{ScanInput, ScanOutput};
use aws_sdk_dynamodb::operation::update_item::{UpdateItemInput, UpdateItemOutput};

/// Remote document store operations.
///
/// Requests and responses are the DynamoDB operation shapes. Implementations
/// must forward requests as given and return responses untouched.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Transport error raised by the store.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Writes a single item.
    async fn put_item(&self, input: PutItemInput) -> Result<PutItemOutput, Self::Error>;

    /// Reads a single item by key.
    async fn get_item(&self, input: GetItemInput) -> Result<GetItemOutput, Self::Error>;

    /// Updates a single item.
    async fn update_item(&self, input: UpdateItemInput) -> Result<UpdateItemOutput, Self::Error>;

    /// Writes or deletes a batch of items.
    async fn batch_write_item(
        &self,
        input: BatchWriteItemInput,
    ) -> Result<BatchWriteItemOutput, Self::Error>;

    /// Reads a batch of items by key.
    async fn batch_get_item(
        &self,
        input: BatchGetItemInput,
    ) -> Result<BatchGetItemOutput, Self::Error>;

    /// Queries items by key condition.
    async fn query(&self, input: QueryInput) -> Result<QueryOutput, Self::Error>;

    /// Scans a table or index, one page at a time.
    async fn scan(&self, input: ScanInput) -> Result<ScanOutput, Self::Error>;
}
