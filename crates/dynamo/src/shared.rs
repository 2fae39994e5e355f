//! Process-wide document manager.
//!
//! The manager is created on first use from [`AwsConfig::from_env`]; every
//! caller receives the same instance. Declare freshness functions on it
//! through [`shared_manager`] once at startup, then use the free functions
//! below.

use aws_sdk_dynamodb::operation::batch_get_item::{BatchGetItemInput, BatchGetItemOutput};
use aws_sdk_dynamodb::operation::batch_write_item::{BatchWriteItemInput, BatchWriteItemOutput};
use aws_sdk_dynamodb::operation::get_item::{GetItemInput, GetItemOutput};
use aws_sdk_dynamodb::operation::put_item::PutItemInput;
use aws_sdk_dynamodb::operation::query::{QueryInput, QueryOutput};
use aws_sdk_dynamodb::operation::scan::{ScanInput, ScanOutput};
use aws_sdk_dynamodb::operation::update_item::{UpdateItemInput, UpdateItemOutput};
use tokio::sync::OnceCell;

use crate::config::AwsConfig;
use crate::error::Result;
use crate::manager::{DocumentManager, Item};
use crate::store::DynamoStore;

static SHARED: OnceCell<DocumentManager<DynamoStore>> = OnceCell::const_new();

/// Returns the shared manager, creating it on first access.
///
/// Concurrent first callers wait on a single initialization and all receive
/// the same instance.
pub async fn shared_manager() -> &'static DocumentManager<DynamoStore> {
    SHARED
        .get_or_init(|| async {
            let config = AwsConfig::from_env();
            tracing::info!(
                endpoint = %config.target_display(),
                "creating shared document manager"
            );
            DocumentManager::new(DynamoStore::from_config(&config).await)
        })
        .await
}

/// [`DocumentManager::put`] on the shared manager.
pub async fn put(input: PutItemInput) -> Result<()> {
    shared_manager().await.put(input).await
}

/// [`DocumentManager::get`] on the shared manager.
pub async fn get(input: GetItemInput) -> Result<GetItemOutput> {
    shared_manager().await.get(input).await
}

/// [`DocumentManager::update_and_get_new`] on the shared manager.
pub async fn update_and_get_new(input: UpdateItemInput) -> Result<UpdateItemOutput> {
    shared_manager().await.update_and_get_new(input).await
}

/// [`DocumentManager::batch_write`] on the shared manager.
pub async fn batch_write(input: BatchWriteItemInput) -> Result<BatchWriteItemOutput> {
    shared_manager().await.batch_write(input).await
}

/// [`DocumentManager::batch_get`] on the shared manager.
pub async fn batch_get(input: BatchGetItemInput) -> Result<BatchGetItemOutput> {
    shared_manager().await.batch_get(input).await
}

/// [`DocumentManager::query`] on the shared manager.
pub async fn query(input: QueryInput) -> Result<QueryOutput> {
    shared_manager().await.query(input).await
}

/// [`DocumentManager::scan`] on the shared manager.
pub async fn scan(input: ScanInput) -> Result<ScanOutput> {
    shared_manager().await.scan(input).await
}

/// [`DocumentManager::drain_scan`] on the shared manager.
pub async fn drain_scan(input: ScanInput) -> Result<Vec<Item>> {
    shared_manager().await.drain_scan(input).await
}
