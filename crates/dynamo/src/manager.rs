//! Freshness-gated document operations.

use std::collections::HashMap;
use std::error::Error as StdError;

use aws_sdk_dynamodb::operation::batch_get_item::{BatchGetItemInput, BatchGetItemOutput};
use aws_sdk_dynamodb::operation::batch_write_item::{BatchWriteItemInput, BatchWriteItemOutput};
use aws_sdk_dynamodb::operation::get_item::{GetItemInput, GetItemOutput};
use aws_sdk_dynamodb::operation::put_item::PutItemInput;
use aws_sdk_dynamodb::operation::query::{QueryInput, QueryOutput};
use aws_sdk_dynamodb::operation::scan::{ScanInput, ScanOutput};
use aws_sdk_dynamodb::operation::update_item::{UpdateItemInput, UpdateItemOutput};
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use docgate_core::freshness::{FreshnessCheck, FreshnessGate, FreshnessRefresh};
use docgate_core::pagination::{drain_pages, Page};

use crate::error::ManagerError;
use crate::store::DocumentStore;

/// A raw DynamoDB item.
pub type Item = HashMap<String, AttributeValue>;

type Result<T, S> = std::result::Result<T, ManagerError<<S as DocumentStore>::Error>>;

/// Runs the freshness gate before delegating each operation to a store.
///
/// A rejected gate fails the operation before the store sees anything. Store
/// responses and store errors are returned unchanged.
#[derive(Debug)]
pub struct DocumentManager<S> {
    gate: FreshnessGate,
    store: S,
}

impl<S: DocumentStore> DocumentManager<S> {
    /// Creates a manager with a permissive gate.
    pub fn new(store: S) -> Self {
        Self {
            gate: FreshnessGate::new(),
            store,
        }
    }

    /// Get the freshness gate.
    pub fn gate(&self) -> &FreshnessGate {
        &self.gate
    }

    /// Get the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// See [`FreshnessGate::declare_check`].
    pub fn declare_check<C>(&self, check: C) -> &Self
    where
        C: FreshnessCheck + 'static,
    {
        self.gate.declare_check(check);
        self
    }

    /// See [`FreshnessGate::declare_refresh`].
    pub fn declare_refresh<R>(&self, refresh: R) -> &Self
    where
        R: FreshnessRefresh + 'static,
    {
        self.gate.declare_refresh(refresh);
        self
    }

    /// See [`FreshnessGate::declare_terminal_error`].
    pub fn declare_terminal_error<E>(&self, error: E) -> &Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.gate.declare_terminal_error(error);
        self
    }

    /// Writes an item.
    pub async fn put(&self, input: PutItemInput) -> Result<(), S> {
        self.ensure_fresh("PutItem").await?;
        self.store
            .put_item(input)
            .await
            .map_err(ManagerError::Store)?;
        Ok(())
    }

    /// Reads an item by key.
    pub async fn get(&self, input: GetItemInput) -> Result<GetItemOutput, S> {
        self.ensure_fresh("GetItem").await?;
        self.store.get_item(input).await.map_err(ManagerError::Store)
    }

    /// Updates an item and returns the new values of the updated attributes.
    ///
    /// `return_values` is always sent as `UPDATED_NEW`, whatever the caller set.
    pub async fn update_and_get_new(
        &self,
        mut input: UpdateItemInput,
    ) -> Result<UpdateItemOutput, S> {
        self.ensure_fresh("UpdateItem").await?;
        input.return_values = Some(ReturnValue::UpdatedNew);
        self.store
            .update_item(input)
            .await
            .map_err(ManagerError::Store)
    }

    /// Writes or deletes a batch of items.
    pub async fn batch_write(&self, input: BatchWriteItemInput) -> Result<BatchWriteItemOutput, S> {
        self.ensure_fresh("BatchWriteItem").await?;
        self.store
            .batch_write_item(input)
            .await
            .map_err(ManagerError::Store)
    }

    /// Reads a batch of items by key.
    pub async fn batch_get(&self, input: BatchGetItemInput) -> Result<BatchGetItemOutput, S> {
        self.ensure_fresh("BatchGetItem").await?;
        self.store
            .batch_get_item(input)
            .await
            .map_err(ManagerError::Store)
    }

    /// Runs a single query request.
    pub async fn query(&self, input: QueryInput) -> Result<QueryOutput, S> {
        self.ensure_fresh("Query").await?;
        self.store.query(input).await.map_err(ManagerError::Store)
    }

    /// Runs a single scan request.
    pub async fn scan(&self, input: ScanInput) -> Result<ScanOutput, S> {
        self.ensure_fresh("Scan").await?;
        self.store.scan(input).await.map_err(ManagerError::Store)
    }

    /// Scans page after page until no continuation key is returned.
    ///
    /// Each page goes through [`scan`](Self::scan), so the gate runs once up
    /// front and again for every page. `exclusive_start_key` on `input` is
    /// replaced by the cursor of the previous page. Any failure discards the
    /// items gathered so far.
    ///
    /// The whole result set is held in memory and there is no page cap.
    pub async fn drain_scan(&self, input: ScanInput) -> Result<Vec<Item>, S> {
        self.ensure_fresh("Scan").await?;

        let (manager, base) = (self, &input);
        let items = drain_pages(move |cursor| {
            let mut request = base.clone();
            request.exclusive_start_key = cursor;
            async move {
                let output = manager.scan(request).await?;
                Ok::<_, ManagerError<S::Error>>(Page {
                    records: output.items,
                    cursor: output.last_evaluated_key,
                })
            }
        })
        .await?;

        tracing::debug!(
            table = input.table_name.as_deref().unwrap_or_default(),
            items = items.len(),
            "drained scan"
        );
        Ok(items)
    }

    async fn ensure_fresh(&self, operation: &'static str) -> Result<(), S> {
        self.gate.ensure_fresh().await.map_err(|error| {
            tracing::debug!(operation, %error, "operation blocked by freshness gate");
            ManagerError::Stale(error)
        })
    }
}
