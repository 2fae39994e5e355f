//! Recording in-memory store for manager tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use aws_sdk_dynamodb::operation::batch_get_item::{BatchGetItemInput, BatchGetItemOutput};
use aws_sdk_dynamodb::operation::batch_write_item::{BatchWriteItemInput, BatchWriteItemOutput};
use aws_sdk_dynamodb::operation::get_item::{GetItemInput, GetItemOutput};
use aws_sdk_dynamodb::operation::put_item::{PutItemInput, PutItemOutput};
use aws_sdk_dynamodb::operation::query::{QueryInput, QueryOutput};
use aws_sdk_dynamodb::operation::scan::{ScanInput, ScanOutput};
use aws_sdk_dynamodb::operation::update_item::{UpdateItemInput, UpdateItemOutput};
use thiserror::Error;

use super::traits::DocumentStore;
use crate::manager::Item;

/// Transport failure raised by [`RecordingStore`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreFailure {
    #[error("throughput exceeded")]
    Throttled,
    #[error("no scripted response")]
    Unscripted,
}

/// A request the store received, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Put(PutItemInput),
    Get(GetItemInput),
    Update(UpdateItemInput),
    BatchWrite(BatchWriteItemInput),
    BatchGet(BatchGetItemInput),
    Query(QueryInput),
    Scan(ScanInput),
}

/// Records every request and answers from scripted responses.
///
/// Scan answers are consumed in order; the other operations return their
/// scripted response on every call, or an empty output when none is set.
#[derive(Debug, Default)]
pub struct RecordingStore {
    calls: Mutex<Vec<Call>>,
    scan_pages: Mutex<VecDeque<Result<ScanOutput, StoreFailure>>>,
    item: Option<Item>,
    failure: Option<StoreFailure>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every operation fails with `failure`.
    pub fn failing(failure: StoreFailure) -> Self {
        Self {
            failure: Some(failure),
            ..Self::default()
        }
    }

    /// GetItem and UpdateItem answer with `item`.
    pub fn with_item(mut self, item: Item) -> Self {
        self.item = Some(item);
        self
    }

    /// Scan answers with these pages, one per call.
    pub fn with_scan_pages(self, pages: Vec<Result<ScanOutput, StoreFailure>>) -> Self {
        *self.scan_pages.lock().unwrap() = pages.into();
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn scans(&self) -> Vec<ScanInput> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Scan(input) => Some(input),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) -> Result<(), StoreFailure> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(failure) => Err(failure.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DocumentStore for RecordingStore {
    type Error = StoreFailure;

    async fn put_item(&self, input: PutItemInput) -> Result<PutItemOutput, Self::Error> {
        self.record(Call::Put(input))?;
        Ok(PutItemOutput::builder().build())
    }

    async fn get_item(&self, input: GetItemInput) -> Result<GetItemOutput, Self::Error> {
        self.record(Call::Get(input))?;
        Ok(GetItemOutput::builder().set_item(self.item.clone()).build())
    }

    async fn update_item(&self, input: UpdateItemInput) -> Result<UpdateItemOutput, Self::Error> {
        self.record(Call::Update(input))?;
        Ok(UpdateItemOutput::builder()
            .set_attributes(self.item.clone())
            .build())
    }

    async fn batch_write_item(
        &self,
        input: BatchWriteItemInput,
    ) -> Result<BatchWriteItemOutput, Self::Error> {
        self.record(Call::BatchWrite(input))?;
        Ok(BatchWriteItemOutput::builder().build())
    }

    async fn batch_get_item(
        &self,
        input: BatchGetItemInput,
    ) -> Result<BatchGetItemOutput, Self::Error> {
        self.record(Call::BatchGet(input))?;
        Ok(BatchGetItemOutput::builder().build())
    }

    async fn query(&self, input: QueryInput) -> Result<QueryOutput, Self::Error> {
        self.record(Call::Query(input))?;
        Ok(QueryOutput::builder()
            .set_items(self.item.clone().map(|item| vec![item]))
            .build())
    }

    async fn scan(&self, input: ScanInput) -> Result<ScanOutput, Self::Error> {
        self.record(Call::Scan(input))?;
        self.scan_pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(StoreFailure::Unscripted))
    }
}
