use std::future::Future;

/// One page of a cursor-paginated result set.
///
/// A missing `records` list means the page carried no data at all. A present
/// `cursor` means more pages exist; its contents are never inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<R, C> {
    pub records: Option<Vec<R>>,
    pub cursor: Option<C>,
}

impl<R, C> Page<R, C> {
    /// A page followed by more data.
    pub fn more(records: Vec<R>, cursor: C) -> Self {
        Self {
            records: Some(records),
            cursor: Some(cursor),
        }
    }

    /// The final page of a result set.
    pub fn last(records: Vec<R>) -> Self {
        Self {
            records: Some(records),
            cursor: None,
        }
    }

    /// A page without any record list.
    pub fn empty() -> Self {
        Self {
            records: None,
            cursor: None,
        }
    }
}

/// Follows continuation cursors until exhausted, concatenating every page.
///
/// `fetch` receives `None` for the first page and afterwards the cursor of
/// the previous page, moved over unchanged. Draining stops when a page has no
/// record list or no cursor. The first error aborts the whole drain and the
/// records gathered so far are dropped.
///
/// There is no page cap: a source that always returns a cursor is drained
/// forever.
pub async fn drain_pages<R, C, E, F, Fut>(mut fetch: F) -> Result<Vec<R>, E>
where
    F: FnMut(Option<C>) -> Fut,
    Fut: Future<Output = Result<Page<R, C>, E>>,
{
    let mut records = Vec::new();
    let mut cursor = None;
    let mut pages = 0usize;

    loop {
        let page = fetch(cursor.take()).await?;
        pages += 1;

        let Some(batch) = page.records else {
            tracing::trace!(pages, records = records.len(), "page without records");
            return Ok(records);
        };
        records.extend(batch);
        tracing::trace!(pages, records = records.len(), "drained page");

        match page.cursor {
            Some(next) => cursor = Some(next),
            None => return Ok(records),
        }
    }
}
