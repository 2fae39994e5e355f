mod drain;

pub use drain::{drain_pages, Page};
