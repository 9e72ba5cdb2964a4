//! Corpus loaders turn files on disk into raw documents.

use std::path::Path;

use crate::corpus::document::RawDocument;
use crate::error::Result;

/// A source of raw news stories.
///
/// Loaders only parse. Labeling, split filtering and analysis happen in
/// [`DocumentStore::ingest`](crate::corpus::store::DocumentStore::ingest).
///
/// # Example
///
/// ```no_run
/// use newsclass::corpus::{CorpusLoader, ReutersLoader};
///
/// let loader = ReutersLoader::new().unwrap();
/// for story in loader.load("reuters21578").unwrap() {
///     println!("{} {}", story.id, story.title);
/// }
/// ```
pub trait CorpusLoader {
    /// Load every story found at `path`, in a stable order.
    fn load<P: AsRef<Path>>(&self, path: P) -> Result<Vec<RawDocument>>;
}
