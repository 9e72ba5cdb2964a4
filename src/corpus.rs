//! Documents, topics and the in-memory document store.
//!
//! Raw stories come from a [`CorpusLoader`] (the Reuters-21578 SGML reader
//! by default), are labeled against a fixed [`TopicSet`] and analyzed into
//! term counts by a [`DocumentStore`].

pub mod document;
pub mod loader;
pub mod reuters;
pub mod split;
pub mod store;
pub mod topic;

pub use document::{Document, RawDocument};
pub use loader::CorpusLoader;
pub use reuters::ReutersLoader;
pub use split::Split;
pub use store::{DocumentStore, IngestStats};
pub use topic::{Topic, TopicSet};
