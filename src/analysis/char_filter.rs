//! Char filters that normalize raw text before tokenization.
//!
//! The news pipeline folds case, turns punctuation and markup characters into
//! spaces and removes stop words while the text is still one string, so that
//! stop word matching can use word boundaries of the normalized text.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseCharFilter`] - Unicode case folding
//! - [`punctuation::PunctuationCharFilter`] - Punctuation/markup to single spaces
//! - [`stop::StopWordCharFilter`] - Whole-word stop word removal
//!
//! # Examples
//!
//! ```
//! use newsclass::analysis::char_filter::CharFilter;
//! use newsclass::analysis::char_filter::punctuation::PunctuationCharFilter;
//!
//! let filter = PunctuationCharFilter::new();
//! assert_eq!(filter.filter("co-op"), "co op");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text and return the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod punctuation;
pub mod stop;

pub use lowercase::LowercaseCharFilter;
pub use punctuation::PunctuationCharFilter;
pub use stop::StopWordCharFilter;
