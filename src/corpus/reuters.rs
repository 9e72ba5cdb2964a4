//! Reuters-21578 SGML reader.
//!
//! Each `<REUTERS ...>` element becomes one [`RawDocument`]:
//!
//! ```text
//! <REUTERS TOPICS="YES" LEWISSPLIT="TRAIN" CGISPLIT="TRAINING-SET" OLDID="5544" NEWID="1">
//! <TOPICS><D>cocoa</D></TOPICS>
//! <TEXT>
//! <TITLE>BAHIA COCOA REVIEW</TITLE>
//! <BODY>Showers continued throughout the week ... &#3;</BODY>
//! </TEXT>
//! </REUTERS>
//! ```
//!
//! Stories without a `<BODY>` or without a numeric `NEWID` are skipped.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{debug, info};
use regex::Regex;

use crate::corpus::document::RawDocument;
use crate::corpus::loader::CorpusLoader;
use crate::corpus::split::Split;
use crate::error::{NewsclassError, Result};

/// File extension of the Reuters-21578 distribution files.
pub const SGM_EXTENSION: &str = "sgm";

/// Parser for Reuters-21578 `.sgm` files.
#[derive(Clone, Debug)]
pub struct ReutersLoader {
    article: Regex,
    new_id: Regex,
    lewis_split: Regex,
    topics: Regex,
    topic: Regex,
    title: Regex,
    body: Regex,
    char_ref: Regex,
}

impl ReutersLoader {
    pub fn new() -> Result<Self> {
        Ok(ReutersLoader {
            article: Regex::new(r"(?s)<REUTERS\b([^>]*)>(.*?)</REUTERS>")?,
            new_id: Regex::new(r#"\bNEWID="(\d+)""#)?,
            lewis_split: Regex::new(r#"\bLEWISSPLIT="([^"]*)""#)?,
            topics: Regex::new(r"(?s)<TOPICS>(.*?)</TOPICS>")?,
            topic: Regex::new(r"(?s)<D>(.*?)</D>")?,
            title: Regex::new(r"(?s)<TITLE>(.*?)</TITLE>")?,
            body: Regex::new(r"(?s)<BODY>(.*?)</BODY>")?,
            char_ref: Regex::new(r"&#\d+;")?,
        })
    }

    /// Parse the stories in one SGML document.
    pub fn parse(&self, sgml: &str) -> Vec<RawDocument> {
        let mut stories = Vec::new();

        for article in self.article.captures_iter(sgml) {
            let attributes = &article[1];
            let content = &article[2];

            let Some(id) = self
                .new_id
                .captures(attributes)
                .and_then(|c| c[1].parse::<u64>().ok())
            else {
                debug!("skipping story without a numeric NEWID");
                continue;
            };

            let Some(body) = self.body.captures(content) else {
                debug!("skipping story {id}: no BODY");
                continue;
            };

            let split = self
                .lewis_split
                .captures(attributes)
                .and_then(|c| c[1].parse::<Split>().ok())
                .unwrap_or(Split::Other);

            let topics = self
                .topics
                .captures(content)
                .map(|block| {
                    self.topic
                        .captures_iter(&block[1])
                        .map(|d| d[1].trim().to_string())
                        .filter(|t| !t.is_empty())
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default();

            let title = self
                .title
                .captures(content)
                .map(|c| self.unescape(&c[1]))
                .unwrap_or_default();

            stories.push(RawDocument {
                id,
                split,
                topics,
                title,
                body: self.unescape(&body[1]),
            });
        }

        stories
    }

    /// Parse one `.sgm` file. Invalid UTF-8 is replaced, not rejected.
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<RawDocument>> {
        let path = path.as_ref();
        let bytes = fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
        let stories = self.parse(&String::from_utf8_lossy(&bytes));
        debug!("read {} stories from {}", stories.len(), path.display());
        Ok(stories)
    }

    /// Parse every `.sgm` file of a directory, in file name order.
    pub fn load_dir<P: AsRef<Path>>(&self, dir: P) -> Result<Vec<RawDocument>> {
        let dir = dir.as_ref();
        let files = sgm_files(dir)?;
        if files.is_empty() {
            return Err(NewsclassError::corpus(format!(
                "no .{SGM_EXTENSION} files in {}",
                dir.display()
            )));
        }

        let mut stories = Vec::new();
        for file in &files {
            stories.extend(self.load_file(file)?);
        }

        info!(
            "loaded {} stories from {} files in {}",
            stories.len(),
            files.len(),
            dir.display()
        );
        Ok(stories)
    }

    fn unescape(&self, text: &str) -> String {
        self.char_ref
            .replace_all(text, "")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&amp;", "&")
    }
}

impl CorpusLoader for ReutersLoader {
    /// A directory loads every `.sgm` file in it, a file loads just that file.
    fn load<P: AsRef<Path>>(&self, path: P) -> Result<Vec<RawDocument>> {
        let path = path.as_ref();
        if path.is_dir() {
            self.load_dir(path)
        } else {
            self.load_file(path)
        }
    }
}

fn sgm_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let entries = fs::read_dir(dir)
        .with_context(|| format!("cannot list corpus directory {}", dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        let is_sgm = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(SGM_EXTENSION));
        if path.is_file() && is_sgm {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
