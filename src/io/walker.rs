//! Model-file discovery.
//!
//! Discovery is convention-driven: walk a fixed set of root-relative subtrees,
//! keep files with the configured extension, then apply a content predicate
//! that decides whether the file looks like it can carry relation
//! declarations. The predicate is a plain function injected into the walker so
//! it can be replaced or tested on its own.

use anyhow::Result;
use ignore::WalkBuilder;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

/// Heuristic for "is this a model file": a class header inheriting from a
/// framework base. Same trade-off as the extractor, a match inside a comment
/// counts.
static MODEL_CLASS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"class\s+\w+.*<.*Base|ActiveRecord::Base|ApplicationRecord")
        .expect("model class pattern is valid")
});

pub fn looks_like_model_file(content: &str) -> bool {
    MODEL_CLASS_PATTERN.is_match(content)
}

pub struct ModelFileWalker {
    root: PathBuf,
    search_paths: Vec<PathBuf>,
    extension: String,
    ignore_patterns: Vec<String>,
    predicate: fn(&str) -> bool,
}

impl ModelFileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            search_paths: vec![PathBuf::from("app/models"), PathBuf::from("lib")],
            extension: "rb".to_string(),
            ignore_patterns: vec![],
            predicate: looks_like_model_file,
        }
    }

    /// Root-relative subtrees to search, replacing the defaults.
    pub fn with_search_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.search_paths = paths;
        self
    }

    pub fn with_extension(mut self, extension: String) -> Self {
        self.extension = extension;
        self
    }

    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    /// Replace the model-file content heuristic.
    pub fn with_predicate(mut self, predicate: fn(&str) -> bool) -> Self {
        self.predicate = predicate;
        self
    }

    /// Collect candidate files, sorted for a stable scan order.
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for subtree in &self.search_paths {
            let dir = self.root.join(subtree);
            if !dir.is_dir() {
                log::debug!("search path '{}' does not exist, skipping", dir.display());
                continue;
            }

            let walker = WalkBuilder::new(&dir).hidden(false).git_ignore(true).build();
            for entry in walker {
                let entry = entry?;
                let path = entry.path();

                if path.is_file() && self.should_process(path) && self.content_matches(path) {
                    files.push(path.to_path_buf());
                }
            }
        }

        files.sort();
        files.dedup();
        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        let Some(ext) = path.extension() else {
            return false;
        };
        if ext.to_string_lossy() != self.extension {
            return false;
        }

        let path_str = path.to_string_lossy();
        for pattern in &self.ignore_patterns {
            if glob::Pattern::new(pattern)
                .map(|p| p.matches(&path_str))
                .unwrap_or(false)
            {
                return false;
            }
        }

        true
    }

    fn content_matches(&self, path: &Path) -> bool {
        match std::fs::read_to_string(path) {
            Ok(content) => (self.predicate)(&content),
            Err(e) => {
                log::debug!("skipping unreadable file '{}': {e}", path.display());
                false
            }
        }
    }
}
