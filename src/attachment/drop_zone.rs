//! Drop zone: filters dropped files by kind and count before they reach the form

use super::{Attachment, FileKind};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

/// Declarative accept configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropZoneConfig {
    pub kinds: Vec<FileKind>,
    pub max_files: usize,
}

impl Default for DropZoneConfig {
    fn default() -> Self {
        Self {
            kinds: FileKind::ALL.to_vec(),
            max_files: 1,
        }
    }
}

/// A dropped path with the size read from disk, if it could be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub path: PathBuf,
    pub size_bytes: Option<u64>,
}

impl FileCandidate {
    /// Stat the path; directories and missing files have no size
    pub fn from_path(path: PathBuf) -> Self {
        let size_bytes = fs::metadata(&path)
            .ok()
            .filter(|meta| meta.is_file())
            .map(|meta| meta.len());
        Self { path, size_bytes }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("file type is not accepted")]
    UnsupportedKind,
    #[error("only one file can be attached")]
    TooManyFiles,
    #[error("file could not be read")]
    Unreadable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub path: PathBuf,
    pub reason: RejectReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropOutcome {
    pub accepted: Vec<Attachment>,
    pub rejected: Vec<Rejection>,
}

#[derive(Debug, Clone, Default)]
pub struct DropZone {
    config: DropZoneConfig,
}

impl DropZone {
    pub fn new(config: DropZoneConfig) -> Self {
        Self { config }
    }

    /// Stat each path and filter the resulting candidates
    pub fn accept_paths(&self, paths: Vec<PathBuf>) -> DropOutcome {
        self.filter(paths.into_iter().map(FileCandidate::from_path).collect())
    }

    /// Partition candidates into accepted attachments and rejections,
    /// keeping drop order. Candidates past `max_files` are rejected.
    pub fn filter(&self, candidates: Vec<FileCandidate>) -> DropOutcome {
        let mut outcome = DropOutcome::default();

        for candidate in candidates {
            match self.check(&candidate, outcome.accepted.len()) {
                Ok((size_bytes, kind)) => outcome.accepted.push(Attachment {
                    name: file_name(&candidate.path),
                    path: candidate.path,
                    size_bytes,
                    kind,
                }),
                Err(reason) => {
                    tracing::debug!(path = %candidate.path.display(), %reason, "file rejected");
                    outcome.rejected.push(Rejection {
                        path: candidate.path,
                        reason,
                    });
                }
            }
        }

        outcome
    }

    fn check(
        &self,
        candidate: &FileCandidate,
        accepted: usize,
    ) -> Result<(u64, FileKind), RejectReason> {
        let size_bytes = candidate.size_bytes.ok_or(RejectReason::Unreadable)?;
        let kind = FileKind::from_path(&candidate.path)
            .filter(|kind| self.config.kinds.contains(kind))
            .ok_or(RejectReason::UnsupportedKind)?;
        if accepted >= self.config.max_files {
            return Err(RejectReason::TooManyFiles);
        }
        Ok((size_bytes, kind))
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Split pasted text into paths.
///
/// Terminals paste dropped files as shell-escaped paths (`My\ CV.pdf`),
/// quoted paths, or `file://` URIs, separated by spaces or newlines.
pub fn parse_dropped_paths(text: &str) -> Vec<PathBuf> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('"'), '\\') if chars.peek() == Some(&'"') => {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            (Some(_), c) => current.push(c),
            (None, '\'' | '"') => {
                quote = Some(c);
                in_token = true;
            }
            (None, '\\') if chars.peek().is_some_and(|next| is_escapable(*next)) => {
                if let Some(next) = chars.next() {
                    current.push(next);
                    in_token = true;
                }
            }
            (None, c) if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_token = true;
            }
        }
    }
    if in_token {
        tokens.push(current);
    }

    tokens
        .into_iter()
        .filter(|token| !token.is_empty())
        .map(|token| {
            if token.starts_with("file:") {
                // Non-local URIs stay literal and end up rejected as unreadable
                if let Some(path) = Url::parse(&token)
                    .ok()
                    .and_then(|url| url.to_file_path().ok())
                {
                    return path;
                }
            }
            PathBuf::from(token)
        })
        .collect()
}

fn is_escapable(c: char) -> bool {
    c.is_whitespace() || "'\"\\()[]&;$!`".contains(c)
}
