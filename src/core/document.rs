use crate::core::FILE_SCHEME;
use crate::errors::FatalError;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// One Kantra analysis run, loaded from `output.yaml`.
///
/// Immutable once loaded. The top level must be a YAML sequence of ruleset
/// objects; anything inside that sequence is validated lazily during
/// extraction so partial corruption never aborts a run.
#[derive(Debug, Clone)]
pub struct AnalysisDocument {
    rulesets: Vec<Value>,
}

impl AnalysisDocument {
    /// Load and shape-check a document from disk.
    ///
    /// Fatal on a missing/unreadable file, invalid YAML, an empty document,
    /// or a top level that is not a sequence.
    pub fn load(path: &Path) -> Result<Self, FatalError> {
        let content = fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                FatalError::DocumentNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                FatalError::DocumentUnreadable {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let value: Value =
            serde_yaml::from_str(&content).map_err(|e| FatalError::DocumentInvalidYaml {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Self::from_value(value).map_err(|shape| match shape {
            DocumentShape::Empty => FatalError::DocumentEmpty {
                path: path.to_path_buf(),
            },
            DocumentShape::NotASequence => FatalError::DocumentWrongShape {
                path: path.to_path_buf(),
            },
        })
    }

    /// Build a document from an already-parsed YAML value.
    pub fn from_value(value: Value) -> Result<Self, DocumentShape> {
        match value {
            Value::Null => Err(DocumentShape::Empty),
            Value::Sequence(rulesets) => Ok(Self { rulesets }),
            _ => Err(DocumentShape::NotASequence),
        }
    }

    /// Raw ruleset entries, in document order. Entries are not guaranteed to
    /// be well-formed; extraction skips the ones that are not.
    pub fn rulesets(&self) -> &[Value] {
        &self.rulesets
    }
}

/// Why a parsed YAML value could not become an [`AnalysisDocument`].
#[derive(Debug, PartialEq, Eq)]
pub enum DocumentShape {
    Empty,
    NotASequence,
}

/// Strip the `file://` scheme from an incident URI, yielding the filesystem
/// path. URIs with any other scheme are not attributable to a file.
pub fn file_uri_path(uri: &str) -> Option<&str> {
    let path = uri.strip_prefix(FILE_SCHEME)?;
    if path.is_empty() {
        None
    } else {
        Some(path)
    }
}
