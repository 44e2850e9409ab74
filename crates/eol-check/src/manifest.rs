//! pyproject.toml access: extract and rewrite `project.requires-python`.

use crate::error::{CheckError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use toml_edit::{DocumentMut, Item};

/// A pyproject.toml opened for checking.
///
/// Backed by `toml_edit`'s [`DocumentMut`], so a rewrite of the
/// `requires-python` value leaves every other byte of the document
/// (ordering, comments, whitespace) untouched.
#[derive(Debug)]
pub struct Pyproject {
    path: PathBuf,
    doc: DocumentMut,
}

impl Pyproject {
    /// Load and parse a pyproject.toml from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let doc = contents
            .parse::<DocumentMut>()
            .map_err(|source| CheckError::manifest_parse(path, source))?;

        Ok(Self {
            path: path.to_path_buf(),
            doc,
        })
    }

    /// The file this manifest was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The declared `project.requires-python` specifier.
    ///
    /// A missing `[project]` table, a missing key, and an empty string all
    /// count as not found; the caller reports them the same way.
    pub fn requires_python(&self) -> Result<&str> {
        self.doc
            .get("project")
            .and_then(Item::as_table_like)
            .and_then(|project| project.get("requires-python"))
            .and_then(Item::as_str)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| CheckError::requires_python_not_found(&self.path))
    }

    /// Replace the `requires-python` value in place.
    ///
    /// Callers extract the old value first, so `[project]` is known to
    /// exist by the time this runs.
    pub fn set_requires_python(&mut self, specifier: &str) {
        self.doc["project"]["requires-python"] = toml_edit::value(specifier);
    }

    /// Write the document back to the file it was loaded from.
    pub fn save(&self) -> Result<()> {
        fs::write(&self.path, self.doc.to_string())?;
        Ok(())
    }
}
