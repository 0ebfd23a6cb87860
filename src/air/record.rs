//! Loosely shaped CSV rows
//!
//! A row is whatever columns its file declared. Values stay as text; numeric
//! parsing happens where a number is actually needed.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::errors::{RecordError, Result};

/// One CSV row: ordered column name → value pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column, replacing any earlier value under the same name
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let column = column.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == column) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((column, value)),
        }
    }

    /// Value of `column`, if the row has it
    pub fn get_field(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Case-insensitive exact match on the `City` column
    pub fn is_city(&self, city: &str) -> bool {
        self.get_field("City")
            .map(|value| value.to_lowercase() == city.to_lowercase())
            .unwrap_or(false)
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (column, value) in iter {
            record.insert(column, value);
        }
        record
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        write!(f, "}}")
    }
}

/// The rows of the most recently loaded file
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
    source: Option<PathBuf>,
}

impl Dataset {
    pub fn new(records: Vec<Record>, source: impl Into<PathBuf>) -> Self {
        Dataset {
            records,
            source: Some(source.into()),
        }
    }

    /// Rows, or `NoData` when nothing is loaded
    pub fn require_loaded(&self) -> Result<&[Record]> {
        if self.records.is_empty() {
            return Err(RecordError::NoData);
        }
        Ok(&self.records)
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
