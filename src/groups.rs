//! Group records and the read-only store they live in
//!
//! Records are bundled with the binary as JSON and loaded once at startup;
//! they never change afterwards. The store only hands out shared references,
//! so every component sees the same immutable dataset.

use crate::constants::MAP_EMBED_BASE;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

const BUNDLED_GROUPS: &str = include_str!("../data/groups.json");

/// A single meeting-schedule line (e.g. "Lunes a Viernes", "19:00", "21:00")
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScheduleEntry {
    pub days: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Address {
    pub line1: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    /// Free-text landmarks ("frente al mercado", ...)
    #[serde(default)]
    pub reference_notes: String,
}

/// A directory entry with location, schedule, and map-lookup data
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    /// District code, one of [`crate::constants::DISTRICTS`]
    pub district: String,
    pub address: Address,
    #[serde(default)]
    pub schedule: Vec<ScheduleEntry>,
    pub map_query: String,
}

impl Group {
    /// External map link built by URL-encoding the record's map query
    pub fn map_url(&self) -> String {
        url::Url::parse_with_params(
            MAP_EMBED_BASE,
            &[("q", self.map_query.as_str()), ("output", "embed")],
        )
        .map(String::from)
        .unwrap_or_else(|_| MAP_EMBED_BASE.to_string())
    }
}

#[derive(Debug, Error)]
pub enum GroupDataError {
    #[error("failed to read groups file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse group records: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate group id '{0}'")]
    DuplicateId(String),
}

/// Read-only collection of [`Group`] records, in source order
#[derive(Debug, Clone, Default)]
pub struct GroupStore {
    groups: Vec<Group>,
}

impl GroupStore {
    /// Build a store from already-deserialized records, enforcing id uniqueness
    pub fn new(groups: Vec<Group>) -> Result<Self, GroupDataError> {
        let mut seen = HashSet::new();
        for group in &groups {
            if !seen.insert(group.id.as_str()) {
                return Err(GroupDataError::DuplicateId(group.id.clone()));
            }
        }
        Ok(Self { groups })
    }

    pub fn from_json(json: &str) -> Result<Self, GroupDataError> {
        let groups: Vec<Group> = serde_json::from_str(json)?;
        Self::new(groups)
    }

    /// Load the records bundled into the binary
    pub fn load_bundled() -> Result<Self, GroupDataError> {
        Self::from_json(BUNDLED_GROUPS)
    }

    /// Load records from a file named in the configuration
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, GroupDataError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn get(&self, index: usize) -> Option<&Group> {
        self.groups.get(index)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
