use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Utc};

/// A movie currently listed in the catalog. `last_detected` marks the last
/// time the catalog ingestion saw it and drives retention cleanup.
#[derive(Debug, Clone)]
pub struct Movie {
    pub id: ID,
    pub name: String,
    pub last_detected: DateTime<Utc>,
}

impl Movie {
    pub fn new(name: &str, last_detected: DateTime<Utc>) -> Self {
        Self {
            id: Default::default(),
            name: name.to_string(),
            last_detected,
        }
    }
}

impl Entity for Movie {
    fn id(&self) -> &ID {
        &self.id
    }
}
