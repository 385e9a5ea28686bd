//! Composite key identifying a single cron job row.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// The `(id, path, server)` triple. Together the three fields match at most
/// one row of the `cronjobs` table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobKey {
    pub id: DbId,
    pub path: String,
    pub server: String,
}

impl JobKey {
    pub fn new(id: DbId, path: impl Into<String>, server: impl Into<String>) -> Self {
        Self {
            id,
            path: path.into(),
            server: server.into(),
        }
    }
}

impl fmt::Display for JobKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} on {}", self.id, self.path, self.server)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_all_three_fields() {
        let key = JobKey::new(3, "/usr/bin/backup.sh", "web01");
        assert_eq!(key.to_string(), "#3 /usr/bin/backup.sh on web01");
    }

    #[test]
    fn keys_differing_in_one_field_are_distinct() {
        let a = JobKey::new(1, "/bin/a", "web01");
        assert_ne!(a, JobKey::new(1, "/bin/a", "web02"));
        assert_ne!(a, JobKey::new(1, "/bin/b", "web01"));
        assert_ne!(a, JobKey::new(2, "/bin/a", "web01"));
    }
}
