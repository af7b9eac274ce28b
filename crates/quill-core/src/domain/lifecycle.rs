use chrono::{DateTime, Utc};

/// Whether a record is live or has been logically removed.
///
/// Rows are never physically deleted; a tombstone timestamp marks them as
/// removed and repositories exclude them from every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Active,
    Deleted(DateTime<Utc>),
}

impl Lifecycle {
    pub fn is_active(&self) -> bool {
        matches!(self, Lifecycle::Active)
    }

    /// The tombstone as stored in the `deleted_at` column.
    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Lifecycle::Active => None,
            Lifecycle::Deleted(at) => Some(*at),
        }
    }
}

impl From<Option<DateTime<Utc>>> for Lifecycle {
    fn from(deleted_at: Option<DateTime<Utc>>) -> Self {
        deleted_at.map_or(Lifecycle::Active, Lifecycle::Deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tombstone_round_trip() {
        let now = Utc::now();

        assert_eq!(Lifecycle::from(None), Lifecycle::Active);
        assert_eq!(Lifecycle::from(Some(now)), Lifecycle::Deleted(now));
        assert_eq!(Lifecycle::Deleted(now).deleted_at(), Some(now));
        assert!(Lifecycle::Active.is_active());
        assert!(!Lifecycle::Deleted(now).is_active());
    }
}
