use chrono::{DateTime, Duration, Utc};

use crate::errors::BusinessError;

/// How long after creation a report stays editable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditWindow {
    pub days_limit: u32,
}

impl EditWindow {
    pub fn new(days_limit: u32) -> Self {
        Self { days_limit }
    }

    /// True while the whole days elapsed since `created_at` do not exceed
    /// the limit.
    pub fn contains(&self, created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        (now - created_at).num_days() <= i64::from(self.days_limit)
    }

    pub fn deadline(&self, created_at: DateTime<Utc>) -> DateTime<Utc> {
        created_at + Duration::days(i64::from(self.days_limit))
    }

    pub fn ensure_open(
        &self,
        created_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<(), BusinessError> {
        if self.contains(created_at, now) {
            Ok(())
        } else {
            Err(BusinessError::edit_period_expired())
        }
    }

    pub fn is_open_now(&self, created_at: DateTime<Utc>) -> bool {
        self.contains(created_at, Utc::now())
    }
}

impl From<&crate::config::BusinessConfig> for EditWindow {
    fn from(config: &crate::config::BusinessConfig) -> Self {
        Self::new(config.report_edit_days_limit)
    }
}
