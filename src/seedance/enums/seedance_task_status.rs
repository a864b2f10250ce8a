#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedanceTaskStatus {
    Queued,
    Pending,
    Running,
    Processing,
    Succeeded,
    Failed,
    Cancelled,
    Unknown,
}

impl SeedanceTaskStatus {
    pub fn from_value(value: &str) -> Self {
        match value {
            "queued" => Self::Queued,
            "pending" => Self::Pending,
            "running" => Self::Running,
            "processing" => Self::Processing,
            "succeeded" => Self::Succeeded,
            "failed" => Self::Failed,
            "cancelled" | "canceled" => Self::Cancelled,
            _ => Self::Unknown,
        }
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(
            self,
            Self::Queued | Self::Pending | Self::Running | Self::Processing
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_value_reads_vendor_statuses() {
        assert_eq!(SeedanceTaskStatus::from_value("queued"), SeedanceTaskStatus::Queued);
        assert_eq!(SeedanceTaskStatus::from_value("succeeded"), SeedanceTaskStatus::Succeeded);
        assert_eq!(SeedanceTaskStatus::from_value("canceled"), SeedanceTaskStatus::Cancelled);
        assert_eq!(SeedanceTaskStatus::from_value("exploded"), SeedanceTaskStatus::Unknown);
    }

    #[test]
    fn only_waiting_statuses_are_in_progress() {
        assert!(SeedanceTaskStatus::Running.is_in_progress());
        assert!(SeedanceTaskStatus::Pending.is_in_progress());
        assert!(!SeedanceTaskStatus::Succeeded.is_in_progress());
        assert!(!SeedanceTaskStatus::Unknown.is_in_progress());
    }
}
