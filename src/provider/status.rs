/// Broad classification of a provider status string, used for coloring and
/// for deciding when polling can stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Failure,
    InProgress,
}

pub fn kind(status: &str) -> StatusKind {
    if status.contains("ROLLBACK") || status.ends_with("_FAILED") {
        StatusKind::Failure
    } else if status.ends_with("_COMPLETE") {
        StatusKind::Success
    } else {
        StatusKind::InProgress
    }
}

/// Terminal statuses end polling. Note `UPDATE_COMPLETE_CLEANUP_IN_PROGRESS`
/// and friends are still in flight.
pub fn is_terminal(status: &str) -> bool {
    status.ends_with("_COMPLETE") || status.ends_with("_FAILED")
}

pub fn deploy_succeeded(status: &str) -> bool {
    matches!(status, "CREATE_COMPLETE" | "UPDATE_COMPLETE")
}

pub fn delete_succeeded(status: &str) -> bool {
    status == "DELETE_COMPLETE"
}

#[cfg(test)]
mod tests {
    use super::{deploy_succeeded, is_terminal, kind, StatusKind};

    #[test]
    fn in_progress_statuses_are_not_terminal() {
        assert!(!is_terminal("CREATE_IN_PROGRESS"));
        assert!(!is_terminal("UPDATE_COMPLETE_CLEANUP_IN_PROGRESS"));
        assert!(!is_terminal("DELETE_IN_PROGRESS"));
    }

    #[test]
    fn complete_and_failed_statuses_are_terminal() {
        assert!(is_terminal("CREATE_COMPLETE"));
        assert!(is_terminal("ROLLBACK_COMPLETE"));
        assert!(is_terminal("UPDATE_ROLLBACK_FAILED"));
        assert!(is_terminal("DELETE_COMPLETE"));
    }

    #[test]
    fn rollbacks_classify_as_failure() {
        assert_eq!(kind("ROLLBACK_COMPLETE"), StatusKind::Failure);
        assert_eq!(kind("UPDATE_ROLLBACK_IN_PROGRESS"), StatusKind::Failure);
        assert_eq!(kind("CREATE_FAILED"), StatusKind::Failure);
        assert_eq!(kind("UPDATE_COMPLETE"), StatusKind::Success);
        assert_eq!(kind("CREATE_IN_PROGRESS"), StatusKind::InProgress);
    }

    #[test]
    fn only_create_and_update_complete_count_as_deployed() {
        assert!(deploy_succeeded("CREATE_COMPLETE"));
        assert!(deploy_succeeded("UPDATE_COMPLETE"));
        assert!(!deploy_succeeded("ROLLBACK_COMPLETE"));
        assert!(!deploy_succeeded("DELETE_COMPLETE"));
    }
}
