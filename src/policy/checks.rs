//! Shared CI aggregation used by both policies

use crate::types::{CheckConclusion, CheckRun, CheckRunStatus, CombinedStatus, StatusState};

/// Whether any CI reporter has said anything about this commit
///
/// A commit with neither check runs nor status entries carries no signal at
/// all; the approval policy treats that as not-ready rather than vacuously
/// green.
pub(crate) fn has_ci_signal(check_runs: &[CheckRun], combined_status: &CombinedStatus) -> bool {
    !check_runs.is_empty() || !combined_status.statuses.is_empty()
}

/// Whether every check run has a passing conclusion
///
/// With `require_completed`, a run that has not finished fails the test even
/// if it already carries a conclusion. Without it, an in-progress run still
/// fails because its conclusion is `None`.
pub(crate) fn check_runs_green(check_runs: &[CheckRun], require_completed: bool) -> bool {
    check_runs.iter().all(|run| {
        let concluded_green = run.conclusion.is_some_and(CheckConclusion::is_passing);
        if require_completed {
            run.status == CheckRunStatus::Completed && concluded_green
        } else {
            concluded_green
        }
    })
}

/// Whether the combined legacy status counts as green
///
/// Success is green, and an empty status list is vacuously green; the gate
/// only bites when some reporter actually posted a non-success state. The
/// approval policy pairs this with [`has_ci_signal`] so that a commit with
/// no reporters at all is still treated as not-ready.
pub(crate) fn combined_status_green(combined_status: &CombinedStatus) -> bool {
    combined_status.statuses.is_empty() || combined_status.state == StatusState::Success
}
