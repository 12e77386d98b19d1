//! Auto-approve and auto-merge automation for GitHub pull requests.
//!
//! Designed to run as a scheduled or event-triggered CI job: each invocation
//! enumerates the open pull requests of one repository, evaluates a fixed
//! readiness policy against each, and performs at most one terminal action
//! (an approving review, or a squash merge) per pull request. No state
//! persists between runs; idempotence comes from re-querying the platform.

pub mod config;
pub mod error;
pub mod platform;
pub mod policy;
pub mod run;
pub mod types;
