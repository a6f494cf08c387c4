// Application ledger: one immutable record per (user, job), plus the
// generate-then-record auto-apply flow.

pub mod handlers;
pub mod ledger;
pub mod workflow;
