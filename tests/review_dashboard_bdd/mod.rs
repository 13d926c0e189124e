//! Support modules for the review dashboard BDD tests.

pub(crate) mod harness;
pub(crate) mod state;

pub(crate) use harness::{block_json, numbered_block_json};
pub(crate) use state::{DashboardScenario, mount, shared_runtime, with_dashboard};
