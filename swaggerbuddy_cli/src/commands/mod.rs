//! CLI subcommand implementations.

pub mod create;
pub mod delete;
pub mod projects;
pub mod show;

use swaggerbuddy_lib::SwaggerBuddyError;

/// Error for a failed list/detail fetch, with a hint to retry.
pub(crate) fn fetch_failed(what: &str, e: SwaggerBuddyError) -> anyhow::Error {
    anyhow::anyhow!("Failed to load {}: {}\nPlease try again.", what, e)
}
