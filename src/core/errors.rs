/*!
 * Error Types
 * Centralized error handling with thiserror and miette support
 */

// Re-export LifecycleError from the page module
pub use crate::page::state::{LifecycleError, LifecycleResult};
