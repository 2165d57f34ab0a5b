/*!
 * Host Limits and Constants
 *
 * Centralized location for host-wide timing bounds and thresholds.
 */

use std::time::Duration;

// =============================================================================
// PAGE LIFECYCLE TIMING
// =============================================================================

/// Grace period granted to hosted content to run its close callback.
/// When it elapses without acknowledgment the close is forced, bounding
/// worst-case shutdown latency.
pub const CLOSE_CALLBACK_GRACE: Duration = Duration::from_secs(5);

/// Delay between suspending media and suspending DOM/JS execution.
/// Lets in-flight visibility transitions settle before the page freezes.
pub const DOM_SUSPEND_DELAY: Duration = Duration::from_millis(300);

/// Upper bound for a page-supplied custom DOM-suspend delay.
pub const MAX_DOM_SUSPEND_DELAY: Duration = Duration::from_secs(10);

// =============================================================================
// PAGE LOAD
// =============================================================================

/// Load progress is reported in [0, 100]
pub const LOAD_PROGRESS_COMPLETE: u8 = 100;
