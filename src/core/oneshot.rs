/*!
 * One-Shot Scheduled Task
 *
 * Cancellable deferred callback with at-most-once semantics. Used for the
 * close-callback grace timer and deferred DOM suspension, where "fires at
 * most once" must hold structurally rather than by caller discipline.
 */

use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// A cancellable one-shot timer.
///
/// `arm` schedules a callback after a delay; re-arming replaces any pending
/// callback. `cancel` aborts a pending callback and reports whether there was
/// one left to abort. Once the callback has started it can neither be
/// cancelled nor run again.
pub struct OneShot {
    state: Mutex<Option<Armed>>,
}

struct Armed {
    handle: JoinHandle<()>,
    fired: Arc<AtomicBool>,
}

impl OneShot {
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(None),
        }
    }

    /// Schedule `callback` to run after `delay`. Replaces a pending callback.
    ///
    /// Requires a tokio runtime context.
    pub fn arm<F>(&self, delay: Duration, callback: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let fired = Arc::new(AtomicBool::new(false));
        let task_fired = Arc::clone(&fired);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task_fired.store(true, Ordering::SeqCst);
            callback();
        });

        let mut slot = self.state.lock();
        if let Some(previous) = slot.replace(Armed { handle, fired }) {
            previous.handle.abort();
        }
    }

    /// Abort a pending callback. Returns false if none was armed or the
    /// callback already started.
    pub fn cancel(&self) -> bool {
        match self.state.lock().take() {
            Some(armed) => {
                if armed.fired.load(Ordering::SeqCst) {
                    false
                } else {
                    armed.handle.abort();
                    true
                }
            }
            None => false,
        }
    }

    /// True while a callback is scheduled and has not yet run.
    pub fn is_armed(&self) -> bool {
        self.state
            .lock()
            .as_ref()
            .map(|armed| !armed.fired.load(Ordering::SeqCst))
            .unwrap_or(false)
    }
}

impl Default for OneShot {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for OneShot {
    fn drop(&mut self) {
        if let Some(armed) = self.state.lock().take() {
            armed.handle.abort();
        }
    }
}
