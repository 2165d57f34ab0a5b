/*!
 * Page Lifecycle Controller
 *
 * The single locus of lifecycle truth for one hosted page. All
 * suspend/resume/close transitions are routed through this controller,
 * which serializes them and negotiates close callbacks with hosted
 * content under a bounded grace period.
 */

use crate::core::limits;
use crate::core::oneshot::OneShot;
use crate::core::types::{AppId, InstanceId, PressureLevel, RenderPid};
use crate::engine::events::EngineEvent;
use crate::page::page::{Page, ProcessIdentifiable};
use crate::page::state::{CloseNegotiation, LifecycleError, LifecycleResult, PageState};
use log::{debug, info, warn};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use std::time::Duration;

/// Supervisor-facing lifecycle notifications.
pub trait PageObserver: Send + Sync {
    /// The page reached `Closed`; the owning instance can be torn down.
    fn page_closed(&self, app_id: &AppId, instance_id: &InstanceId);

    /// The render process died. The supervisor decides whether to relaunch.
    fn render_process_gone(&self, app_id: &AppId, instance_id: &InstanceId);
}

/// Cheap cloneable handle to one page's lifecycle state machine.
#[derive(Clone)]
pub struct PageLifecycle {
    inner: Arc<LifecycleInner>,
}

struct LifecycleInner {
    page: Arc<Page>,
    app_id: AppId,
    instance_id: InstanceId,
    state: RwLock<PageState>,
    negotiation: RwLock<CloseNegotiation>,
    // Serializes transitions; public entry points try_lock and reject,
    // timer/event continuations lock and wait their turn
    transition: Mutex<()>,
    close_timer: OneShot,
    dom_suspend_timer: OneShot,
    close_grace: Duration,
    observer: RwLock<Option<Arc<dyn PageObserver>>>,
}

impl PageLifecycle {
    pub fn new(page: Arc<Page>, app_id: AppId, instance_id: InstanceId) -> Self {
        Self {
            inner: Arc::new(LifecycleInner {
                page,
                app_id,
                instance_id,
                state: RwLock::new(PageState::Created),
                negotiation: RwLock::new(CloseNegotiation::NoCallback),
                transition: Mutex::new(()),
                close_timer: OneShot::new(),
                dom_suspend_timer: OneShot::new(),
                close_grace: limits::CLOSE_CALLBACK_GRACE,
                observer: RwLock::new(None),
            }),
        }
    }

    pub fn page(&self) -> &Arc<Page> {
        &self.inner.page
    }

    pub fn state(&self) -> PageState {
        *self.inner.state.read()
    }

    pub fn negotiation(&self) -> CloseNegotiation {
        *self.inner.negotiation.read()
    }

    pub fn is_closing(&self) -> bool {
        self.state().is_closing()
    }

    pub fn is_closed(&self) -> bool {
        self.state().is_closed()
    }

    pub fn set_observer(&self, observer: Arc<dyn PageObserver>) {
        *self.inner.observer.write() = Some(observer);
    }

    /// Navigate the page. Valid before first load and for a shown page.
    pub fn load(&self, url: &str) -> LifecycleResult<()> {
        let inner = &self.inner;
        let _t = inner
            .transition
            .try_lock()
            .ok_or(LifecycleError::TransitionInFlight)?;

        let state = *inner.state.read();
        match state {
            PageState::Created | PageState::Loading | PageState::Shown => {
                inner.page.set_url(url);
                inner.page.set_progress(0);
                *inner.state.write() = PageState::Loading;
                inner.page.view().load_url(url);
                Ok(())
            }
            other => Err(LifecycleError::InvalidTransition {
                from: other,
                op: "load",
            }),
        }
    }

    /// Reload the current URL.
    pub fn reload(&self) -> LifecycleResult<()> {
        let url = self.inner.page.url();
        info!(
            "[{}:{}] reloading {}",
            self.inner.app_id, self.inner.instance_id, url
        );
        self.load(&url)
    }

    /// `Shown|Paused → Suspended`. Media stops immediately; DOM and JS stop
    /// after the page's DOM-suspend delay unless resumed first. Rejected
    /// while close-callback execution is in flight.
    pub fn suspend(&self) -> LifecycleResult<()> {
        let inner = &self.inner;
        let _t = inner
            .transition
            .try_lock()
            .ok_or(LifecycleError::TransitionInFlight)?;

        if matches!(*inner.negotiation.read(), CloseNegotiation::Executing) {
            return Err(LifecycleError::ClosePending);
        }

        let state = *inner.state.read();
        match state {
            PageState::Suspended => Ok(()),
            PageState::Shown | PageState::Paused => {
                inner.page.view().suspend_media();
                inner.page.set_suspended(true);
                inner.page.set_paused(false);
                *inner.state.write() = PageState::Suspended;
                info!(
                    "[{}:{}] suspended (DOM stop in {:?})",
                    inner.app_id,
                    inner.instance_id,
                    inner.page.dom_suspend_delay()
                );

                let weak = Arc::downgrade(inner);
                inner
                    .dom_suspend_timer
                    .arm(inner.page.dom_suspend_delay(), move || {
                        if let Some(inner) = weak.upgrade() {
                            inner.suspend_dom_now();
                        }
                    });
                Ok(())
            }
            other => Err(LifecycleError::InvalidTransition {
                from: other,
                op: "suspend",
            }),
        }
    }

    /// `Suspended|Paused → Shown`. Cancels a pending deferred DOM
    /// suspension and re-synchronizes state mutated while suspended.
    pub fn resume(&self) -> LifecycleResult<()> {
        let inner = &self.inner;
        let _t = inner
            .transition
            .try_lock()
            .ok_or(LifecycleError::TransitionInFlight)?;

        let state = *inner.state.read();
        match state {
            PageState::Shown => Ok(()),
            PageState::Suspended => {
                inner.dom_suspend_timer.cancel();
                if inner.page.is_dom_suspended() {
                    inner.page.view().resume_painting_and_js();
                    inner.page.set_dom_suspended(false);
                }
                inner.page.view().resume_media();

                // Extension data and viewport may have changed while the
                // page was frozen
                inner.page.replay_extension_data();
                let (width, height) = inner.page.viewport();
                if width > 0 && height > 0 {
                    inner.page.view().set_viewport_size(width, height);
                }

                inner.page.set_suspended(false);
                *inner.state.write() = PageState::Shown;
                info!("[{}:{}] resumed", inner.app_id, inner.instance_id);
                Ok(())
            }
            PageState::Paused => {
                inner.page.view().resume_media();
                inner.page.set_paused(false);
                *inner.state.write() = PageState::Shown;
                Ok(())
            }
            other => Err(LifecycleError::InvalidTransition {
                from: other,
                op: "resume",
            }),
        }
    }

    /// `Shown → Paused`: media stops, DOM and JS keep running.
    pub fn pause(&self) -> LifecycleResult<()> {
        let inner = &self.inner;
        let _t = inner
            .transition
            .try_lock()
            .ok_or(LifecycleError::TransitionInFlight)?;

        let state = *inner.state.read();
        match state {
            PageState::Paused => Ok(()),
            PageState::Shown => {
                inner.page.view().suspend_media();
                inner.page.set_paused(true);
                *inner.state.write() = PageState::Paused;
                Ok(())
            }
            other => Err(LifecycleError::InvalidTransition {
                from: other,
                op: "pause",
            }),
        }
    }

    /// Record registration/clearing of the content-side close callback.
    pub fn set_has_close_callback(&self, registered: bool) {
        let mut negotiation = self.inner.negotiation.write();
        match *negotiation {
            CloseNegotiation::NoCallback | CloseNegotiation::Registered => {
                *negotiation = if registered {
                    CloseNegotiation::Registered
                } else {
                    CloseNegotiation::NoCallback
                };
            }
            // Too late to change the outcome of a close in flight
            other => debug!(
                "[{}:{}] close callback registration ignored in {:?}",
                self.inner.app_id, self.inner.instance_id, other
            ),
        }
    }

    /// Close the page. With a registered callback and `forced == false` the
    /// page enters `Closing`, hosted content is asked to run the callback,
    /// and the grace timer is armed. Otherwise the page closes directly and
    /// the timer is never started.
    pub fn request_close(&self, forced: bool) -> LifecycleResult<()> {
        let inner = &self.inner;
        let _t = inner
            .transition
            .try_lock()
            .ok_or(LifecycleError::TransitionInFlight)?;

        let state = *inner.state.read();
        match state {
            PageState::Closed => {
                debug!(
                    "[{}:{}] close requested for closed page",
                    inner.app_id, inner.instance_id
                );
                Ok(())
            }
            PageState::Closing => Err(LifecycleError::TransitionInFlight),
            _ => {
                let registered =
                    matches!(*inner.negotiation.read(), CloseNegotiation::Registered);
                if registered && !forced {
                    // The callback needs a running DOM
                    inner.dom_suspend_timer.cancel();
                    if inner.page.is_dom_suspended() {
                        inner.page.view().resume_painting_and_js();
                        inner.page.set_dom_suspended(false);
                    }
                    *inner.state.write() = PageState::Closing;
                    *inner.negotiation.write() = CloseNegotiation::Executing;
                    info!(
                        "[{}:{}] running close callback (grace {:?})",
                        inner.app_id, inner.instance_id, inner.close_grace
                    );
                    inner.page.view().run_close_callback(false);

                    let weak = Arc::downgrade(inner);
                    inner.close_timer.arm(inner.close_grace, move || {
                        if let Some(inner) = weak.upgrade() {
                            inner.on_close_timeout();
                        }
                    });
                } else {
                    inner.close_now();
                }
                Ok(())
            }
        }
    }

    /// Hosted content acknowledged close-callback completion: cancel the
    /// grace timer and finish the close.
    pub fn did_run_close_callback(&self) {
        let inner = &self.inner;
        let _t = inner.transition.lock();

        if *inner.state.read() != PageState::Closing {
            debug!(
                "[{}:{}] close acknowledgment ignored in {:?}",
                inner.app_id,
                inner.instance_id,
                *inner.state.read()
            );
            return;
        }

        inner.close_timer.cancel();
        *inner.negotiation.write() = CloseNegotiation::Completed;
        inner.close_now();
    }

    /// Render-process identity arrived. Idempotent under re-delivery.
    pub fn render_process_created(&self, pid: RenderPid) {
        let page = &self.inner.page;
        if page.render_pid() == Some(pid) {
            return;
        }
        if let Some(previous) = page.set_render_pid(pid) {
            warn!(
                "[{}:{}] render pid changed {} -> {}",
                self.inner.app_id, self.inner.instance_id, previous, pid
            );
        } else {
            info!(
                "[{}:{}] render process created (pid {})",
                self.inner.app_id, self.inner.instance_id, pid
            );
        }
    }

    /// The render process died: prune the stale pid, close the page, and
    /// surface the relaunch decision to the supervisor.
    pub fn render_process_crashed(&self) {
        let inner = &self.inner;
        let _t = inner.transition.lock();

        let stale = inner.page.take_render_pid();
        if *inner.state.read() == PageState::Closed {
            return;
        }
        warn!(
            "[{}:{}] render process crashed (pid {:?})",
            inner.app_id, inner.instance_id, stale
        );
        inner.close_now();

        let observer = inner.observer.read().clone();
        if let Some(observer) = observer {
            observer.render_process_gone(&inner.app_id, &inner.instance_id);
        }
    }

    /// One-way pressure signal, forwarded to the engine. Reclaim policy is
    /// the governor's; this controller only provides the primitives.
    pub fn notify_memory_pressure(&self, level: PressureLevel) {
        self.inner.page.view().notify_memory_pressure(level);
    }

    /// Apply an asynchronous engine notification.
    pub fn handle_engine_event(&self, event: EngineEvent) {
        let inner = &self.inner;
        match event {
            EngineEvent::RenderProcessCreated { pid } => self.render_process_created(pid),
            EngineEvent::RenderProcessCrashed => self.render_process_crashed(),
            EngineEvent::LoadProgressChanged { progress } => inner.page.set_progress(progress),
            EngineEvent::LoadFinished { url } => {
                debug!("[{}:{}] load finished: {}", inner.app_id, inner.instance_id, url);
                inner.page.set_progress(limits::LOAD_PROGRESS_COMPLETE);
                let _t = inner.transition.lock();
                let mut state = inner.state.write();
                if *state == PageState::Loading {
                    *state = PageState::Shown;
                }
            }
            EngineEvent::LoadFailed { url, error_code } => {
                warn!(
                    "[{}:{}] load failed ({}): {}",
                    inner.app_id, inner.instance_id, error_code, url
                );
            }
            EngineEvent::TitleChanged { title } => inner.page.set_title(title),
            EngineEvent::FirstFrameSwapped => inner.page.mark_shown(),
            EngineEvent::CompositorActivated => inner.page.set_compositor_active(true),
            EngineEvent::CompositorDeactivated => inner.page.set_compositor_active(false),
            EngineEvent::KeyboardVisibilityChanged { visible } => {
                inner.page.set_keyboard_visible(visible)
            }
        }
    }
}

impl LifecycleInner {
    /// Deferred DOM suspension. Skipped when the page left `Suspended`
    /// before the delay elapsed.
    fn suspend_dom_now(&self) {
        let _t = self.transition.lock();
        if *self.state.read() != PageState::Suspended {
            return;
        }
        debug!(
            "[{}:{}] suspending DOM and JS execution",
            self.app_id, self.instance_id
        );
        self.page.view().suspend_painting_and_js();
        self.page.set_dom_suspended(true);
    }

    /// Grace timer expiry: hosted content never acknowledged, force the
    /// close. Designed fallback, not an error.
    fn on_close_timeout(&self) {
        let _t = self.transition.lock();
        if *self.state.read() != PageState::Closing {
            return;
        }
        warn!(
            "[{}:{}] close callback timed out, forcing close",
            self.app_id, self.instance_id
        );
        *self.negotiation.write() = CloseNegotiation::TimedOut;
        self.page.view().run_close_callback(true);
        self.close_now();
    }

    /// Terminal close. Callers hold the transition guard; the state check
    /// makes a second close a no-op.
    fn close_now(&self) {
        {
            let mut state = self.state.write();
            if *state == PageState::Closed {
                return;
            }
            *state = PageState::Closed;
        }
        self.close_timer.cancel();
        self.dom_suspend_timer.cancel();
        info!("[{}:{}] page closed", self.app_id, self.instance_id);

        let observer = self.observer.read().clone();
        if let Some(observer) = observer {
            observer.page_closed(&self.app_id, &self.instance_id);
        }
    }
}
