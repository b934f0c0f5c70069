use std::time::Duration;

use tracing::{debug, trace};

use crate::core::AutoplayDirection;
use crate::extensions::PluginEvent;
use crate::interaction::ScrollViewport;
use crate::render::Renderer;

use super::{
    AutoplayScheduler, CarouselEngine, CarouselState, ManualScheduler, TimerToken,
    state_update_queue::{PostFlushHook, StateUpdate},
};

/// Owns the autoplay scheduler together with the single pending tick.
///
/// Dropping the timer cancels the pending tick, so an engine that is dropped
/// without `unmount` leaves nothing armed in a shared host event loop.
pub(super) struct AutoplayTimer<S: AutoplayScheduler> {
    scheduler: Option<S>,
    armed: Option<TimerToken>,
}

impl<S: AutoplayScheduler> AutoplayTimer<S> {
    pub(super) fn new(scheduler: S) -> Self {
        Self {
            scheduler: Some(scheduler),
            armed: None,
        }
    }

    #[must_use]
    pub(super) fn armed(&self) -> Option<TimerToken> {
        self.armed
    }

    /// Forgets the armed token without cancelling it; used once it fired.
    pub(super) fn disarm(&mut self) -> Option<TimerToken> {
        self.armed.take()
    }

    /// Cancels any pending tick, then schedules a new one.
    pub(super) fn arm(&mut self, delay: Duration) -> TimerToken {
        self.cancel();
        let token = self.scheduler_mut().schedule(delay);
        self.armed = Some(token);
        token
    }

    /// Cancels the pending tick, if any. Returns the cancelled token.
    pub(super) fn cancel(&mut self) -> Option<TimerToken> {
        let token = self.armed.take()?;
        if let Some(scheduler) = self.scheduler.as_mut() {
            scheduler.cancel(token);
        }
        Some(token)
    }

    pub(super) fn scheduler(&self) -> &S {
        self.scheduler
            .as_ref()
            .expect("scheduler is present until the timer is released")
    }

    pub(super) fn scheduler_mut(&mut self) -> &mut S {
        self.scheduler
            .as_mut()
            .expect("scheduler is present until the timer is released")
    }

    /// Cancels the pending tick and hands the scheduler back.
    pub(super) fn release(mut self) -> S {
        self.cancel();
        self.scheduler
            .take()
            .expect("scheduler is present until the timer is released")
    }
}

impl<S: AutoplayScheduler> Drop for AutoplayTimer<S> {
    fn drop(&mut self) {
        if let Some(token) = self.cancel() {
            trace!(?token, "autoplay timer cancelled on drop");
        }
    }
}

/// Whether the next autoplay step would run off a non-looping edge.
fn at_autoplay_boundary(state: &CarouselState, direction: AutoplayDirection) -> bool {
    let page = state.active_page();
    match direction {
        AutoplayDirection::Forward => page + 1 >= state.page_count,
        AutoplayDirection::Backward => page == 0,
    }
}

impl<R: Renderer, V: ScrollViewport, S: AutoplayScheduler> CarouselEngine<R, V, S> {
    /// Arms the autoplay timer if autoplay is currently eligible.
    ///
    /// Any previously armed timer is cancelled first, so at most one tick is
    /// ever pending.
    pub(super) fn rearm_autoplay(&mut self) {
        let config = self.core.config;
        let state = self.core.model.state;
        if !config.autoplay
            || state.is_scrolling
            || state.autoplay_ended
            || self.core.model.layout.is_single_page()
        {
            trace!(
                enabled = config.autoplay,
                is_scrolling = state.is_scrolling,
                ended = state.autoplay_ended,
                "autoplay not armed"
            );
            return;
        }
        let Some(delay) = config.autoplay_delay() else {
            debug!(
                interval_ms = config.autoplay_interval_ms,
                "autoplay interval can never elapse; autoplay stays idle"
            );
            return;
        };

        let token = self.autoplay.arm(delay);
        trace!(?token, ?delay, "autoplay armed");
        let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self.emit_plugin_event(PluginEvent::AutoplayArmed { delay_ms });
    }

    pub(super) fn cancel_autoplay(&mut self) {
        if let Some(token) = self.autoplay.cancel() {
            trace!(?token, "autoplay timer cancelled");
        }
    }

    /// Scheduler notification: the timer behind `token` elapsed.
    ///
    /// Tokens other than the currently armed one are stale and ignored.
    pub fn on_timer_fired(&mut self, token: TimerToken) {
        if self.autoplay.armed() != Some(token) {
            debug!(?token, "stale autoplay timer ignored");
            return;
        }
        self.autoplay.disarm();

        let config = self.core.config;
        let state = self.core.model.state;
        if !self.core.model.layout.is_looping()
            && at_autoplay_boundary(&state, config.autoplay_direction)
        {
            debug!(
                index = state.index,
                direction = ?config.autoplay_direction,
                "autoplay reached boundary"
            );
            let pending = &mut self.core.runtime.pending;
            pending.request(StateUpdate::SetAutoplayEnded(true));
            pending.after_flush(PostFlushHook::EmitPlugin(PluginEvent::AutoplayEnded));
            self.commit();
            return;
        }

        self.scroll_to(config.autoplay_direction.step());
    }

    #[must_use]
    pub fn is_autoplay_armed(&self) -> bool {
        self.autoplay.armed().is_some()
    }
}

impl<R: Renderer, V: ScrollViewport> CarouselEngine<R, V, ManualScheduler> {
    /// Advances the virtual clock and delivers every timer that came due.
    ///
    /// Returns the number of timers delivered.
    pub fn advance_autoplay_clock(&mut self, by: Duration) -> usize {
        let due = self.autoplay.scheduler_mut().advance(by);
        let fired = due.len();
        for token in due {
            self.on_timer_fired(token);
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Axis, Offset, ViewportSize};

    fn state(index: f64) -> CarouselState {
        CarouselState {
            page_count: 3,
            axis: Axis::Horizontal,
            viewport_size: ViewportSize::new(10.0, 10.0),
            index,
            offset: Offset::ZERO,
            is_scrolling: false,
            autoplay_ended: false,
        }
    }

    #[test]
    fn boundary_depends_on_direction() {
        assert!(at_autoplay_boundary(&state(2.0), AutoplayDirection::Forward));
        assert!(!at_autoplay_boundary(&state(1.0), AutoplayDirection::Forward));
        assert!(at_autoplay_boundary(&state(0.0), AutoplayDirection::Backward));
        assert!(!at_autoplay_boundary(&state(2.0), AutoplayDirection::Backward));
    }
}
