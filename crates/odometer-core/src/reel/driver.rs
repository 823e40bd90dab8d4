use std::fmt;
use std::time::Duration;

use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tracing::debug;

use super::Skip;
use crate::counter::Counter;
use crate::{Error, Result};

/// How a reel run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReelOutcome {
    /// The counter landed on the target
    Completed,
    /// The run was replaced by a new one or the counter was dropped
    Aborted,
}

/// Completion callback for a reel run, invoked exactly once
pub type ReelCallback = Box<dyn FnOnce(ReelOutcome) + Send + 'static>;

/// Reel capability of an animated counter
pub(crate) struct Animation {
    interval: Duration,
    skip: Skip,
    /// The single active run, if Reeling
    reel: Option<ActiveReel>,
}

impl Animation {
    pub(crate) fn new(interval: Duration, skip: Skip) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            skip,
            reel: None,
        }
    }
}

impl fmt::Debug for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animation")
            .field("interval", &self.interval)
            .field("skip", &self.skip)
            .field("target", &self.reel.as_ref().map(|r| r.target))
            .finish()
    }
}

struct ActiveReel {
    target: u64,
    timer: Interval,
    on_done: Option<ReelCallback>,
}

impl ActiveReel {
    fn finish(mut self, outcome: ReelOutcome) {
        if let Some(on_done) = self.on_done.take() {
            on_done(outcome);
        }
    }
}

// Releasing a run without finishing it counts as an abort
impl Drop for ActiveReel {
    fn drop(&mut self) {
        if let Some(on_done) = self.on_done.take() {
            debug!("Reel to {} aborted", self.target);
            on_done(ReelOutcome::Aborted);
        }
    }
}

impl Counter {
    /// Reel toward `target`, calling `on_done` when the run ends.
    ///
    /// An active run is aborted first. The first step is applied immediately;
    /// the rest follow on every timer tick (see [`Counter::tick`]). Must be
    /// called from within a tokio runtime when the first step does not
    /// already land on `target`.
    pub fn reel_to<F>(&mut self, target: u64, on_done: F) -> Result<()>
    where
        F: FnOnce(ReelOutcome) + Send + 'static,
    {
        let animation = self.animation.as_mut().ok_or(Error::NotAnimated)?;
        let (interval, skip) = (animation.interval, animation.skip);

        if let Some(previous) = animation.reel.take() {
            debug!("Reel to {} interrupted by reel to {}", previous.target, target);
            previous.finish(ReelOutcome::Aborted);
        }

        debug!("Reeling from {} to {} (skip={}, interval={:?})", self.value(), target, skip, interval);

        let next = self.value().saturating_add(skip.get()).min(target);
        self.update(next);

        if next == target {
            debug!("Reel to {} completed", target);
            on_done(ReelOutcome::Completed);
            return Ok(());
        }

        let mut timer = interval_at(Instant::now() + interval, interval);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        if let Some(animation) = self.animation.as_mut() {
            animation.reel = Some(ActiveReel {
                target,
                timer,
                on_done: Some(Box::new(on_done)),
            });
        }
        Ok(())
    }

    /// Wait for the next timer tick and apply one step.
    ///
    /// Returns `Some(Completed)` on the tick that lands on the target. Returns
    /// `None` right away when the counter is idle, so event loops should guard
    /// on [`Counter::is_reeling`].
    pub async fn tick(&mut self) -> Option<ReelOutcome> {
        let reel = self.animation.as_mut()?.reel.as_mut()?;
        reel.timer.tick().await;
        self.step()
    }

    fn step(&mut self) -> Option<ReelOutcome> {
        let animation = self.animation.as_ref()?;
        let target = animation.reel.as_ref()?.target;

        let next = self.value().saturating_add(animation.skip.get()).min(target);
        self.update(next);

        if next != target {
            return None;
        }

        let reel = self.animation.as_mut()?.reel.take()?;
        debug!("Reel to {} completed", target);
        reel.finish(ReelOutcome::Completed);
        Some(ReelOutcome::Completed)
    }

    /// Whether this counter carries the reel capability
    #[inline]
    pub fn is_animated(&self) -> bool {
        self.animation.is_some()
    }

    #[inline]
    pub fn is_reeling(&self) -> bool {
        self.animation.as_ref().map_or(false, |a| a.reel.is_some())
    }

    /// Target of the active run
    pub fn target(&self) -> Option<u64> {
        self.animation.as_ref()?.reel.as_ref().map(|r| r.target)
    }

    pub fn skip(&self) -> Option<Skip> {
        self.animation.as_ref().map(|a| a.skip)
    }

    pub fn interval(&self) -> Option<Duration> {
        self.animation.as_ref().map(|a| a.interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn animated(interval_ms: u64, skip: u64) -> Counter {
        Counter::with_animation(Duration::from_millis(interval_ms), Skip::new(skip))
    }

    fn recorder() -> (
        impl FnOnce(ReelOutcome) + Send + 'static,
        mpsc::UnboundedReceiver<ReelOutcome>,
    ) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            move |outcome| {
                let _ = tx.send(outcome);
            },
            rx,
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_reel_to_ten_by_five() {
        let mut counter = animated(50, 5);
        let (on_done, mut rx) = recorder();

        counter.reel_to(10, on_done).unwrap();
        assert_eq!(counter.value(), 5);
        assert!(counter.is_reeling());
        assert!(rx.try_recv().is_err());

        let start = Instant::now();
        assert_eq!(counter.tick().await, Some(ReelOutcome::Completed));
        assert!(start.elapsed() >= Duration::from_millis(50));
        assert_eq!(counter.value(), 10);
        assert_eq!(counter.to_string(), "10");
        assert!(!counter.is_reeling());

        assert_eq!(rx.recv().await, Some(ReelOutcome::Completed));
        // Callback consumed, sender gone
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reel_sequence_clamps_last_step() {
        let mut counter = animated(20, 4);
        counter.update(3);
        let (on_done, mut rx) = recorder();

        counter.reel_to(20, on_done).unwrap();
        let mut applied = vec![counter.value()];
        while counter.is_reeling() {
            counter.tick().await;
            applied.push(counter.value());
        }

        assert_eq!(applied, vec![7, 11, 15, 19, 20]);
        assert_eq!(rx.recv().await, Some(ReelOutcome::Completed));
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reel_grows_registry() {
        let mut counter = animated(10, 40);
        counter.reel_to(120, |_| {}).unwrap();
        while counter.is_reeling() {
            counter.tick().await;
        }
        assert_eq!(counter.to_string(), "120");
        assert_eq!(counter.elements().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_reel_aborts_first() {
        let mut counter = animated(50, 1);
        let (first, mut first_rx) = recorder();
        let (second, mut second_rx) = recorder();

        counter.reel_to(100, first).unwrap();
        counter.tick().await;
        assert_eq!(counter.value(), 2);

        counter.reel_to(4, second).unwrap();
        assert_eq!(first_rx.recv().await, Some(ReelOutcome::Aborted));
        assert_eq!(first_rx.recv().await, None);

        assert_eq!(counter.value(), 3);
        assert_eq!(counter.target(), Some(4));
        assert!(second_rx.try_recv().is_err());

        assert_eq!(counter.tick().await, Some(ReelOutcome::Completed));
        assert_eq!(counter.value(), 4);
        assert_eq!(second_rx.recv().await, Some(ReelOutcome::Completed));
        assert_eq!(second_rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_immediate_completion_arms_no_timer() {
        let mut counter = animated(50, 5);
        let (on_done, mut rx) = recorder();

        counter.reel_to(3, on_done).unwrap();
        assert_eq!(counter.value(), 3);
        assert!(!counter.is_reeling());
        assert_eq!(rx.recv().await, Some(ReelOutcome::Completed));
        assert_eq!(counter.tick().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_target_below_value_jumps() {
        let mut counter = animated(50, 2);
        counter.update(50);
        let (on_done, mut rx) = recorder();

        counter.reel_to(20, on_done).unwrap();
        assert_eq!(counter.value(), 20);
        assert_eq!(rx.recv().await, Some(ReelOutcome::Completed));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_while_reeling_aborts() {
        let mut counter = animated(50, 1);
        let (on_done, mut rx) = recorder();

        counter.reel_to(10, on_done).unwrap();
        drop(counter);

        assert_eq!(rx.recv().await, Some(ReelOutcome::Aborted));
        assert_eq!(rx.recv().await, None);
    }

    #[test]
    fn test_static_counter_cannot_reel() {
        let mut counter = Counter::new();
        let err = counter.reel_to(10, |_| {}).unwrap_err();
        assert!(matches!(err, Error::NotAnimated));
        assert_eq!(counter.value(), 0);
        assert!(!counter.is_reeling());
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_tick_returns_immediately() {
        let mut counter = animated(50, 1);
        assert_eq!(counter.tick().await, None);
        assert_eq!(counter.value(), 0);
    }
}
