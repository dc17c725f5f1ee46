//! Card Timers
//!
//! Per-card stopwatches for the task grid. Elapsed/active bookkeeping is a
//! plain [`TimerLedger`] value held in a signal; the live [`Interval`]
//! handles sit in a separate non-reactive map because dropping a handle is
//! what cancels its ticks.

use std::collections::{HashMap, HashSet};

use gloo_timers::callback::Interval;
use leptos::prelude::*;

/// Tick cadence for every card stopwatch.
const TICK_MS: u32 = 1_000;

// ========================
// Ledger
// ========================

/// Elapsed seconds + active flags per card id. Pure value with no JS
/// handles, so the transition rules run under plain `cargo test`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimerLedger {
    elapsed: HashMap<String, u64>,
    active: HashSet<String>,
}

impl TimerLedger {
    pub fn start(&mut self, id: &str) {
        self.elapsed.entry(id.to_string()).or_insert(0);
        self.active.insert(id.to_string());
    }

    /// Elapsed is retained so the timer can resume later.
    pub fn stop(&mut self, id: &str) {
        self.active.remove(id);
    }

    /// One second passed for `id`. Counts only while active; a tick that
    /// races its own cancellation is ignored.
    pub fn tick(&mut self, id: &str) {
        if self.active.contains(id) {
            *self.elapsed.entry(id.to_string()).or_insert(0) += 1;
        }
    }

    /// Forget a card entirely (delete path).
    pub fn remove(&mut self, id: &str) {
        self.active.remove(id);
        self.elapsed.remove(id);
    }

    pub fn deactivate_all(&mut self) {
        self.active.clear();
    }

    pub fn elapsed(&self, id: &str) -> u64 {
        self.elapsed.get(id).copied().unwrap_or(0)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.contains(id)
    }
}

// ========================
// Reactive Wrapper
// ========================

/// Stopwatch state for the whole grid. `Copy`, so cards capture it freely in
/// event handlers. At most one interval handle exists per card id; the
/// handle map is `LocalStorage`-backed since `Interval` is not `Send`.
#[derive(Clone, Copy)]
pub struct CardTimers {
    ledger: RwSignal<TimerLedger>,
    handles: StoredValue<HashMap<String, Interval>, LocalStorage>,
}

impl CardTimers {
    pub fn new() -> Self {
        Self {
            ledger: RwSignal::new(TimerLedger::default()),
            handles: StoredValue::new_local(HashMap::new()),
        }
    }

    /// Begin (or resume) ticking for a card. Idempotent: starting an already
    /// running timer keeps the existing interval.
    pub fn start(&self, id: &str) {
        let already_running = self.handles.with_value(|handles| handles.contains_key(id));
        if already_running {
            return;
        }
        let ledger = self.ledger;
        let tick_id = id.to_string();
        let handle = Interval::new(TICK_MS, move || {
            // try_update no-ops if the grid was torn down before a late tick.
            let _ = ledger.try_update(|ledger| ledger.tick(&tick_id));
        });
        self.handles.update_value(|handles| {
            handles.insert(id.to_string(), handle);
        });
        self.ledger.update(|ledger| ledger.start(id));
    }

    /// Stop ticking; elapsed is retained. Dropping the handle cancels the
    /// underlying interval.
    pub fn stop(&self, id: &str) {
        self.handles.update_value(|handles| {
            handles.remove(id);
        });
        self.ledger.update(|ledger| ledger.stop(id));
    }

    pub fn toggle(&self, id: &str) {
        if self.handles.with_value(|handles| handles.contains_key(id)) {
            self.stop(id);
        } else {
            self.start(id);
        }
    }

    /// Stop and forget one card's timer. Runs from delete continuations that
    /// can land after the grid unmounted, hence the try_ variants.
    pub fn remove(&self, id: &str) {
        let _ = self.handles.try_update_value(|handles| {
            handles.remove(id);
        });
        let _ = self.ledger.try_update(|ledger| ledger.remove(id));
    }

    /// Cancel every interval and discard all elapsed counts. Used when the
    /// list is wholesale reloaded and card identity can change.
    pub fn reset(&self) {
        self.handles.update_value(|handles| handles.clear());
        self.ledger.set(TimerLedger::default());
    }

    /// Cancel every interval. Called from `on_cleanup`, where the signal and
    /// the handle map may already be disposed.
    pub fn clear_all(&self) {
        let _ = self.handles.try_update_value(|handles| handles.clear());
        let _ = self.ledger.try_update(|ledger| ledger.deactivate_all());
    }

    /// Reactive elapsed read for one card.
    pub fn elapsed(&self, id: &str) -> u64 {
        self.ledger.with(|ledger| ledger.elapsed(id))
    }

    /// Reactive active-flag read for one card.
    pub fn is_active(&self, id: &str) -> bool {
        self.ledger.with(|ledger| ledger.is_active(id))
    }
}

impl Default for CardTimers {
    fn default() -> Self {
        Self::new()
    }
}

/// Zero-padded `HH:MM:SS`; hours grow without bound.
pub fn format_elapsed(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_counts_only_while_active() {
        let mut ledger = TimerLedger::default();
        ledger.tick("a");
        assert_eq!(ledger.elapsed("a"), 0);

        ledger.start("a");
        ledger.tick("a");
        ledger.tick("a");
        assert_eq!(ledger.elapsed("a"), 2);

        ledger.stop("a");
        ledger.tick("a");
        assert_eq!(ledger.elapsed("a"), 2);
    }

    #[test]
    fn test_stop_retains_elapsed_for_resume() {
        let mut ledger = TimerLedger::default();
        ledger.start("a");
        ledger.tick("a");
        ledger.stop("a");
        assert!(!ledger.is_active("a"));
        assert_eq!(ledger.elapsed("a"), 1);

        ledger.start("a");
        ledger.tick("a");
        assert_eq!(ledger.elapsed("a"), 2);
    }

    #[test]
    fn test_timers_are_independent_per_id() {
        let mut ledger = TimerLedger::default();
        ledger.start("a");
        ledger.start("b");
        ledger.tick("a");
        ledger.tick("a");
        ledger.tick("b");
        ledger.stop("b");
        ledger.tick("a");
        ledger.tick("b");
        assert_eq!(ledger.elapsed("a"), 3);
        assert_eq!(ledger.elapsed("b"), 1);
        assert!(ledger.is_active("a"));
        assert!(!ledger.is_active("b"));
    }

    #[test]
    fn test_remove_discards_elapsed() {
        let mut ledger = TimerLedger::default();
        ledger.start("a");
        ledger.tick("a");
        ledger.remove("a");
        assert_eq!(ledger.elapsed("a"), 0);
        assert!(!ledger.is_active("a"));

        // A late tick after removal must not resurrect the entry.
        ledger.tick("a");
        assert_eq!(ledger.elapsed("a"), 0);
    }

    #[test]
    fn test_deactivate_all_stops_every_id() {
        let mut ledger = TimerLedger::default();
        ledger.start("a");
        ledger.start("b");
        ledger.deactivate_all();
        assert!(!ledger.is_active("a"));
        assert!(!ledger.is_active("b"));
        ledger.tick("a");
        ledger.tick("b");
        assert_eq!(ledger.elapsed("a"), 0);
        assert_eq!(ledger.elapsed("b"), 0);
    }

    #[test]
    fn test_start_is_idempotent_on_ledger() {
        let mut ledger = TimerLedger::default();
        ledger.start("a");
        ledger.tick("a");
        ledger.start("a");
        assert_eq!(ledger.elapsed("a"), 1);
        assert!(ledger.is_active("a"));
    }

    #[test]
    fn test_format_elapsed_zero_pads() {
        assert_eq!(format_elapsed(0), "00:00:00");
        assert_eq!(format_elapsed(7), "00:00:07");
        assert_eq!(format_elapsed(65), "00:01:05");
        assert_eq!(format_elapsed(3_600), "01:00:00");
        assert_eq!(format_elapsed(3_661), "01:01:01");
    }

    #[test]
    fn test_format_elapsed_hours_unbounded() {
        assert_eq!(format_elapsed(100 * 3_600), "100:00:00");
        assert_eq!(format_elapsed(100 * 3_600 + 59), "100:00:59");
    }
}
