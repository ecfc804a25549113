//! Staged reveal engine for terminal boot logs.
//!
//! Every page of the portfolio opens with a simulated boot sequence: a fixed
//! list of status lines revealed one at a time at a constant cadence, with a
//! short settle delay after the last line before the real content is shown.
//!
//! [`BootSequence`] is that engine. It is driven by a monotonic millisecond
//! clock supplied by the caller (`tick(now_ms)`), so the event loop's poll
//! cadence never changes *when* a line is due, only how promptly it is
//! observed. Every pending deadline is held in a single list and dropped
//! together on cancel or restart, so a sequence torn down mid-run can never
//! reveal another line or signal completion afterwards.

/// Delay between successive boot lines, in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 800;

/// Settle delay after the final line before completion, in milliseconds.
pub const DEFAULT_SETTLE_MS: u64 = 500;

/// A single pending deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Deadline {
    /// Reveal the message at this index.
    Reveal { at_ms: u64, index: usize },
    /// Signal completion.
    Settle { at_ms: u64 },
}

impl Deadline {
    fn at_ms(self) -> u64 {
        match self {
            Deadline::Reveal { at_ms, .. } | Deadline::Settle { at_ms } => at_ms,
        }
    }
}

/// Lifecycle of a [`BootSequence`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// Constructed but not started.
    #[default]
    Idle,
    /// Deadlines are pending.
    Running,
    /// The settle deadline fired; terminal.
    Completed,
    /// Cancelled before completion; terminal.
    Cancelled,
}

/// Reveals a fixed list of lines one at a time, then signals completion once.
///
/// The revealed lines are always a prefix of the configured messages, in
/// order: line `k` is due at `start + k * interval_ms`, so the first line
/// appears immediately on the first tick after start. When the last line is
/// revealed a settle deadline of `settle_ms` is scheduled; the tick that
/// fires it returns `true` exactly once.
///
/// An empty message list is degenerate: nothing is ever revealed and the
/// sequence completes after the settle delay alone.
#[derive(Debug, Clone)]
pub struct BootSequence {
    messages: Vec<String>,
    interval_ms: u64,
    settle_ms: u64,
    /// Every outstanding deadline, in firing order. Cancellation clears the
    /// whole list; dropping only the most recently scheduled entry would let
    /// earlier deadlines fire after teardown.
    pending: Vec<Deadline>,
    revealed: usize,
    phase: Phase,
}

impl BootSequence {
    /// Create an idle sequence. Nothing is scheduled until [`start`].
    ///
    /// [`start`]: BootSequence::start
    pub fn new(messages: Vec<String>, interval_ms: u64, settle_ms: u64) -> Self {
        Self {
            messages,
            interval_ms,
            settle_ms,
            pending: Vec::new(),
            revealed: 0,
            phase: Phase::Idle,
        }
    }

    /// Create an idle sequence with the observed default cadence.
    pub fn with_defaults(messages: Vec<String>) -> Self {
        Self::new(messages, DEFAULT_INTERVAL_MS, DEFAULT_SETTLE_MS)
    }

    /// Start the sequence at the given clock reading.
    ///
    /// Schedules one reveal deadline per message at `now + k * interval_ms`.
    /// Starting an already started sequence restarts it from empty.
    pub fn start(&mut self, now_ms: u64) {
        self.pending.clear();
        self.revealed = 0;
        self.phase = Phase::Running;

        if self.messages.is_empty() {
            self.pending.push(Deadline::Settle {
                at_ms: now_ms + self.settle_ms,
            });
            return;
        }

        for index in 0..self.messages.len() {
            self.pending.push(Deadline::Reveal {
                at_ms: now_ms + index as u64 * self.interval_ms,
                index,
            });
        }
    }

    /// Replace the message list and restart from empty.
    ///
    /// No deadline from the prior sequence survives.
    pub fn restart(&mut self, messages: Vec<String>, now_ms: u64) {
        self.messages = messages;
        self.start(now_ms);
    }

    /// Cancel the sequence, dropping every pending deadline.
    ///
    /// After cancellation no further line is revealed and completion is never
    /// signalled. Cancelling a completed or cancelled sequence is a no-op.
    pub fn cancel(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Cancelled;
        }
        self.pending.clear();
    }

    /// Fire every deadline due at `now_ms`, in order.
    ///
    /// Returns `true` on the single tick that completes the sequence, `false`
    /// on every other call, including all calls after completion or
    /// cancellation.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.phase != Phase::Running {
            return false;
        }

        let mut completed = false;
        while let Some(&deadline) = self.pending.first() {
            if deadline.at_ms() > now_ms {
                break;
            }
            self.pending.remove(0);
            match deadline {
                Deadline::Reveal { at_ms, index } => {
                    debug_assert_eq!(index, self.revealed);
                    self.revealed = index + 1;
                    // The settle deadline is scheduled only once the final
                    // line has actually been revealed.
                    if self.revealed == self.messages.len() {
                        self.pending.push(Deadline::Settle {
                            at_ms: at_ms + self.settle_ms,
                        });
                    }
                }
                Deadline::Settle { .. } => {
                    self.phase = Phase::Completed;
                    completed = true;
                }
            }
        }
        completed
    }

    /// The lines revealed so far, always a prefix of the message list.
    pub fn revealed(&self) -> &[String] {
        &self.messages[..self.revealed]
    }

    /// Whether the settle deadline has fired.
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Completed
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn abc() -> BootSequence {
        let mut seq = BootSequence::new(lines(&["A", "B", "C"]), 800, 500);
        seq.start(0);
        seq
    }

    #[test]
    fn reveals_one_line_per_interval() {
        let mut seq = abc();
        // k-th line is revealed for k*d <= t < (k+1)*d.
        for (t, expected) in [(0, 1), (799, 1), (800, 2), (1599, 2), (1600, 3)] {
            seq.tick(t);
            assert_eq!(seq.revealed().len(), expected, "at t={t}");
        }
    }

    #[test]
    fn first_line_appears_immediately() {
        let mut seq = abc();
        seq.tick(0);
        assert_eq!(seq.revealed(), &["A".to_string()]);
    }

    #[test]
    fn revealed_is_a_growing_prefix() {
        let mut seq = abc();
        let mut last_len = 0;
        for t in (0..2200).step_by(100) {
            seq.tick(t);
            let revealed = seq.revealed();
            assert!(revealed.len() >= last_len);
            assert_eq!(revealed, &lines(&["A", "B", "C"])[..revealed.len()]);
            last_len = revealed.len();
        }
    }

    #[test]
    fn completes_once_after_settle_delay() {
        let mut seq = abc();
        assert!(!seq.tick(1600));
        assert!(!seq.tick(2099));
        assert!(!seq.is_complete());
        // Completion fires at (N-1)*interval + settle = 2100.
        assert!(seq.tick(2100));
        assert!(seq.is_complete());
        // Never signalled a second time.
        assert!(!seq.tick(2101));
        assert!(!seq.tick(10_000));
    }

    #[test]
    fn late_ticks_fire_all_due_deadlines_in_order() {
        // A single tick long after every deadline reveals everything and
        // completes in the same call.
        let mut seq = abc();
        assert!(seq.tick(60_000));
        assert_eq!(seq.revealed().len(), 3);
        assert!(seq.is_complete());
    }

    #[test]
    fn cancel_drops_every_pending_deadline() {
        let mut seq = abc();
        seq.tick(800);
        assert_eq!(seq.revealed().len(), 2);
        seq.cancel();
        assert_eq!(seq.phase(), Phase::Cancelled);
        // No further reveals and no completion, ever.
        assert!(!seq.tick(1600));
        assert!(!seq.tick(2100));
        assert_eq!(seq.revealed().len(), 2);
        assert!(!seq.is_complete());
    }

    #[test]
    fn cancel_between_reveals_is_safe() {
        let mut seq = abc();
        seq.tick(100);
        seq.cancel();
        assert!(!seq.tick(800));
        assert_eq!(seq.revealed().len(), 1);
    }

    #[test]
    fn cancel_after_completion_stays_completed() {
        let mut seq = abc();
        seq.tick(2100);
        seq.cancel();
        assert_eq!(seq.phase(), Phase::Completed);
    }

    #[test]
    fn restart_discards_prior_schedule() {
        let mut seq = abc();
        seq.tick(800);
        seq.restart(lines(&["X"]), 1000);
        assert_eq!(seq.revealed().len(), 0);
        // Only the new schedule fires: "C" from the old run never appears.
        seq.tick(1000);
        assert_eq!(seq.revealed(), &["X".to_string()]);
        assert!(seq.tick(1500));
        assert!(seq.is_complete());
    }

    #[test]
    fn identical_sequences_reveal_identically() {
        let mut a = abc();
        let mut b = abc();
        for t in (0..2500).step_by(37) {
            let fa = a.tick(t);
            let fb = b.tick(t);
            assert_eq!(fa, fb, "at t={t}");
            assert_eq!(a.revealed(), b.revealed(), "at t={t}");
        }
    }

    #[test]
    fn empty_message_list_completes_after_settle_only() {
        let mut seq = BootSequence::new(Vec::new(), 800, 500);
        seq.start(0);
        assert!(!seq.tick(499));
        assert!(seq.tick(500));
        assert!(seq.revealed().is_empty());
        assert!(seq.is_complete());
    }

    #[test]
    fn zero_settle_completes_with_last_reveal() {
        let mut seq = BootSequence::new(lines(&["A", "B"]), 100, 0);
        seq.start(0);
        assert!(!seq.tick(0));
        assert!(seq.tick(100));
        assert_eq!(seq.revealed().len(), 2);
    }

    #[test]
    fn idle_sequence_does_nothing_until_started() {
        let mut seq = BootSequence::new(lines(&["A"]), 100, 100);
        assert!(!seq.tick(1_000));
        assert!(seq.revealed().is_empty());
        assert_eq!(seq.phase(), Phase::Idle);
    }

    #[test]
    fn start_offset_shifts_the_schedule() {
        let mut seq = BootSequence::new(lines(&["A", "B"]), 800, 500);
        seq.start(5000);
        seq.tick(4999);
        assert!(seq.revealed().is_empty());
        seq.tick(5000);
        assert_eq!(seq.revealed().len(), 1);
        assert!(seq.tick(5800 + 500));
    }
}
