//! Focus countdown and break interstitial.
//!
//! Both timers are driven by explicit one-second ticks. Neither owns a clock:
//! whoever schedules the ticks decides when they are active.

/// Default length of a focus session (30 minutes).
pub const FOCUS_DURATION_SECS: u32 = 30 * 60;
/// Default length of a break (5 minutes).
pub const BREAK_DURATION_SECS: u32 = 5 * 60;

/// Format seconds as `m:ss`.
#[must_use]
pub fn format_clock(total_secs: u32) -> String {
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

//
// ─── FOCUS TIMER ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTick {
    Counted { elapsed: u32 },
    BreakRequested,
    /// A break is in progress; the tick was dropped.
    Suspended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusTimer {
    threshold: u32,
    elapsed: u32,
    break_active: bool,
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new(FOCUS_DURATION_SECS)
    }
}

impl FocusTimer {
    /// A zero threshold is treated as one second.
    #[must_use]
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold: threshold.max(1),
            elapsed: 0,
            break_active: false,
        }
    }

    pub fn tick(&mut self) -> FocusTick {
        if self.break_active {
            return FocusTick::Suspended;
        }
        if self.elapsed + 1 >= self.threshold {
            self.elapsed = 0;
            self.break_active = true;
            return FocusTick::BreakRequested;
        }
        self.elapsed += 1;
        FocusTick::Counted {
            elapsed: self.elapsed,
        }
    }

    pub fn end_break(&mut self) {
        self.break_active = false;
    }

    pub fn reset(&mut self) {
        self.elapsed = 0;
        self.break_active = false;
    }

    #[must_use]
    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    #[must_use]
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    #[must_use]
    pub fn break_active(&self) -> bool {
        self.break_active
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.threshold - self.elapsed
    }

    #[must_use]
    pub fn display(&self) -> String {
        format_clock(self.remaining())
    }
}

//
// ─── BREAK COUNTDOWN ───────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakCountdown {
    remaining: u32,
    done: bool,
}

impl Default for BreakCountdown {
    fn default() -> Self {
        Self::new(BREAK_DURATION_SECS)
    }
}

impl BreakCountdown {
    #[must_use]
    pub fn new(duration: u32) -> Self {
        Self {
            remaining: duration,
            done: duration == 0,
        }
    }

    /// Count down one second. Returns `true` on the tick that reaches zero.
    pub fn tick(&mut self) -> bool {
        if self.done {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.done = true;
            return true;
        }
        false
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn done(&self) -> bool {
        self.done
    }

    #[must_use]
    pub fn display(&self) -> String {
        format_clock(self.remaining)
    }

    #[must_use]
    pub fn dismiss_label(&self) -> &'static str {
        if self.done {
            "Resume Learning"
        } else {
            "Skip Break"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_pads_seconds() {
        assert_eq!(format_clock(1800), "30:00");
        assert_eq!(format_clock(65), "1:05");
        assert_eq!(format_clock(9), "0:09");
        assert_eq!(format_clock(0), "0:00");
    }

    #[test]
    fn focus_requests_break_once_at_threshold() {
        let mut timer = FocusTimer::default();
        let mut breaks = 0;
        for _ in 0..FOCUS_DURATION_SECS {
            if timer.tick() == FocusTick::BreakRequested {
                breaks += 1;
            }
        }
        assert_eq!(breaks, 1);
        assert_eq!(timer.elapsed(), 0);
        assert!(timer.break_active());
        assert_eq!(timer.tick(), FocusTick::Suspended);
    }

    #[test]
    fn display_counts_down() {
        let mut timer = FocusTimer::default();
        assert_eq!(timer.display(), "30:00");
        timer.tick();
        assert_eq!(timer.display(), "29:59");
    }

    #[test]
    fn end_break_resumes_from_zero() {
        let mut timer = FocusTimer::new(2);
        assert_eq!(timer.tick(), FocusTick::Counted { elapsed: 1 });
        assert_eq!(timer.tick(), FocusTick::BreakRequested);
        timer.end_break();
        assert_eq!(timer.tick(), FocusTick::Counted { elapsed: 1 });
    }

    #[test]
    fn break_countdown_stops_at_zero() {
        let mut countdown = BreakCountdown::new(3);
        assert_eq!(countdown.dismiss_label(), "Skip Break");
        assert!(!countdown.tick());
        assert!(!countdown.tick());
        assert!(countdown.tick());
        assert!(countdown.done());
        assert!(!countdown.tick());
        assert_eq!(countdown.remaining(), 0);
        assert_eq!(countdown.dismiss_label(), "Resume Learning");
        assert_eq!(countdown.display(), "0:00");
    }
}
