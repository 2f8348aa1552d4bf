use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPhase {
    Idle,
    Scanning,
    Complete,
}

/// Simulated barcode scan. Each start gets a new session id so that timer
/// events from an abandoned scan can be told apart.
#[derive(Debug)]
pub struct ScanSession {
    phase: ScanPhase,
    session: u64,
    started: Option<Instant>,
}

impl Default for ScanSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanSession {
    pub fn new() -> Self {
        Self {
            phase: ScanPhase::Idle,
            session: 0,
            started: None,
        }
    }

    pub fn phase(&self) -> ScanPhase {
        self.phase
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn started(&self) -> Option<Instant> {
        self.started
    }

    /// Begins scanning. `None` while a scan is already running or finished.
    pub fn start(&mut self, now: Instant) -> Option<u64> {
        if self.phase != ScanPhase::Idle {
            return None;
        }
        self.session += 1;
        self.phase = ScanPhase::Scanning;
        self.started = Some(now);
        Some(self.session)
    }

    pub fn complete(&mut self, session: u64) -> bool {
        if session != self.session || self.phase != ScanPhase::Scanning {
            return false;
        }
        self.phase = ScanPhase::Complete;
        true
    }

    /// True when a redirect for `session` should still happen.
    pub fn ready_to_redirect(&self, session: u64) -> bool {
        session == self.session && self.phase == ScanPhase::Complete
    }

    pub fn reset(&mut self) {
        self.session += 1;
        self.phase = ScanPhase::Idle;
        self.started = None;
    }
}

/// Scan line offset in `[0, 1]`: down over one sweep, back up over the next.
pub fn scan_line_position(elapsed: Duration, sweep: Duration) -> f64 {
    let sweep_ms = sweep.as_millis().max(1) as f64;
    let cycle = (elapsed.as_millis() as f64) % (2.0 * sweep_ms);
    if cycle <= sweep_ms {
        cycle / sweep_ms
    } else {
        2.0 - cycle / sweep_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_runs_once_per_session() {
        let mut scan = ScanSession::new();
        let now = Instant::now();
        let id = scan.start(now).unwrap();

        assert_eq!(scan.phase(), ScanPhase::Scanning);
        assert_eq!(scan.start(now), None);
        assert!(scan.complete(id));
        assert!(scan.ready_to_redirect(id));
        assert_eq!(scan.start(now), None);
    }

    #[test]
    fn stale_session_events_are_ignored() {
        let mut scan = ScanSession::new();
        let old = scan.start(Instant::now()).unwrap();
        scan.reset();

        assert!(!scan.complete(old));
        let new = scan.start(Instant::now()).unwrap();
        assert_ne!(old, new);
        assert!(!scan.ready_to_redirect(old));
    }

    #[test]
    fn scan_line_sweeps_down_and_back() {
        let sweep = Duration::from_millis(2000);
        assert_eq!(scan_line_position(Duration::ZERO, sweep), 0.0);
        assert_eq!(scan_line_position(Duration::from_millis(1000), sweep), 0.5);
        assert_eq!(scan_line_position(Duration::from_millis(2000), sweep), 1.0);
        assert_eq!(scan_line_position(Duration::from_millis(3000), sweep), 0.5);
        assert_eq!(scan_line_position(Duration::from_millis(4000), sweep), 0.0);
    }
}
