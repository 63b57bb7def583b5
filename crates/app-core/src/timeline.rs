use smallvec::SmallVec;

/// Deferred steps of the intro and handoff.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Stop auto-rotation and start the camera move to the target pose.
    BeginZoom,
    /// Ask the view coordinator to hand off to the 2D map.
    RequestHandoff,
    /// Resize the map surface and make it interactive.
    SettleSurface,
    /// Final globe auto-rotate cleanup after the cross-fade.
    CleanupGlobe,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scheduled {
    pub deadline_ms: u64,
    pub action: Action,
    order: u64,
}

/// Fire-once `(deadline, action)` list against a single logical clock.
///
/// Due entries come out in deadline order; equal deadlines keep the order in
/// which they were scheduled. Entries cannot be cancelled.
#[derive(Debug, Default)]
pub struct Timeline {
    next_order: u64,
    pending: SmallVec<[Scheduled; 8]>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, deadline_ms: u64, action: Action) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        self.pending.push(Scheduled {
            deadline_ms,
            action,
            order,
        });
        log::debug!("[timeline] scheduled {:?} at {}ms", action, deadline_ms);
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.iter().map(|s| s.deadline_ms).min()
    }

    /// Remove and return the earliest entry due at or before `now_ms`.
    ///
    /// Popping one at a time lets a handler schedule follow-ups that are
    /// themselves already due.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<Scheduled> {
        let (i, _) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, s)| s.deadline_ms <= now_ms)
            .min_by_key(|(_, s)| (s.deadline_ms, s.order))?;
        Some(self.pending.remove(i))
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, Timeline};

    #[test]
    fn pops_in_deadline_order() {
        let mut tl = Timeline::new();
        tl.schedule(5000, Action::RequestHandoff);
        tl.schedule(2000, Action::BeginZoom);

        assert_eq!(tl.next_deadline(), Some(2000));
        assert!(tl.pop_due(1999).is_none());
        assert_eq!(tl.pop_due(6000).map(|s| s.action), Some(Action::BeginZoom));
        assert_eq!(
            tl.pop_due(6000).map(|s| s.action),
            Some(Action::RequestHandoff)
        );
        assert!(tl.is_empty());
    }

    #[test]
    fn equal_deadlines_keep_insertion_order() {
        let mut tl = Timeline::new();
        tl.schedule(100, Action::CleanupGlobe);
        tl.schedule(100, Action::SettleSurface);

        assert_eq!(tl.pop_due(100).map(|s| s.action), Some(Action::CleanupGlobe));
        assert_eq!(tl.pop_due(100).map(|s| s.action), Some(Action::SettleSurface));
    }

    #[test]
    fn entries_fire_once() {
        let mut tl = Timeline::new();
        tl.schedule(10, Action::BeginZoom);
        assert!(tl.pop_due(10).is_some());
        assert!(tl.pop_due(10_000).is_none());
        assert_eq!(tl.next_deadline(), None);
    }
}
