use std::sync::atomic::{AtomicU64, Ordering};

/// Tick interval for indicator slide animations, in milliseconds.
///
/// Consumers subscribe to `iced::time::every` at this interval while any
/// [`IndicatorMotion`] reports `!is_settled()`, feeding each tick into
/// [`IndicatorMotion::advance`].
pub const INDICATOR_TICK_MS: u64 = 16;

/// Number of ticks a full indicator slide takes.
const INDICATOR_SLIDE_TICKS: f32 = 12.0;

static NEXT_SCOPE_ID: AtomicU64 = AtomicU64::new(0);

/// Opaque identifier correlating one section's indicator across renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(u64);

/// Per-mount scope handle for a sidebar section.
///
/// Create one scope per mounted section and keep it in application state for
/// as long as the section is alive: the id is stable across re-renders of
/// that mount and distinct from every other live scope. The handle is
/// deliberately not `Clone` so two sections can never share an id.
#[derive(Debug, PartialEq, Eq)]
pub struct SectionScope {
    id: ScopeId,
}

impl SectionScope {
    /// Allocate a fresh scope with a process-unique id.
    pub fn new() -> Self {
        Self {
            id: ScopeId(NEXT_SCOPE_ID.fetch_add(1, Ordering::Relaxed)),
        }
    }

    /// Stable identifier for this scope.
    pub fn id(&self) -> ScopeId {
        self.id
    }
}

impl Default for SectionScope {
    fn default() -> Self {
        Self::new()
    }
}

/// Tick-driven slide of the current-item indicator between row slots.
///
/// Positions are measured in row units (`0.0` is the first item of the
/// section). Retargeting mid-flight restarts the slide from the interpolated
/// position, so moving the current item while an earlier slide is still
/// running produces one continuous motion rather than a jump.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorMotion {
    from: f32,
    to: f32,
    progress: f32,
}

impl IndicatorMotion {
    /// A motion already resting at `slot`.
    pub fn settled_at(slot: f32) -> Self {
        Self {
            from: slot,
            to: slot,
            progress: 1.0,
        }
    }

    /// Place the indicator at `slot` without animating.
    pub fn jump_to(&mut self, slot: f32) {
        self.from = slot;
        self.to = slot;
        self.progress = 1.0;
    }

    /// Slide the indicator towards `slot` from its current position.
    pub fn go_to(&mut self, slot: f32) {
        if self.to == slot {
            return;
        }
        self.from = self.offset();
        self.to = slot;
        self.progress = 0.0;
    }

    /// Advance the slide by one tick, saturating at the target.
    pub fn advance(&mut self) {
        self.progress = (self.progress + 1.0 / INDICATOR_SLIDE_TICKS).min(1.0);
    }

    /// Current interpolated position in row units.
    pub fn offset(&self) -> f32 {
        self.from + (self.to - self.from) * ease_out_cubic(self.progress)
    }

    /// Row slot the motion is heading towards.
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Whether the slide has finished.
    pub fn is_settled(&self) -> bool {
        self.progress >= 1.0
    }
}

impl Default for IndicatorMotion {
    fn default() -> Self {
        Self::settled_at(0.0)
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inverted = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inverted * inverted * inverted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_scopes_have_distinct_ids() {
        let first = SectionScope::new();
        let second = SectionScope::new();
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn section_scope_id_is_stable_across_reads() {
        let scope = SectionScope::new();
        let initial = scope.id();
        for _ in 0..3 {
            assert_eq!(scope.id(), initial);
        }
    }

    #[test]
    fn settled_motion_rests_at_its_slot() {
        let motion = IndicatorMotion::settled_at(2.0);
        assert_eq!(motion.offset(), 2.0);
        assert_eq!(motion.target(), 2.0);
        assert!(motion.is_settled());
    }

    #[test]
    fn jump_places_immediately_without_animation() {
        let mut motion = IndicatorMotion::settled_at(0.0);
        motion.jump_to(3.0);
        assert_eq!(motion.offset(), 3.0);
        assert!(motion.is_settled());
    }

    #[test]
    fn go_to_starts_an_unsettled_slide_from_the_old_slot() {
        let mut motion = IndicatorMotion::settled_at(0.0);
        motion.go_to(2.0);
        assert!(!motion.is_settled());
        assert_eq!(motion.offset(), 0.0);
        assert_eq!(motion.target(), 2.0);
    }

    #[test]
    fn go_to_same_target_is_a_no_op() {
        let mut motion = IndicatorMotion::settled_at(1.0);
        motion.go_to(1.0);
        assert!(motion.is_settled());
        assert_eq!(motion.offset(), 1.0);
    }

    #[test]
    fn advance_moves_towards_the_target_and_saturates() {
        let mut motion = IndicatorMotion::settled_at(0.0);
        motion.go_to(1.0);

        let mut previous = motion.offset();
        for _ in 0..32 {
            motion.advance();
            let current = motion.offset();
            assert!(current >= previous);
            assert!(current <= 1.0);
            previous = current;
        }

        assert!(motion.is_settled());
        assert_eq!(motion.offset(), 1.0);
    }

    #[test]
    fn retarget_mid_flight_continues_from_the_interpolated_position() {
        let mut motion = IndicatorMotion::settled_at(0.0);
        motion.go_to(4.0);
        for _ in 0..4 {
            motion.advance();
        }

        let midway = motion.offset();
        assert!(midway > 0.0 && midway < 4.0);

        motion.go_to(0.0);
        assert_eq!(motion.offset(), midway);
        assert_eq!(motion.target(), 0.0);
        assert!(!motion.is_settled());
    }

    #[test]
    fn ease_out_cubic_is_bounded_and_monotonic() {
        let mut previous = ease_out_cubic(0.0);
        assert_eq!(previous, 0.0);
        for step in 1..=10 {
            let value = ease_out_cubic(step as f32 / 10.0);
            assert!(value >= previous);
            assert!(value <= 1.0);
            previous = value;
        }
        assert_eq!(ease_out_cubic(1.0), 1.0);
    }
}
