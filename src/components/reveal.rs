//! One-shot reveal transition shared by the section observer wiring.

/// Intersection ratio a section must reach before it is shown.
pub const REVEAL_THRESHOLD: f64 = 0.2;

/// How far outside the viewport lazy images start fetching.
pub const LAZY_ROOT_MARGIN: &str = "252px";

/// A section's reveal lifecycle: hidden until its first qualifying
/// intersection, shown forever after.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    Hidden,
    Shown,
}

impl Reveal {
    /// Advances the state machine on an intersection change. Returns `true`
    /// exactly once, on the Hidden → Shown transition; the caller must then
    /// unhide the section and stop observing it. Every later call is a no-op.
    pub fn on_intersection(&mut self, is_intersecting: bool) -> bool {
        match (*self, is_intersecting) {
            (Reveal::Hidden, true) => {
                *self = Reveal::Shown;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_section_reveals_on_first_intersection() {
        let mut state = Reveal::Hidden;
        assert!(state.on_intersection(true));
        assert_eq!(state, Reveal::Shown);
    }

    #[test]
    fn non_intersecting_events_do_not_reveal() {
        let mut state = Reveal::Hidden;
        assert!(!state.on_intersection(false));
        assert_eq!(state, Reveal::Hidden);
    }

    #[test]
    fn reveal_fires_at_most_once() {
        let mut state = Reveal::Hidden;
        assert!(state.on_intersection(true));
        // Further intersection events, in or out, change nothing.
        assert!(!state.on_intersection(true));
        assert!(!state.on_intersection(false));
        assert!(!state.on_intersection(true));
        assert_eq!(state, Reveal::Shown);
    }
}
