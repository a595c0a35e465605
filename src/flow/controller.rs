//! Guided flow controller
//!
//! Owns the current step index and decides how navigation events move it.
//! The whole transition table lives in `apply`; callers act on the returned
//! `Transition` instead of the controller reaching into the terminal or the
//! disk itself.

/// Navigation events the presentation layer can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// Move to the next step, or finish on the last one
    Advance,
    /// Move to the previous step
    Retreat,
    /// Jump directly to a step by index
    JumpTo(usize),
    /// Leave the tour early
    Skip,
}

/// How the tour ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The user advanced through the final step
    Finished,
    /// The user skipped out early
    Skipped,
}

/// Outcome of applying a navigation event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The index moved; carries the new index
    Navigated(usize),
    /// The flow ended; the controller produces this exactly once
    Completed(Completion),
    /// The event had no effect (guard failed, or the flow already ended)
    Ignored,
}

/// State machine for the guided tour
///
/// Holds the zero-based index of the current step. The index always stays
/// within `0..step_count`: advancing on the last step means "finish", never
/// "go past the end", and out-of-range jumps are ignored rather than
/// clamped.
#[derive(Debug)]
pub struct FlowController {
    index: usize,
    step_count: usize,
    completed: bool,
}

impl FlowController {
    /// Create a controller positioned at the first step
    ///
    /// # Panics
    ///
    /// Panics if `step_count` is zero; a tour needs at least one step.
    pub fn new(step_count: usize) -> Self {
        assert!(step_count > 0, "a tour needs at least one step");
        Self {
            index: 0,
            step_count,
            completed: false,
        }
    }

    /// Zero-based index of the current step
    pub fn index(&self) -> usize {
        self.index
    }

    /// Total number of steps, fixed at construction
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Whether the flow has finished or been skipped
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Whether the current step is the first
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    /// Whether the current step is the last
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.step_count
    }

    /// Fraction of the tour covered: 0.0 at the first step, 1.0 at the last
    ///
    /// A single-step tour reports 1.0; its only step is the last one.
    pub fn progress(&self) -> f64 {
        if self.step_count <= 1 {
            1.0
        } else {
            self.index as f64 / (self.step_count - 1) as f64
        }
    }

    /// Apply a navigation event and report what happened
    ///
    /// This is the transition table. Guards keep the index in range: retreat
    /// at the first step and out-of-range jumps are ignored, not errors, and
    /// once the flow has ended every further event is ignored.
    pub fn apply(&mut self, event: NavEvent) -> Transition {
        if self.completed {
            return Transition::Ignored;
        }

        match event {
            NavEvent::Advance if self.is_last() => self.complete(Completion::Finished),
            NavEvent::Advance => {
                self.index += 1;
                Transition::Navigated(self.index)
            }
            NavEvent::Retreat if self.index > 0 => {
                self.index -= 1;
                Transition::Navigated(self.index)
            }
            NavEvent::Retreat => Transition::Ignored,
            NavEvent::JumpTo(target) if target < self.step_count => {
                self.index = target;
                Transition::Navigated(self.index)
            }
            NavEvent::JumpTo(_) => Transition::Ignored,
            NavEvent::Skip => self.complete(Completion::Skipped),
        }
    }

    /// Move to the next step, or finish on the last one
    pub fn advance(&mut self) -> Transition {
        self.apply(NavEvent::Advance)
    }

    /// Move to the previous step; a no-op at the first
    pub fn retreat(&mut self) -> Transition {
        self.apply(NavEvent::Retreat)
    }

    /// Jump directly to a step; silently ignored when out of range
    pub fn jump_to(&mut self, target: usize) -> Transition {
        self.apply(NavEvent::JumpTo(target))
    }

    /// Leave the tour early from any step
    pub fn skip(&mut self) -> Transition {
        self.apply(NavEvent::Skip)
    }

    fn complete(&mut self, how: Completion) -> Transition {
        self.completed = true;
        Transition::Completed(how)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_first_step() {
        let controller = FlowController::new(5);
        assert_eq!(controller.index(), 0);
        assert!(controller.is_first());
        assert!(!controller.is_last());
        assert!(!controller.is_completed());
    }

    #[test]
    fn test_advance_walks_to_completion() {
        // Four steps: three navigations, then the finish
        let mut controller = FlowController::new(4);

        assert_eq!(controller.advance(), Transition::Navigated(1));
        assert_eq!(controller.advance(), Transition::Navigated(2));
        assert_eq!(controller.advance(), Transition::Navigated(3));
        assert!(controller.is_last());
        assert_eq!(
            controller.advance(),
            Transition::Completed(Completion::Finished)
        );
        assert!(controller.is_completed());
    }

    #[test]
    fn test_retreat_at_first_step_is_ignored() {
        let mut controller = FlowController::new(5);

        assert_eq!(controller.retreat(), Transition::Ignored);
        assert_eq!(controller.index(), 0);
    }

    #[test]
    fn test_retreat_steps_back() {
        let mut controller = FlowController::new(5);
        controller.advance();
        controller.advance();

        assert_eq!(controller.retreat(), Transition::Navigated(1));
        assert_eq!(controller.retreat(), Transition::Navigated(0));
        assert_eq!(controller.retreat(), Transition::Ignored);
    }

    #[test]
    fn test_jump_to_any_valid_index() {
        let mut controller = FlowController::new(5);

        for target in 0..5 {
            assert_eq!(controller.jump_to(target), Transition::Navigated(target));
            assert_eq!(controller.index(), target);
        }
    }

    #[test]
    fn test_out_of_range_jump_is_ignored() {
        let mut controller = FlowController::new(5);
        controller.advance();

        assert_eq!(controller.jump_to(5), Transition::Ignored);
        assert_eq!(controller.jump_to(7), Transition::Ignored);
        assert_eq!(controller.jump_to(usize::MAX), Transition::Ignored);
        // State untouched by the bad requests
        assert_eq!(controller.index(), 1);
        assert!(!controller.is_completed());

        // A valid jump afterwards still works
        assert_eq!(controller.jump_to(4), Transition::Navigated(4));
    }

    #[test]
    fn test_skip_completes_from_any_step() {
        let mut controller = FlowController::new(5);
        controller.advance();
        controller.advance();

        assert_eq!(
            controller.skip(),
            Transition::Completed(Completion::Skipped)
        );
        assert!(controller.is_completed());
    }

    #[test]
    fn test_skip_at_first_step() {
        let mut controller = FlowController::new(4);

        assert_eq!(
            controller.skip(),
            Transition::Completed(Completion::Skipped)
        );
    }

    #[test]
    fn test_events_after_completion_are_ignored() {
        let mut controller = FlowController::new(4);
        controller.skip();

        assert_eq!(controller.advance(), Transition::Ignored);
        assert_eq!(controller.retreat(), Transition::Ignored);
        assert_eq!(controller.jump_to(2), Transition::Ignored);
        assert_eq!(controller.skip(), Transition::Ignored);
        assert_eq!(controller.index(), 0);
    }

    #[test]
    fn test_completion_is_reported_once() {
        let mut controller = FlowController::new(3);
        controller.jump_to(2);

        let mut completions = 0;
        for _ in 0..5 {
            if let Transition::Completed(_) = controller.advance() {
                completions += 1;
            }
        }
        assert_eq!(completions, 1);
    }

    #[test]
    fn test_progress_endpoints() {
        let mut controller = FlowController::new(5);
        assert_eq!(controller.progress(), 0.0);

        controller.jump_to(4);
        assert_eq!(controller.progress(), 1.0);
    }

    #[test]
    fn test_progress_tracks_position() {
        let mut controller = FlowController::new(5);
        controller.advance();
        assert_eq!(controller.progress(), 0.25);

        controller.jump_to(3);
        assert_eq!(controller.progress(), 0.75);
    }

    #[test]
    fn test_progress_never_decreases_under_advance() {
        let mut controller = FlowController::new(5);
        let mut last = controller.progress();

        while !controller.is_completed() {
            controller.advance();
            let now = controller.progress();
            assert!(now >= last);
            last = now;
        }
    }

    #[test]
    fn test_single_step_tour() {
        let mut controller = FlowController::new(1);
        assert!(controller.is_first());
        assert!(controller.is_last());
        assert_eq!(controller.progress(), 1.0);

        assert_eq!(
            controller.advance(),
            Transition::Completed(Completion::Finished)
        );
    }

    #[test]
    #[should_panic(expected = "at least one step")]
    fn test_zero_steps_panics() {
        FlowController::new(0);
    }
}
