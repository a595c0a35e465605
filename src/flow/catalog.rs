//! Built-in tour definition
//!
//! The tour is plain data: a fixed ordered table of steps. The controller
//! only ever sees the table's length.

use super::step::{Accent, Step};

/// The steps of the built-in tour, in order
pub static TOUR_STEPS: &[Step] = &[
    Step {
        ordinal: 0,
        title: "Welcome aboard",
        subtitle: "Your first run of gangway",
        description: "gangway greets new users with a short guided tour. \
            Five quick steps cover everything you need; finish or skip it \
            once and it stays out of your way.",
        icon: "*",
        accent: Accent::Sky,
    },
    Step {
        ordinal: 1,
        title: "Getting around",
        subtitle: "Navigate without leaving the keyboard",
        description: "Move forward with Right, Space, or Enter and back with \
            Left. Number keys jump straight to a step, and Esc skips the \
            rest of the tour.",
        icon: ">",
        accent: Accent::Mint,
    },
    Step {
        ordinal: 2,
        title: "Track your progress",
        subtitle: "Always know how far along you are",
        description: "The gauge below fills as you move through the tour and \
            the dots above the card mark every step. Progress follows your \
            position, so jumping around keeps it honest.",
        icon: "%",
        accent: Accent::Amber,
    },
    Step {
        ordinal: 3,
        title: "The tour journal",
        subtitle: "Every run leaves a trail",
        description: "Tour events are appended to a journal file in your \
            config directory. Inspect it any time with 'gangway journal' or \
            from the home screen.",
        icon: "#",
        accent: Accent::Coral,
    },
    Step {
        ordinal: 4,
        title: "Ready to go",
        subtitle: "Finish up and explore",
        description: "Press Enter one last time to finish. The completion \
            marker is saved so the tour does not show again; run 'gangway \
            reset' whenever you want to see it once more.",
        icon: "+",
        accent: Accent::Violet,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_match_positions() {
        for (position, step) in TOUR_STEPS.iter().enumerate() {
            assert_eq!(step.ordinal, position);
        }
    }

    #[test]
    fn test_steps_are_filled_in() {
        assert!(!TOUR_STEPS.is_empty());
        for step in TOUR_STEPS {
            assert!(!step.title.is_empty());
            assert!(!step.subtitle.is_empty());
            assert!(!step.description.is_empty());
            assert!(!step.icon.is_empty());
        }
    }
}
