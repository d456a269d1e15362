use std::io::{self, Write};

/// Named events emitted by the core on state transitions. The sink decides
/// how (or whether) to render them.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FeedbackEvent {
    /// A printable character was typed into the console.
    Type,
    /// A console line was submitted.
    Command,
    /// The snake ate food.
    Eat,
    /// The snake ran into itself.
    Collision,
    /// The target score was reached.
    Win,
    /// An accepted direction change.
    Move,
    /// A screen transition fired.
    Transition,
}

/// Receiver for feedback events. Implementations may be a no-op.
pub trait Feedback {
    fn event(&self, event: FeedbackEvent);
}

/// Feedback sink that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullFeedback;

impl Feedback for NullFeedback {
    fn event(&self, _event: FeedbackEvent) {}
}

/// Feedback sink that rings the terminal bell for salient events and stays
/// quiet for the high-frequency ones (typing, moving).
#[derive(Debug, Default, Clone, Copy)]
pub struct BellFeedback;

impl Feedback for BellFeedback {
    fn event(&self, event: FeedbackEvent) {
        match event {
            FeedbackEvent::Eat
            | FeedbackEvent::Collision
            | FeedbackEvent::Win
            | FeedbackEvent::Transition => {
                let mut stdout = io::stdout();
                let _ = stdout.write_all(b"\x07");
                let _ = stdout.flush();
            }
            FeedbackEvent::Type | FeedbackEvent::Command | FeedbackEvent::Move => {}
        }
    }
}

/// Test support: a sink that records events for assertions.
pub mod testing {
    use std::cell::RefCell;

    use super::{Feedback, FeedbackEvent};

    /// Records every event for assertions in tests.
    #[derive(Debug, Default)]
    pub struct RecordingFeedback {
        events: RefCell<Vec<FeedbackEvent>>,
    }

    impl RecordingFeedback {
        #[must_use]
        pub fn events(&self) -> Vec<FeedbackEvent> {
            self.events.borrow().clone()
        }

        #[must_use]
        pub fn count(&self, event: FeedbackEvent) -> usize {
            self.events.borrow().iter().filter(|e| **e == event).count()
        }
    }

    impl Feedback for RecordingFeedback {
        fn event(&self, event: FeedbackEvent) {
            self.events.borrow_mut().push(event);
        }
    }
}
