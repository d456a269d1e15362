use std::mem;
use std::rc::Rc;

use crate::commands::{self, CommandAction};
use crate::config::PROMPT;
use crate::feedback::{Feedback, FeedbackEvent};
use crate::history::CommandHistory;
use crate::input::ConsoleInput;

/// Mode transition the console asks the host to stage.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ConsoleRequest {
    EnterGame,
    EnterSite,
}

/// One interpreter session: input buffer, transcript and history recall.
///
/// The console never touches the screen itself; the host renders the
/// transcript and decides when this surface has focus.
pub struct Console {
    transcript: Vec<String>,
    input: String,
    history: CommandHistory,
    target_score: u32,
    feedback: Rc<dyn Feedback>,
}

impl Console {
    /// Creates a session with the welcome banner already in the transcript.
    #[must_use]
    pub fn new(history: CommandHistory, target_score: u32, feedback: Rc<dyn Feedback>) -> Self {
        let mut console = Self {
            transcript: Vec::new(),
            input: String::new(),
            history,
            target_score,
            feedback,
        };
        console.push_block(&commands::welcome_banner());
        console
    }

    /// Applies one line-editing input. Returns a transition request when a
    /// submitted command asks for one.
    pub fn handle_input(&mut self, input: ConsoleInput) -> Option<ConsoleRequest> {
        match input {
            ConsoleInput::Char(c) => {
                self.input.push(c);
                self.feedback.event(FeedbackEvent::Type);
                None
            }
            ConsoleInput::Backspace => {
                self.input.pop();
                None
            }
            ConsoleInput::Submit => self.submit(),
            ConsoleInput::RecallPrevious => {
                if let Some(entry) = self.history.recall_previous() {
                    self.input = entry.to_string();
                }
                None
            }
            ConsoleInput::RecallNext => {
                match self.history.recall_next() {
                    Some(entry) => self.input = entry.to_string(),
                    None => self.input.clear(),
                }
                None
            }
        }
    }

    /// Submits the current buffer: dispatch, history append, transcript echo.
    fn submit(&mut self) -> Option<ConsoleRequest> {
        let line = mem::take(&mut self.input);
        self.feedback.event(FeedbackEvent::Command);

        let reply = commands::dispatch(&line, self.target_score);

        // Raw line, regardless of recognition; empty submissions are echoed
        // but never recorded.
        if !line.trim().is_empty() {
            self.history.push(line.clone());
        }

        let request = match reply.action {
            Some(CommandAction::ClearTranscript) => {
                self.transcript.clear();
                None
            }
            Some(CommandAction::EnterGame) => Some(ConsoleRequest::EnterGame),
            Some(CommandAction::EnterSite) => Some(ConsoleRequest::EnterSite),
            None => None,
        };

        self.transcript.push(format!("{PROMPT} {line}"));
        if !reply.text.is_empty() {
            self.push_block(&reply.text);
        }

        request
    }

    fn push_block(&mut self, text: &str) {
        for line in text.lines() {
            self.transcript.push(line.to_string());
        }
    }

    /// Returns the transcript lines, oldest first.
    #[must_use]
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Returns the current input buffer.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns the history, e.g. for persisting at shutdown.
    #[must_use]
    pub fn history(&self) -> &CommandHistory {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::commands::about_text;
    use crate::config::PROMPT;
    use crate::feedback::FeedbackEvent;
    use crate::feedback::testing::RecordingFeedback;
    use crate::history::CommandHistory;
    use crate::input::ConsoleInput;

    use super::{Console, ConsoleRequest};

    fn console() -> (Console, Rc<RecordingFeedback>) {
        let feedback = Rc::new(RecordingFeedback::default());
        let console = Console::new(CommandHistory::new(), 5, feedback.clone());
        (console, feedback)
    }

    fn type_line(console: &mut Console, line: &str) {
        for c in line.chars() {
            console.handle_input(ConsoleInput::Char(c));
        }
    }

    fn submit_line(console: &mut Console, line: &str) -> Option<ConsoleRequest> {
        type_line(console, line);
        console.handle_input(ConsoleInput::Submit)
    }

    #[test]
    fn submission_echoes_prompt_and_result_in_order() {
        let (mut console, _) = console();
        let before = console.transcript().len();

        submit_line(&mut console, "cat missing.txt");

        let tail = &console.transcript()[before..];
        assert_eq!(tail[0], format!("{PROMPT} cat missing.txt"));
        assert_eq!(tail[1], "cat: missing.txt: No such file");
    }

    #[test]
    fn cat_about_appends_the_about_content() {
        let (mut console, _) = console();
        submit_line(&mut console, "cat about.txt");

        let about = about_text();
        let expected: Vec<&str> = about.lines().collect();
        let transcript = console.transcript();
        let tail = &transcript[transcript.len() - expected.len()..];
        let got: Vec<&str> = tail.iter().map(String::as_str).collect();

        assert_eq!(got, expected);
    }

    #[test]
    fn clear_erases_prior_output_but_echoes_itself() {
        let (mut console, _) = console();
        submit_line(&mut console, "help");

        submit_line(&mut console, "clear");

        assert_eq!(console.transcript(), [format!("{PROMPT} clear")]);
    }

    #[test]
    fn play_and_start_request_transitions() {
        let (mut console, _) = console();

        assert_eq!(
            submit_line(&mut console, "play"),
            Some(ConsoleRequest::EnterGame)
        );
        assert_eq!(
            submit_line(&mut console, "start"),
            Some(ConsoleRequest::EnterSite)
        );
        assert_eq!(submit_line(&mut console, "help"), None);
    }

    #[test]
    fn unrecognized_lines_still_enter_history() {
        let (mut console, _) = console();

        submit_line(&mut console, "frobnicate");

        assert_eq!(console.history().entries(), ["frobnicate".to_string()]);
    }

    #[test]
    fn empty_submission_is_echoed_but_not_recorded() {
        let (mut console, _) = console();
        let before = console.transcript().len();

        console.handle_input(ConsoleInput::Submit);

        assert_eq!(console.transcript().len(), before + 1);
        assert!(console.history().entries().is_empty());
    }

    #[test]
    fn history_recall_walks_buffer_through_entries() {
        let (mut console, _) = console();
        submit_line(&mut console, "help");
        submit_line(&mut console, "ls");

        console.handle_input(ConsoleInput::RecallPrevious);
        assert_eq!(console.input(), "ls");
        console.handle_input(ConsoleInput::RecallPrevious);
        assert_eq!(console.input(), "help");
        // Floored at the oldest entry.
        console.handle_input(ConsoleInput::RecallPrevious);
        assert_eq!(console.input(), "help");

        console.handle_input(ConsoleInput::RecallNext);
        assert_eq!(console.input(), "ls");
        // One past the end yields an empty buffer.
        console.handle_input(ConsoleInput::RecallNext);
        assert_eq!(console.input(), "");
    }

    #[test]
    fn history_recall_preserves_original_case() {
        let (mut console, _) = console();
        submit_line(&mut console, "CAT About.TXT");

        console.handle_input(ConsoleInput::RecallPrevious);

        assert_eq!(console.input(), "CAT About.TXT");
    }

    #[test]
    fn backspace_edits_the_buffer() {
        let (mut console, _) = console();
        type_line(&mut console, "hel");
        console.handle_input(ConsoleInput::Backspace);

        assert_eq!(console.input(), "he");
    }

    #[test]
    fn typing_and_submitting_emit_feedback() {
        let (mut console, feedback) = console();

        submit_line(&mut console, "ls");

        assert_eq!(feedback.count(FeedbackEvent::Type), 2);
        assert_eq!(feedback.count(FeedbackEvent::Command), 1);
    }
}
