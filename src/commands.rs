//! Fixed command registry for the console landing screen.
//!
//! Input lines are normalized (lowercase, trim, whitespace split) into a
//! command name plus arguments and looked up in a closed set. Commands
//! either produce transcript text, or text plus a side effect the host
//! applies (clearing the transcript, launching the game, entering the site).

/// Side effect a command asks the host to perform.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CommandAction {
    /// Erase all prior transcript output.
    ClearTranscript,
    /// Open the snake-game gate after the fixed launch delay.
    EnterGame,
    /// Skip the gate and reveal the site after the fixed delay.
    EnterSite,
}

/// Result of dispatching one submitted line.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CommandReply {
    pub text: String,
    pub action: Option<CommandAction>,
}

impl CommandReply {
    fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: None,
        }
    }

    fn with_action(text: impl Into<String>, action: CommandAction) -> Self {
        Self {
            text: text.into(),
            action: Some(action),
        }
    }
}

/// Normalizes and dispatches one input line against the registry.
///
/// An empty or whitespace-only line yields an empty reply. An unrecognized
/// command yields an informational message naming it; the registry itself is
/// fixed and case-insensitive.
#[must_use]
pub fn dispatch(line: &str, target_score: u32) -> CommandReply {
    let normalized = line.trim().to_lowercase();
    let mut parts = normalized.split_whitespace();

    let Some(command) = parts.next() else {
        return CommandReply::text_only("");
    };
    let args: Vec<&str> = parts.collect();

    match command {
        "help" => CommandReply::text_only(help_text()),
        "about" => CommandReply::text_only(about_text()),
        "skills" => CommandReply::text_only(skills_text()),
        "contact" => CommandReply::text_only(contact_text()),
        "ls" => CommandReply::text_only(ls_text()),
        "cat" => cat(&args),
        "clear" => CommandReply::with_action("", CommandAction::ClearTranscript),
        "play" => CommandReply::with_action(
            format!("Starting Snake Game...\nReach {target_score} points to enter the website!"),
            CommandAction::EnterGame,
        ),
        "start" => CommandReply::with_action("Launching portfolio...", CommandAction::EnterSite),
        unknown => CommandReply::text_only(format!(
            "Command not found: {unknown}. Type 'help' for available commands."
        )),
    }
}

fn cat(args: &[&str]) -> CommandReply {
    let Some(filename) = args.first() else {
        return CommandReply::text_only("Usage: cat <filename>");
    };

    match *filename {
        "about.txt" => CommandReply::text_only(about_text()),
        "skills.txt" => CommandReply::text_only(skills_text()),
        "contact.txt" => CommandReply::text_only(contact_text()),
        missing => CommandReply::text_only(format!("cat: {missing}: No such file")),
    }
}

/// Banner printed into the transcript when the console opens.
#[must_use]
pub fn welcome_banner() -> String {
    let ascii = r"
 ██╗  ██╗██████╗
 ██║ ██╔╝██╔══██╗
 █████╔╝ ██████╔╝
 ██╔═██╗ ██╔══██╗
 ██║  ██╗██████╔╝
 ╚═╝  ╚═╝╚═════╝";

    format!(
        "{ascii}\n\n\
         Welcome to Kim Berg's Portfolio Terminal\n\
         ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n\
         Type 'help' to see available commands\n\
         Type 'play' to start the Snake Game\n\
         Type 'start' to enter the website directly\n"
    )
}

fn help_text() -> String {
    "\
Available Commands:
  help      - Show this help message
  about     - Learn about Kim
  skills    - View technical skills
  contact   - Get contact information
  play      - Start the Snake Game
  start     - Enter the portfolio website
  clear     - Clear the terminal
  ls        - List available sections
  cat       - Read a file (try: cat about.txt)"
        .to_string()
}

/// Content behind both the `about` command and `cat about.txt`.
#[must_use]
pub fn about_text() -> String {
    "\
About Kim Berg:
━━━━━━━━━━━━━━━━━━━━━━━━━━
Systems programmer and terminal enthusiast
Maintainer of a small stable of open source CLI tools
Based in Oslo, building software since the dial-up days

Happiest somewhere between a scheduler trace and a
freshly wrapped ratatui frame."
        .to_string()
}

/// Content behind both the `skills` command and `cat skills.txt`.
#[must_use]
pub fn skills_text() -> String {
    "\
Technical Skills:
━━━━━━━━━━━━━━━━━━━━
▸ Rust, Go, TypeScript
▸ Terminal UIs & CLI tooling
▸ Linux systems programming
▸ Network services & protocols
▸ Embedded tinkering
▸ CI and release automation"
        .to_string()
}

/// Content behind both the `contact` command and `cat contact.txt`.
#[must_use]
pub fn contact_text() -> String {
    "\
Contact Information:
━━━━━━━━━━━━━━━━━━━━━━
email:  kim@kimberg.dev
github: github.com/kimberg
mast:   @kimberg@fosstodon.org"
        .to_string()
}

fn ls_text() -> String {
    "\
about.txt    skills.txt    projects/
contact.txt  education/    awards/"
        .to_string()
}
