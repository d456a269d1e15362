//! Terminal-styled portfolio landing page with a snake-game gate.
//!
//! Two cooperating state machines drive the experience: a command
//! interpreter on the landing screen (`console` + `commands` + `history`)
//! and a grid snake game (`game` + `snake` + `food`) that must be beaten —
//! or skipped with `start` — before the main content is shown. The `app`
//! shell plays the host: it owns screen visibility, stages the delayed
//! transitions, and wires input and rendering to whichever surface is
//! active.

pub mod app;
pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod feedback;
pub mod food;
pub mod game;
pub mod history;
pub mod input;
pub mod scheduler;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
