//! Screen renderers. Rendering is a pure side effect over immutable state;
//! nothing in here feeds back into the interpreter or the game.

pub mod console;
pub mod game;
pub mod site;
