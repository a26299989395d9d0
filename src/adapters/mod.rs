// Adapters layer: concrete implementations of the countdown ports for the terminal and OS signals.

pub mod signals;
pub mod terminal;

pub use signals::SignalAbort;
pub use terminal::TerminalDisplay;
