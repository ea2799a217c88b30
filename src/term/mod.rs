//! Terminal presentation layer.
//!
//! Holds no game rules: the view reads the core through accessors and the
//! renderer flushes framebuffers to the terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
