//! Terminal rendering layer.
//!
//! Renders into a simple framebuffer of styled character cells that is
//! flushed to the terminal with crossterm. `GameView` is pure so the
//! board drawing can be unit-tested; only `TerminalRenderer` touches I/O.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{CellStyle, FrameBuffer, Rgb, TermCell};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
