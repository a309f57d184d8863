//! Interactive TUI mode

mod app;
mod log_target;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, run_tui};
pub use log_target::{LogTarget, ScreenClaim, stderr_log_target};
