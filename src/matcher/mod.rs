//! State matchers for the PHP settings files
//!
//! Matchers only read. They report what is in a file's contents and leave
//! every change to the [`engine`](crate::engine).
//!
//! - [`line`] finds single-line `$settings[...]` assignments (settings.local.php).
//! - [`block`] finds the literal settings.local.php inclusion block
//!   (settings.php).

pub mod block;
pub mod line;

pub use block::{BlockState, SettingsLocalBlock};
pub use line::{LineSettingState, LineStatus};
