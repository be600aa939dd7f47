//! Text rendering: technical digest, insider digest and the final prompt.

pub mod digest;
pub mod format;
pub mod insider;
pub mod prompt;

pub use digest::render_digest;
pub use format::{format_value, format_volume, format_volume_f64};
pub use insider::{render_insider_digest, NO_INSIDER_TRADES};
pub use prompt::{build_prompt, SYSTEM_PROMPT};
