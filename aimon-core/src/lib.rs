pub mod clock;
pub mod error;
pub mod format;
pub mod i18n;
pub mod status;
pub mod theme;

pub use clock::{Clock, SystemClock};
pub use error::{Result, ThemeError};
pub use format::{format_count, format_relative_time};
pub use i18n::{Passthrough, Translate};
pub use status::{budget_color, rate_limit_color, usage_color};
pub use theme::Theme;
