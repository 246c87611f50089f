pub mod errors;
pub mod types;

pub use errors::{ConfigError, VidwallError};
pub use types::{LayoutMode, Rect, Size, StreamId};

pub type Result<T> = std::result::Result<T, VidwallError>;
