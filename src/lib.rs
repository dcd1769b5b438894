pub mod args;
pub mod counter;
pub mod date;
pub mod error;
pub mod record;
pub mod stats;
pub mod utils;

pub use args::Args;
pub use counter::{most_active_cookies, most_active_from_reader};
pub use date::{parse_target_date, DateArg};
pub use error::{CookieError, ErrorKind};
pub use record::{Record, RecordError};
pub use stats::{ActivityResult, CookieTally};
