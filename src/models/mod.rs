pub mod record;
pub mod session;
pub mod tokens;

pub use record::{MessageUsage, Record};
pub use session::{SessionSummary, UNKNOWN_DATE};
pub use tokens::TokenCounts;
