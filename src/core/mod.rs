pub mod types;

pub use types::{RequestRecord, RequestTiming, DATA_SCHEME};
