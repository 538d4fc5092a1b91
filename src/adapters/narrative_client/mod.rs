pub mod http;
pub mod retrying;

pub use self::http::HttpNarrativeClient;
pub use self::retrying::{RetryPolicy, RetryingNarrativeClient};
