pub mod cache;
pub mod types;

pub use cache::{QalibInfoCache, ValkeyQalibCache};
pub use types::QalibInfo;
