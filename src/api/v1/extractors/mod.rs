pub mod qalib_ctx;

pub use qalib_ctx::{QalibCtx, QalibCtxExtractor};
