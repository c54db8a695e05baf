/*!
 * Qalib context extractor
 *
 * Responsibility:
 * - access gate を通過したリクエストのコンテキスト（QalibCtx）を handler に提供する
 * - HTTP / axum 依存は core に閉じ込め、型定義は types に分離する
 */

mod core;
mod types;

pub use core::QalibCtxExtractor;
pub use types::QalibCtx;
