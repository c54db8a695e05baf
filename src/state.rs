/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - ex: gate: AccessGate (cookie token 検証 + qalib info lookup)
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::services::auth::AccessGate;

#[derive(Clone, Debug)]
pub struct AppState {
    pub gate: Arc<AccessGate>,
}

impl AppState {
    pub fn new(gate: Arc<AccessGate>) -> Self {
        Self { gate }
    }
}
