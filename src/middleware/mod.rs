/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth::access (cookie token gate), cors, http (request id / limit / timeout / trace)
 */
pub mod auth;
pub mod cors;
pub mod http;
