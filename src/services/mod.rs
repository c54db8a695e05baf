/*
 * Responsibility
 * - ドメインサービス (auth: cookie token 検証 / qalib: info lookup / cache: backend)
 */
pub mod auth;
pub mod cache;
pub mod qalib;
