pub mod factory;
pub mod gate;
pub mod hxd_token;

pub use factory::build_access_gate;
pub use gate::{AccessError, AccessGate, NoAccessReason};
pub use hxd_token::{HxdToken, HxdTokenDecoder, HxdTokenError};
