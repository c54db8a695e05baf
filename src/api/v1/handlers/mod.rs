pub mod health;
pub mod qalib;
