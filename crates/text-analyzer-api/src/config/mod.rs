//! Config module

mod constants;
mod env;

pub use constants::{
  API_VERSION, DEFAULT_BIND_ADDR, MAX_TEXT_LENGTH, MIN_TEXT_LENGTH, SERVICE_NAME,
};
pub use env::Config;
