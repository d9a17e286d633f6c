mod censor_error;
mod config_error;
mod detector_error;

pub use censor_error::{CensorError, CensorResult};
pub use config_error::ConfigError;
pub use detector_error::DetectorError;
