pub mod display;
pub mod error;
pub mod qstat;
pub mod settings;

// re-export
pub use error::{Error, Result};
pub use qstat::QstatCommand;
pub use settings::Settings;
