//! Configuration for SkyTally.
//!
//! The INI file at `~/.skytally/config.ini` is split into one section per
//! concern:
//!
//! ```ini
//! [feed]      ; where aircraft.json is polled from
//! [registry]  ; identity CSV files
//! [discord]   ; bot token and channel
//! [schedule]  ; delay between cycles
//! [report]    ; page layout
//! [logging]   ; log file
//! ```
//!
//! A missing file yields [`ConfigFile::default`].

mod defaults;
mod file;
mod keys;
mod parser;
mod settings;
mod writer;

pub use defaults::*;
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use keys::{ConfigKey, ConfigKeyError};
pub use settings::*;
