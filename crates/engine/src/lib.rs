//! Layered configuration resolution for applications.
//!
//! This crate maintains a registry of named, typed settings and resolves
//! each setting's effective value by overlaying sources in a fixed
//! precedence order:
//!
//! 1. Command line flags
//! 2. Environment variables
//! 3. Configuration files
//! 4. Default values
//!
//! A source with higher priority always overrides those below it. The
//! intended usage is strictly sequential: build an [`AppConf`], register
//! options, run [`AppConf::update`] once at startup, then read values
//! through the typed getters.
//!
//! ```no_run
//! use confstack::{AppConf, OptionDef};
//!
//! # fn main() -> Result<(), confstack::ConfigError> {
//! let mut conf = AppConf::new("Gizmo").with_author("Ken").with_version("1.0");
//! conf.new_option(
//!     "port",
//!     OptionDef::new()
//!         .default_int(8080)
//!         .with_flag("port")
//!         .with_json("server.port")
//!         .with_env("GIZMO_PORT")
//!         .with_help("listen port"),
//! )?;
//! conf.update()?;
//! let port = conf.get_int("port")?;
//! # let _ = port;
//! # Ok(())
//! # }
//! ```

mod conf;
mod env;
mod error;
mod file;
mod flags;
mod json;
mod option;
mod value;

pub use conf::AppConf;
pub use error::ConfigError;
pub use file::{ConfigDirSource, FileOrder, PlatformDirs};
pub use flags::FlagSession;
pub use json::{flatten, parse_json_file};
pub use option::{ConfOption, OptionDef};
pub use value::{Value, almost_equal};
