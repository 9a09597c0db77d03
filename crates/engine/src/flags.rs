//! Command line flag overlay.
//!
//! Responsibilities:
//! - Register option flags into a flag-binding session exactly once.
//! - Parse the argument vector exactly once per session and write parsed
//!   values back into the bound options.
//!
//! Invariants:
//! - Flag registration is idempotent per flag name; a name registered by an
//!   earlier option is skipped silently.
//! - A session parses at most once; a second `update_from_flags` call fails
//!   with `FlagsAlreadyParsed` and leaves option values untouched.
//! - Only flags actually present on the command line overwrite option
//!   values, so flag omission preserves lower-precedence overlays.

use std::collections::{BTreeMap, BTreeSet};

use crate::conf::AppConf;
use crate::error::ConfigError;
use crate::value::Value;

/// Per-registry flag-binding state.
///
/// Holds the registered flag namespace and the one-shot register/parse
/// guards. Owning this state per [`AppConf`] instead of process-wide keeps
/// independent registries (and tests) from interfering with each other.
#[derive(Debug, Default)]
pub struct FlagSession {
    registered: BTreeSet<String>,
    bool_flags: BTreeSet<String>,
    registered_once: bool,
    parsed: bool,
    args: Option<Vec<String>>,
}

impl FlagSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the argument vector parsed by this session.
    pub fn with_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    /// Whether this session has already parsed its argument vector.
    pub fn is_parsed(&self) -> bool {
        self.parsed
    }

    fn argv(&self) -> Vec<String> {
        self.args
            .clone()
            .unwrap_or_else(|| std::env::args().skip(1).collect())
    }
}

/// Parse `args` into a flag → raw text map.
///
/// Flags are `-name value`, `-name=value`, or bare `-name` for booleans;
/// a double dash prefix is accepted as well. The first token that is not a
/// flag ends parsing, as does a lone `-` or `--`.
fn parse_args(
    args: &[String],
    known: &BTreeSet<String>,
    bool_flags: &BTreeSet<String>,
) -> Result<BTreeMap<String, String>, ConfigError> {
    let mut parsed = BTreeMap::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let Some(body) = arg.strip_prefix('-') else {
            break;
        };
        let body = body.strip_prefix('-').unwrap_or(body);
        if body.is_empty() {
            break;
        }
        let (name, inline) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (body, None),
        };
        if !known.contains(name) {
            return Err(ConfigError::MalformedArgument {
                arg: arg.clone(),
                message: "flag provided but not defined".to_string(),
            });
        }
        let value = match inline {
            Some(value) => value.to_string(),
            None if bool_flags.contains(name) => "true".to_string(),
            None => iter
                .next()
                .ok_or_else(|| ConfigError::MalformedArgument {
                    arg: arg.clone(),
                    message: "flag needs an argument".to_string(),
                })?
                .clone(),
        };
        parsed.insert(name.to_string(), value);
    }
    Ok(parsed)
}

impl AppConf {
    /// Register all bound option flags with the session. Idempotent per
    /// flag name: an already-registered name is skipped silently.
    fn register_flags(&mut self) {
        for option in self.options.values() {
            if option.flag.is_empty() || self.flags.registered.contains(&option.flag) {
                continue;
            }
            if matches!(option.default, Value::Bool(_)) {
                self.flags.bool_flags.insert(option.flag.clone());
            }
            self.flags.registered.insert(option.flag.clone());
        }
    }

    /// Overlay option values from command line flags.
    ///
    /// Registers not-yet-registered flags, parses the argument vector
    /// exactly once, then writes every present flag's textual value back
    /// through the option's declared type. Fails with
    /// [`ConfigError::FlagsAlreadyParsed`] when the session already parsed.
    pub fn update_from_flags(&mut self) -> Result<(), ConfigError> {
        if self.flags.parsed {
            return Err(ConfigError::FlagsAlreadyParsed);
        }
        if !self.flags.registered_once {
            self.register_flags();
            self.flags.registered_once = true;
        }
        let args = self.flags.argv();
        let parsed = parse_args(&args, &self.flags.registered, &self.flags.bool_flags)?;
        self.flags.parsed = true;
        for option in self.options.values_mut() {
            if option.flag.is_empty() {
                continue;
            }
            let Some(text) = parsed.get(&option.flag) else {
                continue;
            };
            option
                .value
                .set_from_str(text)
                .map_err(|err| ConfigError::MalformedArgument {
                    arg: format!("-{}", option.flag),
                    message: err.to_string(),
                })?;
            tracing::debug!(key = %option.key, flag = %option.flag, "flag override");
        }
        Ok(())
    }
}
