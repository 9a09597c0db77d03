//! Option registration types.

use crate::value::Value;

/// One named configuration setting.
///
/// An option is created once through [`crate::AppConf::new_option`] and lives
/// for the rest of the process; only its current `value` changes afterwards,
/// driven by the overlay pipeline or the explicit setters.
#[derive(Debug, Clone)]
pub struct ConfOption {
    /// Unique key identifying the option within its registry.
    pub key: String,
    /// Default value; also establishes the option's declared type.
    pub default: Value,
    /// Current resolved value.
    pub value: Value,
    /// Command line flag name; empty means no CLI binding.
    pub flag: String,
    /// JSON address in dotted/indexed form; empty means no file binding.
    pub json: String,
    /// Environment variable name; empty means no environment binding.
    pub env: String,
    /// Help text describing the option.
    pub help: String,
}

/// Builder describing an option prior to registration.
#[derive(Debug, Clone)]
pub struct OptionDef {
    default: Value,
    flag: String,
    json: String,
    env: String,
    help: String,
}

impl Default for OptionDef {
    fn default() -> Self {
        Self {
            default: Value::Str(String::new()),
            flag: String::new(),
            json: String::new(),
            env: String::new(),
            help: String::new(),
        }
    }
}

impl OptionDef {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default (and initial) value to a string.
    pub fn default_str(mut self, value: impl Into<String>) -> Self {
        self.default = Value::Str(value.into());
        self
    }

    /// Set the default (and initial) value to an integer.
    pub fn default_int(mut self, value: i64) -> Self {
        self.default = Value::Int(value);
        self
    }

    /// Set the default (and initial) value to a float.
    pub fn default_float(mut self, value: f64) -> Self {
        self.default = Value::Float(value);
        self
    }

    /// Set the default (and initial) value to a boolean.
    pub fn default_bool(mut self, value: bool) -> Self {
        self.default = Value::Bool(value);
        self
    }

    /// Set the default (and initial) value directly.
    pub fn default_value(mut self, value: Value) -> Self {
        self.default = value;
        self
    }

    /// Bind the option to a command line flag.
    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.flag = flag.into();
        self
    }

    /// Bind the option to a JSON address inside configuration files.
    pub fn with_json(mut self, address: impl Into<String>) -> Self {
        self.json = address.into();
        self
    }

    /// Bind the option to an environment variable.
    pub fn with_env(mut self, var: impl Into<String>) -> Self {
        self.env = var.into();
        self
    }

    /// Set the option's help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    pub(crate) fn into_option(self, key: &str) -> ConfOption {
        ConfOption {
            key: key.to_string(),
            value: self.default.clone(),
            default: self.default,
            flag: self.flag,
            json: self.json,
            env: self.env,
            help: self.help,
        }
    }
}
