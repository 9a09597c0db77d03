//! Environment variable overlay.

use crate::conf::AppConf;
use crate::error::ConfigError;
use crate::value::Value;

impl AppConf {
    /// Overlay option values from the process environment.
    ///
    /// For every option with a bound environment variable that is set, the
    /// raw string is coerced into the tag of the option's default (the
    /// declared type, regardless of what an earlier overlay stored) and
    /// replaces the current value. A raw string that cannot be parsed as
    /// that type aborts the overlay.
    pub fn update_from_env(&mut self) -> Result<(), ConfigError> {
        for option in self.options.values_mut() {
            if option.env.is_empty() {
                continue;
            }
            let Ok(raw) = std::env::var(&option.env) else {
                continue;
            };
            let text = Value::Str(raw);
            option.value = match option.default {
                Value::Str(_) => text,
                Value::Int(_) => Value::Int(text.to_int()?),
                Value::Float(_) => Value::Float(text.to_float()?),
                Value::Bool(_) => Value::Bool(text.to_bool()?),
            };
            tracing::debug!(key = %option.key, var = %option.env, "environment override");
        }
        Ok(())
    }
}
