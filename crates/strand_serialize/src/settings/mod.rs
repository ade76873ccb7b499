//! `name=value` option settings.
//!
//! The textual form presentation layers accept for `-o name=value` flags.
//! Parsing only resolves the option name; the value is validated when the
//! setting is applied to a serializer.

use std::fmt;
use std::str::FromStr;

use crate::error::SerializeError;
use crate::options::OptionId;

/// One parsed `name=value` option setting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionSetting {
    option: OptionId,
    value: String,
}

impl OptionSetting {
    pub fn new(option: OptionId, value: impl Into<String>) -> Self {
        OptionSetting {
            option,
            value: value.into(),
        }
    }

    pub fn option(&self) -> OptionId {
        self.option
    }

    /// The raw value text, applied through `set_string`.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Parse `name=value`.
///
/// The name is trimmed and must be a catalog name; the value is kept as
/// written and may be empty or contain further `=` signs.
impl FromStr for OptionSetting {
    type Err = SerializeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((name, value)) = s.split_once('=') else {
            return Err(SerializeError::invalid_option(s, "expected name=value"));
        };
        let name = name.trim();
        let option = OptionId::from_name(name)
            .ok_or_else(|| SerializeError::invalid_option(name, "unknown option"))?;
        Ok(OptionSetting::new(option, value))
    }
}

impl fmt::Display for OptionSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.option.name(), self.value)
    }
}
