use crate::error::Result;
use model::interaction::ApplicationCommandOption;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How the subcommand is reached through a text message such as `!ticket close spam`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PrefixConfig {
    #[serde(default = "returns_true")]
    pub enabled: bool,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub usage: String,
    #[serde(default)]
    pub min_args_count: u32,
}

impl PrefixConfig {
    /// Whether `token` invokes this subcommand, either by its name or one of its aliases.
    pub fn responds_to(&self, name: &str, token: &str) -> bool {
        if !self.enabled {
            return false;
        }

        let token = token.to_lowercase();
        name.to_lowercase() == token || self.aliases.iter().any(|a| a.to_lowercase() == token)
    }

    pub fn has_min_args<S: AsRef<str>>(&self, args: &[S]) -> bool {
        args.len() >= self.min_args_count as usize
    }
}

impl Default for PrefixConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            aliases: Vec::new(),
            usage: String::new(),
            min_args_count: 0,
        }
    }
}

impl From<PrefixConfigData> for PrefixConfig {
    fn from(data: PrefixConfigData) -> Self {
        Self {
            enabled: data.enabled.unwrap_or(true),
            aliases: data.aliases.unwrap_or_default(),
            usage: data.usage.unwrap_or_default(),
            min_args_count: data.min_args_count.unwrap_or(0),
        }
    }
}

/// How the subcommand is registered as a slash command option.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SlashConfig {
    #[serde(default = "returns_true")]
    pub enabled: bool,
    /// Option specifications, passed through to the registration API untouched.
    #[serde(default)]
    pub options: Vec<Value>,
}

impl Default for SlashConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            options: Vec::new(),
        }
    }
}

impl From<SlashConfigData> for SlashConfig {
    fn from(data: SlashConfigData) -> Self {
        Self {
            enabled: data.enabled.unwrap_or(true),
            options: data.options.unwrap_or_default(),
        }
    }
}

/// Caller-supplied prefix settings. `None` means "use the default".
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PrefixConfigData {
    pub enabled: Option<bool>,
    pub aliases: Option<Vec<String>>,
    pub usage: Option<String>,
    pub min_args_count: Option<u32>,
}

impl PrefixConfigData {
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = Some(aliases.into_iter().map(Into::into).collect());
        self
    }

    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    pub fn min_args_count(mut self, count: u32) -> Self {
        self.min_args_count = Some(count);
        self
    }
}

/// Caller-supplied slash settings. `None` means "use the default".
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SlashConfigData {
    pub enabled: Option<bool>,
    pub options: Option<Vec<Value>>,
}

impl SlashConfigData {
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn options<I>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        self.options = Some(options.into_iter().collect());
        self
    }

    pub fn option(mut self, option: &ApplicationCommandOption) -> Result<Self> {
        let option = serde_json::to_value(option)?;
        self.options.get_or_insert_with(Vec::new).push(option);
        Ok(self)
    }
}

fn returns_true() -> bool {
    true
}
