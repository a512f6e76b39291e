use crate::definition;
use crate::config::{PrefixConfig, PrefixConfigData, SlashConfig, SlashConfigData};
use crate::error::{Field, FieldError, Problem, Result, SubCommandError};
use crate::handler::{self, PrefixHandler, SlashHandler};
use crate::payload::RegistrationPayload;
use futures::future::BoxFuture;
use model::interaction::ApplicationCommandOptionType;
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// Construction input for a [`SubCommand`].
pub struct SubCommandData<M, I> {
    pub name: String,
    pub description: String,
    pub prefix_config: Option<PrefixConfigData>,
    pub slash_config: Option<SlashConfigData>,
    pub on_prefix_command: Option<PrefixHandler<M>>,
    pub on_slash_command: Option<SlashHandler<I>>,
}

impl<M, I> SubCommandData<M, I> {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            prefix_config: None,
            slash_config: None,
            on_prefix_command: None,
            on_slash_command: None,
        }
    }

    pub fn prefix_config(mut self, config: PrefixConfigData) -> Self {
        self.prefix_config = Some(config);
        self
    }

    pub fn slash_config(mut self, config: SlashConfigData) -> Self {
        self.slash_config = Some(config);
        self
    }

    pub fn on_prefix_command(mut self, handler: PrefixHandler<M>) -> Self {
        self.on_prefix_command = Some(handler);
        self
    }

    pub fn on_slash_command(mut self, handler: SlashHandler<I>) -> Self {
        self.on_slash_command = Some(handler);
        self
    }

    pub fn build(self) -> Result<SubCommand<M, I>> {
        SubCommand::new(self)
    }
}

/// A named unit of behaviour nested under a parent command, reachable both as a prefix
/// command and as a slash command.
///
/// Instances are validated once in [`SubCommand::new`] and never change afterwards.
pub struct SubCommand<M, I> {
    name: String,
    description: String,
    prefix_config: PrefixConfig,
    slash_config: SlashConfig,
    on_prefix_command: Option<PrefixHandler<M>>,
    on_slash_command: Option<SlashHandler<I>>,
}

impl<M, I> SubCommand<M, I> {
    pub fn new(data: SubCommandData<M, I>) -> Result<Self> {
        let prefix_config = PrefixConfig::from(data.prefix_config.unwrap_or_default());
        let slash_config = SlashConfig::from(data.slash_config.unwrap_or_default());

        Self::assemble(
            data.name,
            data.description,
            prefix_config,
            slash_config,
            data.on_prefix_command,
            data.on_slash_command,
            Vec::new(),
        )
    }

    /// Builds a subcommand from an untyped JSON definition, e.g. an entry of a command manifest.
    ///
    /// Every field is checked and all failures are reported together. A falsy value of the
    /// wrong kind (`0`, `""`, `false`, `null`) is not rejected: it falls back to the field's
    /// default and a warning is logged.
    pub fn from_definition(
        definition: &Value,
        on_prefix_command: Option<PrefixHandler<M>>,
        on_slash_command: Option<SlashHandler<I>>,
    ) -> Result<Self> {
        definition::from_json(definition, on_prefix_command, on_slash_command)
    }

    /// Final step shared by every construction path. `errors` carries failures found
    /// while reading the input; handler requirements are checked here.
    pub(crate) fn assemble(
        name: String,
        description: String,
        prefix_config: PrefixConfig,
        slash_config: SlashConfig,
        on_prefix_command: Option<PrefixHandler<M>>,
        on_slash_command: Option<SlashHandler<I>>,
        mut errors: Vec<FieldError>,
    ) -> Result<Self> {
        if slash_config.enabled && on_slash_command.is_none() {
            errors.push(FieldError::new(Field::OnSlashCommand, Problem::MissingHandler));
        }

        if !errors.is_empty() {
            return SubCommandError::Validation { name, errors }.into();
        }

        debug!(
            subcommand = %name,
            prefix_enabled = prefix_config.enabled,
            slash_enabled = slash_config.enabled,
            aliases = prefix_config.aliases.len(),
            options = slash_config.options.len(),
            "Built subcommand"
        );

        Ok(Self {
            name,
            description,
            prefix_config,
            slash_config,
            on_prefix_command,
            on_slash_command,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn prefix_config(&self) -> &PrefixConfig {
        &self.prefix_config
    }

    pub fn slash_config(&self) -> &SlashConfig {
        &self.slash_config
    }

    pub fn on_prefix_command(&self) -> Option<&PrefixHandler<M>> {
        self.on_prefix_command.as_ref()
    }

    pub fn on_slash_command(&self) -> Option<&SlashHandler<I>> {
        self.on_slash_command.as_ref()
    }

    pub fn has_prefix_handler(&self) -> bool {
        self.on_prefix_command.is_some()
    }

    pub fn has_slash_handler(&self) -> bool {
        self.on_slash_command.is_some()
    }

    /// Whether a prefix token (the word after the parent command) selects this subcommand.
    pub fn responds_to(&self, token: &str) -> bool {
        self.prefix_config.responds_to(&self.name, token)
    }

    /// Runs the prefix handler, or does nothing when none was configured.
    pub fn invoke_prefix(&self, message: M, args: Vec<String>) -> BoxFuture<'static, ()> {
        match &self.on_prefix_command {
            Some(handler) => handler(message, args),
            None => handler::noop(),
        }
    }

    /// Runs the slash handler, or does nothing when none was configured.
    pub fn invoke_slash(&self, interaction: I) -> BoxFuture<'static, ()> {
        match &self.on_slash_command {
            Some(handler) => handler(interaction),
            None => handler::noop(),
        }
    }

    pub fn to_registration_payload(&self) -> RegistrationPayload {
        RegistrationPayload {
            name: self.name.clone(),
            description: self.description.clone(),
            r#type: ApplicationCommandOptionType::SubCommand,
            options: self.slash_config.options.clone(),
        }
    }

    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self.to_registration_payload())?)
    }
}

impl<M, I> Clone for SubCommand<M, I> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            description: self.description.clone(),
            prefix_config: self.prefix_config.clone(),
            slash_config: self.slash_config.clone(),
            on_prefix_command: self.on_prefix_command.clone(),
            on_slash_command: self.on_slash_command.clone(),
        }
    }
}

impl<M, I> fmt::Debug for SubCommand<M, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubCommand")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("prefix_config", &self.prefix_config)
            .field("slash_config", &self.slash_config)
            .field("on_prefix_command", &self.on_prefix_command.is_some())
            .field("on_slash_command", &self.on_slash_command.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::{prefix_handler, slash_handler};
    use futures::executor::block_on;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    type TestSubCommand = SubCommand<String, u64>;

    fn slash_noop() -> SlashHandler<u64> {
        slash_handler(|_: u64| async {})
    }

    #[test]
    fn test_defaults_applied() {
        let sub: TestSubCommand = SubCommandData::new("close", "Closes the ticket")
            .on_slash_command(slash_noop())
            .build()
            .unwrap();

        assert_eq!(sub.name(), "close");
        assert_eq!(sub.description(), "Closes the ticket");
        assert_eq!(sub.prefix_config(), &PrefixConfig::default());
        assert_eq!(sub.slash_config(), &SlashConfig::default());
        assert!(!sub.has_prefix_handler());
        assert!(sub.has_slash_handler());
    }

    #[test]
    fn test_slash_enabled_requires_handler() {
        let err = TestSubCommand::new(
            SubCommandData::new("close", "Closes the ticket")
                .slash_config(SlashConfigData::default().enabled(true)),
        )
        .unwrap_err();

        assert_eq!(err.name(), Some("close"));
        assert!(err.has_field(Field::OnSlashCommand));
        assert!(err.to_string().contains("onSlashCommand"));
    }

    #[test]
    fn test_default_slash_requires_handler() {
        let err = TestSubCommand::new(SubCommandData::new("close", "Closes the ticket")).unwrap_err();
        assert_eq!(err.errors().len(), 1);
        assert!(err.has_field(Field::OnSlashCommand));
    }

    #[test]
    fn test_slash_disabled_without_handler() {
        let sub: TestSubCommand = SubCommandData::new("close", "Closes the ticket")
            .slash_config(SlashConfigData::default().enabled(false))
            .build()
            .unwrap();

        assert!(!sub.slash_config().enabled);
        assert!(!sub.has_slash_handler());
        block_on(sub.invoke_slash(1));
        block_on(sub.invoke_prefix("!close".to_string(), Vec::new()));
    }

    #[test]
    fn test_handlers_invoked() {
        let seen = Arc::new(Mutex::new(Vec::new()));

        let prefix_seen = Arc::clone(&seen);
        let slash_seen = Arc::clone(&seen);

        let sub: TestSubCommand = SubCommandData::new("add", "Adds a user to the ticket")
            .on_prefix_command(prefix_handler(move |message: String, args: Vec<String>| {
                let seen = Arc::clone(&prefix_seen);
                async move {
                    seen.lock().unwrap().push(format!("{} {}", message, args.join(",")));
                }
            }))
            .on_slash_command(slash_handler(move |interaction: u64| {
                let seen = Arc::clone(&slash_seen);
                async move {
                    seen.lock().unwrap().push(format!("slash {}", interaction));
                }
            }))
            .build()
            .unwrap();

        block_on(sub.invoke_prefix("msg".to_string(), vec!["a".to_string(), "b".to_string()]));
        block_on(sub.invoke_slash(42));

        assert_eq!(*seen.lock().unwrap(), vec!["msg a,b".to_string(), "slash 42".to_string()]);
    }

    #[test]
    fn test_payload() {
        let sub: TestSubCommand = SubCommandData::new("ping", "Replies pong")
            .slash_config(SlashConfigData::default().options(vec![json!({ "name": "x" })]))
            .on_slash_command(slash_noop())
            .build()
            .unwrap();

        let expected = json!({
            "name": "ping",
            "description": "Replies pong",
            "type": 1,
            "options": [{ "name": "x" }],
        });

        assert_eq!(sub.json().unwrap(), expected);
        assert_eq!(sub.json().unwrap(), sub.json().unwrap());
    }

    #[test]
    fn test_responds_to_aliases() {
        let sub: TestSubCommand = SubCommandData::new("remove", "Removes a user")
            .prefix_config(PrefixConfigData::default().aliases(vec!["rm"]))
            .on_slash_command(slash_noop())
            .build()
            .unwrap();

        assert!(sub.responds_to("remove"));
        assert!(sub.responds_to("rm"));
        assert!(!sub.responds_to("add"));
    }

    #[test]
    fn test_clone_shares_handlers() {
        let sub: TestSubCommand = SubCommandData::new("ping", "Replies pong")
            .on_slash_command(slash_noop())
            .build()
            .unwrap();

        let cloned = sub.clone();
        assert!(Arc::ptr_eq(
            sub.on_slash_command().unwrap(),
            cloned.on_slash_command().unwrap()
        ));
        assert_eq!(format!("{:?}", cloned), format!("{:?}", sub));
    }
}
