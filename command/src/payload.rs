use model::interaction::ApplicationCommandOptionType;
use serde::Serialize;
use serde_json::Value;

/// Subcommand entry in the `options` array of a parent command registration.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RegistrationPayload {
    pub name: String,
    pub description: String,
    pub r#type: ApplicationCommandOptionType,
    pub options: Vec<Value>,
}
