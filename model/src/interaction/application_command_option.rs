use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use crate::interaction::ApplicationCommandOptionChoice;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApplicationCommandOption {
    pub r#type: ApplicationCommandOptionType,
    pub name: Box<str>,
    pub description: Box<str>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<ApplicationCommandOptionChoice>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ApplicationCommandOption>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub autocomplete: bool,
}

impl ApplicationCommandOption {
    pub fn new(
        r#type: ApplicationCommandOptionType,
        name: impl Into<Box<str>>,
        description: impl Into<Box<str>>,
    ) -> Self {
        Self {
            r#type,
            name: name.into(),
            description: description.into(),
            required: false,
            choices: Vec::new(),
            options: Vec::new(),
            autocomplete: false,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn choice(mut self, choice: ApplicationCommandOptionChoice) -> Self {
        self.choices.push(choice);
        self
    }

    pub fn option(mut self, option: ApplicationCommandOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn autocomplete(mut self, autocomplete: bool) -> Self {
        self.autocomplete = autocomplete;
        self
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ApplicationCommandOptionType {
    SubCommand = 1,
    SubCommandGroup = 2,
    String = 3,
    Integer = 4,
    Boolean = 5,
    User = 6,
    Channel = 7,
    Role = 8,
    Mentionable = 9,
    Number = 10,
    Attachment = 11,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_subcommand_type_is_one() {
        let json = serde_json::to_string(&ApplicationCommandOptionType::SubCommand).unwrap();
        assert_eq!(json, "1");
    }

    #[test]
    fn test_nested_choices_encoded() {
        let option = ApplicationCommandOption::new(
            ApplicationCommandOptionType::String,
            "reason",
            "Why the ticket was closed",
        )
        .required(true)
        .choice(ApplicationCommandOptionChoice::new("spam", "spam"));

        assert_eq!(
            serde_json::to_value(&option).unwrap(),
            json!({
                "type": 3,
                "name": "reason",
                "description": "Why the ticket was closed",
                "required": true,
                "choices": [{ "name": "spam", "value": "spam" }],
            })
        );
    }

    #[test]
    fn test_optional_fields_omitted() {
        let option = ApplicationCommandOption::new(ApplicationCommandOptionType::User, "user", "Target");
        assert_eq!(
            serde_json::to_value(&option).unwrap(),
            json!({ "type": 6, "name": "user", "description": "Target" })
        );
    }
}
