use std::fmt;

pub type Result<T> = std::result::Result<T, SubCommandError>;

#[derive(thiserror::Error, Debug)]
pub enum SubCommandError {
    #[error("subcommand {name}: {}", join(.errors))]
    Validation { name: String, errors: Vec<FieldError> },

    #[error("error while encoding json payload: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl SubCommandError {
    /// Name of the offending subcommand, if the error came from validation.
    pub fn name(&self) -> Option<&str> {
        match self {
            SubCommandError::Validation { name, .. } => Some(name),
            SubCommandError::JsonError(_) => None,
        }
    }

    pub fn errors(&self) -> &[FieldError] {
        match self {
            SubCommandError::Validation { errors, .. } => errors,
            SubCommandError::JsonError(_) => &[],
        }
    }

    pub fn has_field(&self, field: Field) -> bool {
        self.errors().iter().any(|e| e.field == field)
    }
}

impl<T> From<SubCommandError> for Result<T> {
    fn from(e: SubCommandError) -> Self {
        Err(e)
    }
}

fn join(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("{field} {problem}")]
pub struct FieldError {
    pub field: Field,
    pub problem: Problem,
}

impl FieldError {
    pub fn new(field: Field, problem: Problem) -> Self {
        Self { field, problem }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Definition,
    Name,
    Description,
    PrefixConfig,
    PrefixEnabled,
    PrefixAliases,
    PrefixUsage,
    PrefixMinArgsCount,
    SlashConfig,
    SlashEnabled,
    SlashOptions,
    OnSlashCommand,
}

impl Field {
    pub fn path(&self) -> &'static str {
        match self {
            Field::Definition => "definition",
            Field::Name => "name",
            Field::Description => "description",
            Field::PrefixConfig => "prefixConfig",
            Field::PrefixEnabled => "prefixConfig.enabled",
            Field::PrefixAliases => "prefixConfig.aliases",
            Field::PrefixUsage => "prefixConfig.usage",
            Field::PrefixMinArgsCount => "prefixConfig.minArgsCount",
            Field::SlashConfig => "slashConfig",
            Field::SlashEnabled => "slashConfig.enabled",
            Field::SlashOptions => "slashConfig.options",
            Field::OnSlashCommand => "onSlashCommand",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Problem {
    /// Value was present but of the wrong JSON kind.
    WrongType {
        expected: &'static str,
        found: &'static str,
    },
    Missing {
        expected: &'static str,
    },
    /// Slash invocation is enabled but no handler was supplied.
    MissingHandler,
    OutOfRange {
        found: String,
    },
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::WrongType { expected, found } => {
                write!(f, "must be {}, found {}", expected, found)
            }
            Problem::Missing { expected } => write!(f, "must be {}, but is missing", expected),
            Problem::MissingHandler => {
                f.write_str("must be a handler while slash invocation is enabled")
            }
            Problem::OutOfRange { found } => {
                write!(f, "must be a non-negative integer, found {}", found)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_subcommand_and_fields() {
        let err = SubCommandError::Validation {
            name: "close".to_string(),
            errors: vec![
                FieldError::new(
                    Field::Description,
                    Problem::WrongType {
                        expected: "a string",
                        found: "a number",
                    },
                ),
                FieldError::new(Field::OnSlashCommand, Problem::MissingHandler),
            ],
        };

        assert_eq!(
            err.to_string(),
            "subcommand close: description must be a string, found a number; \
             onSlashCommand must be a handler while slash invocation is enabled"
        );
        assert!(err.has_field(Field::OnSlashCommand));
        assert!(!err.has_field(Field::Name));
    }
}
