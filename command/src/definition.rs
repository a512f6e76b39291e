use crate::config::{PrefixConfig, SlashConfig};
use crate::error::{Field, FieldError, Problem, Result};
use crate::handler::{PrefixHandler, SlashHandler};
use crate::sub_command::SubCommand;
use serde_json::{Map, Number, Value};
use std::convert::TryFrom;
use tracing::warn;

const UNNAMED: &str = "<unnamed>";

const PREFIX_KEYS: &[&str] = &["prefixConfig", "prefixData"];
const SLASH_KEYS: &[&str] = &["slashConfig", "slashData"];

/// Reads an untyped JSON definition into a subcommand. See [`SubCommand::from_definition`].
pub(crate) fn from_json<M, I>(
    definition: &Value,
    on_prefix_command: Option<PrefixHandler<M>>,
    on_slash_command: Option<SlashHandler<I>>,
) -> Result<SubCommand<M, I>> {
    let mut reader = Reader::default();

    let object = match definition.as_object() {
        Some(object) => object,
        None => {
            reader.wrong_type(Field::Definition, "an object", definition);
            return SubCommand::assemble(
                UNNAMED.to_string(),
                String::new(),
                PrefixConfig::default(),
                SlashConfig::default(),
                on_prefix_command,
                on_slash_command,
                reader.errors,
            );
        }
    };

    reader.name = reader
        .required_string(object, "name", Field::Name)
        .unwrap_or_else(|| UNNAMED.to_string());
    let description = reader
        .required_string(object, "description", Field::Description)
        .unwrap_or_default();

    let prefix_config = match reader.section(object, PREFIX_KEYS, Field::PrefixConfig) {
        Some(section) => reader.prefix_config(section),
        None => PrefixConfig::default(),
    };

    let slash_config = match reader.section(object, SLASH_KEYS, Field::SlashConfig) {
        Some(section) => reader.slash_config(section),
        None => SlashConfig::default(),
    };

    SubCommand::assemble(
        reader.name,
        description,
        prefix_config,
        slash_config,
        on_prefix_command,
        on_slash_command,
        reader.errors,
    )
}

#[derive(Default)]
struct Reader {
    name: String,
    errors: Vec<FieldError>,
}

impl Reader {
    fn wrong_type(&mut self, field: Field, expected: &'static str, found: &Value) {
        self.errors.push(FieldError::new(
            field,
            Problem::WrongType {
                expected,
                found: kind(found),
            },
        ));
    }

    fn falsy_fallback(&self, field: Field, value: &Value) {
        // null is the usual JSON spelling of "absent"
        if !value.is_null() {
            warn!(
                subcommand = %self.name,
                field = %field,
                value = %value,
                "Falsy value of the wrong type, using the default"
            );
        }
    }

    fn required_string(&mut self, object: &Map<String, Value>, key: &str, field: Field) -> Option<String> {
        match object.get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                self.wrong_type(field, "a string", other);
                None
            }
            None => {
                self.errors.push(FieldError::new(field, Problem::Missing { expected: "a string" }));
                None
            }
        }
    }

    /// Looks up an optional config object under any of its accepted keys.
    fn section<'a>(
        &mut self,
        object: &'a Map<String, Value>,
        keys: &[&str],
        field: Field,
    ) -> Option<&'a Map<String, Value>> {
        // a null under one key must not hide a section under the other
        let value = keys
            .iter()
            .filter_map(|key| object.get(*key))
            .find(|value| !value.is_null())?;

        match value {
            Value::Object(section) => Some(section),
            other if truthy(other) => {
                self.wrong_type(field, "an object", other);
                None
            }
            other => {
                self.falsy_fallback(field, other);
                None
            }
        }
    }

    fn prefix_config(&mut self, section: &Map<String, Value>) -> PrefixConfig {
        let defaults = PrefixConfig::default();

        let usage = match section.get("usage") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => self.check_falsy(Field::PrefixUsage, "a string", other, defaults.usage),
            None => defaults.usage,
        };

        let min_args_count = match section.get("minArgsCount") {
            Some(Value::Number(n)) => match arg_count(n) {
                Some(count) => count,
                None => {
                    self.errors.push(FieldError::new(
                        Field::PrefixMinArgsCount,
                        Problem::OutOfRange {
                            found: n.to_string(),
                        },
                    ));
                    defaults.min_args_count
                }
            },
            Some(other) => self.check_falsy(
                Field::PrefixMinArgsCount,
                "a number",
                other,
                defaults.min_args_count,
            ),
            None => defaults.min_args_count,
        };

        PrefixConfig {
            enabled: self.enabled(section, Field::PrefixEnabled),
            aliases: self.aliases(section),
            usage,
            min_args_count,
        }
    }

    fn slash_config(&mut self, section: &Map<String, Value>) -> SlashConfig {
        let options = match section.get("options") {
            Some(Value::Array(options)) => options.clone(),
            Some(other) => self.check_falsy(Field::SlashOptions, "an array", other, Vec::new()),
            None => Vec::new(),
        };

        SlashConfig {
            enabled: self.enabled(section, Field::SlashEnabled),
            options,
        }
    }

    fn enabled(&mut self, section: &Map<String, Value>, field: Field) -> bool {
        match section.get("enabled") {
            Some(Value::Bool(enabled)) => *enabled,
            // a falsy non-boolean still switches the invocation style off
            Some(other) => {
                let fallback = truthy(other);
                self.check_falsy(field, "a boolean", other, fallback)
            }
            None => true,
        }
    }

    fn aliases(&mut self, section: &Map<String, Value>) -> Vec<String> {
        let values = match section.get("aliases") {
            Some(Value::Array(values)) => values,
            Some(other) => return self.check_falsy(Field::PrefixAliases, "an array", other, Vec::new()),
            None => return Vec::new(),
        };

        let mut aliases = Vec::with_capacity(values.len());
        for value in values {
            match value {
                Value::String(alias) => aliases.push(alias.clone()),
                other => self.wrong_type(Field::PrefixAliases, "an array of strings", other),
            }
        }

        aliases
    }

    /// A value of the wrong kind is an error when truthy and falls back to `default` when falsy.
    fn check_falsy<T>(&mut self, field: Field, expected: &'static str, value: &Value, default: T) -> T {
        if truthy(value) {
            self.wrong_type(field, expected, value);
        } else {
            self.falsy_fallback(field, value);
        }

        default
    }
}

/// Whole numbers in `u32` range, including float encodings such as `2.0` or `-0.0`.
fn arg_count(n: &Number) -> Option<u32> {
    if let Some(count) = n.as_u64() {
        return u32::try_from(count).ok();
    }

    let f = n.as_f64()?;
    if f.fract() == 0.0 && f > -1.0 && f <= f64::from(u32::MAX) {
        Some(f as u32)
    } else {
        None
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
