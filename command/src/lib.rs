mod config;
pub use config::{PrefixConfig, PrefixConfigData, SlashConfig, SlashConfigData};

mod definition;

mod error;
pub use error::{Field, FieldError, Problem, Result, SubCommandError};

mod handler;
pub use handler::{prefix_handler, slash_handler, PrefixHandler, SlashHandler};

mod payload;
pub use payload::RegistrationPayload;

mod sub_command;
pub use sub_command::{SubCommand, SubCommandData};

// re-export the option model so callers can build typed slash options
pub use model::interaction;
