
mod application_command_option;
pub use application_command_option::{ApplicationCommandOption, ApplicationCommandOptionType};

mod application_command_option_choice;
pub use application_command_option_choice::ApplicationCommandOptionChoice;
