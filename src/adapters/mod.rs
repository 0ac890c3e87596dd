pub mod console_output;
pub mod dialoguer_prompter;
pub mod embedded_template;
pub mod node_version;
pub mod process_command;
pub mod scripted_prompter;

pub use console_output::ConsoleOutput;
pub use dialoguer_prompter::DialoguerPrompter;
pub use embedded_template::EmbeddedTemplateExtractor;
pub use node_version::{FixedVersion, NodeVersionProbe};
pub use process_command::CommandSpawner;
pub use scripted_prompter::ScriptedPrompter;
