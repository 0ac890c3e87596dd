mod output_sink;
mod process_spawner;
mod prompter;
mod template_extractor;
mod version_provider;

pub use output_sink::{OutputSink, Tone};
pub use process_spawner::{ProcessSpawner, SpawnRequest};
pub use prompter::Prompter;
pub use template_extractor::TemplateExtractor;
pub use version_provider::VersionProvider;
