mod fake_extractor;
mod fake_prompter;
mod fake_spawner;
mod recording_output;

pub use fake_extractor::FakeExtractor;
pub use fake_prompter::FakePrompter;
pub use fake_spawner::FakeSpawner;
pub use recording_output::RecordingOutput;

use crate::domain::AppError;
use crate::ports::VersionProvider;

/// Version provider that always fails, as when `node` is not installed.
pub struct FailingVersion;

impl VersionProvider for FailingVersion {
    fn runtime_version(&self) -> Result<String, AppError> {
        Err(AppError::RuntimeVersion("node not found".into()))
    }
}
