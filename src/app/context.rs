use crate::ports::{OutputSink, Prompter, TemplateExtractor, VersionProvider};

/// Application context holding dependencies for the init session.
pub struct AppContext<P, V, T, O>
where
    P: Prompter,
    V: VersionProvider,
    T: TemplateExtractor,
    O: OutputSink,
{
    prompter: P,
    versions: V,
    extractor: T,
    output: O,
}

impl<P, V, T, O> AppContext<P, V, T, O>
where
    P: Prompter,
    V: VersionProvider,
    T: TemplateExtractor,
    O: OutputSink,
{
    /// Create a new application context.
    pub fn new(prompter: P, versions: V, extractor: T, output: O) -> Self {
        Self { prompter, versions, extractor, output }
    }

    /// Get a reference to the prompter.
    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Get a reference to the runtime version provider.
    pub fn versions(&self) -> &V {
        &self.versions
    }

    /// Get a reference to the template extractor.
    pub fn extractor(&self) -> &T {
        &self.extractor
    }

    /// Get a reference to the output sink.
    pub fn output(&self) -> &O {
        &self.output
    }
}
