/// A rendered file ready to be written into the project directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldFile {
    /// Path relative to the project root, `/`-separated.
    pub path: String,
    /// File content as UTF-8 text.
    pub content: String,
}
