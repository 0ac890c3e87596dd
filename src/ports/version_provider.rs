use crate::domain::AppError;

/// Port for the runtime version recorded in generated projects.
pub trait VersionProvider {
    fn runtime_version(&self) -> Result<String, AppError>;
}

impl<T: VersionProvider + ?Sized> VersionProvider for Box<T> {
    fn runtime_version(&self) -> Result<String, AppError> {
        (**self).runtime_version()
    }
}
