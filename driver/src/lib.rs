pub mod database;
pub mod error;

pub(crate) fn env(key: &str) -> error_stack::Result<String, kernel::KernelError> {
    use error_stack::ResultExt;
    dotenvy::var(key)
        .change_context(kernel::KernelError::Internal)
        .attach_printable_lazy(|| format!("Environment variable {key} is not set"))
}
