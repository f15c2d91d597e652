use simple_cicd_core::error::ParameterStoreError;

/// Hierarchical key/value store holding pipeline parameters.
pub trait ParameterStore {
    fn get_parameter(&self, key: &str) -> Result<String, ParameterStoreError>;

    fn put_parameter(
        &self,
        key: &str,
        value: &str,
        overwrite: bool,
    ) -> Result<(), ParameterStoreError>;
}
