pub mod exporter;
pub mod loader;
pub mod validator;
