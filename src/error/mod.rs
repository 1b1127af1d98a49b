pub mod export;
pub mod validation;
