pub mod external_apis;
pub mod mappers;
pub mod models;
