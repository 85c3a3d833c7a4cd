pub mod admin_verification;
pub mod schema_verification;

pub use admin_verification::AdminVerificationScenario;
pub use schema_verification::SchemaVerificationScenario;
