pub mod form;
pub mod gateway;
pub mod provider;
pub mod validation;

pub use form::{FieldEdit, FormValues, ProfileForm, SubmitOutcome};
pub use gateway::ProfileGateway;
pub use provider::ProfileProvider;
