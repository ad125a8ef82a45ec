//! Registration form, validation and the submission workflow.

pub mod form;
pub mod history;
pub mod remote;
pub mod validator;
pub mod workflow;

pub use form::{FormData, FormErrors, FormField};
pub use history::{Submission, SubmissionHistory};
pub use remote::{RegistrationReceipt, RegistrationService, RemoteError, SimulatedRegistrationService};
pub use validator::{validate, FormStatus};
pub use workflow::{SubmissionWorkflow, SubmitOutcome, SubmitStart, WorkflowState};
