//! HTTP client, service facades and page controllers for the BuddyText text-simplification API.

pub mod config;
pub mod controller;
pub mod error;
pub mod forms;
pub mod observer;
pub mod services;
pub mod transport;
pub mod view;

pub use config::{load_settings, ClientSettings, ConfigError};
pub use controller::{PageForm, Phase, Submission, SubmitController, Ticket};
pub use error::{ClientError, TransportError, ValidationError};
pub use forms::{
    EvaluateController, EvaluateForm, SimplifyController, SimplifyForm, StepsController,
    StepsForm, TutorController, TutorForm,
};
pub use observer::{TracingObserver, TransportEvent, TransportObserver};
pub use services::{
    BuddyTextClient, EvaluationService, HealthProbe, HealthService, SimplificationService,
    StepByStepService, TutorService,
};
pub use transport::{HttpTransport, JsonTransport};

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;
