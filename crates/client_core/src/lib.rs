//! Form controller for the student performance prediction tool.
//!
//! The controller owns its UI bindings through [`FormView`] and talks to the
//! prediction endpoint through [`PredictionService`].

pub mod controller;
pub mod error;
pub mod form;
pub mod panel;
pub mod settings;
pub mod transport;
pub mod view;

pub use controller::{FormController, SubmitOutcome};
pub use error::{FormError, SubmitError};
pub use panel::{ErrorPanel, ResultPanel};
pub use settings::ClientSettings;
pub use transport::{HttpPredictionClient, PredictionService};
pub use view::{FormView, MemoryView};
