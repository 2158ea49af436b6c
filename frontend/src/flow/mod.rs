pub mod controller;
pub mod countdown;
pub mod state;
pub mod token;
pub mod validation;

pub use controller::FlowController;
pub use countdown::{Countdown, Tick, REDIRECT_SECONDS};
pub use state::{ErrorKind, FlowDefinition, FlowState, KnownError, Rejection, Trigger};
pub use token::Token;
pub use validation::{validate_email, validate_password_pair, ValidationError};
