mod negotiation_state;
mod negotiator;
mod session_backend;
mod session_driver;
mod session_handle;
mod start_session;

pub use negotiation_state::*;
pub use negotiator::*;
pub use session_backend::*;
pub use session_driver::*;
pub use session_handle::*;
pub use start_session::*;
