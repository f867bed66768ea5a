mod rtc_session;

pub use rtc_session::*;
