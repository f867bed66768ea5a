
pub use mock_backend::*;
pub use test_relay::*;
