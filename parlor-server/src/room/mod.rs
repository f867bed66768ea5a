mod peer_queue;
mod reaper;
mod room;
mod room_directory;

pub use peer_queue::*;
pub use reaper::*;
pub use room::*;
pub use room_directory::*;
