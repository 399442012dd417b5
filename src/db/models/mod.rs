mod booking;
mod game_match;
mod profile;
mod venue;

pub use booking::*;
pub use game_match::*;
pub use profile::*;
pub use venue::*;
