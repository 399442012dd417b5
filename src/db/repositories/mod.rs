mod booking_repository;
mod match_repository;
mod profile_repository;
mod venue_repository;

pub use booking_repository::BookingRepository;
pub use match_repository::MatchRepository;
pub use profile_repository::ProfileRepository;
pub use venue_repository::VenueRepository;
