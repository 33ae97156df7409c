mod movie;
mod seat_notification;
mod seat_state;
mod shared;
mod showtime;
mod sweep;
mod theater;

pub use movie::Movie;
pub use seat_notification::SeatNotification;
pub use seat_state::SeatState;
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use showtime::{LocalizedShowtime, Showtime};
pub use sweep::{ShowtimeContext, SweepSummary};
pub use theater::Theater;
