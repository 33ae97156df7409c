mod block;
mod dispatch;
mod run_sweep;
mod seat_state;
mod throttle;

pub use block::is_blocked;
pub use dispatch::notify_if_available;
pub use run_sweep::RunSweepUseCase;
pub use seat_state::{extract_seat_state, ExtractError};
pub use throttle::{should_notify, ThrottleDecision};
