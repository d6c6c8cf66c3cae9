//! `courier-schedule` — daily recurrence in a fixed timezone, uniform
//! random pick, and the fire loop gluing them together.
//!
//! # Recurrence policy
//!
//! Every cycle recomputes the next occurrence from the current wall-clock
//! instant ([`DailySchedule::next_fire`]), never from `last_fire + 24h`.
//! Slow callbacks, process pauses and DST shifts therefore shorten or
//! lengthen a single cycle instead of skewing every cycle after it. The
//! two days a year an interval is 23h or 25h long is the accepted cost.
//!
//! # Pieces
//!
//! | Module       | Role                                              |
//! |--------------|---------------------------------------------------|
//! | `recurrence` | next-occurrence math for HH:MM:SS in an IANA zone |
//! | `picker`     | uniform random selection from a non-empty slice   |
//! | `dispatch`   | pick one message, hand it to an [`Outbound`] sink |
//! | `runner`     | sleep/fire loop with a shutdown signal            |

pub mod dispatch;
pub mod error;
pub mod picker;
pub mod recurrence;
pub mod runner;

pub use dispatch::{Outbound, OutboundError, PostDispatcher};
pub use error::ScheduleError;
pub use recurrence::DailySchedule;
pub use runner::DailyScheduler;
