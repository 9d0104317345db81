//! Background jobs driven by cron schedules.

pub mod poll_deadlines;
