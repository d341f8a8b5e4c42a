pub mod day;
pub mod form;
pub mod period;
pub mod record;
pub mod role;
