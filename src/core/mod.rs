pub mod access;
pub mod delete;
pub mod list;
pub mod log;
pub mod period;
pub mod record;
pub mod render;
pub mod submit;
