mod activity;
mod format;
mod json;
mod summary;
mod users;

pub(crate) use activity::print_activity_tables;
pub(crate) use format::{ViewOptions, print_summary_line};
pub(crate) use json::output_json;
pub(crate) use summary::print_summary_table;
pub(crate) use users::print_users_table;
