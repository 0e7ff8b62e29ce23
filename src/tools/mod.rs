pub mod env_args;
pub mod web;

use log::error;
use std::fmt::Debug;

/// Log the error and return the given value. Meant for `map_err` seams.
pub fn log_error_and_return<E: Debug, T>(value_to_return: T) -> impl FnOnce(E) -> T {
    move |error| {
        error!("{error:#?}");
        value_to_return
    }
}

/// Log a message along with the error, and return the given value.
pub fn log_message_and_return<E: Debug, T>(
    message: &str,
    value_to_return: T,
) -> impl FnOnce(E) -> T {
    move |error| {
        error!("{message}\n{error:#?}");
        value_to_return
    }
}
