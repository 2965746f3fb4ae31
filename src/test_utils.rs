//! Helper utilities for unit tests.

/// Build a `Vec<String>` of buffer lines from anything implementing
/// `ToString`, so fixtures can mix literals and `format!` output.
#[macro_export]
macro_rules! string_vec {
    ( $($elem:expr),* $(,)? ) => {
        vec![ $( ::std::string::ToString::to_string(&$elem) ),* ]
    };
}
