pub mod configuration;
pub mod error;
pub mod parser;
pub mod telemetry;
pub mod timefmt;
pub mod units;

// re-export
pub use error::FieldTableError;
pub use parser::{
    parse, Continuation, DerivedField, Fallback, FieldSpec, FieldValue, ParseResult,
    Postprocess, StatusBlockParser,
};

#[doc(hidden)]
pub use tracing;

/// Forward to the `tracing` macro of the given level.
///
/// ```
/// use jobinfo_common::log;
/// log!(debug, "parsed {} fields", 12);
/// ```
#[macro_export]
macro_rules! log {
    ($level:ident, $($arg:tt)+) => {
        $crate::tracing::$level!($($arg)+)
    };
}
