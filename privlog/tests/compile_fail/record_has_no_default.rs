//! Test: there is no record without a system message.
//!
//! `LogRecord` is only built through `LogRecord::new` or `record!`, both of
//! which take every required field.

use privlog::LogRecord;

fn main() {
    let _: LogRecord = Default::default();
}
