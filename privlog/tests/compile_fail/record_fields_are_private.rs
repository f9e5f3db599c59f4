//! Test: a record cannot be changed after it is built.
//!
//! Fields are private and the `with_*` builders consume the record.

fn main() {
    let mut record = privlog::record!("UserAPI", "USR001", "Network", "HTTP 503", "1.0.0");
    record.code = String::from("USR002");
}
