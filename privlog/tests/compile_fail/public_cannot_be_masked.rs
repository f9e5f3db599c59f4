//! Test: a public value cannot be hashed.
//!
//! `PrivacyMask` only has private bases, so there is no hashed public option.

use privlog::{PrivacyMask, PrivacyOption};

fn main() {
    let _ = PrivacyOption::Mask(PrivacyMask::PublicMask);
}
