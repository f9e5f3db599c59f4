//! Compile-fail tests for guarantees the type system enforces.
//!
//! These tests verify that misuse is rejected at compile time, such as:
//! - Hashing a public value (there is no public mask)
//! - Building a record without its required fields
//! - Changing a record after it is built

#[test]
fn compile_fail_tests() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/compile_fail/*.rs");
}
