#![cfg(test)]

use super::*;
use crate::result::{Error, Open, TypeError};

#[test]
fn test_tidy_string() {
    let s = TidyString::from_string("\n  Some Name\t").open();
    assert_eq!(s.value(), "Some Name");
    assert_eq!(s.to_string(), "Some Name");
    assert!(s.starts_with("Some"), "str methods should be reachable through Deref.");

    assert_eq!(
        TidyString::from_string(""),
        Err(Error::from(TypeError::new("expect a non empty string")))
    );
    assert_eq!(
        TidyString::from_string("   "),
        Err(Error::from(TypeError::new("expect a non empty string")))
    );
}

#[test]
fn test_lower_tidy_string() {
    let s = LowerTidyString::from_string(" MiXeD Case ").open();
    assert_eq!(s.value(), "mixed case");
    assert_eq!(
        LowerTidyString::from_string("\t"),
        Err(Error::from(TypeError::new("expect a non empty string")))
    );
}
