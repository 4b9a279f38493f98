#![cfg(test)]

use std::any::Any;

use num_bigint::{BigInt, BigUint};

use super::*;
use crate::result::{Error, TypeError};

fn type_err(message: &str) -> Error {
    TypeError::new(message.to_owned()).into()
}

#[test]
fn test_validate_uint() {
    assert_eq!(validate_uint(0), Ok(0));
    assert_eq!(validate_uint(MAX_SAFE_INTEGER), Ok(MAX_SAFE_INTEGER));
    assert_eq!(validate_uint(42.0), Ok(42), "Integral floats should be accepted.");

    for invalid in [-1.0, 1.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert_eq!(
            validate_uint(invalid),
            Err(type_err("expect a unsigned integer")),
            "{} is not an unsigned integer.",
            invalid
        );
    }
    assert_eq!(validate_uint(-1_i64), Err(type_err("expect a unsigned integer")));

    assert_eq!(
        validate_uint(MAX_SAFE_INTEGER + 1),
        Err(type_err("overflow unsigned integer 53 bits"))
    );
    assert_eq!(validate_uint(u64::MAX), Err(type_err("overflow unsigned integer 53 bits")));
}

#[test]
fn test_validate_pint() {
    assert_eq!(validate_pint(1), Ok(1));
    assert_eq!(validate_pint(MAX_SAFE_INTEGER), Ok(MAX_SAFE_INTEGER));
    assert_eq!(validate_pint(0), Err(type_err("expect a positive integer")));
    assert_eq!(validate_pint(0.5), Err(type_err("expect a positive integer")));
    assert_eq!(
        validate_pint(MAX_SAFE_INTEGER + 1),
        Err(type_err("overflow positive integer 53 bits"))
    );
}

#[test]
fn test_validate_big_uint() {
    assert_eq!(validate_big_uint(&BigInt::from(0)), Ok(BigUint::from(0_u8)));
    assert_eq!(
        validate_big_uint(&BigInt::from(u128::MAX)),
        Ok(BigUint::from(u128::MAX)),
        "There is no upper bound."
    );
    assert_eq!(
        validate_big_uint(&BigInt::from(-1)),
        Err(type_err("expect unsigned big integer"))
    );
}

#[test]
fn test_validate_heximal() {
    for valid in ["0x0", "0x00", "0xffB", "0x0123456789abcdefABCDEF"] {
        assert!(validate_heximal(valid).is_ok(), "{} should be a heximal.", valid);
    }

    for invalid in ["", "0", "0x", "x1", "00x1", "0X1f", "0xfg", "0x 1", "1x1f"] {
        assert_eq!(
            validate_heximal(invalid),
            Err(type_err("expect Heximal")),
            "{:?} should not be a heximal.",
            invalid
        );
    }
}

#[test]
fn test_validate_heximal_byte_array() {
    assert!(validate_heximal_byte_array("0x").is_ok(), "An empty byte array is valid.");
    assert!(validate_heximal_byte_array("0x1").is_ok());
    assert!(validate_heximal_byte_array("0xffee").is_ok());
    assert_eq!(validate_heximal_byte_array("ffee"), Err(type_err("expect HeximalByteArray")));
    assert_eq!(validate_heximal_byte_array("0xz"), Err(type_err("expect HeximalByteArray")));
}

#[test]
fn test_validate_decimals() {
    assert!(validate_uint_decimal("0").is_ok());
    assert!(validate_uint_decimal("000120").is_ok());
    assert_eq!(validate_uint_decimal(""), Err(type_err("expect a unsigned integer decimal")));
    assert_eq!(validate_uint_decimal("-1"), Err(type_err("expect a unsigned integer decimal")));
    assert_eq!(validate_uint_decimal("1.0"), Err(type_err("expect a unsigned integer decimal")));

    assert!(validate_pint_decimal("1").is_ok());
    assert!(validate_pint_decimal("9007199254740993").is_ok(), "Decimals are unbounded.");
    for invalid in ["", "0", "01", "1a", "+1"] {
        assert_eq!(
            validate_pint_decimal(invalid),
            Err(type_err("expect a positive integer decimal")),
            "{:?} should not be a positive integer decimal.",
            invalid
        );
    }
}

#[test]
fn test_inspect_heximal() {
    assert_eq!(inspect_heximal("0x1fffffffffffff"), (14, Some(1)));
    assert_eq!(inspect_heximal("0x0000ff"), (2, Some(15)));
    assert_eq!(inspect_heximal("0xA"), (1, Some(10)));
    assert_eq!(inspect_heximal("0x0"), (0, None));
    assert_eq!(inspect_heximal("0x"), (0, None));
}

#[test]
fn test_validate_instance() {
    let name = String::from("bob");
    let big = BigInt::from(7);

    assert_eq!(validate_instance::<String>(&name), Ok(&name));
    assert_eq!(validate_instance::<BigInt>(&name), Err(type_err("expect bigint")));
    assert_eq!(validate_instance::<BigInt>(&big), Ok(&big));
}

#[test]
fn test_validate_object() {
    let mut object = Object::new();
    object.insert(String::from("a"), 1_u32);

    assert_eq!(validate_object::<u32>(&object), Ok(&object));
    assert_eq!(
        validate_object::<String>(&object),
        Err(type_err("expect an object")),
        "An object of the wrong value type should not match."
    );
    assert_eq!(validate_object::<u32>(&1_u32), Err(type_err("expect an object")));
}

#[test]
fn test_validate_array() {
    let items = [1, 2, 3];

    assert!(validate_array(&items, None, None).is_ok());
    assert!(validate_array(&items, Some(3), Some(3)).is_ok());
    assert_eq!(
        validate_array(&items, Some(4), None),
        Err(type_err("expect an array has at least 4 items"))
    );
    assert_eq!(
        validate_array(&items, None, Some(2)),
        Err(type_err("expect an array has at most 2 items"))
    );
    assert_eq!(
        validate_array::<u8>(&[], Some(1), None),
        Err(type_err("expect an array has at least 1 items"))
    );
}

#[test]
fn test_validate_array_items() {
    let (a, b) = (String::from("a"), String::from("b"));
    let number = BigInt::from(1);

    let items: [&dyn Any; 2] = [&a, &b];
    assert_eq!(validate_array_items::<String>(&items, Some(1), Some(2)), Ok(vec![&a, &b]));
    assert_eq!(
        validate_array_items::<String>(&items, Some(3), None),
        Err(type_err("expect an array has at least 3 items")),
        "Length should be checked before the items."
    );

    let items: [&dyn Any; 3] = [&a, &b, &number];
    assert_eq!(
        validate_array_items::<String>(&items, None, None),
        Err(type_err("2: expect string")),
        "The failing index should prefix the message."
    );
}
