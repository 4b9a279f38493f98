#![cfg(test)]

use super::*;
use crate::result::{Error, TypeError};

fn type_err(message: &str) -> Error {
    TypeError::new(message.to_owned()).into()
}

#[test]
fn test_tidy_decimals() {
    assert_eq!(to_tidy_uint_decimal("0"), Ok("0"));
    assert_eq!(to_tidy_uint_decimal("0000"), Ok("0"), "Zero should keep a single digit.");
    assert_eq!(to_tidy_uint_decimal("00102"), Ok("102"));
    assert_eq!(to_tidy_uint_decimal(""), Err(type_err("expect a unsigned integer from decimal")));
    assert_eq!(to_tidy_uint_decimal("12a"), Err(type_err("expect a unsigned integer from decimal")));

    assert_eq!(to_tidy_pint_decimal("0001"), Ok("1"));
    assert_eq!(to_tidy_pint_decimal("0"), Err(type_err("expect a decimal of positive integer")));
    assert_eq!(to_tidy_pint_decimal("000"), Err(type_err("expect a decimal of positive integer")));
    assert_eq!(to_tidy_pint_decimal("-1"), Err(type_err("expect a positive integer from decimal")));
}

#[test]
fn test_decimal_to_uint() {
    assert_eq!(decimal_to_uint("0"), Ok(0));
    assert_eq!(decimal_to_uint("00042"), Ok(42));
    assert_eq!(decimal_to_uint("9007199254740991"), Ok(9007199254740991));
    assert_eq!(
        decimal_to_uint("9007199254740992"),
        Err(type_err("overflow unsigned integer decimal 53 bits"))
    );
    assert_eq!(
        decimal_to_uint("340282366920938463463374607431768211456"),
        Err(type_err("overflow unsigned integer decimal 53 bits")),
        "Overflow should be detected without parsing."
    );
    assert_eq!(decimal_to_uint("0x1"), Err(type_err("expect a unsigned integer decimal")));
}

#[test]
fn test_decimal_to_pint() {
    assert_eq!(decimal_to_pint("1"), Ok(1));
    assert_eq!(decimal_to_pint("007"), Ok(7));
    assert_eq!(decimal_to_pint("0"), Err(type_err("expect a positive integer decimal")));
    assert_eq!(decimal_to_pint("1.5"), Err(type_err("expect a positive integer decimal")));
    assert_eq!(
        decimal_to_pint("9007199254740992"),
        Err(type_err("overflow positive integer decimal 53 bits"))
    );
}

#[test]
fn test_is_decimal_greater() {
    assert!(is_decimal_greater("10", "9"));
    assert!(is_decimal_greater("9007199254740992", "9007199254740991"));
    assert!(!is_decimal_greater("9", "10"));
    assert!(!is_decimal_greater("123", "123"), "Equal decimals are not greater.");
}

#[test]
fn test_heximal_to_uint() {
    assert_eq!(heximal_to_uint("0x0"), Ok(0));
    assert_eq!(heximal_to_uint("0xff"), Ok(255));
    assert_eq!(heximal_to_uint("0xFF"), Ok(255));
    assert_eq!(heximal_to_uint("0x00000000001fffffffffffff"), Ok(9007199254740991));
    assert_eq!(heximal_to_uint("0x20000000000000"), Err(type_err("overflow heximal 53 bits")));
    assert_eq!(heximal_to_uint("0x100000000000000"), Err(type_err("overflow heximal 53 bits")));
    assert_eq!(heximal_to_uint("0x"), Err(type_err("expect Heximal")));
    assert_eq!(heximal_to_uint("ff"), Err(type_err("expect Heximal")));
}

#[test]
fn test_fits_heximal() {
    assert!(fits_heximal("0xff", 8));
    assert!(!fits_heximal("0x100", 8));
    assert!(fits_heximal("0x000ff", 8), "Leading zeros don't count towards the width.");
    assert!(fits_heximal("0x1fffffffffffff", 53));
    assert!(!fits_heximal("0x2fffffffffffff", 53));
    assert!(fits_heximal("0x0", 8));
}

#[test]
fn test_heximal_to_buffer() {
    assert_eq!(heximal_to_buffer("0x"), Ok(vec![]));
    assert_eq!(heximal_to_buffer("0x0"), Ok(vec![0]));
    assert_eq!(heximal_to_buffer("0x123"), Ok(vec![0x01, 0x23]), "Odd lengths pad on the left.");
    assert_eq!(heximal_to_buffer("0x1ffcc"), Ok(vec![0x01, 0xff, 0xcc]));
    assert_eq!(heximal_to_buffer("0x00ffAb"), Ok(vec![0x00, 0xff, 0xab]));
    assert_eq!(heximal_to_buffer("123"), Err(type_err("expect HeximalByteArray")));

    assert_eq!(heximal_to_fixed_buffer("0x0000", 2), Ok(vec![0, 0]));
    assert_eq!(heximal_to_fixed_buffer("0x0f", 2), Err(type_err("expect a heximal 2 bytes")));
    assert_eq!(heximal_to_fixed_buffer("0x0f0f0f", 2), Err(type_err("expect a heximal 2 bytes")));
    assert_eq!(heximal_to_fixed_buffer("0x", 0), Err(type_err("expect Heximal")));
}

#[test]
fn test_buffer_to_heximal() {
    assert_eq!(buffer_to_heximal(&[]), "0x");
    assert_eq!(buffer_to_heximal(&[0, 1, 0xab, 0xff]), "0x0001abff");
    assert_eq!(
        heximal_to_buffer(&buffer_to_heximal(&[9, 8, 7])),
        Ok(vec![9, 8, 7]),
        "Encoded bytes should decode to themselves."
    );
}

#[test]
fn test_group_digits() {
    let default = GroupFormat::default();
    assert_eq!(group_digits("0", &default), "0");
    assert_eq!(group_digits("123", &default), "123");
    assert_eq!(group_digits("1234", &default), "1,234");
    assert_eq!(group_digits("123456", &default), "123,456");
    assert_eq!(group_digits("9007199254740991", &default), "9,007,199,254,740,991");

    assert_eq!(group_digits("1", &GroupFormat::with_min_digits(6)), "000,001");
    assert_eq!(group_digits("1234", &GroupFormat::with_min_digits(2)), "1,234");

    let spaced = GroupFormat {
        min_digits: 1,
        separator: ' ',
    };
    assert_eq!(group_digits("1234567", &spaced), "1 234 567");
}
