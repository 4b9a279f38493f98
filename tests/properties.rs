//! Property-based tests for the conversions and orderings of the numeric types.

use proptest::prelude::*;

use minitype::formatter::{self, GroupFormat};
use minitype::num::{Bounds, Int, PInt, PInt64, UInt, UInt8, UInt16, UInt32, UInt64, UInt256};
use minitype::result::Open;
use minitype::validator::MAX_SAFE_INTEGER;

fn check_round_trip<B: Bounds>(n: Int<B>) -> Result<(), TestCaseError> {
    prop_assert_eq!(Int::<B>::from_heximal(&n.to_heximal()), Ok(n.clone()));
    prop_assert_eq!(Int::<B>::from_decimal(&format!("00{}", n.to_decimal())), Ok(n.clone()));
    prop_assert_eq!(Int::<B>::from_big_int(n.to_big_uint()), Ok(n));
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn uint64_heximal_round_trip(value in any::<u64>()) {
        let n = UInt64::from_big_int(value).open();
        prop_assert_eq!(UInt64::from_heximal(&n.to_heximal()), Ok(n));
    }

    #[test]
    fn uint64_decimal_round_trip(value in any::<u64>(), zeros in 0usize..8) {
        let decimal = format!("{}{}", "0".repeat(zeros), value);
        let n = UInt64::from_decimal(&decimal).open();
        prop_assert_eq!(*n.value(), value);
        prop_assert_eq!(n.to_decimal(), value.to_string());
    }

    #[test]
    fn narrow_round_trips(
        a in any::<u8>(),
        b in any::<u16>(),
        c in any::<u32>(),
        d in 0..=MAX_SAFE_INTEGER,
        e in 1..=MAX_SAFE_INTEGER,
    ) {
        check_round_trip(UInt8::from_number(a).open())?;
        check_round_trip(UInt16::from_number(b).open())?;
        check_round_trip(UInt32::from_number(c).open())?;
        check_round_trip(UInt::from_number(d).open())?;
        check_round_trip(PInt::from_number(e).open())?;
    }

    #[test]
    fn uint256_buffer_round_trip(bytes in any::<[u8; 32]>()) {
        let n = UInt256::from_fixed_buffer(&bytes).open();
        prop_assert_eq!(n.to_fixed_buffer(), bytes.to_vec());
        prop_assert_eq!(UInt256::from_heximal(&n.to_heximal()), Ok(n.clone()));
        prop_assert_eq!(UInt256::from_decimal(&n.to_decimal()), Ok(n));
    }

    #[test]
    fn uint8_number_boundary(value in 0u32..1024) {
        let result = UInt8::from_number(value);
        if value <= 255 {
            prop_assert_eq!(*result.open().value() as u32, value);
        } else {
            let e = result.unwrap_err();
            prop_assert_eq!(e.message(), "overflow unsigned integer 8 bits");
        }
    }

    #[test]
    fn comparison_is_total(a in any::<u64>(), b in any::<u64>()) {
        let (x, y) = (UInt64::from_big_int(a).open(), UInt64::from_big_int(b).open());
        let relations = [x < y, x == y, x > y];
        prop_assert_eq!(relations.iter().filter(|r| **r).count(), 1);
        prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        prop_assert_eq!(x.lte(&y), a <= b);
        prop_assert_eq!(x.gte(&y), a >= b);
    }

    #[test]
    fn division_truncates(a in 1u64.., b in 1u64..) {
        let (x, y) = (PInt64::from_big_int(a).open(), PInt64::from_big_int(b).open());
        prop_assume!(a >= b);
        prop_assert_eq!(*x.div(&y).value(), a / b);
    }

    #[test]
    fn tidy_decimal_is_idempotent(decimal in "[0-9]{1,40}") {
        let tidy = formatter::to_tidy_uint_decimal(&decimal).open();
        prop_assert_eq!(formatter::to_tidy_uint_decimal(tidy), Ok(tidy));
        prop_assert!(tidy == "0" || !tidy.starts_with('0'));
    }

    #[test]
    fn odd_heximal_pads_left(digits in "[0-9a-f]([0-9a-f]{2}){0,10}") {
        let buffer = formatter::heximal_to_buffer(&format!("0x{}", digits)).open();
        prop_assert_eq!(buffer.len(), digits.len().div_ceil(2));
        prop_assert!(buffer[0] < 16);
        prop_assert_eq!(formatter::buffer_to_heximal(&buffer), format!("0x0{}", digits));
    }

    #[test]
    fn grouping_keeps_digits(value in any::<u64>(), min_digits in 1usize..30) {
        let format = GroupFormat::with_min_digits(min_digits);
        let grouped = formatter::group_digits(&value.to_string(), &format);
        let digits: String = grouped.chars().filter(|ch| *ch != ',').collect();
        let decimal = value.to_string();
        prop_assert_eq!(digits.trim_start_matches('0'), decimal.trim_start_matches('0'));
        prop_assert!(digits.len() >= min_digits);
        prop_assert!(grouped.split(',').skip(1).all(|group| group.len() == 3));
    }
}
