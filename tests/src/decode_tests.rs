//! Decoder self-tests.

use numconv_codec::{Base, ConvError, ConvFlags, decode, decode_cstr, decode_with};
use numconv_lib::testing::TestResult;
use numconv_lib::{assert_eq_test, assert_err_test, assert_ok, pass};

pub fn test_reference_numerals() -> TestResult {
    assert_eq_test!(assert_ok!(decode(b"123", 3, Base::DECIMAL)), 123);
    assert_eq_test!(assert_ok!(decode(b"-7", 2, Base::DECIMAL)), -7);
    assert_eq_test!(assert_ok!(decode(b"1A", 2, Base::HEX)), 26);
    assert_eq_test!(assert_ok!(decode(b"1a", 2, Base::HEX)), 26);
    pass!()
}

pub fn test_invalid_byte_is_an_error() -> TestResult {
    assert_err_test!(
        decode(b"12Z", 3, Base::DECIMAL),
        ConvError::InvalidDigit {
            position: 2,
            byte: b'Z'
        }
    );
    assert_err_test!(
        decode(b"9", 1, Base::OCTAL),
        ConvError::InvalidDigit {
            position: 0,
            byte: b'9'
        }
    );
    pass!()
}

pub fn test_sign_only_and_empty() -> TestResult {
    assert_err_test!(decode(b"-", 1, Base::DECIMAL), ConvError::Empty);
    assert_err_test!(decode(b"", 0, Base::HEX), ConvError::Empty);
    assert_err_test!(
        decode(b"12", 5, Base::DECIMAL),
        ConvError::Truncated {
            digits: 5,
            available: 2
        }
    );
    pass!()
}

pub fn test_overflow_rejected() -> TestResult {
    assert_err_test!(decode(b"2147483648", 10, Base::DECIMAL), ConvError::Overflow);
    assert_err_test!(decode(b"1FFFFFFFF", 9, Base::HEX), ConvError::Overflow);
    assert_eq_test!(assert_ok!(decode(b"-2147483648", 11, Base::DECIMAL)), i32::MIN);
    assert_eq_test!(assert_ok!(decode(b"FFFFFFFF", 8, Base::HEX)), -1);
    pass!()
}

pub fn test_flag_restrictions() -> TestResult {
    let strict = ConvFlags::ACCEPT_UPPER;
    assert_err_test!(
        decode_with(b"-1", 2, Base::DECIMAL, strict),
        ConvError::InvalidDigit {
            position: 0,
            byte: b'-'
        }
    );
    assert_err_test!(
        decode_with(b"ab", 2, Base::HEX, strict),
        ConvError::InvalidDigit {
            position: 0,
            byte: b'a'
        }
    );
    assert_eq_test!(assert_ok!(decode_with(b"AB", 2, Base::HEX, strict)), 0xAB);
    pass!()
}

pub fn test_cstr_stops_at_nul() -> TestResult {
    assert_eq_test!(assert_ok!(decode_cstr(b"-99\0ZZ", Base::DECIMAL)), -99);
    pass!()
}

numconv_lib::define_test_suite!(
    decode,
    [
        test_reference_numerals,
        test_invalid_byte_is_an_error,
        test_sign_only_and_empty,
        test_overflow_rejected,
        test_flag_restrictions,
        test_cstr_stops_at_nul,
    ]
);
