//! Encoder self-tests.
//!
//! These check the fixed outputs embedders rely on: the zero short-circuit,
//! sign placement after reversal, two's-complement digits for non-decimal
//! bases, and the capacity check.

use numconv_codec::{Base, ConvError, ConvFlags, MAX_BUF_LEN, encode, encode_with, encoded_len};
use numconv_lib::testing::TestResult;
use numconv_lib::{assert_eq_test, assert_err_test, assert_ok, assert_test, pass};

pub fn test_zero_short_circuit() -> TestResult {
    let mut buf = [0xAAu8; MAX_BUF_LEN];
    for raw in Base::MIN..=Base::MAX {
        let base = assert_ok!(Base::new(raw));
        let len = assert_ok!(encode(0, &mut buf, base));
        assert_eq_test!(len, 2usize, "zero length");
        assert_eq_test!(&buf[..2], b"0\0".as_slice(), "zero text");
    }
    pass!()
}

pub fn test_decimal_sign_leads() -> TestResult {
    let mut buf = [0u8; 16];
    let len = assert_ok!(encode(-42, &mut buf, Base::DECIMAL));
    assert_eq_test!(len, 4usize);
    assert_eq_test!(&buf[..len], b"-42\0".as_slice());

    let len = assert_ok!(encode(i32::MIN, &mut buf, Base::DECIMAL));
    assert_eq_test!(&buf[..len], b"-2147483648\0".as_slice());
    pass!()
}

pub fn test_hex_negative_is_bit_pattern() -> TestResult {
    let mut buf = [0u8; 16];
    let len = assert_ok!(encode(-1, &mut buf, Base::HEX));
    assert_eq_test!(len, 9usize);
    assert_eq_test!(&buf[..len], b"FFFFFFFF\0".as_slice());
    assert_test!(!buf[..len].contains(&b'-'), "hex output must be unsigned");
    pass!()
}

pub fn test_lowercase_output() -> TestResult {
    let mut buf = [0u8; 16];
    let flags = ConvFlags::DEFAULT | ConvFlags::EMIT_LOWER;
    let len = assert_ok!(encode_with(0xCAFE, &mut buf, Base::HEX, flags));
    assert_eq_test!(&buf[..len], b"cafe\0".as_slice());
    pass!()
}

pub fn test_capacity_checked() -> TestResult {
    let mut small = [0u8; 11];
    assert_err_test!(
        encode(i32::MIN, &mut small, Base::DECIMAL),
        ConvError::BufferTooSmall {
            required: 12,
            available: 11
        }
    );
    assert_eq_test!(encoded_len(i32::MIN, Base::DECIMAL), 12usize);
    assert_eq_test!(encoded_len(-1, Base::BINARY), MAX_BUF_LEN);
    pass!()
}

numconv_lib::define_test_suite!(
    encode,
    [
        test_zero_short_circuit,
        test_decimal_sign_leads,
        test_hex_negative_is_bit_pattern,
        test_lowercase_output,
        test_capacity_checked,
    ]
);
