//! In-place reversal self-tests.

use numconv_codec::{ConvError, reverse_bytes, reverse_prefix};
use numconv_lib::testing::TestResult;
use numconv_lib::{assert_eq_test, assert_err_test, assert_ne_test, assert_ok, pass};

pub fn test_reverse_twice_restores() -> TestResult {
    let original = *b"-2147483648";
    let mut buf = original;
    reverse_bytes(&mut buf);
    assert_ne_test!(buf, original);
    assert_eq_test!(&buf, b"8463847412-");
    reverse_bytes(&mut buf);
    assert_eq_test!(buf, original);
    pass!()
}

pub fn test_short_inputs_unchanged() -> TestResult {
    let mut empty: [u8; 0] = [];
    reverse_bytes(&mut empty);
    let mut one = *b"7";
    reverse_bytes(&mut one);
    assert_eq_test!(&one, b"7");
    pass!()
}

pub fn test_prefix_leaves_tail() -> TestResult {
    let mut tail = *b"21\0Z";
    assert_ok!(reverse_prefix(&mut tail, 2));
    assert_eq_test!(&tail, b"12\0Z");
    assert_err_test!(
        reverse_prefix(&mut tail, 5),
        ConvError::Truncated {
            digits: 5,
            available: 4
        }
    );
    assert_eq_test!(&tail, b"12\0Z", "failed reversal must not write");
    pass!()
}

numconv_lib::define_test_suite!(
    reverse,
    [
        test_reverse_twice_restores,
        test_short_inputs_unchanged,
        test_prefix_leaves_tail,
    ]
);
