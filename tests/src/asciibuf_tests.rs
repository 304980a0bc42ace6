//! Stack-buffer self-tests.

use numconv_codec::{AnyBuf, Base, ConvError, DEC_BUF_LEN, DecBuf, HEX_BUF_LEN, HexBuf};
use numconv_lib::testing::TestResult;
use numconv_lib::{assert_eq_test, assert_err_test, assert_ok, assert_test, pass};

pub fn test_stack_buffers() -> TestResult {
    let mut dec = DecBuf::new();
    assert_eq_test!(assert_ok!(dec.encode_dec(-42)), b"-42\0".as_slice());
    assert_eq_test!(dec.as_str(), "-42");

    let mut hex = HexBuf::new();
    assert_ok!(hex.encode_hex(-1));
    assert_eq_test!(assert_ok!(hex.decode(Base::HEX)), -1);

    let mut any = AnyBuf::new();
    assert_ok!(any.encode_bin(10));
    assert_eq_test!(any.as_str(), "1010");
    pass!()
}

pub fn test_undersized_buffer_keeps_contents() -> TestResult {
    let mut hex = HexBuf::new();
    assert_test!(hex.is_empty());
    assert_ok!(hex.encode_hex(0x1F));
    assert_err_test!(
        hex.encode_dec(i32::MIN),
        ConvError::BufferTooSmall {
            required: DEC_BUF_LEN,
            available: HEX_BUF_LEN
        }
    );
    assert_eq_test!(hex.as_str(), "1F");
    pass!()
}

numconv_lib::define_test_suite!(
    asciibuf,
    [test_stack_buffers, test_undersized_buffer_keeps_contents]
);
