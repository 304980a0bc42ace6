//! Codec configuration self-tests: cmdline tokens driving the codec.

use numconv_codec::{Base, ConvError, MAX_BUF_LEN, decode_with, encode_with};
use numconv_lib::testing::TestResult;
use numconv_lib::{ConvConfig, KlogLevel, klog_get_level, klog_set_level};
use numconv_lib::{assert_eq_test, assert_err_test, assert_ok, pass};

const CMDLINE: &str = "numconv.lowercase=on numconv.sign=off numconv.base=16";

pub fn test_cmdline_drives_encoder() -> TestResult {
    let cfg = ConvConfig::from_cmdline(Some(CMDLINE));
    assert_eq_test!(cfg.base, Base::HEX);

    let mut buf = [0u8; MAX_BUF_LEN];
    let len = assert_ok!(encode_with(0xBEEF, &mut buf, cfg.base, cfg.flags()));
    assert_eq_test!(&buf[..len], b"beef\0".as_slice());
    pass!()
}

pub fn test_cmdline_drives_decoder() -> TestResult {
    let cfg = ConvConfig::from_cmdline(Some(CMDLINE));
    assert_err_test!(
        decode_with(b"-1", 2, cfg.base, cfg.flags()),
        ConvError::InvalidDigit {
            position: 0,
            byte: b'-'
        }
    );
    assert_eq_test!(assert_ok!(decode_with(b"BeEf", 4, cfg.base, cfg.flags())), 0xBEEF);

    let upper = ConvConfig::from_cmdline(Some("numconv.base=16 numconv.case=upper"));
    assert_err_test!(
        decode_with(b"ff", 2, upper.base, upper.flags()),
        ConvError::InvalidDigit {
            position: 0,
            byte: b'f'
        }
    );
    pass!()
}

pub fn test_apply_sets_log_level() -> TestResult {
    let previous = klog_get_level();
    let cfg = ConvConfig::from_cmdline(Some("numconv.log=error"));
    cfg.apply();
    let applied = klog_get_level();
    klog_set_level(previous);
    assert_eq_test!(applied, KlogLevel::Error);
    pass!()
}

numconv_lib::define_test_suite!(
    config,
    [
        test_cmdline_drives_encoder,
        test_cmdline_drives_decoder,
        test_apply_sets_log_level,
    ]
);
