//! Round-trip self-tests.

use numconv_codec::{Base, MAX_BUF_LEN, decode, encode};
use numconv_lib::testing::TestResult;
use numconv_lib::{assert_eq_test, assert_ok, pass};

const SAMPLES: [i32; 10] = [
    0,
    1,
    -1,
    42,
    -42,
    0x7F,
    -0x80,
    123_456_789,
    i32::MAX,
    i32::MIN,
];

pub fn test_roundtrip_all_bases() -> TestResult {
    let mut buf = [0u8; MAX_BUF_LEN];
    for raw in Base::MIN..=Base::MAX {
        let base = assert_ok!(Base::new(raw));
        for &value in SAMPLES.iter() {
            let len = assert_ok!(encode(value, &mut buf, base));
            let back = assert_ok!(decode(&buf, len - 1, base));
            assert_eq_test!(back, value, "roundtrip");
        }
    }
    pass!()
}

pub fn test_roundtrip_stride() -> TestResult {
    let mut buf = [0u8; MAX_BUF_LEN];
    let mut value = i32::MIN;
    while let Some(next) = value.checked_add(16_777_259) {
        for base in [Base::DECIMAL, Base::HEX] {
            let len = assert_ok!(encode(value, &mut buf, base));
            assert_eq_test!(assert_ok!(decode(&buf, len - 1, base)), value);
        }
        value = next;
    }
    pass!()
}

numconv_lib::define_test_suite!(
    roundtrip,
    [test_roundtrip_all_bases, test_roundtrip_stride]
);
