//! PLL register images for every supported master clock.
//!
//! Each case checks the exact 8-byte R1 write issued by
//! `Adau1361Lower::configure_pll` and that the programmed dividers land
//! within 5 Hz of 1024 × fs.
//!
//! Run with: cargo test -p adau1361 --test configure_pll

use std::panic::{catch_unwind, AssertUnwindSafe};

use adau1361::codec::{Adau1361Lower, PllParameters};
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

const ADDR: u8 = 0x38;

/// (mclock, R1 payload) pairs for the 48 kHz family.
const FS_48K: [(u32, [u8; 6]); 12] = [
    (8_000_000, [0x00, 0x7D, 0x00, 0x12, 0x31, 0x01]),
    (12_000_000, [0x00, 0x7D, 0x00, 0x0C, 0x21, 0x01]),
    (13_000_000, [0x06, 0x59, 0x04, 0xF5, 0x19, 0x01]),
    (14_400_000, [0x00, 0x4B, 0x00, 0x3E, 0x33, 0x01]),
    (19_200_000, [0x00, 0x19, 0x00, 0x03, 0x2B, 0x01]),
    (19_680_000, [0x00, 0xCD, 0x00, 0xCC, 0x23, 0x01]),
    (19_800_000, [0x03, 0x39, 0x03, 0x1C, 0x23, 0x01]),
    (24_000_000, [0x00, 0x7D, 0x00, 0x0C, 0x23, 0x01]),
    (26_000_000, [0x06, 0x59, 0x04, 0xF5, 0x1B, 0x01]),
    (27_000_000, [0x04, 0x65, 0x02, 0xD1, 0x1B, 0x01]),
    (12_288_000, [0x04, 0x65, 0x02, 0xD1, 0x20, 0x01]),
    (24_576_000, [0x04, 0x65, 0x02, 0xD1, 0x10, 0x01]),
];

/// (mclock, R1 payload) pairs for the 44.1 kHz family.
const FS_44K1: [(u32, [u8; 6]); 12] = [
    (8_000_000, [0x02, 0x71, 0x01, 0x93, 0x29, 0x01]),
    (12_000_000, [0x02, 0x71, 0x01, 0xDD, 0x19, 0x01]),
    (13_000_000, [0x1F, 0xBD, 0x0F, 0x09, 0x19, 0x01]),
    (14_400_000, [0x00, 0x7D, 0x00, 0x22, 0x33, 0x01]),
    (19_200_000, [0x00, 0x7D, 0x00, 0x58, 0x23, 0x01]),
    (19_680_000, [0x04, 0x01, 0x02, 0x5C, 0x23, 0x01]),
    (19_800_000, [0x05, 0x5F, 0x03, 0x04, 0x23, 0x01]),
    (24_000_000, [0x02, 0x71, 0x01, 0xDD, 0x1B, 0x01]),
    (26_000_000, [0x1F, 0xBD, 0x0F, 0x09, 0x1B, 0x01]),
    (27_000_000, [0x07, 0x53, 0x02, 0x87, 0x1B, 0x01]),
    (12_288_000, [0x03, 0xE8, 0x02, 0xA3, 0x19, 0x01]),
    (24_576_000, [0x03, 0xE8, 0x02, 0xA3, 0x1B, 0x01]),
];

fn command(payload: &[u8; 6]) -> Vec<u8> {
    let mut bytes = vec![0x40, 0x02];
    bytes.extend_from_slice(payload);
    bytes
}

fn check_family(fs: u32, target: f64, vectors: &[(u32, [u8; 6])]) {
    for (mclock, payload) in vectors {
        let params = PllParameters::from_registers(payload);
        let error = (params.output_hz(*mclock) - target).abs();
        assert!(error < 5.0, "{mclock} Hz: {error} Hz off target");
        assert!(params.enabled, "{mclock} Hz: PLL not enabled");

        let i2c = I2cMock::new(&[I2cTransaction::write(ADDR, command(payload))]);
        let mut codec = Adau1361Lower::new(i2c, ADDR);
        assert_eq!(codec.configure_pll(fs, *mclock), Ok(8), "{mclock} Hz");
        codec.release().done();
    }
}

#[test]
fn fs_48k_family_vectors() {
    check_family(48_000, 49_152_000.0, &FS_48K);
}

#[test]
fn fs_44k1_family_vectors() {
    check_family(44_100, 45_158_400.0, &FS_44K1);
}

#[test]
fn every_rate_in_family_uses_family_target() {
    for fs in [8_000, 16_000, 24_000, 32_000, 96_000] {
        let i2c = I2cMock::new(&[I2cTransaction::write(ADDR, command(&FS_48K[1].1))]);
        let mut codec = Adau1361Lower::new(i2c, ADDR);
        codec.configure_pll(fs, 12_000_000).unwrap();
        codec.release().done();
    }
    for fs in [11_025, 22_050, 88_200] {
        let i2c = I2cMock::new(&[I2cTransaction::write(ADDR, command(&FS_44K1[1].1))]);
        let mut codec = Adau1361Lower::new(i2c, ADDR);
        codec.configure_pll(fs, 12_000_000).unwrap();
        codec.release().done();
    }
}

/// Run `op` on a driver whose bus expects no traffic and return its
/// panic message.
fn panic_message(op: impl FnOnce(&mut Adau1361Lower<I2cMock>)) -> String {
    let mut i2c = I2cMock::new(&[]);
    let mut codec = Adau1361Lower::new(i2c.clone(), ADDR);
    let payload = catch_unwind(AssertUnwindSafe(|| op(&mut codec)))
        .expect_err("operation must panic");
    i2c.done();
    payload
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| payload.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_default()
}

#[test]
fn bad_fs_panics_without_bus_traffic() {
    let message = panic_message(|c| {
        let _ = c.configure_pll(192_000, 8_000_000);
    });
    assert!(message.contains("Bad Fs"), "{message}");
}

#[test]
fn wrong_master_clock_48k() {
    let message = panic_message(|c| {
        let _ = c.configure_pll(48_000, 123);
    });
    assert!(
        message.contains("Wrong Master Clock with Fs 48kHz Series"),
        "{message}"
    );
}

#[test]
fn wrong_master_clock_44k1() {
    let message = panic_message(|c| {
        let _ = c.configure_pll(44_100, 123);
    });
    assert!(
        message.contains("Wrong Master Clock with Fs 44.1kHz Series"),
        "{message}"
    );
}

#[test]
fn configure_src_bad_fs() {
    let message = panic_message(|c| {
        let _ = c.configure_src(192_000);
    });
    assert_eq!(message, "Bad Fs: 192000 Hz");
}
