//! FIFO bias calibration

use crate::common::mock_i2c::ag;
use crate::common::{MockDelay, MockError, assert_float_eq, started_driver};
use fall_detection::{Error, MotionSensor, RawSample};

const ONE_G_COUNTS: i16 = 16393;

fn prepare_fifo(bus: &crate::common::MockI2c) {
    bus.set_fifo_samples(0x1F);
    bus.set_accel_sequence(vec![[100, -50, ONE_G_COUNTS + 200]]);
    bus.set_gyro_sequence(vec![[10, -20, 30]]);
}

#[test]
fn test_bias_from_full_fifo() {
    let (mut driver, bus) = started_driver();
    prepare_fifo(&bus);

    let bias = driver.calibrate(&mut MockDelay::default(), true).unwrap();

    assert_eq!(bias.accel_raw, [100, -50, 200]);
    assert_eq!(bias.gyro_raw, [10, -20, 30]);
    assert_float_eq(bias.gyro[2], 30.0 * 0.07, 1e-4);
    assert_float_eq(bias.accel[0], 100.0 * 0.000_061, 1e-6);
    assert_eq!(*driver.bias(), bias);
}

#[test]
fn test_one_burst_per_fifo_level() {
    let (mut driver, bus) = started_driver();
    prepare_fifo(&bus);

    driver.calibrate(&mut MockDelay::default(), true).unwrap();

    let bursts = |register: u8| {
        bus.operations()
            .iter()
            .filter(|op| {
                matches!(op, crate::common::Operation::Read { register: r, len: 6, .. }
                    if *r == register | 0x80)
            })
            .count()
    };
    assert_eq!(bursts(ag::OUT_X_L_G), 31);
    assert_eq!(bursts(ag::OUT_X_L_XL), 31);
}

#[test]
fn test_fifo_released_after_calibration() {
    let (mut driver, bus) = started_driver();
    driver.set_continuous_mode().unwrap();
    prepare_fifo(&bus);

    driver.calibrate(&mut MockDelay::default(), true).unwrap();

    // FIFO mode was Fifo with threshold 0x1F while sampling
    assert!(bus.writes_to(0x6B, ag::FIFO_CTRL).contains(&0x3F));
    assert_eq!(bus.ag(ag::FIFO_CTRL), 0x00);
    assert_eq!(bus.ag(ag::CTRL_REG9) & 0x02, 0x00);
    assert!(!driver.is_continuous_mode());
}

#[test]
fn test_bias_applied_to_reads() {
    let (mut driver, bus) = started_driver();
    prepare_fifo(&bus);
    driver.calibrate(&mut MockDelay::default(), true).unwrap();

    assert_eq!(driver.read_accel().unwrap(), RawSample { x: 0, y: 0, z: ONE_G_COUNTS });
    assert_eq!(driver.read_gyro().unwrap(), RawSample { x: 0, y: 0, z: 0 });

    let accel = driver.read_acceleration().unwrap();
    assert_float_eq(accel.z, 1.0, 1e-3);
}

#[test]
fn test_bias_kept_but_not_applied() {
    let (mut driver, bus) = started_driver();
    driver.set_auto_calibrate(false);
    prepare_fifo(&bus);

    let bias = driver.calibrate(&mut MockDelay::default(), false).unwrap();

    assert_eq!(bias.gyro_raw, [10, -20, 30]);
    assert!(!driver.auto_calibrate());
    assert_eq!(driver.read_gyro().unwrap(), RawSample { x: 10, y: -20, z: 30 });
}

#[test]
fn test_recalibration_ignores_previous_bias() {
    let (mut driver, bus) = started_driver();
    prepare_fifo(&bus);
    let first = driver.calibrate(&mut MockDelay::default(), true).unwrap();
    let second = driver.calibrate(&mut MockDelay::default(), true).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_stuck_fifo_times_out() {
    let (mut driver, bus) = started_driver();
    bus.set_fifo_samples(5);
    let mut delay = MockDelay::default();

    let result = driver.calibrate(&mut delay, true);

    assert_eq!(result, Err(Error::CalibrationTimeout));
    // Gave up after a bounded wait
    assert!(delay.elapsed_ns >= 1_000_000_000);
    assert!(delay.elapsed_ns <= 10_000_000_000);
    assert_eq!(bus.ag(ag::FIFO_CTRL), 0x00);
    assert_eq!(*driver.bias(), Default::default());
}

#[test]
fn test_failed_drain_releases_fifo() {
    let (mut driver, bus) = started_driver();
    prepare_fifo(&bus);
    // Setup takes two reads, the drain then fails part way through
    bus.fail_read_after(10);

    let result = driver.calibrate(&mut MockDelay::default(), true);

    assert_eq!(result, Err(Error::Bus(MockError::Injected)));
    assert_eq!(bus.ag(ag::FIFO_CTRL), 0x00);
    assert_eq!(bus.ag(ag::CTRL_REG9) & 0x02, 0x00);
    assert!(!driver.is_continuous_mode());
    assert_eq!(*driver.bias(), Default::default());
}
