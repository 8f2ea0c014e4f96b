//! Data-ready reporting and FIFO modes

use crate::common::mock_i2c::{ag, mag};
use crate::common::started_driver;
use fall_detection::{FifoMode, MAGNETOMETER_ADDRESS, MotionSensor};

#[test]
fn test_one_shot_uses_status_register() {
    let (mut driver, bus) = started_driver();

    bus.set_status(0x01);
    assert!(driver.acceleration_available().unwrap());
    assert!(!driver.gyroscope_available().unwrap());

    bus.set_status(0x02);
    assert!(!driver.acceleration_available().unwrap());
    assert!(driver.gyroscope_available().unwrap());
}

#[test]
fn test_continuous_mode_uses_fifo_level() {
    let (mut driver, bus) = started_driver();

    driver.set_continuous_mode().unwrap();
    assert!(driver.is_continuous_mode());
    assert_eq!(bus.ag(ag::CTRL_REG9), 0x02);
    assert_eq!(bus.ag(ag::FIFO_CTRL), 0xC0);

    // XLDA set but the FIFO is empty
    bus.set_status(0x07);
    bus.set_fifo_samples(0);
    assert!(!driver.acceleration_available().unwrap());

    bus.set_fifo_samples(3);
    assert!(driver.acceleration_available().unwrap());
}

#[test]
fn test_one_shot_mode_disables_fifo() {
    let (mut driver, bus) = started_driver();
    driver.set_continuous_mode().unwrap();

    driver.set_one_shot_mode().unwrap();

    assert!(!driver.is_continuous_mode());
    assert_eq!(bus.ag(ag::CTRL_REG9), 0x00);
    assert_eq!(bus.ag(ag::FIFO_CTRL), 0x00);
}

#[test]
fn test_fifo_threshold_is_clamped() {
    let (mut driver, bus) = started_driver();

    driver.set_fifo(FifoMode::Fifo, 0x40).unwrap();
    assert_eq!(bus.ag(ag::FIFO_CTRL), 0x3F);

    driver.set_fifo(FifoMode::Continuous, 0x05).unwrap();
    assert_eq!(bus.ag(ag::FIFO_CTRL), 0xC5);
}

#[test]
fn test_fifo_status_fields() {
    let (mut driver, bus) = started_driver();
    bus.set_register(0x6B, ag::FIFO_SRC, 0xC0 | 0x20);

    let status = driver.fifo_status().unwrap();
    assert_eq!(status.samples, 0x20);
    assert!(status.overrun);
    assert!(status.threshold_reached);
}

#[test]
fn test_magnetometer_data_ready() {
    let (mut driver, bus) = started_driver();

    assert!(driver.magnetic_field_available().unwrap());
    bus.set_register(MAGNETOMETER_ADDRESS, mag::STATUS_REG_M, 0x00);
    assert!(!driver.magnetic_field_available().unwrap());
}
