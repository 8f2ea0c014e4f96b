//! Register bus access

use crate::common::mock_i2c::ag;
use crate::common::{MockError, MockI2c, Operation};
use fall_detection::{ACCEL_GYRO_ADDRESS, I2cBus, MAGNETOMETER_ADDRESS};

#[test]
fn test_single_register_read() {
    let mock = MockI2c::new();
    let mut bus = I2cBus::new(mock.clone());

    let value = bus.read_register(ACCEL_GYRO_ADDRESS, ag::WHO_AM_I).unwrap();

    assert_eq!(value, 0x68);
    assert_eq!(
        mock.operations(),
        vec![Operation::Read {
            device: ACCEL_GYRO_ADDRESS,
            register: ag::WHO_AM_I,
            len: 1,
        }]
    );
}

#[test]
fn test_burst_read_sets_auto_increment() {
    let mock = MockI2c::new();
    mock.set_gyro_data([0x0102, -2, 0x7FFF]);
    let mut bus = I2cBus::new(mock.clone());

    let mut buffer = [0u8; 6];
    bus.read_registers(ACCEL_GYRO_ADDRESS, ag::OUT_X_L_G, &mut buffer)
        .unwrap();

    assert_eq!(buffer, [0x02, 0x01, 0xFE, 0xFF, 0xFF, 0x7F]);
    assert_eq!(
        mock.operations(),
        vec![Operation::Read {
            device: ACCEL_GYRO_ADDRESS,
            register: ag::OUT_X_L_G | 0x80,
            len: 6,
        }]
    );
}

#[test]
fn test_write_register() {
    let mock = MockI2c::new();
    let mut bus = I2cBus::new(mock.clone());

    bus.write_register(MAGNETOMETER_ADDRESS, 0x22, 0x03).unwrap();

    assert_eq!(mock.mag(0x22), 0x03);
    assert_eq!(mock.writes_to(MAGNETOMETER_ADDRESS, 0x22), vec![0x03]);
}

#[test]
fn test_missing_device_is_reported() {
    let mut bus = I2cBus::new(MockI2c::new());

    assert_eq!(bus.read_register(0x50, 0x0F), Err(MockError::Nack));
    assert_eq!(bus.write_register(0x50, 0x10, 0x00), Err(MockError::Nack));
}

#[test]
fn test_injected_failures_propagate() {
    let mock = MockI2c::new();
    let mut bus = I2cBus::new(mock.clone());

    mock.fail_next_read();
    assert_eq!(
        bus.read_register(ACCEL_GYRO_ADDRESS, ag::WHO_AM_I),
        Err(MockError::Injected)
    );
    // Only the next transfer fails
    assert!(bus.read_register(ACCEL_GYRO_ADDRESS, ag::WHO_AM_I).is_ok());

    mock.fail_next_write();
    assert_eq!(
        bus.write_register(ACCEL_GYRO_ADDRESS, ag::CTRL_REG9, 0x02),
        Err(MockError::Injected)
    );
    assert_eq!(mock.ag(ag::CTRL_REG9), 0x00);
}
