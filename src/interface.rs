//! Register bus for the LSM9DS1
//!
//! Both LSM9DS1 sub-devices share one I2C bus. [`I2cBus`] owns the bus and performs
//! raw register transfers against an explicit 7-bit device address. A
//! [`DeviceInterface`] borrows the bus for one device address and implements the
//! `device-driver` [`RegisterInterface`] so the typed register blocks in
//! [`registers`](crate::registers) go through the same transfers.

use device_driver::RegisterInterface;

/// Register address flag requesting address auto-increment on multi-byte reads
pub const AUTO_INCREMENT: u8 = 0x80;

/// Largest register payload written in a single transfer
const MAX_WRITE_LEN: usize = 8;

/// Raw register access over an I2C bus
pub struct I2cBus<I2C> {
    i2c: I2C,
}

impl<I2C> I2cBus<I2C> {
    /// Wrap an I2C peripheral
    pub const fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Consume the bus and return the I2C peripheral
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> I2cBus<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    /// Read one register
    ///
    /// # Errors
    ///
    /// Returns the bus error if the transfer is not acknowledged.
    pub fn read_register(&mut self, device: u8, register: u8) -> Result<u8, E> {
        let mut value = [0u8; 1];
        self.i2c.write_read(device, &[register], &mut value)?;
        Ok(value[0])
    }

    /// Burst-read `buffer.len()` consecutive registers starting at `register`
    ///
    /// The auto-increment flag is set on the register address so the device steps
    /// through consecutive registers.
    ///
    /// # Errors
    ///
    /// Returns the bus error if the transfer is not acknowledged.
    pub fn read_registers(&mut self, device: u8, register: u8, buffer: &mut [u8]) -> Result<(), E> {
        self.i2c
            .write_read(device, &[register | AUTO_INCREMENT], buffer)
    }

    /// Write one register
    ///
    /// # Errors
    ///
    /// Returns the bus error if the transfer is not acknowledged.
    pub fn write_register(&mut self, device: u8, register: u8, value: u8) -> Result<(), E> {
        self.i2c.write(device, &[register, value])
    }

    /// Borrow the bus as a register interface for one device address
    pub fn device(&mut self, address: u8) -> DeviceInterface<'_, I2C> {
        DeviceInterface { bus: self, address }
    }
}

/// [`RegisterInterface`] view of the bus for a single device address
pub struct DeviceInterface<'a, I2C> {
    bus: &'a mut I2cBus<I2C>,
    address: u8,
}

impl<I2C> DeviceInterface<'_, I2C> {
    /// Device address this interface talks to
    #[must_use]
    pub const fn address(&self) -> u8 {
        self.address
    }
}

impl<I2C, E> RegisterInterface for DeviceInterface<'_, I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in read_data.len() for I2C
        if read_data.len() > 1 {
            self.bus.read_registers(self.address, address, read_data)
        } else {
            self.bus.i2c.write_read(self.address, &[address], read_data)
        }
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in write_data.len() for I2C
        let mut buffer = [0u8; MAX_WRITE_LEN + 1];
        buffer[0] = address;
        let len = write_data.len().min(MAX_WRITE_LEN);
        buffer[1..=len].copy_from_slice(&write_data[..len]);

        self.bus.i2c.write(self.address, &buffer[..=len])
    }
}
