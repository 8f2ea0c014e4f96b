//! High-level driver API for the LSM9DS1
//!
//! This module provides the sensor driver: configuration of the accelerometer,
//! gyroscope and magnetometer, raw and converted sample reads, FIFO control and the
//! FIFO-based bias calibration.

use crate::fifo::{self, FIFO_MAX_THRESHOLD, FifoMode, FifoStatus};
use crate::interface::{DeviceInterface, I2cBus};
use crate::registers::magnetometer::Lsm9ds1Mag;
use crate::registers::{self, Lsm9ds1Ag};
use crate::sensors::{
    AccelConfig, Attitude, AxisSample, CalibrationBias, GyroConfig, MagConfig, MotionSensor,
    RawSample, SensorConfig, TempConfig, temperature_to_celsius,
};
use crate::{
    ACCEL_GYRO_ADDRESS, Error, MAGNETOMETER_ADDRESS, WHO_AM_I_AG_VALUE, WHO_AM_I_MAG_VALUE,
};

/// Time for both devices to come out of software reset
const RESET_SETTLE_MS: u32 = 10;

/// Interval between `FIFO_SRC` polls while calibrating
const CALIBRATION_POLL_INTERVAL_MS: u32 = 1;

/// Number of `FIFO_SRC` polls before calibration gives up
///
/// At the slowest accelerometer/gyroscope rate (14.9 Hz) the FIFO fills in about
/// 2.1 s, so one second of margin on top of that.
const CALIBRATION_MAX_POLLS: u32 = 3200;

/// Main driver for the LSM9DS1
///
/// Owns the I2C bus, the sensor configuration and the calibration bias. Reads fail
/// with [`Error::NotStarted`] until [`begin`](Self::begin) has succeeded.
pub struct Lsm9ds1Driver<I2C> {
    bus: I2cBus<I2C>,
    config: SensorConfig,
    bias: CalibrationBias,
    // Physical units per LSB, selected from the configured full scales
    accel_resolution: f32,
    gyro_resolution: f32,
    mag_resolution: f32,
    auto_calibrate: bool,
    continuous_mode: bool,
    started: bool,
}

impl<I2C> Lsm9ds1Driver<I2C> {
    /// Create a new LSM9DS1 driver instance
    ///
    /// Loads the default configuration. No bus traffic happens until
    /// [`begin`](Self::begin).
    pub fn new(i2c: I2C) -> Self {
        let mut driver = Self {
            bus: I2cBus::new(i2c),
            config: SensorConfig::default(),
            bias: CalibrationBias::default(),
            accel_resolution: 0.0,
            gyro_resolution: 0.0,
            mag_resolution: 0.0,
            auto_calibrate: true,
            continuous_mode: false,
            started: false,
        };
        driver.init();
        driver.update_resolutions();
        driver
    }

    /// Restore the default configuration and clear the calibration bias
    ///
    /// Only the in-memory state changes; registers are written by `begin()` or the
    /// `configure_*` methods.
    pub fn init(&mut self) {
        self.config = SensorConfig::default();
        self.bias = CalibrationBias::default();
        self.auto_calibrate = true;
    }

    fn update_resolutions(&mut self) {
        self.accel_resolution = self.config.accel.full_scale.sensitivity();
        self.gyro_resolution = self.config.gyro.full_scale.sensitivity();
        self.mag_resolution = self.config.mag.full_scale.sensitivity();
    }

    /// Convert a raw accelerometer value to g
    #[must_use]
    pub fn calc_accel(&self, raw: i16) -> f32 {
        self.accel_resolution * f32::from(raw)
    }

    /// Convert a raw gyroscope value to degrees per second
    #[must_use]
    pub fn calc_gyro(&self, raw: i16) -> f32 {
        self.gyro_resolution * f32::from(raw)
    }

    /// Convert a raw magnetometer value to gauss
    #[must_use]
    pub fn calc_mag(&self, raw: i16) -> f32 {
        self.mag_resolution * f32::from(raw)
    }

    /// Accelerometer resolution in g per LSB
    #[must_use]
    pub const fn accel_resolution(&self) -> f32 {
        self.accel_resolution
    }

    /// Gyroscope resolution in dps per LSB
    #[must_use]
    pub const fn gyro_resolution(&self) -> f32 {
        self.gyro_resolution
    }

    /// Magnetometer resolution in gauss per LSB
    #[must_use]
    pub const fn mag_resolution(&self) -> f32 {
        self.mag_resolution
    }

    /// Current sensor configuration
    #[must_use]
    pub const fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// Bias computed by the last calibration
    #[must_use]
    pub const fn bias(&self) -> &CalibrationBias {
        &self.bias
    }

    /// Whether the raw bias is subtracted from accelerometer and gyroscope reads
    #[must_use]
    pub const fn auto_calibrate(&self) -> bool {
        self.auto_calibrate
    }

    /// Enable or disable bias subtraction on accelerometer and gyroscope reads
    pub const fn set_auto_calibrate(&mut self, enable: bool) {
        self.auto_calibrate = enable;
    }

    /// Whether the FIFO runs in continuous mode
    #[must_use]
    pub const fn is_continuous_mode(&self) -> bool {
        self.continuous_mode
    }

    /// Whether `begin()` has completed successfully
    #[must_use]
    pub const fn is_started(&self) -> bool {
        self.started
    }

    /// Get a mutable reference to the register bus (for advanced usage)
    pub const fn bus(&mut self) -> &mut I2cBus<I2C> {
        &mut self.bus
    }

    /// Consume the driver and return the I2C peripheral
    pub fn release(self) -> I2C {
        self.bus.release()
    }

    const fn ensure_started<E>(&self) -> Result<(), Error<E>> {
        if self.started {
            Ok(())
        } else {
            Err(Error::NotStarted)
        }
    }
}

impl<I2C, E> Lsm9ds1Driver<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    fn ag(&mut self) -> Lsm9ds1Ag<DeviceInterface<'_, I2C>> {
        Lsm9ds1Ag::new(self.bus.device(ACCEL_GYRO_ADDRESS))
    }

    fn mag(&mut self) -> Lsm9ds1Mag<DeviceInterface<'_, I2C>> {
        Lsm9ds1Mag::new(self.bus.device(MAGNETOMETER_ADDRESS))
    }

    /// Reset both devices, verify their identity and program the configuration
    ///
    /// The default configuration is restored first (see [`init`](Self::init)).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Communication with either device fails
    /// - A `WHO_AM_I` register holds an unexpected value; the sensors are powered
    ///   down before returning
    pub fn begin<D>(&mut self, delay: &mut D) -> Result<(), Error<E>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        self.started = false;

        // Software reset with address auto-increment (CTRL_REG8 = 0x05)
        self.ag().ctrl_reg_eight().write(|w| {
            w.set_sw_reset(true);
            w.set_if_add_inc(true);
        })?;
        // Reboot and soft reset (CTRL_REG2_M = 0x0C)
        self.mag().mag_ctrl_two().write(|w| {
            w.set_reboot(true);
            w.set_soft_rst(true);
        })?;

        delay.delay_ms(RESET_SETTLE_MS);

        self.init();
        self.update_resolutions();

        let found = self.ag().who_am_i().read()?.who_am_i();
        if found != WHO_AM_I_AG_VALUE {
            return Err(self.identity_mismatch(ACCEL_GYRO_ADDRESS, found));
        }

        let found = self.mag().who_am_i().read()?.who_am_i();
        if found != WHO_AM_I_MAG_VALUE {
            return Err(self.identity_mismatch(MAGNETOMETER_ADDRESS, found));
        }

        #[cfg(feature = "defmt")]
        defmt::info!("LSM9DS1 identified");

        self.init_accel()?;
        self.init_gyro()?;
        self.init_mag()?;

        self.started = true;
        Ok(())
    }

    fn identity_mismatch(&mut self, address: u8, found: u8) -> Error<E> {
        #[cfg(feature = "defmt")]
        defmt::error!("WHO_AM_I mismatch at {=u8:#x}: {=u8:#x}", address, found);

        // The identity error is what the caller needs; a failed power-down adds nothing
        let _ = self.end();
        Error::InvalidDevice { address, found }
    }

    /// Power down the magnetometer, gyroscope and accelerometer
    ///
    /// The driver must be started again with [`begin`](Self::begin) afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn end(&mut self) -> Result<(), Error<E>> {
        self.started = false;
        self.mag().mag_ctrl_three().write(|w| {
            w.set_md(crate::sensors::MagMode::PowerDown as u8);
        })?;
        self.ag().gyro_ctrl_one().write(|_| {})?;
        self.ag().accel_ctrl_six().write(|_| {})?;
        Ok(())
    }

    /// Program the accelerometer registers from the stored configuration
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn init_accel(&mut self) -> Result<(), Error<E>> {
        let config = self.config.accel;

        self.ag().accel_ctrl_five().write(|w| {
            w.set_zen_xl(config.enable_z);
            w.set_yen_xl(config.enable_y);
            w.set_xen_xl(config.enable_x);
        })?;

        self.ag().accel_ctrl_six().write(|w| {
            if config.enabled {
                w.set_odr_xl(config.odr as u8);
            }
            w.set_fs_xl(config.full_scale.bits());
            if let Some(bandwidth) = config.bandwidth {
                w.set_bw_scal_odr(true);
                w.set_bw_xl(bandwidth as u8);
            }
        })?;

        self.ag().accel_ctrl_seven().write(|w| {
            if let Some(cutoff) = config.high_resolution {
                w.set_hr(true);
                w.set_dcf(cutoff as u8);
            }
        })?;

        Ok(())
    }

    /// Program the gyroscope registers from the stored configuration
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn init_gyro(&mut self) -> Result<(), Error<E>> {
        let config = self.config.gyro;

        self.ag().gyro_ctrl_one().write(|w| {
            if config.enabled {
                w.set_odr_g(config.odr as u8);
            }
            w.set_fs_g(config.full_scale.bits());
            w.set_bw_g(config.bandwidth);
        })?;

        self.ag().gyro_ctrl_two().write(|_| {})?;

        self.ag().gyro_ctrl_three().write(|w| {
            w.set_lp_mode(config.low_power);
            if let Some(cutoff) = config.hpf_cutoff {
                w.set_hp_en(true);
                w.set_hpcf_g(cutoff);
            }
        })?;

        self.ag().ctrl_reg_four().write(|w| {
            w.set_zen_g(config.enable_z);
            w.set_yen_g(config.enable_y);
            w.set_xen_g(config.enable_x);
            w.set_lir_xl(config.latch_interrupt);
        })?;

        self.ag().gyro_orient_cfg().write(|w| {
            w.set_sign_x_g(config.flip_x);
            w.set_sign_y_g(config.flip_y);
            w.set_sign_z_g(config.flip_z);
            w.set_orient(config.orientation);
        })?;

        Ok(())
    }

    /// Program the magnetometer registers from the stored configuration
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn init_mag(&mut self) -> Result<(), Error<E>> {
        let config = self.config.mag;

        self.mag().mag_ctrl_one().write(|w| {
            w.set_temp_comp(config.temp_compensation);
            w.set_om(config.xy_performance as u8);
            w.set_odr(config.odr as u8);
        })?;

        self.mag().mag_ctrl_two().write(|w| {
            w.set_fs(config.full_scale as u8);
        })?;

        self.mag().mag_ctrl_three().write(|w| {
            w.set_lp(config.low_power);
            w.set_md(config.effective_mode() as u8);
        })?;

        self.mag().mag_ctrl_four().write(|w| {
            w.set_omz(config.z_performance as u8);
        })?;

        self.mag().mag_ctrl_five().write(|_| {})?;

        #[cfg(feature = "defmt")]
        defmt::debug!("magnetometer configured: {}", config);

        Ok(())
    }

    /// Replace the accelerometer configuration
    ///
    /// Registers are reprogrammed immediately when the driver is started.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn configure_accelerometer(&mut self, config: AccelConfig) -> Result<(), Error<E>> {
        self.config.accel = config;
        self.update_resolutions();
        if self.started {
            self.init_accel()?;
        }
        Ok(())
    }

    /// Replace the gyroscope configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if a numeric code is out of range, or an
    /// error if communication with the device fails.
    pub fn configure_gyroscope(&mut self, config: GyroConfig) -> Result<(), Error<E>> {
        if !config.is_valid() {
            return Err(Error::InvalidConfig);
        }
        self.config.gyro = config;
        self.update_resolutions();
        if self.started {
            self.init_gyro()?;
        }
        Ok(())
    }

    /// Replace the magnetometer configuration
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn configure_magnetometer(&mut self, config: MagConfig) -> Result<(), Error<E>> {
        self.config.mag = config;
        self.update_resolutions();
        if self.started {
            self.init_mag()?;
        }
        Ok(())
    }

    /// Enable or disable temperature reads
    pub const fn configure_temperature(&mut self, config: TempConfig) {
        self.config.temp = config;
    }

    /// Stream samples through the FIFO in continuous mode
    ///
    /// Accelerometer availability is then reported from the FIFO fill level.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_continuous_mode(&mut self) -> Result<(), Error<E>> {
        self.ag().ctrl_reg_nine().write(|w| {
            w.set_fifo_en(true);
        })?;
        self.set_fifo(FifoMode::Continuous, 0)?;
        self.continuous_mode = true;
        Ok(())
    }

    /// Disable the FIFO and read the output registers directly
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_one_shot_mode(&mut self) -> Result<(), Error<E>> {
        self.ag().ctrl_reg_nine().write(|_| {})?;
        self.set_fifo(FifoMode::Bypass, 0)?;
        self.continuous_mode = false;
        Ok(())
    }

    /// Enable or disable the FIFO memory
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn enable_fifo(&mut self, enable: bool) -> Result<(), Error<E>> {
        self.ag().ctrl_reg_nine().modify(|w| {
            w.set_fifo_en(enable);
        })?;
        Ok(())
    }

    /// Set the FIFO mode and threshold
    ///
    /// Thresholds above `0x1F` are clamped to `0x1F`.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_fifo(&mut self, mode: FifoMode, threshold: u8) -> Result<(), Error<E>> {
        let threshold = fifo::clamp_threshold(threshold);
        self.ag().fifo_ctrl().write(|w| {
            w.set_fmode(mode.bits());
            w.set_fth(threshold);
        })?;
        Ok(())
    }

    /// Read the FIFO status register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_status(&mut self) -> Result<FifoStatus, Error<E>> {
        let src = self.ag().fifo_src().read()?;
        Ok(FifoStatus {
            samples: src.fss(),
            overrun: src.ovrn(),
            threshold_reached: src.fth_status(),
        })
    }

    /// Compute the accelerometer and gyroscope bias from a full FIFO
    ///
    /// The sensor must be stationary and level, Z axis up, for the duration. The FIFO
    /// is filled to its threshold, drained and averaged. The accelerometer Z axis has
    /// one g removed per sample. The FIFO is disabled afterwards, which also leaves
    /// continuous mode.
    ///
    /// With `auto_apply` the bias is subtracted from all subsequent raw reads.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The driver is not started
    /// - Communication with the device fails
    /// - The FIFO does not reach its threshold in time ([`Error::CalibrationTimeout`])
    pub fn calibrate<D>(
        &mut self,
        delay: &mut D,
        auto_apply: bool,
    ) -> Result<CalibrationBias, Error<E>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        self.ensure_started()?;

        let drained = self.drain_fifo(delay);
        if drained.is_err() {
            // The drain error wins over any failure to switch the FIFO off
            let _ = self.stop_fifo();
        }
        let (samples, gyro_sum, accel_sum) = drained?;

        let gyro_raw = gyro_sum.map(|sum| average(sum, samples));
        let accel_raw = accel_sum.map(|sum| average(sum, samples));
        self.bias = CalibrationBias {
            accel_raw,
            gyro_raw,
            accel: accel_raw.map(|raw| self.calc_accel(raw)),
            gyro: gyro_raw.map(|raw| self.calc_gyro(raw)),
        };

        self.stop_fifo()?;

        if auto_apply {
            self.auto_calibrate = true;
        }

        #[cfg(feature = "defmt")]
        defmt::info!("calibration done over {} samples: {}", samples, self.bias);

        Ok(self.bias)
    }

    /// Fill the FIFO to its threshold and sum every queued gyroscope and
    /// accelerometer sample, with one g taken off each accelerometer Z reading
    fn drain_fifo<D>(&mut self, delay: &mut D) -> Result<(u8, [i32; 3], [i32; 3]), Error<E>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        self.enable_fifo(true)?;
        self.set_fifo(FifoMode::Fifo, FIFO_MAX_THRESHOLD)?;

        let mut polls = 0;
        let samples = loop {
            let status = self.fifo_status()?;
            if status.samples >= FIFO_MAX_THRESHOLD {
                break status.samples;
            }
            if polls >= CALIBRATION_MAX_POLLS {
                #[cfg(feature = "defmt")]
                defmt::warn!("FIFO stuck at {} samples", status.samples);
                return Err(Error::CalibrationTimeout);
            }
            polls += 1;
            delay.delay_ms(CALIBRATION_POLL_INTERVAL_MS);
        };

        // Counts for one g, removed from Z since the sensor rests face up
        #[allow(clippy::cast_possible_truncation)]
        let one_g = (1.0 / self.accel_resolution) as i32;

        let mut gyro_sum = [0i32; 3];
        let mut accel_sum = [0i32; 3];
        for _ in 0..samples {
            let gyro = self.read_raw(registers::OUT_X_L_G)?;
            gyro_sum[0] += i32::from(gyro.x);
            gyro_sum[1] += i32::from(gyro.y);
            gyro_sum[2] += i32::from(gyro.z);

            let accel = self.read_raw(registers::OUT_X_L_XL)?;
            accel_sum[0] += i32::from(accel.x);
            accel_sum[1] += i32::from(accel.y);
            accel_sum[2] += i32::from(accel.z) - one_g;
        }

        Ok((samples, gyro_sum, accel_sum))
    }

    fn stop_fifo(&mut self) -> Result<(), Error<E>> {
        self.enable_fifo(false)?;
        self.set_fifo(FifoMode::Bypass, 0)?;
        self.continuous_mode = false;
        Ok(())
    }

    fn read_raw(&mut self, register: u8) -> Result<RawSample, Error<E>> {
        let mut buffer = [0u8; 6];
        self.bus
            .read_registers(ACCEL_GYRO_ADDRESS, register, &mut buffer)?;
        Ok(RawSample::from_le_bytes(buffer))
    }

    /// Read raw accelerometer data
    ///
    /// The calibration bias is subtracted when auto-calibration is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not started or communication fails.
    pub fn read_accel(&mut self) -> Result<RawSample, Error<E>> {
        self.ensure_started()?;
        let raw = self.read_raw(registers::OUT_X_L_XL)?;
        if self.auto_calibrate {
            Ok(raw.saturating_sub(self.bias.accel_raw))
        } else {
            Ok(raw)
        }
    }

    /// Read raw gyroscope data
    ///
    /// The calibration bias is subtracted when auto-calibration is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not started or communication fails.
    pub fn read_gyro(&mut self) -> Result<RawSample, Error<E>> {
        self.ensure_started()?;
        let raw = self.read_raw(registers::OUT_X_L_G)?;
        if self.auto_calibrate {
            Ok(raw.saturating_sub(self.bias.gyro_raw))
        } else {
            Ok(raw)
        }
    }

    /// Read raw magnetometer data
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not started or communication fails.
    pub fn read_mag(&mut self) -> Result<RawSample, Error<E>> {
        self.ensure_started()?;
        let mut buffer = [0u8; 6];
        self.bus
            .read_registers(MAGNETOMETER_ADDRESS, registers::OUT_X_L_M, &mut buffer)?;
        Ok(RawSample::from_le_bytes(buffer))
    }

    /// Read the raw temperature sensor value
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the temperature sensor is disabled, or an
    /// error if the driver is not started or communication fails.
    pub fn read_temp(&mut self) -> Result<i16, Error<E>> {
        self.ensure_started()?;
        if !self.config.temp.enabled {
            return Err(Error::InvalidConfig);
        }
        let mut buffer = [0u8; 2];
        self.bus
            .read_registers(ACCEL_GYRO_ADDRESS, registers::OUT_TEMP_L, &mut buffer)?;
        Ok(i16::from_le_bytes(buffer))
    }

    /// Read the die temperature in degrees Celsius
    ///
    /// # Errors
    ///
    /// See [`read_temp`](Self::read_temp).
    pub fn read_temperature(&mut self) -> Result<f32, Error<E>> {
        Ok(temperature_to_celsius(self.read_temp()?))
    }

    /// Whether the latest acceleration indicates free fall
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not started or communication fails.
    pub fn free_fall_detected(&mut self) -> Result<bool, Error<E>> {
        Ok(self.read_acceleration()?.is_free_fall())
    }

    /// Read roll, pitch and heading from the accelerometer and magnetometer
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not started or communication fails.
    pub fn read_attitude(&mut self, declination: f32) -> Result<Attitude, Error<E>> {
        let accel = self.read_acceleration()?;
        let mag = self.read_magnetic_field()?;
        Ok(Attitude::from_samples(&accel, &mag, declination))
    }
}

impl<I2C, E> MotionSensor for Lsm9ds1Driver<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    type Error = Error<E>;

    fn acceleration_available(&mut self) -> Result<bool, Self::Error> {
        self.ensure_started()?;
        if self.continuous_mode {
            Ok(self.fifo_status()?.has_data())
        } else {
            Ok(self.ag().status_reg().read()?.xlda())
        }
    }

    fn gyroscope_available(&mut self) -> Result<bool, Self::Error> {
        self.ensure_started()?;
        Ok(self.ag().status_reg().read()?.gda())
    }

    fn magnetic_field_available(&mut self) -> Result<bool, Self::Error> {
        self.ensure_started()?;
        Ok(self.mag().mag_status().read()?.zyxda())
    }

    fn read_acceleration(&mut self) -> Result<AxisSample, Self::Error> {
        let raw = self.read_accel()?;
        Ok(AxisSample::from_raw(raw, self.accel_resolution))
    }

    fn read_gyroscope(&mut self) -> Result<AxisSample, Self::Error> {
        let raw = self.read_gyro()?;
        Ok(AxisSample::from_raw(raw, self.gyro_resolution))
    }

    fn read_magnetic_field(&mut self) -> Result<AxisSample, Self::Error> {
        let raw = self.read_mag()?;
        Ok(AxisSample::from_raw(raw, self.mag_resolution))
    }

    fn acceleration_sample_rate(&self) -> f32 {
        self.config.accel_sample_rate()
    }

    fn gyroscope_sample_rate(&self) -> f32 {
        self.config.gyro.odr.hz()
    }

    fn magnetic_field_sample_rate(&self) -> f32 {
        self.config.mag.odr.hz()
    }
}

/// Truncating average of a per-axis sum, saturated to the i16 range
#[allow(clippy::cast_possible_truncation)]
fn average(sum: i32, count: u8) -> i16 {
    if count == 0 {
        return 0;
    }
    (sum / i32::from(count)).clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16
}
