//! Register definitions for the LSM9DS1
//!
//! The LSM9DS1 is two devices behind one package, each with its own I2C address and
//! register space:
//!
//! - **Accelerometer/gyroscope** (`0x6B`): control, status, FIFO and the
//!   accelerometer, gyroscope and temperature output registers
//! - **Magnetometer** (`0x1E`): control, status and magnetic field output registers
//!
//! Output registers are not listed here. Sample data is burst-read as raw bytes
//! through [`I2cBus::read_registers`](crate::interface::I2cBus::read_registers)
//! starting at the `OUT_*_L` addresses below.

/// `OUT_TEMP_L` - temperature output, low byte (accelerometer/gyroscope device)
pub const OUT_TEMP_L: u8 = 0x15;
/// `OUT_X_L_G` - first gyroscope output register
pub const OUT_X_L_G: u8 = 0x18;
/// `OUT_X_L_XL` - first accelerometer output register
pub const OUT_X_L_XL: u8 = 0x28;
/// `OUT_X_L_M` - first magnetometer output register
pub const OUT_X_L_M: u8 = 0x28;

device_driver::create_device!(
    device_name: Lsm9ds1Ag,
    dsl: {
        config {
            type RegisterAddressType = u8;
            type DefaultByteOrder = LE;
        }

        /// WHO_AM_I - Device ID (0x0F)
        /// Expected value: 0x68
        register WhoAmI {
            const ADDRESS = 0x0F;
            const SIZE_BITS = 8;

            /// Device ID (should read 0x68)
            who_am_i: uint = 0..8,
        },

        /// CTRL_REG1_G - Gyroscope control 1 (0x10)
        register GyroCtrlOne {
            const ADDRESS = 0x10;
            const SIZE_BITS = 8;

            /// Gyroscope bandwidth selection
            bw_g: uint = 0..2,
            reserved_two: uint = 2..3,
            /// Gyroscope full-scale selection
            fs_g: uint = 3..5,
            /// Gyroscope output data rate (0 = power-down)
            odr_g: uint = 5..8,
        },

        /// CTRL_REG2_G - Gyroscope control 2 (0x11)
        register GyroCtrlTwo {
            const ADDRESS = 0x11;
            const SIZE_BITS = 8;

            /// Output selection
            out_sel: uint = 0..2,
            /// Interrupt generator selection
            int_sel: uint = 2..4,
            reserved_high: uint = 4..8,
        },

        /// CTRL_REG3_G - Gyroscope control 3 (0x12)
        register GyroCtrlThree {
            const ADDRESS = 0x12;
            const SIZE_BITS = 8;

            /// High-pass filter cutoff selection
            hpcf_g: uint = 0..4,
            reserved_mid: uint = 4..6,
            /// High-pass filter enable
            hp_en: bool = 6,
            /// Low-power mode enable
            lp_mode: bool = 7,
        },

        /// ORIENT_CFG_G - Gyroscope sign and orientation (0x13)
        register GyroOrientCfg {
            const ADDRESS = 0x13;
            const SIZE_BITS = 8;

            /// Directional user orientation selection
            orient: uint = 0..3,
            /// Flip Z-axis sign
            sign_z_g: bool = 3,
            /// Flip Y-axis sign
            sign_y_g: bool = 4,
            /// Flip X-axis sign
            sign_x_g: bool = 5,
            reserved_high: uint = 6..8,
        },

        /// STATUS_REG - Accelerometer/gyroscope status (0x17)
        register StatusReg {
            const ADDRESS = 0x17;
            const SIZE_BITS = 8;

            /// New accelerometer sample available
            xlda: bool = 0,
            /// New gyroscope sample available
            gda: bool = 1,
            /// New temperature sample available
            tda: bool = 2,
            /// Boot running flag
            boot_status: bool = 3,
            /// Inactivity interrupt
            inact: bool = 4,
            /// Gyroscope interrupt
            ig_g: bool = 5,
            /// Accelerometer interrupt
            ig_xl: bool = 6,
            reserved_seven: uint = 7..8,
        },

        /// CTRL_REG4 - Gyroscope axis enable and interrupt latch (0x1E)
        register CtrlRegFour {
            const ADDRESS = 0x1E;
            const SIZE_BITS = 8;

            /// 4D option on position recognition interrupt
            four_d_xl: bool = 0,
            /// Latched interrupt
            lir_xl: bool = 1,
            reserved_two: uint = 2..3,
            /// Gyroscope X-axis output enable
            xen_g: bool = 3,
            /// Gyroscope Y-axis output enable
            yen_g: bool = 4,
            /// Gyroscope Z-axis output enable
            zen_g: bool = 5,
            reserved_high: uint = 6..8,
        },

        /// CTRL_REG5_XL - Accelerometer axis enable (0x1F)
        register AccelCtrlFive {
            const ADDRESS = 0x1F;
            const SIZE_BITS = 8;

            reserved_low: uint = 0..3,
            /// Accelerometer X-axis output enable
            xen_xl: bool = 3,
            /// Accelerometer Y-axis output enable
            yen_xl: bool = 4,
            /// Accelerometer Z-axis output enable
            zen_xl: bool = 5,
            /// Output decimation
            dec: uint = 6..8,
        },

        /// CTRL_REG6_XL - Accelerometer data rate, scale and bandwidth (0x20)
        register AccelCtrlSix {
            const ADDRESS = 0x20;
            const SIZE_BITS = 8;

            /// Anti-aliasing filter bandwidth
            bw_xl: uint = 0..2,
            /// Use `bw_xl` instead of the ODR-derived bandwidth
            bw_scal_odr: bool = 2,
            /// Accelerometer full-scale selection
            fs_xl: uint = 3..5,
            /// Accelerometer output data rate (0 = power-down)
            odr_xl: uint = 5..8,
        },

        /// CTRL_REG7_XL - Accelerometer high-resolution mode (0x21)
        register AccelCtrlSeven {
            const ADDRESS = 0x21;
            const SIZE_BITS = 8;

            /// Interrupt high-pass filter bypass
            hpis_one: bool = 0,
            reserved_one: uint = 1..2,
            /// Filtered data selection
            fds: bool = 2,
            reserved_mid: uint = 3..5,
            /// High-resolution cutoff selection
            dcf: uint = 5..7,
            /// High-resolution mode enable
            hr: bool = 7,
        },

        /// CTRL_REG8 - Common control (0x22)
        register CtrlRegEight {
            const ADDRESS = 0x22;
            const SIZE_BITS = 8;

            /// Software reset
            sw_reset: bool = 0,
            /// Big/little endian data selection
            ble: bool = 1,
            /// Register address auto-increment on multi-byte access
            if_add_inc: bool = 2,
            /// SPI serial interface mode
            sim: bool = 3,
            /// Push-pull / open-drain interrupt outputs
            pp_od: bool = 4,
            /// Interrupt activation level
            h_lactive: bool = 5,
            /// Block data update
            bdu: bool = 6,
            /// Reboot memory content
            boot: bool = 7,
        },

        /// CTRL_REG9 - FIFO and sleep control (0x23)
        register CtrlRegNine {
            const ADDRESS = 0x23;
            const SIZE_BITS = 8;

            /// Stop filling the FIFO at the threshold level
            stop_on_fth: bool = 0,
            /// FIFO memory enable
            fifo_en: bool = 1,
            /// Disable the I2C interface
            i2c_disable: bool = 2,
            /// Data-ready masking
            drdy_mask_bit: bool = 3,
            /// Store temperature in the FIFO
            fifo_temp_en: bool = 4,
            reserved_five: uint = 5..6,
            /// Gyroscope sleep mode
            sleep_g: bool = 6,
            reserved_seven: uint = 7..8,
        },

        /// FIFO_CTRL - FIFO mode and threshold (0x2E)
        register FifoCtrl {
            const ADDRESS = 0x2E;
            const SIZE_BITS = 8;

            /// FIFO threshold level (0-31)
            fth: uint = 0..5,
            /// FIFO mode selection
            fmode: uint = 5..8,
        },

        /// FIFO_SRC - FIFO status (0x2F)
        register FifoSrc {
            const ADDRESS = 0x2F;
            const SIZE_BITS = 8;

            /// Number of unread samples stored in the FIFO
            fss: uint = 0..6,
            /// FIFO overrun
            ovrn: bool = 6,
            /// FIFO threshold reached
            fth_status: bool = 7,
        }
    }
);

// Re-export commonly used types for convenience
pub use Lsm9ds1Ag as AccelGyroDevice;

/// LSM9DS1 magnetometer register definitions
///
/// The magnetometer answers on its own I2C address with an independent register space.
pub mod magnetometer {
    device_driver::create_device!(
        device_name: Lsm9ds1Mag,
        dsl: {
            config {
                type RegisterAddressType = u8;
                type DefaultByteOrder = LE;
            }

            /// WHO_AM_I_M - Device ID (0x0F)
            /// Expected value: 0x3D
            register WhoAmI {
                const ADDRESS = 0x0F;
                const SIZE_BITS = 8;

                /// Device ID (should read 0x3D)
                who_am_i: uint = 0..8,
            },

            /// CTRL_REG1_M - Temperature compensation, XY performance and data rate (0x20)
            register MagCtrlOne {
                const ADDRESS = 0x20;
                const SIZE_BITS = 8;

                /// Self-test enable
                st: bool = 0,
                /// Data rates above 80 Hz
                fast_odr: bool = 1,
                /// Output data rate
                odr: uint = 2..5,
                /// X and Y axes operative mode
                om: uint = 5..7,
                /// Temperature compensation enable
                temp_comp: bool = 7,
            },

            /// CTRL_REG2_M - Full scale and reset (0x21)
            register MagCtrlTwo {
                const ADDRESS = 0x21;
                const SIZE_BITS = 8;

                reserved_low: uint = 0..2,
                /// Reset configuration and user registers
                soft_rst: bool = 2,
                /// Reboot memory content
                reboot: bool = 3,
                reserved_four: uint = 4..5,
                /// Full-scale selection
                fs: uint = 5..7,
                reserved_seven: uint = 7..8,
            },

            /// CTRL_REG3_M - Operating mode (0x22)
            register MagCtrlThree {
                const ADDRESS = 0x22;
                const SIZE_BITS = 8;

                /// Operating mode (0 = continuous, 1 = single, 2/3 = power-down)
                md: uint = 0..2,
                /// SPI serial interface mode
                sim: bool = 2,
                reserved_mid: uint = 3..5,
                /// Low-power mode
                lp: bool = 5,
                reserved_six: uint = 6..7,
                /// Disable the I2C interface
                i2c_disable: bool = 7,
            },

            /// CTRL_REG4_M - Z-axis performance (0x23)
            register MagCtrlFour {
                const ADDRESS = 0x23;
                const SIZE_BITS = 8;

                reserved_zero: uint = 0..1,
                /// Big/little endian data selection
                ble: bool = 1,
                /// Z-axis operative mode
                omz: uint = 2..4,
                reserved_high: uint = 4..8,
            },

            /// CTRL_REG5_M - Block data update (0x24)
            register MagCtrlFive {
                const ADDRESS = 0x24;
                const SIZE_BITS = 8;

                reserved_low: uint = 0..6,
                /// Block data update
                bdu: bool = 6,
                /// Fast read of the high bytes only
                fast_read: bool = 7,
            },

            /// STATUS_REG_M - Magnetometer status (0x27)
            register MagStatus {
                const ADDRESS = 0x27;
                const SIZE_BITS = 8;

                /// New X-axis data available
                xda: bool = 0,
                /// New Y-axis data available
                yda: bool = 1,
                /// New Z-axis data available
                zda: bool = 2,
                /// New X, Y and Z data available
                zyxda: bool = 3,
                reserved_mid: uint = 4..7,
                /// X, Y and Z data overrun
                zyxor: bool = 7,
            }
        }
    );

    // Re-export magnetometer device
    pub use Lsm9ds1Mag as MagnetometerDevice;
}
