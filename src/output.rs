//! Alarm and companion-radio outputs

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

/// Alarm duty cycle numerator, out of [`ALARM_DUTY_RANGE`]
pub const ALARM_DUTY: u16 = 50;

/// Denominator of [`ALARM_DUTY`]
pub const ALARM_DUTY_RANGE: u16 = 255;

/// Outputs driven when a fall is detected
pub trait Actuators {
    /// Output error
    type Error;

    /// Start the audible alarm
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be driven.
    fn raise_alarm(&mut self) -> Result<(), Self::Error>;

    /// Silence the alarm
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be driven.
    fn clear_alarm(&mut self) -> Result<(), Self::Error>;

    /// Raise the companion radio's wake line
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be driven.
    fn wake_companion(&mut self) -> Result<(), Self::Error>;

    /// Drop the companion radio's wake line
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be driven.
    fn release_companion(&mut self) -> Result<(), Self::Error>;
}

/// Output error from either pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputError<P, W> {
    /// Alarm PWM channel failed
    Alarm(P),
    /// Wake GPIO failed
    Wake(W),
}

/// [`Actuators`] over a PWM buzzer channel and a wake GPIO
pub struct OutputHandler<PWM, PIN> {
    alarm: PWM,
    wake: PIN,
    alarm_on: bool,
    wake_high: bool,
}

impl<PWM, PIN> OutputHandler<PWM, PIN>
where
    PWM: SetDutyCycle,
    PIN: OutputPin,
{
    /// Take ownership of the alarm channel and wake pin
    ///
    /// Outputs are left untouched until the first command.
    pub const fn new(alarm: PWM, wake: PIN) -> Self {
        Self {
            alarm,
            wake,
            alarm_on: false,
            wake_high: false,
        }
    }

    /// Whether the alarm was last switched on
    pub const fn is_alarm_on(&self) -> bool {
        self.alarm_on
    }

    /// Whether the wake line was last driven high
    pub const fn is_companion_awake(&self) -> bool {
        self.wake_high
    }

    /// Release the pins
    pub fn release(self) -> (PWM, PIN) {
        (self.alarm, self.wake)
    }
}

impl<PWM, PIN> Actuators for OutputHandler<PWM, PIN>
where
    PWM: SetDutyCycle,
    PIN: OutputPin,
{
    type Error = OutputError<PWM::Error, PIN::Error>;

    fn raise_alarm(&mut self) -> Result<(), Self::Error> {
        self.alarm
            .set_duty_cycle_fraction(ALARM_DUTY, ALARM_DUTY_RANGE)
            .map_err(OutputError::Alarm)?;
        self.alarm_on = true;
        Ok(())
    }

    fn clear_alarm(&mut self) -> Result<(), Self::Error> {
        self.alarm
            .set_duty_cycle_fully_off()
            .map_err(OutputError::Alarm)?;
        self.alarm_on = false;
        Ok(())
    }

    fn wake_companion(&mut self) -> Result<(), Self::Error> {
        self.wake.set_high().map_err(OutputError::Wake)?;
        self.wake_high = true;
        Ok(())
    }

    fn release_companion(&mut self) -> Result<(), Self::Error> {
        self.wake.set_low().map_err(OutputError::Wake)?;
        self.wake_high = false;
        Ok(())
    }
}
