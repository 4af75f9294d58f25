// Driver for the VNH5019-style dual motor shield: one channel is two
// H-bridge direction inputs (INA/INB) plus one PWM speed input.

use crate::motors::{Drive, MotorError, OpenLoopDrive};

use embedded_hal::{digital::OutputPin, pwm::SetDutyCycle};
use log::{debug, trace};

/// One shield channel.
///
/// INA/INB select the current direction through the bridge:
///
/// | INA | INB | Motor state |
/// |-----|-----|-------------|
/// | L   | L   | Coast       |
/// | H   | L   | Forward     |
/// | L   | H   | Reverse     |
///
/// Speed magnitude goes out on the PWM line, scaled from a [0, 100]
/// percentage onto the full duty range of the output (0..=255 on the
/// shield's 8-bit hardware).
pub struct MotorDriver<INA, INB, PWM> {
    ina: INA,
    inb: INB,
    pwm: PWM,
}

impl<INA, INB, PWM> MotorDriver<INA, INB, PWM>
where
    INA: OutputPin,
    INB: OutputPin,
    PWM: SetDutyCycle,
{
    /// Takes ownership of the channel's three control lines. The lines are
    /// not touched until [`OpenLoopDrive::init`].
    pub fn new(ina: INA, inb: INB, pwm: PWM) -> Self {
        Self { ina, inb, pwm }
    }

    /// Consumes the driver and hands the control lines back.
    pub fn release(self) -> (INA, INB, PWM) {
        (self.ina, self.inb, self.pwm)
    }
}

impl<INA, INB, PWM> OpenLoopDrive for MotorDriver<INA, INB, PWM>
where
    INA: OutputPin,
    INB: OutputPin,
    PWM: SetDutyCycle,
{
    fn init(&mut self) -> Result<(), MotorError> {
        debug!("motor channel init: coast");
        self.drive(Drive::Coast)
    }

    fn drive(&mut self, drive: Drive) -> Result<(), MotorError> {
        let magnitude = match drive {
            Drive::Forward(m) | Drive::Reverse(m) => m.min(100),
            Drive::Coast => 0,
        };
        trace!("drive: {:?}", drive);

        // PWM first, then the direction lines, on every call, even when
        // the resulting state is unchanged.
        self.pwm
            .set_duty_cycle_fraction(u16::from(magnitude), 100)
            .map_err(|_| MotorError::Pwm)?;

        match drive {
            Drive::Forward(_) if magnitude > 0 => {
                self.ina.set_high().map_err(|_| MotorError::Gpio)?;
                self.inb.set_low().map_err(|_| MotorError::Gpio)?;
            }
            Drive::Reverse(_) if magnitude > 0 => {
                self.ina.set_low().map_err(|_| MotorError::Gpio)?;
                self.inb.set_high().map_err(|_| MotorError::Gpio)?;
            }
            _ => {
                self.ina.set_low().map_err(|_| MotorError::Gpio)?;
                self.inb.set_low().map_err(|_| MotorError::Gpio)?;
            }
        }

        Ok(())
    }
}

/// The two channels of a dual shield, commanded together.
pub struct DualShield<M1, M2> {
    m1: M1,
    m2: M2,
}

impl<M1, M2> DualShield<M1, M2>
where
    M1: OpenLoopDrive,
    M2: OpenLoopDrive,
{
    pub fn new(m1: M1, m2: M2) -> Self {
        Self { m1, m2 }
    }

    pub fn init(&mut self) -> Result<(), MotorError> {
        self.m1.init()?;
        self.m2.init()
    }

    /// Commands both channels, channel 1 first. An error on channel 1
    /// leaves channel 2 in its previous state.
    pub fn drive(&mut self, m1: Drive, m2: Drive) -> Result<(), MotorError> {
        self.m1.drive(m1)?;
        self.m2.drive(m2)
    }

    /// Signed duty-cycle form of [`drive`](DualShield::drive).
    pub fn set_duty_cycles(&mut self, m1: i16, m2: i16) -> Result<(), MotorError> {
        self.m1.set_duty_cycle(m1)?;
        self.m2.set_duty_cycle(m2)
    }

    pub fn coast(&mut self) -> Result<(), MotorError> {
        self.drive(Drive::Coast, Drive::Coast)
    }

    pub fn split(self) -> (M1, M2) {
        (self.m1, self.m2)
    }
}
