//! Driver for VNH5019-style dual motor shields: each channel is steered by
//! two H-bridge direction inputs (INA/INB) and one PWM speed input.
//!
//! Hardware access goes through the `embedded-hal` 1.0 traits, so the crate
//! runs on anything that hands out [`embedded_hal::digital::OutputPin`] and
//! [`embedded_hal::pwm::SetDutyCycle`] implementations.

#![no_std]
#![deny(unsafe_code)]

pub mod motors;

pub use motors::vnh_driver::{DualShield, MotorDriver};
pub use motors::{duty_cycle_to_drive, Drive, MotorError, OpenLoopDrive};
