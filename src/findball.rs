//! Tris10 FindBall infrared ball finder.
//!

use crate::port::Transact;

#[cfg(feature = "serde")]
use serde::Serialize;

// FindBall address, 8-bit form.
const FINDBALL_I2CADDR: u8 = 0x02;

// Data registers live at this offset.
const FINDBALL_REG_BASE: u8 = 0x42;

const FINDBALL_DIR: u8 = 0x00; // number of the eye with the best reading, 0 if none
const FINDBALL_STRENGTH: u8 = 0x01; // aggregate signal strength, 0-9
const FINDBALL_STRENGTH_1: u8 = 0x02; // per-eye strength above average, 5 consecutive registers

const STRENGTH_MAX: u8 = 9;
const EYE_COUNT: usize = 5;

/// FindBall errors
#[derive(Debug)]
pub enum Error<E> {
    /// Bus transaction failed
    Bus(E),
    /// Reply byte outside the register's documented range
    InvalidData,
}

/// Bearing of the strongest IR source, as one of the five eyes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// No IR signal detected on any eye
    NoSignal,
    Sensor1,
    Sensor2,
    Sensor3,
    Sensor4,
    Sensor5,
}

impl Direction {
    fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Direction::NoSignal),
            1 => Some(Direction::Sensor1),
            2 => Some(Direction::Sensor2),
            3 => Some(Direction::Sensor3),
            4 => Some(Direction::Sensor4),
            5 => Some(Direction::Sensor5),
            _ => None,
        }
    }

    /// 1-based number of the reported eye, `None` when no signal.
    pub fn sensor_number(self) -> Option<u8> {
        match self {
            Direction::NoSignal => None,
            other => Some(other as u8),
        }
    }
}

/// Per-eye signal strength above the device's running average.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrengthReadings {
    pub sensor1: u8,
    pub sensor2: u8,
    pub sensor3: u8,
    pub sensor4: u8,
    pub sensor5: u8,
}

impl StrengthReadings {
    /// 1-based number of the eye with the strongest signal, `None` when
    /// every eye reads zero. Ties go to the lowest-numbered eye.
    pub fn strongest(&self) -> Option<u8> {
        let vals = [
            self.sensor1,
            self.sensor2,
            self.sensor3,
            self.sensor4,
            self.sensor5,
        ];
        let mut best = 0u8;
        let mut eye = 0usize;
        for (i, &v) in vals.iter().enumerate() {
            if v > best {
                best = v;
                eye = i;
            }
        }
        if best == 0 {
            None
        } else {
            Some(eye as u8 + 1)
        }
    }
}

/// Representation of a FindBall on one sensor port.
pub struct FindBall<T> {
    port: T,
}

impl<T> FindBall<T>
where
    T: Transact,
{
    /// Create device driver instance.
    pub fn new(port: T) -> Self {
        FindBall { port }
    }

    pub fn release(self) -> T {
        self.port
    }

    /// Read the number of the eye with the best reading.
    pub fn read_direction(&mut self) -> Result<Direction, Error<T::Error>> {
        let raw = self.read_register(FINDBALL_DIR)?;
        Direction::from_raw(raw).ok_or(Error::InvalidData)
    }

    /// Read the aggregate signal strength, 0-9.
    pub fn read_strength(&mut self) -> Result<u8, Error<T::Error>> {
        let raw = self.read_register(FINDBALL_STRENGTH)?;
        if raw > STRENGTH_MAX {
            return Err(Error::InvalidData);
        }
        Ok(raw)
    }

    /// Read the strength above average on all five eyes.
    ///
    /// The five registers are read in five exchanges; the first failing
    /// one aborts the batch and no partial readings are returned.
    pub fn read_all_strengths(&mut self) -> Result<StrengthReadings, Error<T::Error>> {
        let mut vals = [0u8; EYE_COUNT];
        for (i, val) in vals.iter_mut().enumerate() {
            // no burst read on the direct port, one exchange per register
            *val = self.read_register(FINDBALL_STRENGTH_1 + i as u8)?;
        }

        Ok(StrengthReadings {
            sensor1: vals[0],
            sensor2: vals[1],
            sensor3: vals[2],
            sensor4: vals[3],
            sensor5: vals[4],
        })
    }

    fn read_register(&mut self, reg: u8) -> Result<u8, Error<T::Error>> {
        let addr = FINDBALL_REG_BASE + reg;
        // message size, device address, register address
        let request = [2, FINDBALL_I2CADDR, addr];
        let mut reply = [0u8; 1];
        self.port.transact(&request, &mut reply).map_err(Error::Bus)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("reg {:02x}: {:02x}", addr, reply[0]);

        Ok(reply[0])
    }
}
