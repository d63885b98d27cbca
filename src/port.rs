//! Sensor-port transaction primitive.
//!
//! NXT-style bricks talk to digital sensors through framed messages: the
//! first byte is the number of bytes that follow, then the 8-bit device
//! address, then the register payload. The firmware clocks the frame out
//! on the port and reads the reply back in the same exchange.

use embedded_hal::i2c::I2c;

/// A sensor port able to carry one framed request/reply exchange.
///
/// `request` holds the full frame including the leading length byte. The
/// call blocks until the exchange completes; on success exactly
/// `reply.len()` bytes have been read back into `reply`.
pub trait Transact {
    type Error;

    fn transact(&mut self, request: &[u8], reply: &mut [u8]) -> Result<(), Self::Error>;
}

/// Sensor port bridged onto an `embedded-hal` I²C bus.
pub struct I2cPort<I2C> {
    i2c: I2C,
}

impl<I2C> I2cPort<I2C> {
    pub fn new(i2c: I2C) -> Self {
        I2cPort { i2c }
    }

    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> Transact for I2cPort<I2C> {
    type Error = I2C::Error;

    fn transact(&mut self, request: &[u8], reply: &mut [u8]) -> Result<(), I2C::Error> {
        debug_assert_eq!(request[0] as usize, request.len() - 1);
        // Frames carry the device address in 8-bit form, embedded-hal
        // expects the 7-bit address.
        self.i2c.write_read(request[1] >> 1, &request[2..], reply)
    }
}
