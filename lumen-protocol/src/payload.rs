//! Distance reply payload
//!
//! The reply to a measure request is a fixed-width ASCII decimal:
//! four zero-padded digits followed by a NUL terminator, e.g. `b"0045\0"`.
//! Two 4-digit codes are reserved for the sentinels; no real distance can
//! reach them (see [`MAX_DISTANCE_CM`](crate::reading::MAX_DISTANCE_CM)).

use core::fmt;

use crate::reading::Reading;

/// Number of decimal digits in a reply
pub const REPLY_DIGITS: usize = 4;

/// Reply length on the wire (digits + NUL)
pub const REPLY_LEN: usize = REPLY_DIGITS + 1;

/// Reply code for [`Reading::Timeout`]
pub const TIMEOUT_CODE: u16 = 9999;

/// Reply code for [`Reading::NoObstacle`]
pub const NO_OBSTACLE_CODE: u16 = 9998;

/// Largest distance that fits below the reserved codes
const MAX_ENCODABLE_CM: u16 = NO_OBSTACLE_CODE - 1;

/// Errors when interpreting a reply payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PayloadError {
    /// Fewer than [`REPLY_DIGITS`] bytes
    TooShort,
    /// A digit position holds something other than `0`-`9`
    InvalidDigit(u8),
    /// Byte after the digits is not NUL
    MissingTerminator,
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(f, "reply shorter than {REPLY_DIGITS} digits"),
            Self::InvalidDigit(b) => write!(f, "invalid digit byte 0x{b:02X}"),
            Self::MissingTerminator => write!(f, "reply not NUL-terminated"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PayloadError {}

/// Fixed-width distance reply, exactly as sent on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReplyPayload([u8; REPLY_LEN]);

impl ReplyPayload {
    /// Render a reading as a reply
    pub fn from_reading(reading: Reading) -> Self {
        let code = match reading {
            Reading::Distance(cm) => cm.min(MAX_ENCODABLE_CM),
            Reading::Timeout => TIMEOUT_CODE,
            Reading::NoObstacle => NO_OBSTACLE_CODE,
        };

        let mut bytes = [0u8; REPLY_LEN];
        bytes[0] = b'0' + (code / 1000) as u8;
        bytes[1] = b'0' + (code % 1000 / 100) as u8;
        bytes[2] = b'0' + (code % 100 / 10) as u8;
        bytes[3] = b'0' + (code % 10) as u8;
        // bytes[4] stays NUL
        Self(bytes)
    }

    /// Capture reply bytes received from the link
    ///
    /// Accepts the bare digits or digits plus terminator; any bytes after
    /// the terminator are ignored. Content is validated by [`reading`].
    ///
    /// [`reading`]: ReplyPayload::reading
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PayloadError> {
        if bytes.len() < REPLY_DIGITS {
            return Err(PayloadError::TooShort);
        }
        let mut raw = [0u8; REPLY_LEN];
        let len = bytes.len().min(REPLY_LEN);
        raw[..len].copy_from_slice(&bytes[..len]);
        Ok(Self(raw))
    }

    /// Decode the reply back into a reading
    pub fn reading(&self) -> Result<Reading, PayloadError> {
        if self.0[REPLY_DIGITS] != 0 {
            return Err(PayloadError::MissingTerminator);
        }

        let mut code: u16 = 0;
        for &b in &self.0[..REPLY_DIGITS] {
            if !b.is_ascii_digit() {
                return Err(PayloadError::InvalidDigit(b));
            }
            code = code * 10 + (b - b'0') as u16;
        }

        Ok(match code {
            TIMEOUT_CODE => Reading::Timeout,
            NO_OBSTACLE_CODE => Reading::NoObstacle,
            cm => Reading::Distance(cm),
        })
    }

    /// Raw bytes including the terminator
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The digits as text (without terminator)
    pub fn digits(&self) -> &str {
        core::str::from_utf8(&self.0[..REPLY_DIGITS]).unwrap_or("????")
    }
}
