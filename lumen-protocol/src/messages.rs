//! Request and response messages
//!
//! Message types are divided into two categories:
//! - Host → Sensor: indicator control and distance requests
//! - Sensor → Host: acknowledgements and distance replies

use crate::frame::{Frame, FrameError};
use crate::payload::{ReplyPayload, REPLY_LEN};

// Message type IDs: Host → Sensor
pub const REQ_ACTUATOR_OFF: u8 = 0x00;
pub const REQ_ACTUATOR_ON: u8 = 0x01;
pub const REQ_MEASURE_DISTANCE: u8 = 0x02;

// Message type IDs: Sensor → Host
pub const RSP_ACK: u8 = 0x80;
pub const RSP_DISTANCE: u8 = 0x82;
pub const RSP_NAK: u8 = 0x8F;

/// Requests from the host to the sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Request {
    /// Drive the indicator output low
    ActuatorOff,
    /// Drive the indicator output high
    ActuatorOn,
    /// Take one distance measurement and reply with it
    MeasureDistance,
}

impl Request {
    /// Wire code for this request
    pub fn code(self) -> u8 {
        match self {
            Request::ActuatorOff => REQ_ACTUATOR_OFF,
            Request::ActuatorOn => REQ_ACTUATOR_ON,
            Request::MeasureDistance => REQ_MEASURE_DISTANCE,
        }
    }

    /// Look up a request by wire code
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            REQ_ACTUATOR_OFF => Some(Request::ActuatorOff),
            REQ_ACTUATOR_ON => Some(Request::ActuatorOn),
            REQ_MEASURE_DISTANCE => Some(Request::MeasureDistance),
            _ => None,
        }
    }

    /// Encode this request into a frame
    pub fn to_frame(self) -> Frame {
        Frame::empty(self.code())
    }

    /// Decode a request from a frame
    pub fn from_frame(frame: &Frame) -> Result<Self, FrameError> {
        let request =
            Self::from_code(frame.msg_type).ok_or(FrameError::UnknownType(frame.msg_type))?;
        if !frame.payload.is_empty() {
            return Err(FrameError::UnexpectedPayload);
        }
        Ok(request)
    }
}

/// Responses from the sensor to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Response {
    /// Indicator request carried out
    Ack,
    /// Reply to a measure request
    Distance(ReplyPayload),
    /// Request could not be decoded
    Nak,
}

impl Response {
    /// Encode this response into a frame
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        match self {
            Response::Ack => Ok(Frame::empty(RSP_ACK)),
            Response::Distance(reply) => Frame::new(RSP_DISTANCE, reply.as_bytes()),
            Response::Nak => Ok(Frame::empty(RSP_NAK)),
        }
    }

    /// Decode a response from a frame
    pub fn from_frame(frame: &Frame) -> Result<Self, FrameError> {
        match frame.msg_type {
            RSP_ACK => Ok(Response::Ack),
            RSP_NAK => Ok(Response::Nak),
            RSP_DISTANCE => {
                if frame.payload.len() != REPLY_LEN {
                    return Err(FrameError::UnexpectedPayload);
                }
                let reply = ReplyPayload::from_bytes(&frame.payload)
                    .map_err(|_| FrameError::UnexpectedPayload)?;
                Ok(Response::Distance(reply))
            }
            other => Err(FrameError::UnknownType(other)),
        }
    }
}
