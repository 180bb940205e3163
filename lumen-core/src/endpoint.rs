//! Firmware-side request handler
//!
//! Owns the distance sensor and indicator and services one request at a
//! time. A measurement produces a reply payload that can be read exactly
//! once; the next measurement overwrites it.

use lumen_protocol::{ReplyPayload, Reading, Request, Response};

use crate::traits::{DistanceSensor, IndicatorOutput};

/// Control endpoint state
pub struct ControlEndpoint<S, I> {
    sensor: S,
    indicator: I,
    /// Reply from the last measurement, until taken
    pending: Option<ReplyPayload>,
    /// Most recent measurement, kept for diagnostics
    last_reading: Option<Reading>,
}

impl<S, I> ControlEndpoint<S, I>
where
    S: DistanceSensor,
    I: IndicatorOutput,
{
    /// Create an endpoint with the indicator forced off
    pub fn new(sensor: S, mut indicator: I) -> Self {
        indicator.set_on(false);
        Self {
            sensor,
            indicator,
            pending: None,
            last_reading: None,
        }
    }

    /// Carry out a request
    ///
    /// Indicator requests take effect immediately. A measure request runs
    /// the sensor and stores the encoded reply for [`take_reply`].
    ///
    /// [`take_reply`]: ControlEndpoint::take_reply
    pub fn dispatch(&mut self, request: Request) {
        match request {
            Request::ActuatorOff => self.indicator.set_on(false),
            Request::ActuatorOn => self.indicator.set_on(true),
            Request::MeasureDistance => {
                let reading = self.sensor.measure();
                self.last_reading = Some(reading);
                self.pending = Some(ReplyPayload::from_reading(reading));
            }
        }
    }

    /// Take the pending reply, leaving none behind
    pub fn take_reply(&mut self) -> Option<ReplyPayload> {
        self.pending.take()
    }

    /// Carry out a request and build the response to send back
    pub fn handle(&mut self, request: Request) -> Response {
        self.dispatch(request);
        match request {
            Request::MeasureDistance => match self.take_reply() {
                Some(reply) => Response::Distance(reply),
                None => Response::Nak,
            },
            Request::ActuatorOff | Request::ActuatorOn => Response::Ack,
        }
    }

    /// Most recent measurement, if any
    pub fn last_reading(&self) -> Option<Reading> {
        self.last_reading
    }

    /// Current indicator state
    pub fn indicator_on(&self) -> bool {
        self.indicator.is_on()
    }
}
