//! Request/response client for the sensor link
//!
//! Each transaction discards any input still pending from earlier
//! exchanges, writes one request frame and blocks until a response frame
//! that answers that request arrives or the port's read timeout expires.
//! Malformed frames and replies of the wrong kind are dropped on the way.

use std::io::{self, Read, Write};

use log::{debug, trace};
use lumen_protocol::{FrameParser, Request, Response};
use serialport::{ClearBuffer, SerialPort};

use crate::error::LinkError;

/// Blocking request/response primitive
pub trait Link {
    /// Send a request and wait for its response
    fn transact(&mut self, request: Request) -> Result<Response, LinkError>;
}

impl<L: Link + ?Sized> Link for &mut L {
    fn transact(&mut self, request: Request) -> Result<Response, LinkError> {
        (**self).transact(request)
    }
}

/// Byte stream whose received-but-unread input can be thrown away
pub trait ClearInput {
    fn clear_input(&mut self) -> io::Result<()>;
}

impl ClearInput for Box<dyn SerialPort> {
    fn clear_input(&mut self) -> io::Result<()> {
        Ok(self.clear(ClearBuffer::Input)?)
    }
}

/// Whether `response` is a valid reply to `request`
fn answers(request: Request, response: &Response) -> bool {
    match (request, response) {
        (_, Response::Nak) => true,
        (Request::MeasureDistance, Response::Distance(_)) => true,
        (Request::ActuatorOn | Request::ActuatorOff, Response::Ack) => true,
        _ => false,
    }
}

/// Framed link over any byte stream (serial port, socket, test buffer)
pub struct FramedLink<P> {
    port: P,
    parser: FrameParser,
}

impl<P: Read + Write + ClearInput> FramedLink<P> {
    pub fn new(port: P) -> Self {
        Self {
            port,
            parser: FrameParser::new(),
        }
    }

    pub fn get_ref(&self) -> &P {
        &self.port
    }

    pub fn into_inner(self) -> P {
        self.port
    }

    fn send(&mut self, request: Request) -> Result<(), LinkError> {
        let encoded = request.to_frame().encode_to_vec()?;
        trace!("TX {:02X?}", encoded.as_slice());
        self.port.write_all(&encoded)?;
        self.port.flush()?;
        Ok(())
    }

    fn receive(&mut self, request: Request) -> Result<Response, LinkError> {
        let mut buf = [0u8; 32];
        loop {
            let n = match self.port.read(&mut buf) {
                Ok(0) => return Err(LinkError::Closed),
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::TimedOut => return Err(LinkError::Timeout),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            trace!("RX {:02X?}", &buf[..n]);

            for &byte in &buf[..n] {
                let frame = match self.parser.feed(byte) {
                    Ok(Some(frame)) => frame,
                    Ok(None) => continue,
                    Err(e) => {
                        debug!("Dropping malformed frame: {}", e);
                        continue;
                    }
                };
                match Response::from_frame(&frame) {
                    Ok(response) if answers(request, &response) => return Ok(response),
                    Ok(response) => debug!("Ignoring {:?} while awaiting {:?}", response, request),
                    Err(e) => debug!("Dropping undecodable frame: {}", e),
                }
            }
        }
    }
}

impl<P: Read + Write + ClearInput> Link for FramedLink<P> {
    fn transact(&mut self, request: Request) -> Result<Response, LinkError> {
        self.port.clear_input()?;
        self.parser.reset();
        self.send(request)?;
        self.receive(request)
    }
}
