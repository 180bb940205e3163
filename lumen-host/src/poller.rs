//! Distance poller
//!
//! Issues one measure request per call and decodes the reply. Link and
//! decode failures are logged and counted; the caller just sees no sample.

use log::{trace, warn};
use lumen_protocol::{Reading, Request, Response};

use crate::error::LinkError;
use crate::link::Link;

pub struct HostPoller<L> {
    link: L,
    discarded: u64,
}

impl<L: Link> HostPoller<L> {
    pub fn new(link: L) -> Self {
        Self { link, discarded: 0 }
    }

    /// Request one measurement
    ///
    /// Returns `None` if the transaction failed or the reply could not be
    /// decoded. Sentinel readings are returned as-is.
    pub fn poll(&mut self) -> Option<Reading> {
        match self.measure() {
            Ok(reading) => {
                trace!("Reading: {:?}", reading);
                Some(reading)
            }
            Err(e) => {
                self.discarded += 1;
                warn!("Discarding sample: {}", e);
                None
            }
        }
    }

    fn measure(&mut self) -> Result<Reading, LinkError> {
        let request = Request::MeasureDistance;
        match self.link.transact(request)? {
            Response::Distance(reply) => Ok(reply.reading()?),
            Response::Nak => Err(LinkError::Rejected(request)),
            response => Err(LinkError::UnexpectedResponse { request, response }),
        }
    }

    /// Samples dropped so far
    pub fn discarded(&self) -> u64 {
        self.discarded
    }

    pub fn link(&self) -> &L {
        &self.link
    }

    pub fn link_mut(&mut self) -> &mut L {
        &mut self.link
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_protocol::ReplyPayload;
    use std::collections::VecDeque;
    use std::io;

    struct Scripted(VecDeque<Result<Response, LinkError>>);

    impl Link for Scripted {
        fn transact(&mut self, _request: Request) -> Result<Response, LinkError> {
            self.0.pop_front().unwrap_or(Err(LinkError::Timeout))
        }
    }

    fn poller(script: Vec<Result<Response, LinkError>>) -> HostPoller<Scripted> {
        HostPoller::new(Scripted(script.into()))
    }

    #[test]
    fn test_decodes_distance_and_sentinels() {
        let mut p = poller(vec![
            Ok(Response::Distance(ReplyPayload::from_reading(Reading::Distance(77)))),
            Ok(Response::Distance(ReplyPayload::from_reading(Reading::Timeout))),
        ]);
        assert_eq!(p.poll(), Some(Reading::Distance(77)));
        assert_eq!(p.poll(), Some(Reading::Timeout));
        assert_eq!(p.discarded(), 0);
    }

    #[test]
    fn test_failures_are_counted() {
        let garbage = ReplyPayload::from_bytes(b"12a4\0").unwrap();
        let mut p = poller(vec![
            Err(LinkError::Io(io::Error::new(io::ErrorKind::BrokenPipe, "unplugged"))),
            Ok(Response::Distance(garbage)),
            Ok(Response::Ack),
            Ok(Response::Nak),
        ]);
        for _ in 0..4 {
            assert_eq!(p.poll(), None);
        }
        assert_eq!(p.discarded(), 4);
    }
}
