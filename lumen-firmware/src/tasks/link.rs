//! Host link task
//!
//! Receives request frames from the host, services them through the
//! control endpoint, and writes back one response per request.

use defmt::*;
use embassy_rp::uart::{BufferedUart, BufferedUartTx};
use embedded_io_async::{Read, Write};

use lumen_protocol::{FrameError, FrameParser, Request, Response};

use crate::board::Endpoint;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

/// Link task - one request at a time, each answered before the next is read
#[embassy_executor::task]
pub async fn link_task(uart: BufferedUart, mut endpoint: Endpoint) {
    info!("Link task started");

    let (mut tx, mut rx) = uart.split();
    let mut parser = FrameParser::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        let n = match rx.read(&mut buf).await {
            Ok(n) => n,
            Err(e) => {
                warn!("UART read error: {:?}", e);
                parser.reset();
                continue;
            }
        };
        trace!("RX: {} bytes", n);

        for &byte in &buf[..n] {
            match parser.feed(byte) {
                Ok(Some(frame)) => {
                    let response = match Request::from_frame(&frame) {
                        Ok(request) => {
                            debug!("Request: {:?}", request);
                            endpoint.handle(request)
                        }
                        Err(e) => {
                            warn!("Rejecting request: {:?}", e);
                            Response::Nak
                        }
                    };
                    if let Some(reading) = endpoint.last_reading() {
                        trace!("Last reading: {:?}", reading);
                    }
                    send_response(&mut tx, &response).await;
                }
                Ok(None) => {
                    // Need more bytes
                }
                Err(FrameError::InvalidChecksum) => {
                    warn!("Dropping frame with bad checksum");
                }
                Err(e) => {
                    warn!("Frame parse error: {:?}", e);
                }
            }
        }
    }
}

async fn send_response(tx: &mut BufferedUartTx, response: &Response) {
    let encoded = match response.to_frame().and_then(|frame| frame.encode_to_vec()) {
        Ok(encoded) => encoded,
        Err(e) => {
            error!("Failed to encode response: {:?}", e);
            return;
        }
    };

    if let Err(e) = tx.write_all(&encoded).await {
        warn!("UART write error: {:?}", e);
    }
}
