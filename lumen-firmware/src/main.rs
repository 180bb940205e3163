//! Lumen - Viewer Distance Sensor Firmware
//!
//! Main firmware binary for the RP2040 sensor board. Answers indicator
//! and distance requests from the host over a framed UART link.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_rp::watchdog::Watchdog;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

mod board;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Lumen firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Start the watchdog first so a hang during setup also resets
    spawner
        .spawn(tasks::watchdog_task(Watchdog::new(p.WATCHDOG)))
        .unwrap();

    let endpoint = board::endpoint(p.PIN_2, p.PIN_3, p.PIN_25);
    info!("Sensor and indicator initialized");

    let mut uart_config = UartConfig::default();
    uart_config.baudrate = board::LINK_BAUD;

    let tx_buf = TX_BUF.init([0u8; 64]);
    let rx_buf = RX_BUF.init([0u8; 64]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    info!("UART initialized at {} baud", board::LINK_BAUD);

    spawner.spawn(tasks::link_task(uart, endpoint)).unwrap();

    info!("All tasks spawned, firmware running");
}
