//! Host control loop
//!
//! One cycle: poll a reading, push it into the window, and when a window
//! completes, decide and apply the zone outcome. Application runs on a
//! scoped worker thread that is always joined before the cycle ends, so a
//! panicking actuator costs one decision and nothing else.

use std::thread;
use std::time::Duration;

use log::{debug, info, warn};
use lumen_core::{BrightnessChange, DistanceAverager, ZoneController, ZoneDecision};
use lumen_protocol::{Request, Response};

use crate::actuator::BrightnessActuator;
use crate::error::{ActuatorError, LinkError};
use crate::link::Link;
use crate::poller::HostPoller;

/// Loop counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopStats {
    /// Cycles run
    pub cycles: u64,
    /// Readings that entered the window
    pub samples: u64,
    /// Polls that produced no reading
    pub discarded: u64,
    /// Decisions applied successfully
    pub applied: u64,
    /// Decision applications that errored or panicked
    pub failed_actuations: u64,
}

/// What a single cycle did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CycleOutcome {
    /// Poll failed; the window is untouched
    Discarded,
    /// Sample stored, window not complete yet
    Filling,
    /// Window completed on a zone threshold; nothing actuated
    Boundary { distance_cm: u16 },
    /// Decision applied
    Applied { distance_cm: u16, decision: ZoneDecision },
    /// Decision application failed
    ActuationFailed { distance_cm: u16 },
}

pub struct ControlLoop<L, A> {
    poller: HostPoller<L>,
    actuator: A,
    averager: DistanceAverager,
    zones: ZoneController,
    stats: LoopStats,
}

impl<L, A> ControlLoop<L, A>
where
    L: Link + Send,
    A: BrightnessActuator + Send,
{
    pub fn new(poller: HostPoller<L>, actuator: A) -> Self {
        Self {
            poller,
            actuator,
            averager: DistanceAverager::new(),
            zones: ZoneController::new(),
            stats: LoopStats::default(),
        }
    }

    /// Run one poll/decide/apply cycle
    pub fn step(&mut self) -> CycleOutcome {
        self.stats.cycles += 1;

        let Some(reading) = self.poller.poll() else {
            self.stats.discarded += 1;
            return CycleOutcome::Discarded;
        };
        self.stats.samples += 1;

        let Some(distance_cm) = self.averager.push(reading.centimeters_or_far()) else {
            return CycleOutcome::Filling;
        };

        let Some(decision) = self.zones.decide(distance_cm) else {
            debug!("Smoothed {} cm sits on a zone threshold", distance_cm);
            return CycleOutcome::Boundary { distance_cm };
        };
        debug!("Smoothed {} cm -> {:?}", distance_cm, decision);

        let link = self.poller.link_mut();
        let actuator = &mut self.actuator;
        let result = thread::scope(|scope| {
            scope
                .spawn(move || apply_decision(link, actuator, decision))
                .join()
        });

        match result {
            Ok(Ok(())) => {
                self.stats.applied += 1;
                CycleOutcome::Applied {
                    distance_cm,
                    decision,
                }
            }
            Ok(Err(e)) => {
                self.stats.failed_actuations += 1;
                warn!("Failed to apply {:?}: {}", decision, e);
                CycleOutcome::ActuationFailed { distance_cm }
            }
            Err(_) => {
                self.stats.failed_actuations += 1;
                warn!("Actuator thread panicked applying {:?}", decision);
                CycleOutcome::ActuationFailed { distance_cm }
            }
        }
    }

    /// Run cycles forever, pausing `interval` between them
    pub fn run(&mut self, interval: Duration) -> ! {
        info!("Control loop running");
        loop {
            self.step();
            if self.stats.cycles % 1000 == 0 {
                info!("{:?}", self.stats());
            }
            if !interval.is_zero() {
                thread::sleep(interval);
            }
        }
    }

    pub fn stats(&self) -> LoopStats {
        self.stats
    }

    pub fn poller(&self) -> &HostPoller<L> {
        &self.poller
    }

    pub fn actuator(&self) -> &A {
        &self.actuator
    }
}

/// Drive the indicator, then the brightness if the decision changes it
fn apply_decision<L: Link, A: BrightnessActuator>(
    mut link: L,
    mut actuator: A,
    decision: ZoneDecision,
) -> Result<(), ActuatorError> {
    let request = if decision.indicator.is_on() {
        Request::ActuatorOn
    } else {
        Request::ActuatorOff
    };
    match link.transact(request)? {
        Response::Ack => {}
        Response::Nak => return Err(LinkError::Rejected(request).into()),
        response => return Err(LinkError::UnexpectedResponse { request, response }.into()),
    }

    if let BrightnessChange::Set(level) = decision.brightness {
        actuator.set_brightness(level.as_f32())?;
    }
    Ok(())
}
