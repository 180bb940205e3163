//! Integration tests: poller → averager → zone policy → actuators

use std::collections::VecDeque;
use std::io;

use lumen_core::{BrightnessChange, IndicatorState, Zone};
use lumen_host::{
    ActuatorError, BrightnessActuator, ControlLoop, CycleOutcome, HostPoller, Link, LinkError,
};
use lumen_protocol::{Reading, ReplyPayload, Request, Response};

// ── Mock implementations ──────────────────────────────────────

/// Link that answers measure requests from a script and acks the rest
#[derive(Default)]
struct ScriptedLink {
    readings: VecDeque<Result<Reading, LinkError>>,
    indicator: Vec<Request>,
    nak_indicator: bool,
}

impl ScriptedLink {
    fn with(readings: impl IntoIterator<Item = Reading>) -> Self {
        Self {
            readings: readings.into_iter().map(Ok).collect(),
            ..Self::default()
        }
    }
}

impl Link for ScriptedLink {
    fn transact(&mut self, request: Request) -> Result<Response, LinkError> {
        match request {
            Request::MeasureDistance => {
                let reading = self.readings.pop_front().unwrap_or(Err(LinkError::Timeout))?;
                Ok(Response::Distance(ReplyPayload::from_reading(reading)))
            }
            Request::ActuatorOn | Request::ActuatorOff => {
                self.indicator.push(request);
                if self.nak_indicator {
                    Ok(Response::Nak)
                } else {
                    Ok(Response::Ack)
                }
            }
        }
    }
}

#[derive(Default)]
struct RecordingActuator {
    levels: Vec<f32>,
    panic_next: bool,
}

impl BrightnessActuator for RecordingActuator {
    fn set_brightness(&mut self, level: f32) -> Result<(), ActuatorError> {
        if self.panic_next {
            self.panic_next = false;
            panic!("display went away");
        }
        self.levels.push(level);
        Ok(())
    }
}

fn control(link: ScriptedLink) -> ControlLoop<ScriptedLink, RecordingActuator> {
    ControlLoop::new(HostPoller::new(link), RecordingActuator::default())
}

fn run_window(
    control: &mut ControlLoop<ScriptedLink, RecordingActuator>,
) -> CycleOutcome {
    for _ in 0..9 {
        assert_eq!(control.step(), CycleOutcome::Filling);
    }
    control.step()
}

fn distances(cm: u16, count: usize) -> Vec<Reading> {
    vec![Reading::Distance(cm); count]
}

// ── Zone scenarios ────────────────────────────────────────────

#[test]
fn viewing_distance_dims_and_clears_indicator() {
    let mut control = control(ScriptedLink::with(distances(25, 10)));

    match run_window(&mut control) {
        CycleOutcome::Applied { distance_cm, decision } => {
            assert_eq!(distance_cm, 25);
            assert_eq!(decision.zone, Zone::Viewing);
        }
        other => panic!("unexpected outcome {:?}", other),
    }
    assert_eq!(control.actuator().levels, vec![0.25]);
    assert_eq!(control.poller().link().indicator, vec![Request::ActuatorOff]);
}

#[test]
fn far_viewer_lights_indicator_and_blanks_display() {
    let mut control = control(ScriptedLink::with(distances(150, 10)));

    match run_window(&mut control) {
        CycleOutcome::Applied { decision, .. } => {
            assert_eq!(decision.indicator, IndicatorState::On);
        }
        other => panic!("unexpected outcome {:?}", other),
    }
    assert_eq!(control.actuator().levels, vec![0.0]);
    assert_eq!(control.poller().link().indicator, vec![Request::ActuatorOn]);
}

#[test]
fn close_viewer_leaves_brightness_alone() {
    let mut control = control(ScriptedLink::with(distances(10, 10)));

    match run_window(&mut control) {
        CycleOutcome::Applied { decision, .. } => {
            assert_eq!(decision.brightness, BrightnessChange::Keep);
        }
        other => panic!("unexpected outcome {:?}", other),
    }
    assert!(control.actuator().levels.is_empty());
    assert_eq!(control.poller().link().indicator, vec![Request::ActuatorOff]);
}

#[test]
fn threshold_average_actuates_nothing() {
    let mut control = control(ScriptedLink::with(distances(100, 10)));

    assert_eq!(
        run_window(&mut control),
        CycleOutcome::Boundary { distance_cm: 100 }
    );
    assert!(control.actuator().levels.is_empty());
    assert!(control.poller().link().indicator.is_empty());
}

#[test]
fn sentinels_count_as_far() {
    let mut readings = distances(150, 5);
    readings.extend([Reading::Timeout; 3]);
    readings.extend([Reading::NoObstacle; 2]);
    let mut control = control(ScriptedLink::with(readings));

    match run_window(&mut control) {
        CycleOutcome::Applied { distance_cm, decision } => {
            // (5 * 150 + 5 * 518) / 10
            assert_eq!(distance_cm, 334);
            assert_eq!(decision.zone, Zone::Far);
        }
        other => panic!("unexpected outcome {:?}", other),
    }
}

#[test]
fn partial_window_never_actuates() {
    let mut control = control(ScriptedLink::with(distances(50, 9)));
    for _ in 0..9 {
        assert_eq!(control.step(), CycleOutcome::Filling);
    }
    assert!(control.actuator().levels.is_empty());
    assert!(control.poller().link().indicator.is_empty());
}

// ── Failure handling ──────────────────────────────────────────

#[test]
fn link_error_skips_the_slot() {
    let mut link = ScriptedLink::with(distances(60, 4));
    link.readings.push_back(Err(LinkError::Io(io::Error::new(
        io::ErrorKind::BrokenPipe,
        "unplugged",
    ))));
    link.readings.extend(distances(60, 6).into_iter().map(Ok));
    let mut control = control(link);

    for _ in 0..4 {
        assert_eq!(control.step(), CycleOutcome::Filling);
    }
    assert_eq!(control.step(), CycleOutcome::Discarded);
    for _ in 0..5 {
        assert_eq!(control.step(), CycleOutcome::Filling);
    }
    // Tenth good sample completes the window
    assert!(matches!(
        control.step(),
        CycleOutcome::Applied { distance_cm: 60, .. }
    ));
    assert_eq!(control.actuator().levels, vec![0.60]);

    let stats = control.stats();
    assert_eq!(stats.cycles, 11);
    assert_eq!(stats.samples, 10);
    assert_eq!(stats.discarded, 1);
    assert_eq!(stats.discarded, control.poller().discarded());
    assert_eq!(stats.applied, 1);
}

#[test]
fn panicking_actuator_is_contained() {
    let mut readings = distances(40, 10);
    readings.extend(distances(80, 10));
    let mut control = ControlLoop::new(
        HostPoller::new(ScriptedLink::with(readings)),
        RecordingActuator {
            levels: Vec::new(),
            panic_next: true,
        },
    );

    assert_eq!(
        run_window(&mut control),
        CycleOutcome::ActuationFailed { distance_cm: 40 }
    );
    // The loop carries on with the next window
    assert!(matches!(
        run_window(&mut control),
        CycleOutcome::Applied { distance_cm: 80, .. }
    ));
    assert_eq!(control.actuator().levels, vec![0.80]);

    let stats = control.stats();
    assert_eq!(stats.failed_actuations, 1);
    assert_eq!(stats.applied, 1);
}

#[test]
fn rejected_indicator_request_fails_the_cycle() {
    let mut link = ScriptedLink::with(distances(30, 10));
    link.nak_indicator = true;
    let mut control = control(link);

    assert_eq!(
        run_window(&mut control),
        CycleOutcome::ActuationFailed { distance_cm: 30 }
    );
    // Brightness is not touched once the indicator request fails
    assert!(control.actuator().levels.is_empty());
    assert_eq!(control.stats().failed_actuations, 1);
}
