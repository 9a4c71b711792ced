//! Shortest Remaining Time First scheduling.
//!
//! Preemptive, unit-step simulation: the winner is reselected every time
//! unit, so a newly arrived shorter job takes the CPU immediately.

use log::debug;

use super::clock::Clock;
use super::selection::{SelectionRule, ShortestRemaining};
use super::SchedulingAlgorithm;
use crate::models::{Process, Schedule};

/// Shortest Remaining Time First (preemptive SJF).
///
/// Tie-break: lowest input index among equal remaining times.
#[derive(Debug, Clone, Copy, Default)]
pub struct Srtf;

impl SchedulingAlgorithm for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        let mut clock = Clock::new(processes);
        let mut running: Option<usize> = None;

        while !clock.all_finished() {
            match clock.select_min(|p, remaining| ShortestRemaining.key(p, remaining)) {
                Some(idx) => {
                    if running != Some(idx) {
                        debug!(
                            "SRTF: t={} switch to P{} (remaining={})",
                            clock.now(),
                            clock.process(idx).id,
                            clock.remaining(idx)
                        );
                    }
                    running = if clock.run(idx, 1) { None } else { Some(idx) };
                }
                None => {
                    running = None;
                    clock.idle_until_next_arrival();
                }
            }
        }

        clock.into_schedule(self.name())
    }
}
