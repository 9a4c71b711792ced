//! Selection rules for choosing the next process to run.
//!
//! # Key Convention
//! **Lower key = selected first.** Among equal keys, the eligible process
//! with the lowest input index wins.
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::fmt::Debug;

use log::debug;

use super::clock::Clock;
use crate::models::{Process, Schedule};

/// Key returned by a selection rule.
pub type SelectionKey = i64;

/// A rule that ranks eligible processes.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPT").
    fn name(&self) -> &'static str;

    /// Ranks a process given its remaining work. Lower = runs first.
    fn key(&self, process: &Process, remaining: i64) -> SelectionKey;
}

/// Shortest total burst time.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn key(&self, process: &Process, _remaining: i64) -> SelectionKey {
        process.burst_time
    }
}

/// Shortest remaining work.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRPT"
    }

    fn key(&self, _process: &Process, remaining: i64) -> SelectionKey {
        remaining
    }
}

/// Lowest numeric priority value (= highest priority).
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl SelectionRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn key(&self, process: &Process, _remaining: i64) -> SelectionKey {
        i64::from(process.priority)
    }
}

/// Non-preemptive selection loop shared by SJF and priority scheduling.
///
/// At each instant, picks the best eligible process by `rule` and runs it
/// to completion; if nothing is eligible, idles until the next arrival.
pub(crate) fn run_non_preemptive<R: SelectionRule + ?Sized>(
    processes: &[Process],
    rule: &R,
    algorithm: &str,
) -> Schedule {
    let mut clock = Clock::new(processes);

    while !clock.all_finished() {
        match clock.select_min(|p, remaining| rule.key(p, remaining)) {
            Some(idx) => {
                debug!(
                    "{algorithm}: t={} dispatch P{} ({}={})",
                    clock.now(),
                    clock.process(idx).id,
                    rule.name(),
                    rule.key(clock.process(idx), clock.remaining(idx))
                );
                clock.run_to_completion(idx);
            }
            None => clock.idle_until_next_arrival(),
        }
    }

    clock.into_schedule(algorithm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortest_burst() {
        let short = Process::new(1, 0, 2);
        let long = Process::new(2, 0, 9);
        assert!(ShortestBurst.key(&short, 2) < ShortestBurst.key(&long, 9));
    }

    #[test]
    fn test_shortest_remaining_ignores_burst() {
        let p = Process::new(1, 0, 10);
        assert_eq!(ShortestRemaining.key(&p, 3), 3);
    }

    #[test]
    fn test_highest_priority() {
        let urgent = Process::new(1, 0, 5).with_priority(1);
        let relaxed = Process::new(2, 0, 5).with_priority(7);
        assert!(HighestPriority.key(&urgent, 5) < HighestPriority.key(&relaxed, 5));
    }

    #[test]
    fn test_negative_priority_is_selectable() {
        let procs = vec![
            Process::new(1, 0, 1).with_priority(0),
            Process::new(2, 0, 1).with_priority(-5),
        ];
        let schedule = run_non_preemptive(&procs, &HighestPriority, "PRIORITY");
        assert_eq!(schedule.completion_order(), vec![2, 1]);
    }

    #[test]
    fn test_large_keys_are_selectable() {
        let procs = vec![Process::new(1, 0, 40_000)];
        let schedule = run_non_preemptive(&procs, &ShortestBurst, "SJF");
        assert_eq!(schedule.completion_time(1), Some(40_000));
    }

    #[test]
    fn test_distant_arrival_is_reached_directly() {
        let procs = vec![Process::new(1, 1_000_000_000_000, 2).with_priority(1)];
        for rule in [&ShortestBurst as &dyn SelectionRule, &HighestPriority] {
            let schedule = run_non_preemptive(&procs, rule, rule.name());
            assert_eq!(schedule.completion_time(1), Some(1_000_000_000_002));
            assert_eq!(schedule.idle_time(), 1_000_000_000_000);
        }
    }

    #[test]
    fn test_idle_until_first_arrival() {
        let procs = vec![Process::new(1, 3, 2)];
        let schedule = run_non_preemptive(&procs, &ShortestBurst, "SJF");
        assert_eq!(schedule.completion_time(1), Some(5));
        assert_eq!(schedule.idle_time(), 3);
    }
}
