use rand::rngs::SmallRng;
use rand::SeedableRng;

use cpu_sched::metrics::{ScheduleMetrics, SpanMethod};
use cpu_sched::models::Process;
use cpu_sched::scheduler::{
    Admission, Algorithm, Fcfs, PriorityScheduling, RoundRobin, SchedulingAlgorithm, Sjf, Srtf,
};
use cpu_sched::simulation::{compare, SimulationRequest};
use cpu_sched::workload::{generate, WorkloadConfig};

fn three_processes() -> Vec<Process> {
    vec![
        Process::new(1, 0, 5),
        Process::new(2, 1, 3),
        Process::new(3, 2, 8),
    ]
}

fn four_processes() -> Vec<Process> {
    vec![
        Process::new(1, 0, 8),
        Process::new(2, 1, 4),
        Process::new(3, 2, 9),
        Process::new(4, 3, 5),
    ]
}

/// Every discipline, with Round Robin gated on arrival.
fn arrival_respecting_schedulers() -> Vec<Box<dyn SchedulingAlgorithm>> {
    vec![
        Box::new(Fcfs),
        Box::new(Sjf),
        Box::new(Srtf),
        Box::new(PriorityScheduling),
        Box::new(RoundRobin::new(1).with_admission(Admission::OnArrival)),
        Box::new(RoundRobin::new(3).with_admission(Admission::OnArrival)),
    ]
}

fn random_workloads() -> Vec<Vec<Process>> {
    (0..25u64)
        .map(|seed| {
            let config = WorkloadConfig::with_count(1 + (seed as usize % 9))
                .with_max_arrival(15)
                .with_burst_range(1, 9)
                .with_priority_range(0, 4);
            generate(&config, &mut SmallRng::seed_from_u64(seed))
        })
        .collect()
}

#[test]
fn fcfs_end_to_end() {
    let report = SimulationRequest::new(three_processes(), Algorithm::Fcfs)
        .run()
        .unwrap();

    assert_eq!(report.schedule.completion_times(), vec![Some(5), Some(8), Some(16)]);
    let per_process = &report.metrics.per_process;
    let turnaround: Vec<i64> = per_process.iter().map(|p| p.turnaround_time).collect();
    let waiting: Vec<i64> = per_process.iter().map(|p| p.waiting_time).collect();
    assert_eq!(turnaround, vec![5, 7, 14]);
    assert_eq!(waiting, vec![0, 4, 6]);
}

#[test]
fn sjf_matches_fcfs_without_reordering_opportunity() {
    let procs = three_processes();
    assert_eq!(
        Algorithm::Sjf.schedule(&procs).completion_times(),
        Algorithm::Fcfs.schedule(&procs).completion_times()
    );
}

#[test]
fn sjf_end_to_end() {
    let schedule = Algorithm::Sjf.schedule(&four_processes());
    assert_eq!(schedule.completion_order(), vec![1, 2, 4, 3]);
    let mut completions: Vec<i64> = schedule.completion_times().into_iter().flatten().collect();
    completions.sort_unstable();
    assert_eq!(completions, vec![8, 12, 17, 26]);
}

#[test]
fn srtf_end_to_end() {
    let report = SimulationRequest::new(four_processes(), Algorithm::Srtf)
        .with_span_method(SpanMethod::TrueExtent)
        .run()
        .unwrap();
    assert_eq!(report.metrics.total_waiting_time, 26);
    assert!((report.metrics.average_waiting_time - 6.5).abs() < 1e-10);
}

#[test]
fn round_robin_hand_trace() {
    let procs = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
    let schedule = Algorithm::RoundRobin { quantum: 2 }.schedule(&procs);
    assert_eq!(schedule.completion_time(2), Some(7));
    assert_eq!(schedule.completion_time(1), Some(8));
    assert_eq!(schedule.context_switches(), 4);
}

#[test]
fn span_by_input_order_endpoints_differs_from_true_extent() {
    // SJF finishes P4 (last in input order) before P3
    let schedule = Algorithm::Sjf.schedule(&four_processes());

    let positional = ScheduleMetrics::calculate(&schedule).unwrap();
    let extent = ScheduleMetrics::calculate_with(&schedule, SpanMethod::TrueExtent).unwrap();

    assert_eq!(positional.time_span, 17);
    assert_eq!(extent.time_span, 26);
    assert!(positional.cpu_utilization > 100.0);
    assert!((extent.cpu_utilization - 100.0).abs() < 1e-10);
}

#[test]
fn completion_never_precedes_arrival_plus_burst() {
    for procs in random_workloads() {
        for scheduler in arrival_respecting_schedulers() {
            let schedule = scheduler.schedule(&procs);
            for outcome in &schedule.processes {
                let completion = outcome.completion_time.expect("every process finishes");
                assert!(
                    completion >= outcome.process.earliest_completion(),
                    "{}: P{} finished at {completion}",
                    scheduler.name(),
                    outcome.process.id
                );
            }
        }
    }
}

#[test]
fn waiting_is_non_negative_and_turnaround_consistent() {
    let algorithms = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Srtf,
        Algorithm::Priority,
    ];
    for procs in random_workloads() {
        let mut reports = compare(&procs, &algorithms, SpanMethod::TrueExtent).unwrap();
        reports.push(
            SimulationRequest::new(procs.clone(), Algorithm::RoundRobin { quantum: 2 })
                .with_admission(Admission::OnArrival)
                .with_span_method(SpanMethod::TrueExtent)
                .run()
                .unwrap(),
        );
        for report in reports {
            for p in &report.metrics.per_process {
                assert!(p.waiting_time >= 0);
                assert_eq!(p.turnaround_time, p.waiting_time + p.burst_time);
            }
        }
    }
}

#[test]
fn preemptive_algorithms_conserve_work() {
    let schedulers: Vec<Box<dyn SchedulingAlgorithm>> = vec![
        Box::new(Srtf),
        Box::new(RoundRobin::new(1)),
        Box::new(RoundRobin::new(3)),
        Box::new(RoundRobin::new(3).with_admission(Admission::OnArrival)),
    ];

    for procs in random_workloads() {
        for scheduler in &schedulers {
            let schedule = scheduler.schedule(&procs);
            for p in &procs {
                assert_eq!(schedule.executed_time(p.id), p.burst_time);
            }
            assert_eq!(schedule.busy_time(), procs.iter().map(|p| p.burst_time).sum::<i64>());
            assert!(schedule.processes.iter().all(|p| p.remaining_time == 0));
        }
    }
}

#[test]
fn timeline_never_overlaps() {
    for procs in random_workloads() {
        for algorithm in Algorithm::all(2) {
            let schedule = algorithm.schedule(&procs);
            assert!(schedule.slices.windows(2).all(|w| w[0].end <= w[1].start));
            assert!(schedule.slices.iter().all(|s| s.duration() > 0));
        }
    }
}

#[test]
fn fcfs_follows_cumulative_formula() {
    for procs in random_workloads() {
        let schedule = Algorithm::Fcfs.schedule(&procs);
        let mut time = 0;
        for (p, outcome) in procs.iter().zip(&schedule.processes) {
            time = time.max(p.arrival_time) + p.burst_time;
            assert_eq!(outcome.completion_time, Some(time));
        }
    }
}

#[test]
fn srtf_never_worse_than_sjf_on_average_waiting() {
    for procs in random_workloads() {
        let sjf = SimulationRequest::new(procs.clone(), Algorithm::Sjf)
            .with_span_method(SpanMethod::TrueExtent)
            .run()
            .unwrap();
        let srtf = SimulationRequest::new(procs, Algorithm::Srtf)
            .with_span_method(SpanMethod::TrueExtent)
            .run()
            .unwrap();
        assert!(srtf.metrics.average_waiting_time <= sjf.metrics.average_waiting_time + 1e-10);
    }
}

#[test]
fn eager_round_robin_can_dispatch_before_arrival() {
    // P2 arrives at 20, but eager admission queues it at t=0
    let procs = vec![Process::new(1, 0, 2), Process::new(2, 20, 2)];

    let eager = RoundRobin::new(2).schedule(&procs);
    assert_eq!(eager.completion_time(2), Some(4));

    let on_arrival = RoundRobin::new(2)
        .with_admission(Admission::OnArrival)
        .schedule(&procs);
    assert_eq!(on_arrival.completion_time(2), Some(22));
}
