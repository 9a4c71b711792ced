use std::error::Error;
use std::fmt::{self, Write as _};
use std::process;

use clap::{Arg, ArgAction, ArgMatches, Command};
use csv::{ReaderBuilder, Trim};
use log::error;

use cpu_sched::metrics::SpanMethod;
use cpu_sched::models::Process;
use cpu_sched::scheduler::{Admission, Algorithm};
use cpu_sched::simulation::{SimulationReport, SimulationRequest};

/// Reads a process file: one `arrival, burst[, priority]` row per process.
///
/// Ids are assigned 1..=n in row order. Lines starting with `#` are skipped.
pub fn read_process_file(file_path: &str) -> Result<Vec<Process>, Box<dyn Error>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .comment(Some(b'#'))
        .from_path(file_path)?;
    let mut processes = Vec::new();

    for (id, result) in (1u32..).zip(rdr.records()) {
        let record = result?;
        if record.len() < 2 {
            return Err(format!("row {id}: expected arrival, burst[, priority]").into());
        }

        let arrival: i64 = record[0].parse()?;
        let burst: i64 = record[1].parse()?;
        let priority: i32 = match record.get(2) {
            Some(field) if !field.is_empty() => field.parse()?,
            _ => 0,
        };

        processes.push(Process::new(id, arrival, burst).with_priority(priority));
    }

    Ok(processes)
}

pub fn build_cli_command() -> Command {
    Command::new("cpu-sched")
        .version("0.1.0")
        .about("Simulates CPU scheduling algorithms over a process set")
        .arg(
            Arg::new("process_file")
                .required(true)
                .help("CSV file with one 'arrival, burst, priority' row per process"),
        )
        .arg(
            Arg::new("algorithm")
                .short('a')
                .long("algorithm")
                .default_value("fcfs")
                .help("fcfs, sjf, srtf, priority, rr, rr:<quantum> or all"),
        )
        .arg(
            Arg::new("quantum")
                .short('q')
                .long("quantum")
                .default_value("2")
                .allow_hyphen_values(true)
                .value_parser(clap::value_parser!(i64))
                .help("Round Robin time quantum"),
        )
        .arg(
            Arg::new("true_span")
                .long("true-span")
                .action(ArgAction::SetTrue)
                .help("Measure span from earliest arrival to latest completion"),
        )
        .arg(
            Arg::new("eager")
                .long("eager")
                .action(ArgAction::SetTrue)
                .conflicts_with("on_arrival")
                .help("Round Robin queues every process at t=0 (default)"),
        )
        .arg(
            Arg::new("on_arrival")
                .long("on-arrival")
                .action(ArgAction::SetTrue)
                .help("Round Robin only queues processes once they have arrived"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print reports as JSON"),
        )
}

/// Resolves the algorithm list from the command line.
pub fn selected_algorithms(matches: &ArgMatches) -> Result<Vec<Algorithm>, Box<dyn Error>> {
    let quantum = matches.get_one::<i64>("quantum").copied().unwrap_or(Algorithm::DEFAULT_QUANTUM);
    let name = matches
        .get_one::<String>("algorithm")
        .map(String::as_str)
        .unwrap_or("fcfs");

    if name.eq_ignore_ascii_case("all") {
        return Ok(Algorithm::all(quantum).to_vec());
    }

    let algorithm = match name.parse::<Algorithm>()? {
        Algorithm::RoundRobin { .. } if !name.contains(':') => Algorithm::RoundRobin { quantum },
        other => other,
    };
    Ok(vec![algorithm])
}

/// Round Robin admission from the command line; eager unless `--on-arrival`.
pub fn selected_admission(matches: &ArgMatches) -> Admission {
    if matches.get_flag("on_arrival") {
        Admission::OnArrival
    } else {
        Admission::Eager
    }
}

pub fn render_report(report: &SimulationReport) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let m = &report.metrics;

    writeln!(out, "\n== {} ==", report.schedule.algorithm)?;
    writeln!(out, "Process\tAT\tBT\tPR\tCT\tTAT\tWT")?;
    for p in &m.per_process {
        writeln!(
            out,
            "P{}\t{}\t{}\t{}\t{}\t{}\t{}",
            p.process_id,
            p.arrival_time,
            p.burst_time,
            p.priority,
            p.completion_time,
            p.turnaround_time,
            p.waiting_time
        )?;
    }

    writeln!(out, "\nGantt: {}", render_gantt(report))?;
    writeln!(out, "Average Turnaround Time: {:.2}", m.average_turnaround_time)?;
    writeln!(out, "Average Waiting Time: {:.2}", m.average_waiting_time)?;
    writeln!(out, "CPU Utilization: {:.2}%", m.cpu_utilization)?;
    writeln!(out, "Throughput: {:.4} processes/unit time", m.throughput)?;
    Ok(out)
}

fn render_gantt(report: &SimulationReport) -> String {
    report
        .schedule
        .slices
        .iter()
        .map(|s| format!("[{}-{} P{}]", s.start, s.end, s.process_id))
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_comparison(reports: &[SimulationReport]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "\nAlgorithm\tAvgTAT\tAvgWT\tCPU%\tThroughput")?;
    for r in reports {
        let m = &r.metrics;
        writeln!(
            out,
            "{}\t\t{:.2}\t{:.2}\t{:.2}\t{:.4}",
            r.schedule.algorithm,
            m.average_turnaround_time,
            m.average_waiting_time,
            m.cpu_utilization,
            m.throughput
        )?;
    }
    Ok(out)
}

fn run(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let file = matches
        .get_one::<String>("process_file")
        .ok_or("missing process file")?;
    let processes = read_process_file(file)?;
    let algorithms = selected_algorithms(matches)?;

    let span_method = if matches.get_flag("true_span") {
        SpanMethod::TrueExtent
    } else {
        SpanMethod::InputOrderEndpoints
    };
    let admission = selected_admission(matches);

    let reports = algorithms
        .into_iter()
        .map(|algorithm| {
            SimulationRequest::new(processes.clone(), algorithm)
                .with_span_method(span_method)
                .with_admission(admission)
                .run()
        })
        .collect::<Result<Vec<_>, _>>()?;

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for report in &reports {
        print!("{}", render_report(report)?);
    }
    if reports.len() > 1 {
        print!("{}", render_comparison(&reports)?);
    }
    Ok(())
}

fn main() {
    env_logger::init();
    // cargo run -- <process_file> [-a fcfs|sjf|srtf|priority|rr|all] [-q <quantum>] [--true-span] [--eager|--on-arrival] [--json]
    let matches = build_cli_command().get_matches();

    if let Err(e) = run(&matches) {
        error!("{e}");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
