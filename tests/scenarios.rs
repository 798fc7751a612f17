//! End-to-end scenarios through the public API.

use u_cpusim::models::ExecutionSlice;
use u_cpusim::workload::parse_jobs;
use u_cpusim::{simulate, Algorithm, JobSpec, SimError, SimulationConfig, Simulator};

#[test]
fn test_fifo_two_jobs() {
    let jobs = vec![JobSpec::new(5, 0), JobSpec::new(3, 1)];
    let report = simulate(&jobs, Algorithm::Fifo).unwrap();

    assert_eq!(report.stats.outcomes().collect::<Vec<_>>(), vec![(0, 5, 0), (1, 7, 4)]);
    assert!((report.avg_wait() - 2.0).abs() < 1e-10);
    assert!((report.avg_turnaround() - 6.0).abs() < 1e-10);
}

#[test]
fn test_round_robin_quantum_two() {
    let jobs = vec![JobSpec::new(4, 0), JobSpec::new(2, 0)];
    let report = simulate(&jobs, Algorithm::round_robin(2).unwrap()).unwrap();

    assert_eq!(report.stats.jobs[0].completion_time, 6);
    assert_eq!(report.stats.jobs[0].turnaround_time, 6);
    assert_eq!(report.stats.jobs[0].wait_time, 2);
    assert_eq!(report.stats.jobs[1].completion_time, 4);
    assert_eq!(report.stats.jobs[1].turnaround_time, 4);
    assert_eq!(report.stats.jobs[1].wait_time, 2);
}

#[test]
fn test_srtn_preempts_for_shorter_arrivals() {
    let jobs = vec![JobSpec::new(8, 0), JobSpec::new(4, 1), JobSpec::new(2, 2)];
    let report = simulate(&jobs, Algorithm::Srtn).unwrap();

    assert_eq!(
        report.timeline.slices(),
        &[
            ExecutionSlice::new(0, 0, 1),
            ExecutionSlice::new(1, 1, 2),
            ExecutionSlice::new(2, 2, 4),
            ExecutionSlice::new(1, 4, 7),
            ExecutionSlice::new(0, 7, 14),
        ]
    );
    assert_eq!(report.stats.context_switches, 4);
    assert_eq!(report.stats.jobs[0].response_time, Some(0));
    assert_eq!(report.stats.jobs[1].response_time, Some(0));
}

#[test]
fn test_text_input_to_report() {
    let input = "# run arrival\n5 0\n3 1\n";
    let jobs = parse_jobs(input).unwrap();
    let config = SimulationConfig::new().with_algorithm("FIFO");
    let report = Simulator::from_config(&config).unwrap().run(&jobs).unwrap();
    assert_eq!(report.stats.makespan, 8);
}

#[test]
fn test_simultaneous_arrivals_keep_input_order() {
    // Three jobs arrive together; ids follow the input lines.
    let jobs = parse_jobs("3 0\n1 0\n2 0\n").unwrap();
    let report = simulate(&jobs, Algorithm::Fifo).unwrap();
    let runs: Vec<i64> = report.stats.jobs.iter().map(|j| j.run_time).collect();
    assert_eq!(runs, vec![3, 1, 2]);
}

#[test]
fn test_error_taxonomy() {
    assert_eq!(simulate(&[], Algorithm::Srtn), Err(SimError::EmptyInput));
    assert!(matches!(
        simulate(&[JobSpec::new(-1, 0)], Algorithm::Fifo),
        Err(SimError::InvalidJob { position: 0, .. })
    ));
    assert!(matches!(
        simulate(&[JobSpec::new(1, -5)], Algorithm::Fifo),
        Err(SimError::InvalidJob { position: 0, .. })
    ));
    assert_eq!(
        SimulationConfig::new().with_algorithm("RR").with_quantum(0).resolve(),
        Err(SimError::InvalidQuantum(0))
    );
    assert_eq!(
        SimulationConfig::new().with_algorithm("MLFQ").resolve(),
        Err(SimError::UnknownAlgorithm("MLFQ".into()))
    );
}
