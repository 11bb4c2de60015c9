// Tests that run the built binary

use segscope::report::{parse_line, Entry, Label};
use std::process::{Command, Output};

fn run_segscope(args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_segscope"));
    cmd.args(args)
        .env_remove("SEGSCOPE_ALLOC_SIZE")
        .env_remove("SEGSCOPE_VIEW")
        .env_remove("SEGSCOPE_VERBOSE");
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.output().expect("failed to launch segscope")
}

fn entries(output: &Output) -> Vec<Entry> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| parse_line(line).unwrap_or_else(|| panic!("malformed line: {:?}", line)))
        .collect()
}

fn address(entries: &[Entry], label: Label) -> usize {
    entries
        .iter()
        .find(|e| e.label == label)
        .map(|e| e.address)
        .expect("label present")
}

/// Labels sorted by address
fn placement(entries: &[Entry]) -> Vec<Label> {
    let mut sorted = entries.to_vec();
    sorted.sort_by_key(|e| e.address);
    sorted.into_iter().map(|e| e.label).collect()
}

#[test]
fn test_prints_eight_lines_and_exits_zero() {
    let output = run_segscope(&[], &[]);

    assert_eq!(output.status.code(), Some(0));
    let entries = entries(&output);
    let labels: Vec<Label> = entries.iter().map(|e| e.label).collect();
    assert_eq!(labels, Label::ALL.to_vec());
    assert!(output.stderr.is_empty());
}

#[test]
fn test_extra_arguments_do_not_change_shape() {
    let output = run_segscope(&["one", "two", "--three"], &[]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(entries(&output).len(), 8);
}

#[test]
fn test_argv_points_at_program_name() {
    let entries = entries(&run_segscope(&[], &[]));

    // argv and *argv are runtime-owned, never null for a normal launch
    assert_ne!(address(&entries, Label::Argv), 0);
    assert_ne!(address(&entries, Label::ArgvFirst), 0);
    assert_ne!(address(&entries, Label::Argv), address(&entries, Label::ArgvRef));
}

#[test]
fn test_statics_disjoint_from_stack_slots() {
    let entries = entries(&run_segscope(&[], &[]));

    let frame: Vec<usize> = [Label::L1, Label::Argc, Label::ArgvRef, Label::Alloc]
        .into_iter()
        .map(|label| address(&entries, label))
        .collect();
    let frame_low = *frame.iter().min().expect("non-empty");
    let frame_high = *frame.iter().max().expect("non-empty");

    for label in [Label::G1, Label::Gi1] {
        let addr = address(&entries, label);
        assert!(addr < frame_low || addr > frame_high);
        let distance = addr.abs_diff(frame_low).min(addr.abs_diff(frame_high));
        assert!(distance > frame_high - frame_low);
    }
}

#[test]
fn test_relative_placement_is_stable_across_runs() {
    let first = entries(&run_segscope(&[], &[]));
    let second = entries(&run_segscope(&[], &[]));

    assert_eq!(placement(&first), placement(&second));
}

#[test]
fn test_allocation_failure_is_fatal() {
    let max = usize::MAX.to_string();
    let output = run_segscope(&[], &[("SEGSCOPE_ALLOC_SIZE", max.as_str())]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Allocation failure"), "stderr: {}", stderr);
}

#[test]
fn test_invalid_config_is_fatal() {
    let output = run_segscope(&[], &[("SEGSCOPE_VIEW", "tree")]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("SEGSCOPE_VIEW"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let output = run_segscope(&[], &[("SEGSCOPE_VERBOSE", "1"), ("SEGSCOPE_ALLOC_SIZE", "64")]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(entries(&output).len(), 8);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("64 byte scratch block"));
    assert!(stderr.contains("Scratch block: 64 bytes"));
}
