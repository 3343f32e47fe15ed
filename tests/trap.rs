//! Trap paths. Terminating paths run in a child copy of this test binary,
//! selected through an environment variable.

use std::{
    env,
    process::{Command, Output},
};

use faultline::prelude::*;

const CHILD_MODE: &str = "FAULTLINE_TRAP_CHILD";

fn run_child(mode: &str) -> Output {
    let exe = env::current_exe().expect("test binary path");
    Command::new(exe)
        .args(["run_trapping_child", "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_MODE, mode)
        .output()
        .expect("failed to spawn child test process")
}

fn no_op_trap() {}

#[test]
fn run_trapping_child() {
    let Ok(mode) = env::var(CHILD_MODE) else {
        return;
    };

    RaiseConfig::new()
        .with_trap_mode(TrapMode::TrapOnly)
        .with_trap(no_op_trap)
        .install()
        .unwrap();

    match mode.as_str() {
        "enforce_trap" => {
            let _ = enforce_trap!(2 + 2 == 5).into_result();
        }
        "trap" => trap!("fatal state", 42),
        "trap_only" => {
            let _ = failure!(Kind::Logic, "unrecoverable");
        }
        _ => {}
    }
    println!("child survived");
}

fn assert_trapped(output: &Output, message: &str) {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!output.status.success(), "child exited cleanly: {stderr}");
    assert!(stderr.contains("=== EXCEPTION TRAP ==="), "stderr: {stderr}");
    assert!(stderr.contains("Location: [tests/trap.rs:"), "stderr: {stderr}");
    assert!(stderr.contains(&format!("Message: {message}\n")), "stderr: {stderr}");
    assert!(!stdout.contains("child survived"));
}

#[test]
fn test_failed_enforce_trap_terminates() {
    let output = run_child("enforce_trap");
    assert_trapped(
        &output,
        "Enforcement failed: 2 + 2 == 5 - Expression must be true",
    );
}

#[test]
fn test_trap_macro_terminates() {
    let output = run_child("trap");
    assert_trapped(&output, "fatal state 42");
}

#[test]
fn test_trap_only_mode_terminates_on_raise() {
    let output = run_child("trap_only");
    assert_trapped(&output, "unrecoverable");
}

#[test]
fn test_passing_checks_do_not_trap() {
    assert!(enforce_trap!(true).into_result().unwrap());
    assert_eq!(*enforce_trap!(7), 7);

    let ready = true;
    trap_if!(!ready, "not ready");
    trap_unless!(ready, "not ready");
    debug_enforce!(1 + 1 == 2);
}
