//! Unit tests for running child programs

#![cfg(unix)]

use exitpolicy::codes;
use exitpolicy::error::ChildExitError;
use exitpolicy::operations::run_program;
use exitpolicy::resolver::Resolver;

fn command(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|p| (*p).to_owned()).collect()
}

#[test]
fn test_successful_program() {
    let result = run_program(&command(&["true"]), None);
    assert!(result.is_ok());
    assert_eq!(Resolver::new().status_of(&result), codes::OK);
}

#[test]
fn test_child_exit_code_propagates() {
    let result = run_program(&command(&["sh", "-c", "exit 3"]), None);

    let err = result.as_ref().unwrap_err();
    let child = err.downcast_ref::<ChildExitError>().unwrap();
    assert_eq!(child.program(), "sh");
    assert_eq!(Resolver::new().status_of(&result), 3);
}

#[test]
fn test_pinned_code_wins() {
    let result = run_program(&command(&["sh", "-c", "exit 3"]), Some(9));
    assert_eq!(Resolver::new().status_of(&result), 9);

    let result = run_program(&command(&["true"]), Some(9));
    assert_eq!(Resolver::new().status_of(&result), codes::OK);
}

#[test]
fn test_missing_program() {
    let result = run_program(&command(&["exitpolicy-test-no-such-program"]), None);

    assert_eq!(Resolver::new().status_of(&result), codes::UNAVAILABLE);
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("Failed to start exitpolicy-test-no-such-program")
    );
}
