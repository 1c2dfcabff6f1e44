use super::case_loader::{canonicalization_cases, resolution_cases};
use super::case_runner::run_cases;

#[test]
fn test_canonicalization_cases() {
    let cases = canonicalization_cases();
    assert!(!cases.is_empty());
    let result = run_cases(cases);
    result.print_summary();
    assert_eq!(result.failed, 0, "{} canonicalization cases failed", result.failed);
}

#[test]
fn test_resolution_cases() {
    let cases = resolution_cases();
    assert!(!cases.is_empty());
    let result = run_cases(cases);
    result.print_summary();
    assert_eq!(result.failed, 0, "{} resolution cases failed", result.failed);
}
