use lattice_check_ir::parse::{parse_configuration, parse_output};
use lattice_check_ir::types::{Configuration, Output};
use lattice_check_model::properties::{audit_outputs, check_outputs, validate_outputs};
use lattice_check_model::validate::check_configs;
use lattice_check_model::violation::{CheckMode, Violation, ViolationKind};

fn configs(texts: &[&str]) -> Vec<Configuration> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| parse_configuration(&format!("config-{}", i + 1), text).unwrap())
        .collect()
}

fn outputs(texts: &[&str]) -> Vec<Output> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| parse_output(&format!("output-{}", i + 1), text).unwrap())
        .collect()
}

#[test]
fn test_chain_of_decisions_passes() {
    let configs = configs(&["1 1 2\n1\n", "1 1 2\n2\n", "1 1 2\n\n"]);
    let outputs = outputs(&["1\n", "1 2\n", "2 1\n"]);
    assert_eq!(check_configs(&configs), Ok(()));
    assert_eq!(check_outputs(&configs, &outputs), Ok(()));
    assert!(audit_outputs(&configs, &outputs).is_empty());
}

#[test]
fn test_partial_outputs_pass() {
    let configs = configs(&["2 1 2\n1\n3\n", "2 1 2\n2\n4\n"]);
    let outputs = outputs(&["1 2\n3 4\n", "1 2\n"]);
    assert_eq!(check_outputs(&configs, &outputs), Ok(()));
}

#[test]
fn test_too_many_decisions() {
    let configs = configs(&["1 1 1\n1\n"]);
    let outputs = outputs(&["1\n1\n"]);
    let err = check_outputs(&configs, &outputs).unwrap_err();
    assert_eq!(
        err,
        Violation::TooManyDecisions {
            file: "output-1".to_string(),
            found: 2,
            p: 1,
        }
    );
}

#[test]
fn test_duplicate_in_decided_set() {
    let configs = configs(&["1 2 2\n1 2\n"]);
    let outputs = outputs(&["1 1 2\n"]);
    let err = check_outputs(&configs, &outputs).unwrap_err();
    assert_eq!(
        err,
        Violation::DuplicateInDecision {
            file: "output-1".to_string(),
            instance: 1,
            value: 1,
        }
    );
}

#[test]
fn test_decision_missing_own_proposal() {
    let configs = configs(&["1 2 2\n1 2\n"]);
    let outputs = outputs(&["1\n"]);
    let err = check_outputs(&configs, &outputs).unwrap_err();
    assert_eq!(
        err,
        Violation::SelfValidityViolated {
            file: "output-1".to_string(),
            instance: 1,
            value: 2,
        }
    );
}

#[test]
fn test_decision_outside_all_proposals() {
    let configs = configs(&["1 1 3\n1\n", "1 1 3\n2\n"]);
    let outputs = outputs(&["1 3\n", "2\n"]);
    let err = check_outputs(&configs, &outputs).unwrap_err();
    assert_eq!(
        err,
        Violation::GlobalValidityViolated {
            file: "output-1".to_string(),
            instance: 1,
            value: 3,
        }
    );
}

#[test]
fn test_incomparable_decisions() {
    let configs = configs(&["1 2 4\n1 2\n", "1 2 4\n3 4\n"]);
    let outputs = outputs(&["1 2 3 4\n", "3 4 1 2\n"]);
    assert_eq!(check_outputs(&configs, &outputs), Ok(()));

    let configs = configs_for_disjoint();
    let outputs = outputs_for_disjoint();
    let err = check_outputs(&configs, &outputs).unwrap_err();
    assert_eq!(
        err,
        Violation::ConsistencyViolated {
            first: "output-1".to_string(),
            second: "output-2".to_string(),
            instance: 1,
        }
    );
}

fn configs_for_disjoint() -> Vec<Configuration> {
    // Proposals empty so validity holds and only consistency can fail.
    configs(&["1 4 4\n\n", "1 4 4\n\n", "1 4 4\n1 2 3 4\n"])
}

fn outputs_for_disjoint() -> Vec<Output> {
    outputs(&["1 2\n", "3 4\n", "1 2 3 4\n"])
}

#[test]
fn test_consistency_names_instance() {
    let configs = configs(&["2 2 4\n\n3\n", "2 2 4\n1 2\n4\n"]);
    let outputs = outputs(&["1 2\n3\n", "1 2\n4\n"]);
    let err = check_outputs(&configs, &outputs).unwrap_err();
    assert!(matches!(
        err,
        Violation::ConsistencyViolated { instance: 2, .. }
    ));
    assert!(err.to_string().contains("agreement nr 2"), "message: {err}");
}

#[test]
fn test_consistency_checked_across_all_pairs() {
    // Outputs 1 and 2 are comparable, 1 and 3 are comparable, 2 and 3 are not.
    let configs = configs(&["1 3 3\n\n", "1 3 3\n1\n", "1 3 3\n2\n"]);
    let outputs = outputs(&["\n", "1\n", "2\n"]);
    let err = check_outputs(&configs, &outputs).unwrap_err();
    assert_eq!(
        err,
        Violation::ConsistencyViolated {
            first: "output-2".to_string(),
            second: "output-3".to_string(),
            instance: 1,
        }
    );
}

#[test]
fn test_shape_checked_before_validity() {
    // Both a duplicate and a self-validity failure; the duplicate is reported.
    let configs = configs(&["1 1 2\n5\n", "1 1 2\n6\n"]);
    let outputs = outputs(&["6\n", "6 6\n"]);
    let err = check_outputs(&configs, &outputs).unwrap_err();
    assert_eq!(err.kind(), ViolationKind::DuplicateInDecision);
}

#[test]
fn test_validity_checked_before_consistency() {
    let configs = configs(&["1 1 2\n1\n", "1 1 2\n2\n"]);
    let outputs = outputs(&["1\n", "9\n"]);
    let err = check_outputs(&configs, &outputs).unwrap_err();
    assert_eq!(err.kind(), ViolationKind::SelfValidityViolated);
}

#[test]
fn test_audit_reports_every_violation() {
    let configs = configs(&["1 1 2\n1\n", "1 1 2\n2\n"]);
    let outputs = outputs(&["1 7\n", "2\n2\n"]);
    let kinds: Vec<ViolationKind> = audit_outputs(&configs, &outputs)
        .iter()
        .map(Violation::kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            ViolationKind::TooManyDecisions,
            ViolationKind::GlobalValidityViolated,
            ViolationKind::ConsistencyViolated,
        ]
    );
}

#[test]
fn test_fail_fast_mode_reports_one() {
    let configs = configs(&["1 1 2\n1\n", "1 1 2\n2\n"]);
    let outputs = outputs(&["1 7\n", "2\n2\n"]);
    let violations = validate_outputs(&configs, &outputs, CheckMode::FailFast).unwrap_err();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].kind(), ViolationKind::TooManyDecisions);
}

#[test]
fn test_no_configs_nothing_to_check() {
    let outputs = outputs(&["1\n"]);
    assert_eq!(check_outputs(&[], &outputs), Ok(()));
}
