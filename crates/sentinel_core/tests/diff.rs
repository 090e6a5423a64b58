use sentinel_core::{diff, EventKind, Indicator, Snapshot};

fn snapshot(pairs: &[(&str, &str)]) -> Snapshot {
    pairs.iter().map(|&(name, color)| (name, color)).collect()
}

fn init_logging() {
    watch_logging::initialize_for_tests();
}

#[test]
fn snapshot_diffed_against_itself_is_empty() {
    init_logging();
    let snap = snapshot(&[("build-docs", "blue"), ("unit-tests", "red")]);
    assert!(diff(&snap, &snap).is_empty());
    assert!(diff(&Snapshot::new(), &Snapshot::new()).is_empty());
}

#[test]
fn passed_and_created_scenario() {
    let old = snapshot(&[("A", "blue"), ("B", "red")]);
    let new = snapshot(&[("A", "blue"), ("B", "blue"), ("C", "grey")]);

    let events = diff(&old, &new);
    assert_eq!(
        events,
        vec![
            ("B".to_string(), EventKind::BuildPassed),
            ("C".to_string(), EventKind::Created),
        ]
    );
}

#[test]
fn running_marker_edge_yields_build_started() {
    let old = snapshot(&[("A", "blue")]);
    let new = snapshot(&[("A", "blue_anime")]);
    assert_eq!(
        diff(&old, &new),
        vec![("A".to_string(), EventKind::BuildStarted)]
    );
}

#[test]
fn vanished_job_yields_deleted() {
    let old = snapshot(&[("A", "red")]);
    let new = Snapshot::new();
    assert_eq!(diff(&old, &new), vec![("A".to_string(), EventKind::Deleted)]);
}

#[test]
fn deletions_come_before_changes_and_creations() {
    let old = snapshot(&[("a-gone", "blue"), ("z-gone", "red"), ("kept", "red")]);
    let new = snapshot(&[("kept", "blue"), ("born", "notbuilt")]);

    let events = diff(&old, &new);
    let names: Vec<&str> = events.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["a-gone", "z-gone", "born", "kept"]);
    assert_eq!(events[0].1, EventKind::Deleted);
    assert_eq!(events[1].1, EventKind::Deleted);
    assert_eq!(events[2].1, EventKind::Created);
    assert_eq!(events[3].1, EventKind::BuildPassed);
}

#[test]
fn unknown_transition_carries_both_tokens() {
    let old = snapshot(&[("A", "blue")]);
    let new = snapshot(&[("A", "disabled")]);
    assert_eq!(
        diff(&old, &new),
        vec![(
            "A".to_string(),
            EventKind::UnknownTransition {
                old: Indicator::new("blue"),
                new: Indicator::new("disabled"),
            }
        )]
    );
}

#[test]
fn snapshot_queries_are_ordered_and_running_aware() {
    let snap = snapshot(&[("zeta", "blue_anime"), ("alpha", "red"), ("mid", "anime")]);
    let names: Vec<&str> = snap.job_names().collect();
    assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    let running: Vec<&str> = snap.running_job_names().collect();
    assert_eq!(running, vec!["mid", "zeta"]);
    assert_eq!(snap.len(), 3);
}
