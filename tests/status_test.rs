///! Tests for the pesanan status workflow: a fixed linear sequence with
///! forward-only transitions.
///!
///! Run with: `cargo test --test status_test`
use teknindo_backend::models::pesanan::Status;

#[test]
fn sequence_runs_pending_to_selesai() {
    assert_eq!(Status::SEQUENCE.first(), Some(&Status::Pending));
    assert_eq!(Status::SEQUENCE.last(), Some(&Status::Selesai));
    assert_eq!(Status::SEQUENCE.len(), 6);
}

#[test]
fn next_walks_the_whole_sequence() {
    assert_eq!(Status::Pending.next(), Some(Status::Verifikasi));
    assert_eq!(Status::Verifikasi.next(), Some(Status::Proses));
    assert_eq!(Status::Proses.next(), Some(Status::Approval));
    assert_eq!(Status::Approval.next(), Some(Status::Running));
    assert_eq!(Status::Running.next(), Some(Status::Selesai));
    assert_eq!(Status::Selesai.next(), None);
}

#[test]
fn forward_jumps_are_legal() {
    assert!(Status::Pending.can_advance_to(&Status::Verifikasi));
    assert!(Status::Pending.can_advance_to(&Status::Selesai));
    assert!(Status::Proses.can_advance_to(&Status::Running));
}

#[test]
fn backward_and_same_status_are_illegal() {
    assert!(!Status::Proses.can_advance_to(&Status::Pending));
    assert!(!Status::Selesai.can_advance_to(&Status::Running));
    assert!(!Status::Running.can_advance_to(&Status::Running));
}

#[test]
fn allowed_next_shrinks_along_the_sequence() {
    assert_eq!(Status::Pending.allowed_next().len(), 5);
    assert_eq!(
        Status::Running.allowed_next(),
        vec![Status::Selesai]
    );
    assert!(Status::Selesai.allowed_next().is_empty());
}

#[test]
fn status_serializes_to_lowercase_strings() {
    assert_eq!(
        serde_json::to_value(Status::Verifikasi).unwrap(),
        serde_json::json!("verifikasi")
    );
    let parsed: Status = serde_json::from_str("\"selesai\"").unwrap();
    assert_eq!(parsed, Status::Selesai);
}
