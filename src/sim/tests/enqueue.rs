//! Submission tests: queue lengths, ordering, filtering, validation.

use serde_json::json;

use super::*;
use crate::protocol::Queueable;
use crate::sim::{JobFilter, SimError};

#[test]
fn queue_length_counts_submissions_in_order() {
    let sim = setup();

    sim.enqueue(&job("SendEmail", "mailers").arg(json!(1))).unwrap();
    sim.enqueue(&job("SendEmail", "mailers").arg(json!(2))).unwrap();
    sim.enqueue(&job("Resize", "images")).unwrap();

    assert_eq!(sim.queue_length("mailers").unwrap(), 2);
    assert_eq!(sim.queue_length("images").unwrap(), 1);

    let mailers = sim.find_enqueued(Some("mailers")).unwrap();
    assert_eq!(mailers[0].arguments.as_ref(), &json!([1]));
    assert_eq!(mailers[1].arguments.as_ref(), &json!([2]));
}

#[test]
fn absent_queue_reads_as_empty() {
    let sim = setup();
    assert_eq!(sim.queue_length("never-created").unwrap(), 0);
    assert!(sim.find_enqueued(Some("never-created")).unwrap().is_empty());
}

#[test]
fn queue_names_are_canonicalized() {
    let sim = setup();

    sim.enqueue(&job("SendEmail", "  mailers  ")).unwrap();

    assert_eq!(sim.queue_length("mailers").unwrap(), 1);
    assert_eq!(sim.queue_length("  mailers").unwrap(), 1);
}

#[test]
fn empty_queue_name_is_rejected_synchronously() {
    let sim = setup();

    let err = sim.enqueue(&job("SendEmail", "   ")).unwrap_err();
    assert!(matches!(err, SimError::InvalidQueueName(_)));

    assert!(sim.queue_length("").is_err());
    assert!(sim.drain(None, Some("")).is_err());
}

#[test]
fn class_filter_gates_submissions() {
    let sim = setup();
    sim.set_filter(JobFilter::by_class("SendEmail"));

    sim.enqueue(&job("Resize", "work")).unwrap();
    assert_eq!(sim.queue_length("work").unwrap(), 0);

    sim.enqueue(&job("SendEmail", "work")).unwrap();
    assert_eq!(sim.queue_length("work").unwrap(), 1);
}

#[test]
fn class_set_filter_accepts_members_only() {
    let sim = setup();
    sim.set_filter(JobFilter::by_classes(["SendEmail", "Resize"]));

    sim.enqueue(&job("SendEmail", "work")).unwrap();
    sim.enqueue(&job("Resize", "work")).unwrap();
    sim.enqueue(&job("Audit", "work")).unwrap();

    assert_eq!(sim.queue_length("work").unwrap(), 2);
}

#[test]
fn predicate_filter_sees_the_serialized_record() {
    let sim = setup();
    sim.set_filter(JobFilter::by_predicate(|record| record.queue == "high"));

    sim.enqueue(&job("SendEmail", "high")).unwrap();
    sim.enqueue(&job("SendEmail", "low")).unwrap();

    assert_eq!(sim.queue_length("high").unwrap(), 1);
    assert_eq!(sim.queue_length("low").unwrap(), 0);
}

#[test]
fn filter_changes_do_not_touch_stored_jobs() {
    let sim = setup();

    sim.enqueue(&job("SendEmail", "mailers")).unwrap();
    sim.set_filter(JobFilter::by_class("Nothing"));

    assert_eq!(sim.queue_length("mailers").unwrap(), 1);
}

#[test]
fn find_enqueued_matching_applies_predicate() {
    let sim = setup();

    sim.enqueue(&job("SendEmail", "mailers").arg(json!("a"))).unwrap();
    sim.enqueue(&job("Resize", "mailers").arg(json!("b"))).unwrap();

    let emails = sim
        .find_enqueued_matching(Some("mailers"), |record| record.class_name == "SendEmail")
        .unwrap();
    assert_eq!(emails.len(), 1);
    assert_eq!(emails[0].arguments.as_ref(), &json!(["a"]));
}

#[test]
fn find_enqueued_without_queue_spans_all_queues() {
    let sim = setup();

    sim.enqueue(&job("A", "one")).unwrap();
    sim.enqueue(&job("B", "two")).unwrap();
    sim.enqueue(&job("C", "two")).unwrap();

    assert_eq!(sim.find_enqueued(None).unwrap().len(), 3);
}

#[test]
fn serialize_carries_class_queue_and_arguments() {
    let spec = job("SendEmail", "mailers").args(vec![json!(7), json!("x")]);
    let record = spec.serialize();

    assert_eq!(record.class_name, "SendEmail");
    assert_eq!(record.queue, "mailers");
    assert_eq!(record.arguments.as_ref(), &json!([7, "x"]));
}
