//! Unit tests for vertex identity strategies

use hybridgraph::{
    GraphStorage, GraphValue, HybridCsrCoo, IdentityAllocator, Stamp, Stamped, StatusCode,
};

#[derive(Debug, Clone, Default, PartialEq)]
struct Person {
    name: String,
    age: u32,
}

fn person(name: &str, age: u32) -> Person {
    Person {
        name: name.to_string(),
        age,
    }
}

#[test]
fn test_value_types_compare_by_value() {
    let mut csr: HybridCsrCoo<String, u8> = HybridCsrCoo::new();
    csr.add_vertex("a".to_string()).unwrap();
    let err = csr.add_vertex("a".to_string()).unwrap_err();
    assert_eq!(err.code(), StatusCode::VertexAlreadyExists);
}

#[test]
fn test_equal_payloads_with_distinct_stamps_are_distinct_vertices() {
    let mut ids = IdentityAllocator::new();
    let alice = ids.stamp(person("Alice", 30));
    let twin = ids.stamp(person("Alice", 30));

    let mut csr: HybridCsrCoo<Stamped<Person>, u32> = HybridCsrCoo::new();
    csr.add_vertex(alice.clone()).unwrap();
    csr.add_vertex(twin.clone()).unwrap();
    assert_eq!(csr.vertex_count(), 2);

    let err = csr.add_vertex(alice.clone()).unwrap_err();
    assert_eq!(err.code(), StatusCode::VertexAlreadyExists);

    csr.add_edge(&alice, &twin, 1).unwrap();
    csr.compact();
    assert_eq!(csr.get_edge(&alice, &twin).unwrap(), 1);
}

#[test]
fn test_payload_mutation_keeps_identity() {
    let mut ids = IdentityAllocator::new();
    let original = ids.stamp(person("Bob", 40));
    let mut changed = original.clone();
    changed.payload_mut().age = 41;

    assert_eq!(original, changed);
    assert_eq!(changed.payload().age, 41);
    assert_eq!(changed.into_payload().name, "Bob");
}

#[test]
fn test_named_stamps_and_labels() {
    let mut ids = IdentityAllocator::new();
    let hub = ids.stamp_named(person("Hub", 1), "hub");
    assert_eq!(hub.name(), "hub");
    assert_eq!(hub.label(), "hub");
    assert_eq!(hub.id(), IdentityAllocator::FIRST_ID);
    assert_eq!(ids.peek_next_id(), IdentityAllocator::FIRST_ID + 1);
}

#[test]
fn test_allocators_are_independent() {
    let mut a = IdentityAllocator::new();
    let mut b = IdentityAllocator::default();
    assert_eq!(a.next_stamp().id, b.next_stamp().id);
}

#[test]
fn test_stamps_order_by_id() {
    let mut ids = IdentityAllocator::new();
    let first = ids.stamp(person("z", 0));
    let second = ids.stamp(person("a", 0));
    assert!(first < second);
    assert!(!Stamp::default().is_assigned());
    assert!(!<Stamped<Person> as GraphValue>::IS_PRIMITIVE);
}
