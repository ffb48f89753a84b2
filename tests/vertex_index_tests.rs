use dense_apsp::VertexIndex;

#[test]
fn test_intern_assigns_sequential_ids_in_first_seen_order() {
    let mut index = VertexIndex::new();
    assert!(index.is_empty());

    assert_eq!(index.intern("paris"), 0);
    assert_eq!(index.intern("lyon"), 1);
    assert_eq!(index.intern("paris"), 0);
    assert_eq!(index.intern("nice"), 2);

    assert_eq!(index.size(), 3);
    assert_eq!(index.labels().copied().collect::<Vec<_>>(), vec!["paris", "lyon", "nice"]);
}

#[test]
fn test_lookups_do_not_intern() {
    let mut index = VertexIndex::with_capacity(2);
    index.intern(String::from("a"));

    assert_eq!(index.id(&String::from("a")), Some(0));
    assert_eq!(index.id(&String::from("b")), None);
    assert_eq!(index.label(0).map(String::as_str), Some("a"));
    assert_eq!(index.label(1), None);
    assert_eq!(index.size(), 1);
}

#[test]
fn test_edge_endpoints_are_interned_source_first() {
    let mut apsp = dense_apsp::FloydWarshall::from_edges(vec![("c", "a", 1.0), ("b", "c", 1.0)]).unwrap();
    apsp.generate_distance_matrix();

    let index = apsp.vertex_index();
    assert_eq!(index.id(&"c"), Some(0));
    assert_eq!(index.id(&"a"), Some(1));
    assert_eq!(index.id(&"b"), Some(2));
}
