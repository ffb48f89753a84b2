use dense_apsp::io::{DistanceReport, EdgeListReader, ReportWriter};
use dense_apsp::{Error, FloydWarshall};
use std::io::Cursor;

fn relax_text(input: &str) -> FloydWarshall<String, f64> {
    let reader = EdgeListReader::new(Cursor::new(input.to_string()));
    let mut apsp = FloydWarshall::from_ingestor(reader).unwrap();
    apsp.generate_distance_matrix();
    apsp
}

fn render(apsp: &FloydWarshall<String, f64>, with_paths: bool) -> String {
    let mut out = Vec::new();
    ReportWriter::new().with_paths(with_paths).write(apsp, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_reads_edge_list_with_labels() {
    let apsp = relax_text("3\nA B 1\nB C 2\nA C 10\n");

    assert_eq!(apsp.vertex_index().size(), 3);
    assert_eq!(apsp.distance(&"A".to_string(), &"C".to_string()).unwrap(), Some(3.0));
}

#[test]
fn test_text_report_matches_reference_layout() {
    let apsp = relax_text("2 A B 1.5 B C 2");

    assert_eq!(
        render(&apsp, false),
        "from: A to: B - 1.5\n\
         from: A to: C - 3.5\n\
         from: B to: A - INF\n\
         from: B to: C - 2\n\
         from: C to: A - INF\n\
         from: C to: B - INF\n"
    );
}

#[test]
fn test_text_report_with_paths() {
    let apsp = relax_text("3\nA B 1\nB C 2\nA C 10\n");
    let report = render(&apsp, true);

    assert!(report.contains("from: A to: C - 3 path: A -> B -> C\n"));
    assert!(report.contains("from: C to: A - INF\n"));
}

#[test]
fn test_dense_ids_register_gaps() {
    let reader = EdgeListReader::new(Cursor::new("2\n0 3 1\n3 1 2\n")).into_dense();
    let mut apsp = FloydWarshall::<usize, f64>::from_ingestor(reader).unwrap();
    apsp.generate_distance_matrix();

    assert_eq!(apsp.vertex_index().size(), 4);
    assert_eq!(apsp.vertex_index().id(&2), Some(2));
    assert_eq!(apsp.distance(&0, &1).unwrap(), Some(3.0));
    assert_eq!(apsp.distance(&2, &0).unwrap(), None);
}

#[test]
fn test_dense_ids_reject_non_numeric_labels() {
    let reader = EdgeListReader::new(Cursor::new("1\na 1 1\n")).into_dense();
    let result = FloydWarshall::<usize, f64>::from_ingestor(reader);
    assert!(matches!(result, Err(Error::Parse { .. })));
}

#[test]
fn test_malformed_inputs_are_parse_errors() {
    for input in ["", "x\nA B 1", "2\nA B 1\n", "1\nA B heavy"] {
        let reader = EdgeListReader::new(Cursor::new(input));
        let result = FloydWarshall::<String, f64>::from_ingestor(reader);
        assert!(matches!(result, Err(Error::Parse { .. })), "input {:?} should not parse", input);
    }
}

#[test]
fn test_trailing_tokens_are_ignored() {
    let apsp = relax_text("1\nA B 4\nC D 5\n");
    assert_eq!(apsp.vertex_index().size(), 2);
}

#[test]
fn test_json_report_round_trips() {
    let apsp = relax_text("2\nA B 1\nB C 2\n");
    let report = DistanceReport::build(&apsp, true).unwrap();

    let mut out = Vec::new();
    report.write_json(&mut out).unwrap();
    let parsed: DistanceReport = serde_json::from_slice(&out).unwrap();

    assert_eq!(parsed, report);
    assert_eq!(parsed.algorithm, "Floyd-Warshall");
    assert_eq!(parsed.vertices, vec!["A", "B", "C"]);

    let a_to_c = parsed.entries.iter().find(|e| e.from == "A" && e.to == "C").unwrap();
    assert_eq!(a_to_c.distance, Some(3.0));
    assert_eq!(a_to_c.path, Some(vec!["A".to_string(), "B".to_string(), "C".to_string()]));

    let c_to_a = parsed.entries.iter().find(|e| e.from == "C" && e.to == "A").unwrap();
    assert_eq!(c_to_a.distance, None);
    assert_eq!(c_to_a.path, None);
}

#[test]
fn test_report_with_paths_needs_relaxation() {
    let reader = EdgeListReader::new(Cursor::new("1 A B 1"));
    let apsp = FloydWarshall::<String, f64>::from_ingestor(reader).unwrap();

    let mut out = Vec::new();
    assert!(matches!(
        ReportWriter::new().with_paths(true).write(&apsp, &mut out),
        Err(Error::NotRelaxed)
    ));
}

#[test]
fn test_dense_ids_reject_ids_too_large_for_a_matrix() {
    let huge = 1usize << (usize::BITS / 2);
    let reader = EdgeListReader::new(Cursor::new(format!("1\n0 {} 1\n", huge))).into_dense();
    assert!(matches!(
        FloydWarshall::<usize, f64>::from_ingestor(reader),
        Err(Error::TooManyVertices(n)) if n == huge + 1
    ));

    let reader = EdgeListReader::new(Cursor::new(format!("1\n{} 0 1\n", usize::MAX))).into_dense();
    assert!(matches!(
        FloydWarshall::<usize, f64>::from_ingestor(reader),
        Err(Error::TooManyVertices(n)) if n == usize::MAX
    ));
}
