//! Unit tests for label queries and the interactive session.

use labelgraph::query::{self, PROMPT};
use labelgraph::{Backend, LoaderConfig, MapLoader, QueryOutcome};
use std::io::Cursor;

const MAP: &str = "\
# Small airline
6
UME BMA
BMA MMX
MMX GOT
LLA PJA
";

fn load(backend: Backend) -> Box<dyn labelgraph::Graph> {
    MapLoader::new(LoaderConfig::default().with_backend(backend))
        .load_str(MAP)
        .unwrap()
}

#[test]
fn test_check_outcomes() {
    for backend in [Backend::Matrix, Backend::List] {
        let mut graph = load(backend);

        let outcome = query::check(graph.as_mut(), "UME", "GOT").unwrap();
        assert_eq!(
            outcome,
            QueryOutcome::Connected {
                from: "UME".to_string(),
                to: "GOT".to_string()
            }
        );

        let outcome = query::check(graph.as_mut(), "GOT", "UME").unwrap();
        assert!(!outcome.is_connected());
        assert_eq!(outcome.to_string(), "There is no path from GOT to UME.");

        let outcome = query::check(graph.as_mut(), "UME", "PJA").unwrap();
        assert!(matches!(outcome, QueryOutcome::Disconnected { .. }));

        let outcome = query::check(graph.as_mut(), "ARN", "UME").unwrap();
        assert_eq!(outcome, QueryOutcome::UnknownSource("ARN".to_string()));

        let outcome = query::check(graph.as_mut(), "UME", "ARN").unwrap();
        assert_eq!(outcome, QueryOutcome::UnknownDestination("ARN".to_string()));
    }
}

#[test]
fn test_session_answers_until_quit() {
    let mut graph = load(Backend::List);
    let input = Cursor::new("UME GOT\nGOT UME\nnonsense\nquit\nUME BMA\n");
    let mut output = Vec::new();

    let answered = query::run_session(graph.as_mut(), input, &mut output).unwrap();
    let text = String::from_utf8(output).unwrap();

    assert_eq!(answered, 2);
    assert_eq!(text.matches(PROMPT).count(), 4);
    assert!(text.contains("There is a path from UME to GOT.\n"));
    assert!(text.contains("There is no path from GOT to UME.\n"));
    assert!(text.contains("Expected two node names or 'quit', got 'nonsense'\n"));
    assert!(!text.contains("UME to BMA"));
    assert!(text.ends_with("Normal exit.\n"));
}

#[test]
fn test_session_stops_at_end_of_input() {
    let mut graph = load(Backend::Matrix);
    let input = Cursor::new("UME MMX\n");
    let mut output = Vec::new();

    let answered = query::run_session(graph.as_mut(), input, &mut output).unwrap();
    let text = String::from_utf8(output).unwrap();

    assert_eq!(answered, 1);
    assert_eq!(text.matches(PROMPT).count(), 2);
    assert!(text.ends_with("Normal exit.\n"));
}
