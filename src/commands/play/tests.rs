use super::*;
use std::io::Cursor;

use costar_core::dataset::{CollaborationGraph, MovieSet};
use costar_core::graph::Graph;

fn movies(names: &[&str]) -> MovieSet {
    names.iter().map(|n| n.to_string()).collect()
}

fn sample_universe() -> Universe {
    let mut g = CollaborationGraph::new();
    let edges = [
        ("Kevin Bacon", "Alice", &["A Movie", "E Movie"][..]),
        ("Kevin Bacon", "Bob", &["A Movie"][..]),
        ("Alice", "Bob", &["A Movie"][..]),
        ("Alice", "Charlie", &["D Movie"][..]),
        ("Bob", "Charlie", &["C Movie"][..]),
        ("Charlie", "Dartmouth (Earl thereof)", &["B Movie"][..]),
        ("Nobody", "Nobody's Friend", &["F Movie"][..]),
    ];
    for (a, b, titles) in edges {
        g.insert_undirected(a.to_string(), b.to_string(), movies(titles));
    }
    Universe::new(g, "Kevin Bacon").unwrap()
}

fn play(input: &str, format: OutputFormat, quiet: bool) -> String {
    let mut universe = sample_universe();
    let mut out = Vec::new();
    Game::new(&mut universe, format, quiet)
        .run(Cursor::new(input), &mut out)
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_parse_commands() {
    assert_eq!("c 5".parse::<GameCommand>().unwrap(), GameCommand::Centers(5));
    assert_eq!("c -3".parse::<GameCommand>().unwrap(), GameCommand::Centers(-3));
    assert_eq!(
        "d 1 4".parse::<GameCommand>().unwrap(),
        GameCommand::Degree { low: 1, high: 4 }
    );
    assert_eq!("i".parse::<GameCommand>().unwrap(), GameCommand::Infinite);
    assert_eq!(
        "p  Dartmouth (Earl thereof) \n".parse::<GameCommand>().unwrap(),
        GameCommand::Path("Dartmouth (Earl thereof)".to_string())
    );
    assert_eq!(
        "s 0 2".parse::<GameCommand>().unwrap(),
        GameCommand::Separation { low: 0, high: 2 }
    );
    assert_eq!(
        "u Kevin Bacon".parse::<GameCommand>().unwrap(),
        GameCommand::Universe("Kevin Bacon".to_string())
    );
    assert_eq!("q".parse::<GameCommand>().unwrap(), GameCommand::Quit);
}

#[test]
fn test_parse_errors_are_usage_errors() {
    for (line, message) in [
        ("c many", "centers amount must be a number."),
        ("c", "centers amount must be a number."),
        ("d 1", "high and low must be numbers."),
        ("s -1 2", "high and low must be numbers."),
        ("p", "invalid actor"),
        ("x", "invalid command."),
        ("", "invalid command."),
    ] {
        let err = line.parse::<GameCommand>().unwrap_err();
        assert!(matches!(err, CostarError::UsageError(_)), "{line}");
        assert_eq!(err.to_string(), message, "{line}");
    }
}

#[test]
fn test_session_transcript() {
    let output = play("p Charlie\nu Charlie\ni\nq\n", OutputFormat::Human, false);

    assert!(output.starts_with("Commands:\n"));
    assert!(output.contains(
        "Kevin Bacon is now the center of the acting universe, connected to 4/7 actors with average separation 1.75\n"
    ));
    assert!(output.contains("Kevin Bacon game>\nCharlie's number is 2\n"));
    assert!(output.contains("Alice appeared in [A Movie, E Movie] with Kevin Bacon\n"));
    assert!(output.contains("Charlie appeared in [D Movie] with Alice\n"));
    assert!(output.contains(
        "Charlie is now the center of the acting universe, connected to 4/7 actors with average separation 1.25\n"
    ));
    assert!(output.contains("Charlie game>\n[Nobody, Nobody's Friend]\n"));
    assert!(output.ends_with("thanks for playing.\n"));
}

#[test]
fn test_bad_input_keeps_playing() {
    let output = play(
        "p Ghost\nu Kevin Bacon\nd 3 1\nwhat\ns 1 1\n",
        OutputFormat::Human,
        true,
    );
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Kevin Bacon is now the center of the acting universe, connected to 4/7 actors with average separation 1.75",
            "invalid actor",
            "this actor is already the center.",
            "invalid degree range: 3..1",
            "invalid command.",
            "[Alice, Bob]",
            "thanks for playing.",
        ]
    );
}

#[test]
fn test_quit_stops_reading() {
    let output = play("q\np Charlie\n", OutputFormat::Human, true);
    assert!(!output.contains("number is"));
    assert_eq!(output.matches("thanks for playing.").count(), 1);
}

#[test]
fn test_path_for_center_and_disconnected() {
    let output = play("p Kevin Bacon\np Nobody\n", OutputFormat::Human, true);
    assert!(output.contains("no path because this actor is the center.\n"));
    assert!(output.contains("actor not connected to center of the universe.\n"));
}

#[test]
fn test_centers_and_degree() {
    let output = play("c -1\nd 3 3\n", OutputFormat::Human, true);
    assert!(output.contains("worst centers by average separation: [Dartmouth (Earl thereof)]\n"));
    assert!(output.contains("[Alice, Bob, Charlie]\n"));
}

#[test]
fn test_json_session_emits_one_document_per_line() {
    let output = play("s 1 1\nc x\n", OutputFormat::Json, false);
    let docs: Vec<serde_json::Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(docs.len(), 4);
    assert_eq!(docs[0]["kind"], "summary");
    assert_eq!(docs[0]["connected"], 4);
    assert_eq!(docs[1]["kind"], "separation");
    assert_eq!(docs[1]["actors"][0]["actor"], "Alice");
    assert_eq!(docs[2]["kind"], "message");
    assert_eq!(docs[2]["message"], "centers amount must be a number.");
    assert_eq!(docs[3]["message"], "thanks for playing.");
}
