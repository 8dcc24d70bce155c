//! Pipe-delimited actor/movie data and the collaboration graph built from it
//!
//! Three files feed the graph:
//! - actors: `actor_id|actor name`
//! - movies: `movie_id|movie title`
//! - movie-actors: `movie_id|actor_id`, one line per appearance

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::config::DataConfig;
use crate::error::{CostarError, Result};
use crate::graph::{AdjacencyMapGraph, Graph};

/// Titles of the movies two actors appeared in together
pub type MovieSet = BTreeSet<String>;

/// Actors as vertices, shared movies as edge labels
pub type CollaborationGraph = AdjacencyMapGraph<String, MovieSet>;

/// Parsed contents of the three data files
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// actor id -> actor name
    pub actors: BTreeMap<String, String>,
    /// movie id -> movie title
    pub movies: BTreeMap<String, String>,
    /// actor id -> ids of the movies they appeared in
    pub appearances: BTreeMap<String, BTreeSet<String>>,
}

/// Split a record into its first two `|`-separated fields.
fn split_record<'a>(path: &Path, number: usize, line: &'a str) -> Result<(&'a str, &'a str)> {
    let mut fields = line.split('|');
    match (fields.next(), fields.next()) {
        (Some(first), Some(second)) => Ok((first, second)),
        _ => Err(CostarError::InvalidRecord {
            path: path.to_path_buf(),
            line: number,
            reason: "expected two '|'-separated fields".to_string(),
        }),
    }
}

/// Non-blank lines with their 1-based line numbers, `\r` stripped.
fn records(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty())
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| CostarError::io_operation("read", path.display(), e))
}

/// Parse `id|name` records; a repeated id keeps its last name.
pub fn parse_id_names(path: &Path, content: &str) -> Result<BTreeMap<String, String>> {
    let mut names = BTreeMap::new();
    for (number, line) in records(content) {
        let (id, name) = split_record(path, number, line)?;
        names.insert(id.to_string(), name.to_string());
    }
    Ok(names)
}

/// Parse `movie_id|actor_id` records into actor id -> movie ids.
pub fn parse_appearances(
    path: &Path,
    content: &str,
) -> Result<BTreeMap<String, BTreeSet<String>>> {
    let mut appearances: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for (number, line) in records(content) {
        let (movie_id, actor_id) = split_record(path, number, line)?;
        appearances
            .entry(actor_id.to_string())
            .or_default()
            .insert(movie_id.to_string());
    }
    Ok(appearances)
}

impl Dataset {
    /// Read and parse the three configured data files.
    #[tracing::instrument(skip_all, fields(actors = %paths.actors.display()))]
    pub fn load(paths: &DataConfig) -> Result<Self> {
        let start = Instant::now();

        let actors = parse_id_names(&paths.actors, &read(&paths.actors)?)?;
        let movies = parse_id_names(&paths.movies, &read(&paths.movies)?)?;
        let appearances = parse_appearances(&paths.movie_actors, &read(&paths.movie_actors)?)?;

        crate::trace_time!(start, "load_dataset");
        tracing::debug!(
            actors = actors.len(),
            movies = movies.len(),
            appearing = appearances.len(),
            "dataset loaded"
        );

        Ok(Self {
            actors,
            movies,
            appearances,
        })
    }

    /// Movie titles per actor name, dropping appearances that reference
    /// unknown actor or movie ids.
    pub fn filmographies(&self) -> BTreeMap<&str, BTreeSet<&str>> {
        let mut by_actor: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for (actor_id, movie_ids) in &self.appearances {
            let Some(actor) = self.actors.get(actor_id) else {
                tracing::warn!(actor_id = %actor_id, "appearance references unknown actor");
                continue;
            };
            let titles = by_actor.entry(actor.as_str()).or_default();
            for movie_id in movie_ids {
                match self.movies.get(movie_id) {
                    Some(title) => {
                        titles.insert(title.as_str());
                    }
                    None => {
                        tracing::warn!(movie_id = %movie_id, "appearance references unknown movie")
                    }
                }
            }
        }
        by_actor
    }

    /// Build the collaboration graph.
    ///
    /// Every actor is a vertex, including actors with no appearances. Two
    /// distinct actors are joined by an undirected edge labeled with every
    /// movie they share.
    pub fn collaboration_graph(&self) -> CollaborationGraph {
        let start = Instant::now();
        let mut graph = CollaborationGraph::new();

        for name in self.actors.values() {
            graph.insert_vertex(name.clone());
        }

        let mut casts: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for (actor, titles) in self.filmographies() {
            for title in titles {
                casts.entry(title).or_default().insert(actor);
            }
        }

        let mut shared: BTreeMap<(&str, &str), MovieSet> = BTreeMap::new();
        for (title, cast) in &casts {
            let cast: Vec<&str> = cast.iter().copied().collect();
            for (i, a) in cast.iter().enumerate() {
                for b in &cast[i + 1..] {
                    shared
                        .entry((*a, *b))
                        .or_default()
                        .insert(title.to_string());
                }
            }
        }

        for ((a, b), titles) in shared {
            graph.insert_undirected(a.to_string(), b.to_string(), titles);
        }

        crate::trace_time!(start, "collaboration_graph", edges = graph.num_edges());
        tracing::debug!(
            vertices = graph.num_vertices(),
            edges = graph.num_edges() / 2,
            "collaboration graph built"
        );
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    const ACTORS: &str = "1|Kevin Bacon\n2|Alice\n3|Bob\n4|Charlie\n5|Dartmouth (Earl thereof)\n6|Nobody\n7|Nobody's Friend\n";
    const MOVIES: &str = "1|A Movie\n2|B Movie\n3|C Movie\n4|D Movie\n5|E Movie\n6|F Movie\n";
    const MOVIE_ACTORS: &str =
        "1|1\n1|2\n1|3\n2|5\n2|4\n3|3\n3|4\n4|2\n4|4\n5|1\n5|2\n6|6\n6|7\n";

    fn sample() -> Dataset {
        let path = PathBuf::from("sample");
        Dataset {
            actors: parse_id_names(&path, ACTORS).unwrap(),
            movies: parse_id_names(&path, MOVIES).unwrap(),
            appearances: parse_appearances(&path, MOVIE_ACTORS).unwrap(),
        }
    }

    fn titles(names: &[&str]) -> MovieSet {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_parse_id_names() {
        let names = parse_id_names(Path::new("a.txt"), "1|One\r\n\n2|Two|extra\n1|Uno\n").unwrap();
        assert_eq!(names.len(), 2);
        assert_eq!(names["1"], "Uno");
        assert_eq!(names["2"], "Two");
    }

    #[test]
    fn test_parse_rejects_single_field() {
        let err = parse_id_names(Path::new("a.txt"), "1|One\nbroken\n").unwrap_err();
        match err {
            CostarError::InvalidRecord { line, path, .. } => {
                assert_eq!(line, 2);
                assert_eq!(path, PathBuf::from("a.txt"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_appearances_groups_by_actor() {
        let appearances = parse_appearances(Path::new("m.txt"), "10|1\n11|1\n10|2\n").unwrap();
        assert_eq!(appearances["1"].len(), 2);
        assert!(appearances["2"].contains("10"));
    }

    #[test]
    fn test_collaboration_graph_edges_and_labels() {
        let graph = sample().collaboration_graph();

        assert_eq!(graph.num_vertices(), 7);
        assert_eq!(
            graph.get_label(&"Kevin Bacon".into(), &"Alice".into()).unwrap(),
            &titles(&["A Movie", "E Movie"])
        );
        assert_eq!(
            graph.get_label(&"Alice".into(), &"Kevin Bacon".into()).unwrap(),
            &titles(&["A Movie", "E Movie"])
        );
        assert_eq!(
            graph.get_label(&"Bob".into(), &"Charlie".into()).unwrap(),
            &titles(&["C Movie"])
        );
        assert!(graph
            .get_label(&"Kevin Bacon".into(), &"Charlie".into())
            .is_err());
        assert_eq!(graph.out_degree(&"Nobody".into()), 1);
    }

    #[test]
    fn test_collaboration_graph_no_self_edges() {
        let graph = sample().collaboration_graph();
        for v in graph.vertices() {
            assert!(graph.get_label(v, v).is_err());
        }
    }

    #[test]
    fn test_actor_without_movies_is_isolated_vertex() {
        let mut data = sample();
        data.actors.insert("99".into(), "Extra".into());
        let graph = data.collaboration_graph();
        assert!(graph.has_vertex(&"Extra".into()));
        assert_eq!(graph.out_degree(&"Extra".into()), 0);
    }

    #[test]
    fn test_unknown_ids_skipped() {
        let mut data = sample();
        data.appearances
            .entry("404".into())
            .or_default()
            .insert("1".into());
        data.appearances
            .entry("1".into())
            .or_default()
            .insert("404".into());
        let graph = data.collaboration_graph();
        assert_eq!(graph.num_vertices(), 7);
        assert_eq!(
            graph.get_label(&"Kevin Bacon".into(), &"Bob".into()).unwrap(),
            &titles(&["A Movie"])
        );
    }

    #[test]
    fn test_load_from_files() {
        let dir = tempdir().unwrap();
        let paths = DataConfig {
            actors: dir.path().join("actors.txt"),
            movies: dir.path().join("movies.txt"),
            movie_actors: dir.path().join("movie-actors.txt"),
        };
        fs::write(&paths.actors, ACTORS).unwrap();
        fs::write(&paths.movies, MOVIES).unwrap();
        fs::write(&paths.movie_actors, MOVIE_ACTORS).unwrap();

        let data = Dataset::load(&paths).unwrap();
        assert_eq!(data, sample());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let paths = DataConfig {
            actors: dir.path().join("missing.txt"),
            movies: dir.path().join("movies.txt"),
            movie_actors: dir.path().join("movie-actors.txt"),
        };
        let err = Dataset::load(&paths).unwrap_err();
        assert!(matches!(err, CostarError::FailedOperationWithTarget { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }
}
