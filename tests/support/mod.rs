use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;

pub const ACTORS: &str = "\
1|Kevin Bacon
2|Alice
3|Bob
4|Charlie
5|Dartmouth (Earl thereof)
6|Nobody
7|Nobody's Friend
";

pub const MOVIES: &str = "\
1|A Movie
2|B Movie
3|C Movie
4|D Movie
5|E Movie
6|F Movie
";

pub const MOVIE_ACTORS: &str = "\
1|1
1|2
1|3
2|5
2|4
3|3
3|4
4|2
4|4
5|1
5|2
6|6
6|7
";

/// Get a Command for costar, isolated from any user configuration
pub fn costar(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("costar");
    cmd.current_dir(dir)
        .env_remove("COSTAR_CONFIG")
        .env_remove("COSTAR_LOG")
        .env_remove("RUST_LOG")
        .env("COSTAR_CONFIG_DIR", dir.join("no-global-config"));
    cmd
}

/// Write the sample data files under their default names in `dir`
pub fn write_sample_data(dir: &Path) {
    fs::write(dir.join("actors.txt"), ACTORS).unwrap();
    fs::write(dir.join("movies.txt"), MOVIES).unwrap();
    fs::write(dir.join("movie-actors.txt"), MOVIE_ACTORS).unwrap();
}
