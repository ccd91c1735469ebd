// tests/cli_tests.rs
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const GAMES: &str = r#"[Event "Rated Blitz"]
[Site "?"]
[Date "2012.07.14"]
[White "Alice"]
[Black "Bob"]
[WhiteElo "2210"]
[BlackElo "2185"]
[ECO "B01"]
[Annotator "Coach"]

1. e4 d5 {Scandinavian} 2. exd5 Qxd5 1-0

[Event "Lost scoresheet"]
[White "?"]
[Black ""]
[Date "2012.07.15"]

1. d4 Nf6 *

[Event "Simul"]
[Date "1995.02.01"]
[White "Carol"]
[Black "Dave"]
[WhiteElo "1450"]
[BlackElo "?"]

1. c4 e5 0-1
"#;

fn pgn_clean() -> Command {
    let mut cmd = Command::cargo_bin("pgn-clean").unwrap();
    cmd.env_remove("PGN_CLEAN_LOG");
    cmd
}

#[test]
fn test_default_run_drops_playerless_and_empty_headers() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("games.pgn");
    let output = dir.path().join("clean.pgn");
    fs::write(&input, GAMES).unwrap();

    pgn_clean()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("[+] Parsed 3 games"))
        .stdout(predicate::str::contains("[+] Removed 1 game without player names"))
        .stdout(predicate::str::contains("[+] Saved 2 games to"));

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        "[Event \"Rated Blitz\"]\n\
         [Date \"2012.07.14\"]\n\
         [White \"Alice\"]\n\
         [Black \"Bob\"]\n\
         [WhiteElo \"2210\"]\n\
         [BlackElo \"2185\"]\n\
         [ECO \"B01\"]\n\
         [Annotator \"Coach\"]\n\
         1. e4 d5 {Scandinavian} 2. exd5 Qxd5 1-0\n\
         \n\
         [Event \"Simul\"]\n\
         [Date \"1995.02.01\"]\n\
         [White \"Carol\"]\n\
         [Black \"Dave\"]\n\
         [WhiteElo \"1450\"]\n\
         1. c4 e5 0-1\n"
    );
}

#[test]
fn test_filters_fields_and_comments() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("games.pgn");
    let output = dir.path().join("clean.pgn");
    fs::write(&input, GAMES).unwrap();

    pgn_clean()
        .arg(&input)
        .args(["-o"])
        .arg(&output)
        .args(["-r", "Annotator", "--remove-comments"])
        .args(["--filter-before", "2000", "--filter-elo-below", "2000"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[+] Filtered out 1 game based on year range",
        ))
        .stdout(predicate::str::contains(
            "[+] Filtered out 0 games based on ELO range",
        ))
        .stdout(predicate::str::contains("[+] Saved 1 game to"));

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("[Event \"Rated Blitz\"]"));
    assert!(!written.contains("ECO"));
    assert!(!written.contains("Annotator"));
    assert!(written.ends_with("1. e4 d5  2. exd5 Qxd5 1-0\n"));
}

#[test]
fn test_concat_mode_reads_directory_tree() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("db");
    fs::create_dir_all(root.join("2024")).unwrap();
    fs::write(root.join("a.pgn"), "[White \"A\"]\n1. e4 *").unwrap();
    fs::write(root.join("2024/b.pgn"), "[White \"B\"]\n1. d4 *").unwrap();
    fs::write(root.join("readme.txt"), "[White \"ignored\"]\n1. f4 *").unwrap();
    let output = dir.path().join("all.pgn");

    pgn_clean()
        .arg(&root)
        .arg("--concat")
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("[+] Concatenated 2 PGN files"))
        .stdout(predicate::str::contains("[+] Parsed 2 games"));

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("[White \"A\"]"));
    assert!(written.contains("[White \"B\"]"));
    assert!(!written.contains("ignored"));
}

#[test]
fn test_latin1_bytes_survive_cleaning() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("latin1.pgn");
    let output = dir.path().join("clean.pgn");
    fs::write(
        &input,
        b"[White \"M\xfcller\"]\n[Black \"B\"]\n[Site \"?\"]\n1. e4 {L\xe9ger} *\n",
    )
    .unwrap();

    pgn_clean()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("[+] Saved 1 game to"));

    assert_eq!(
        fs::read(&output).unwrap(),
        b"[White \"M\xfcller\"]\n[Black \"B\"]\n1. e4 {L\xe9ger} *\n".to_vec()
    );
}

#[test]
fn test_concat_mode_accepts_single_file_root() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("games.pgn");
    let output = dir.path().join("clean.pgn");
    fs::write(&input, GAMES).unwrap();

    pgn_clean()
        .arg(&input)
        .args(["--concat", "-o"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("[+] Concatenated 1 PGN files"))
        .stdout(predicate::str::contains("[+] Parsed 3 games"));
}

#[test]
fn test_zstd_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("games.pgn.zst");
    let output = dir.path().join("clean.pgn");
    let compressed = zstd::stream::encode_all(GAMES.as_bytes(), 3).unwrap();
    fs::write(&input, compressed).unwrap();

    pgn_clean()
        .arg(&input)
        .args(["--compression", "zstd", "-o"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("[+] Parsed 3 games"));

    assert!(fs::read_to_string(&output).unwrap().contains("Alice"));
}

#[test]
fn test_missing_input_exits_with_error() {
    let dir = TempDir::new().unwrap();

    pgn_clean()
        .arg(dir.path().join("missing.pgn"))
        .arg("-o")
        .arg(dir.path().join("out.pgn"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("[!] Error reading input"));

    assert!(!dir.path().join("out.pgn").exists());
}

#[test]
fn test_unwritable_output_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("games.pgn");
    fs::write(&input, GAMES).unwrap();

    pgn_clean()
        .arg(&input)
        .arg("-o")
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[+] Parsed 3 games"))
        .stderr(predicate::str::contains("[!] Error saving file"));
}

#[test]
fn test_bad_flag_prints_usage() {
    pgn_clean()
        .args(["games.pgn", "--filter-elo-below", "strong"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
