#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable
#![allow(missing_docs)] // integration test crate, not public API

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const STORY: &str = "#!STORY\n\
# A two-room test adventure.\n\
R1: The Fork\n\
Two paths diverge in front of you.\n\
;;;\n\
: Take the left path -> 2\n\
R2: The Clearing\n\
Sunlight. You made it.\n\
;;;\n\
=)\n";

const WEIGHTED_STORY: &str = "#!STORY\n\
R1: The Rapids\n\
The current decides for you.\n\
;;;\n\
: Swept left -> 2?1\n\
: Swept right -> 3?1\n\
R2: The Bank\n\
You wash ashore.\n\
;;;\n\
=)\n\
R3: The Falls\n\
Over you go.\n\
;;;\n\
=(\n";

fn write_story(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn tale() -> Command {
    Command::cargo_bin("tale").unwrap()
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_reports_summary_for_valid_story() {
    let dir = TempDir::new().unwrap();
    let story = write_story(&dir, "test.story", STORY);

    tale()
        .args(["check", story.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("2 rooms, 2 transitions")
                .and(predicate::str::contains("Starting room: 1")),
        );
}

#[test]
fn check_renders_diagnostics_for_malformed_story() {
    let dir = TempDir::new().unwrap();
    let story = write_story(
        &dir,
        "broken.story",
        "#!STORY\nR1: t\nd\n;;;\n: no arrow\n",
    );

    tale()
        .args(["check", story.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("malformed story line 4")
                .and(predicate::str::contains("failed to parse")),
        );
}

#[test]
fn check_warns_about_dangling_targets() {
    let dir = TempDir::new().unwrap();
    let story = write_story(
        &dir,
        "dangling.story",
        "#!STORY\nR1: t\nd\n;;;\n: Go -> 9\n",
    );

    tale()
        .args(["check", story.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("links to unknown room \"9\""));
}

#[test]
fn check_rejects_unknown_magic() {
    let dir = TempDir::new().unwrap();
    let path = write_story(&dir, "odd.story", "#!NOVEL\nwhatever\n");

    tale()
        .args(["check", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not correspond to a known format"));
}

#[test]
fn check_reports_missing_file() {
    tale()
        .args(["check", "no-such-file.story"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error reading file"));
}

// ---------------------------------------------------------------------------
// rooms
// ---------------------------------------------------------------------------

#[test]
fn rooms_lists_each_room() {
    let dir = TempDir::new().unwrap();
    let story = write_story(&dir, "test.story", STORY);

    tale()
        .args(["rooms", story.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("The Fork")
                .and(predicate::str::contains("The Clearing"))
                .and(predicate::str::contains("ends: success"))
                .and(predicate::str::contains("2 rooms")),
        );
}

// ---------------------------------------------------------------------------
// export
// ---------------------------------------------------------------------------

#[test]
fn export_prints_json_to_stdout() {
    let dir = TempDir::new().unwrap();
    let story = write_story(&dir, "test.story", STORY);

    tale()
        .args(["export", story.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"start\": \"1\"")
                .and(predicate::str::contains("\"title\": \"The Fork\"")),
        );
}

#[test]
fn export_writes_json_to_file() {
    let dir = TempDir::new().unwrap();
    let story = write_story(&dir, "test.story", STORY);
    let out = dir.path().join("story.json");

    tale()
        .args([
            "export",
            story.to_str().unwrap(),
            "--output",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("\"start\": \"1\""));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_manual_story_to_success() {
    let dir = TempDir::new().unwrap();
    let story = write_story(&dir, "test.story", STORY);

    tale()
        .args(["play", story.to_str().unwrap()])
        .write_stdin("0\nn\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("The Fork")
                .and(predicate::str::contains("0) Take the left path"))
                .and(predicate::str::contains("The Clearing"))
                .and(predicate::str::contains("successfully completed"))
                .and(predicate::str::contains("Thank you for playing!")),
        );
}

#[test]
fn play_weighted_story_needs_no_input_choice() {
    let dir = TempDir::new().unwrap();
    let story = write_story(&dir, "weighted.story", WEIGHTED_STORY);

    tale()
        .args(["play", story.to_str().unwrap(), "--seed", "6"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("The Rapids").and(
                predicate::str::contains("successfully completed")
                    .or(predicate::str::contains("failed to complete")),
            ),
        );
}

#[test]
fn play_same_seed_takes_same_path() {
    let dir = TempDir::new().unwrap();
    let story = write_story(&dir, "weighted.story", WEIGHTED_STORY);

    let run = || {
        let output = tale()
            .args(["play", story.to_str().unwrap(), "--seed", "42"])
            .write_stdin("n\n")
            .output()
            .unwrap();
        String::from_utf8(output.stdout).unwrap()
    };

    assert_eq!(run(), run());
}

#[test]
fn play_quit_scores_as_failure() {
    let dir = TempDir::new().unwrap();
    let story = write_story(&dir, "test.story", STORY);

    tale()
        .args(["play", story.to_str().unwrap()])
        .write_stdin("q\ny\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("failed to complete"));
}

#[test]
fn play_invalid_choice_reprompts() {
    let dir = TempDir::new().unwrap();
    let story = write_story(&dir, "test.story", STORY);

    tale()
        .args(["play", story.to_str().unwrap()])
        .write_stdin("7\n0\nn\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Invalid value.")
                .and(predicate::str::contains("successfully completed")),
        );
}

#[test]
fn play_eof_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    let story = write_story(&dir, "test.story", STORY);

    tale()
        .args(["play", story.to_str().unwrap()])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Thank you for playing!"));
}

#[test]
fn play_bookmark_saves_and_resumes() {
    let dir = TempDir::new().unwrap();
    let story = write_story(&dir, "test.story", STORY);

    // Bookmark in the starting room, before taking any choice.
    tale()
        .args(["play", story.to_str().unwrap()])
        .current_dir(dir.path())
        .write_stdin("b\nsave.mark\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bookmark saved in save.mark"));

    // The bookmark dispatches back into the story and resumes at room 1.
    tale()
        .args(["check", "save.mark"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting room: 1"));
}

#[test]
fn play_resumes_at_bookmarked_room() {
    let dir = TempDir::new().unwrap();
    let story = write_story(&dir, "test.story", STORY);
    let mark = dir.path().join("at-end.mark");
    fs::write(
        &mark,
        format!("#!BOOKMARK\n{}\n2\n", story.display()),
    )
    .unwrap();

    // Room 2 is terminal; the resumed playthrough ends immediately.
    tale()
        .args(["play", mark.to_str().unwrap()])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("The Clearing")
                .and(predicate::str::contains("successfully completed"))
                .and(predicate::str::contains("The Fork").not()),
        );
}
