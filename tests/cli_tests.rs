//! End-to-end CLI test suite.
//!
//! Tests are grouped by command and drive the binary through its public
//! interface against a throwaway data file.

mod common;

use common::harness::{MarginaliaCommand, TestEnv, TestNote};
use predicates::prelude::*;
use pretty_assertions::assert_eq;

fn seeded_env() -> TestEnv {
    let env = TestEnv::new();
    env.add_notes(&[
        TestNote::new(1_700_000_000, "Alpha")
            .url("https://a.example")
            .body("first"),
        TestNote::new(1_700_000_100, "Beta").url("https://b.example"),
        TestNote::new(1_700_000_200, "")
            .url("https://c.example")
            .quote("Gamma quote"),
    ]);
    env
}

// ===========================================
// ls command tests
// ===========================================
mod ls_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ls_missing_data_file_is_empty() {
        let env = TestEnv::new();
        env.cmd()
            .ls()
            .assert()
            .success()
            .stdout(predicate::str::contains("No notes found"));
        assert!(!env.data_file().exists(), "listing must not create the file");
    }

    #[test]
    fn test_ls_newest_first() {
        let env = seeded_env();
        let output = env.cmd().ls().output_success();

        let gamma = output.find("1700000200").expect("newest listed");
        let beta = output.find("1700000100").expect("middle listed");
        let alpha = output.find("1700000000").expect("oldest listed");
        assert!(gamma < beta && beta < alpha, "got:\n{output}");
    }

    #[test]
    fn test_ls_untitled_note_shows_url() {
        let env = seeded_env();
        env.cmd()
            .ls()
            .assert()
            .success()
            .stdout(predicate::str::contains("https://c.example"));
    }

    #[test]
    fn test_ls_json_format() {
        let env = seeded_env();
        let output: serde_json::Value = env.cmd().ls().format_json().output_json();

        let data = &output["data"];
        assert_eq!(data["page"], 1);
        assert_eq!(data["pages"], 1);
        let notes = data["notes"].as_array().expect("notes array");
        assert_eq!(notes.len(), 3);
        assert_eq!(notes[0]["id"], "1700000200");
        assert_eq!(notes[2]["title"], "Alpha");
        assert_eq!(notes[2]["note"], "first");
    }

    #[test]
    fn test_ls_page_beyond_end_is_empty() {
        let env = seeded_env();
        let output: serde_json::Value = env
            .cmd()
            .args(["ls", "--page", "5", "--format", "json"])
            .output_json();
        assert_eq!(output["data"]["notes"].as_array().map(Vec::len), Some(0));
        assert_eq!(output["data"]["page"], 5);
    }

    #[test]
    fn test_ls_negative_page_clamps_to_first() {
        let env = seeded_env();
        let output: serde_json::Value = env
            .cmd()
            .args(["ls", "--page", "-3", "--format", "json"])
            .output_json();
        assert_eq!(output["data"]["page"], 1);
        assert_eq!(output["data"]["notes"].as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn test_ls_respects_configured_page_size() {
        let env = seeded_env();
        let config = env.write_file("config.toml", "page_size = 2\n");
        let output: serde_json::Value = MarginaliaCommand::new()
            .config(&config)
            .data(env.data_file())
            .args(["ls", "--page", "2", "--format", "json"])
            .output_json();

        assert_eq!(output["data"]["pages"], 2);
        let notes = output["data"]["notes"].as_array().expect("notes array");
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0]["id"], "1700000000");
    }

    #[test]
    fn test_ls_human_points_to_next_page() {
        let env = seeded_env();
        let config = env.write_file("config.toml", "page_size = 2\n");
        MarginaliaCommand::new()
            .config(&config)
            .data(env.data_file())
            .ls()
            .assert()
            .success()
            .stdout(predicate::str::contains("Page 1 of 2"))
            .stdout(predicate::str::contains("More: ls --page 2"));
    }

    #[test]
    fn test_ls_keeps_notes_beside_an_unreadable_entry() {
        let env = TestEnv::new();
        std::fs::write(
            env.data_file(),
            r#"{"1700000000": {"title": "Survivor", "quote": null}, "junk": {"title": "x"}}"#,
        )
        .unwrap();

        env.cmd()
            .ls()
            .assert()
            .success()
            .stdout(predicate::str::contains("Survivor"));

        env.cmd()
            .args(["add", "--title", "Fresh"])
            .assert()
            .success();
        let notes = env.load();
        assert_eq!(notes.len(), 2);
        assert!(notes.iter().any(|(_, n)| n.title == "Survivor"));
    }

    #[test]
    fn test_ls_corrupt_data_file_lists_nothing() {
        let env = TestEnv::new();
        std::fs::write(env.data_file(), "{ not json").unwrap();
        env.cmd()
            .ls()
            .assert()
            .success()
            .stdout(predicate::str::contains("No notes found"));
    }
}

// ===========================================
// search command tests
// ===========================================
mod search_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_search_case_insensitive() {
        let env = seeded_env();
        env.cmd()
            .search("GAMMA")
            .assert()
            .success()
            .stdout(predicate::str::contains("1700000200"))
            .stdout(predicate::str::contains("1 result(s)"));
    }

    #[test]
    fn test_search_matches_url() {
        let env = seeded_env();
        let output: serde_json::Value = env.cmd().search("b.example").format_json().output_json();
        let notes = output["data"].as_array().expect("array");
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0]["title"], "Beta");
    }

    #[test]
    fn test_search_no_match() {
        let env = seeded_env();
        env.cmd()
            .search("zzz")
            .assert()
            .success()
            .stdout(predicate::str::contains("No matching notes found"));
    }

    #[test]
    fn test_search_limit() {
        let env = seeded_env();
        env.cmd()
            .args(["search", "example", "-n", "2"])
            .assert()
            .success()
            .stdout(predicate::str::contains("2 of 3 result(s)"));
    }
}

// ===========================================
// show command tests
// ===========================================
mod show_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_show_prints_fields_and_neighbors() {
        let env = seeded_env();
        env.cmd()
            .show("1700000100")
            .assert()
            .success()
            .stdout(predicate::str::contains("# Beta"))
            .stdout(predicate::str::contains("Previous: 1700000000"))
            .stdout(predicate::str::contains("Next: 1700000200"));
    }

    #[test]
    fn test_show_quote_is_blockquoted() {
        let env = seeded_env();
        env.cmd()
            .show("1700000200")
            .assert()
            .success()
            .stdout(predicate::str::contains("> Gamma quote"));
    }

    #[test]
    fn test_show_json() {
        let env = seeded_env();
        let output: serde_json::Value = env.cmd().show("1700000000").format_json().output_json();
        assert_eq!(output["data"]["id"], "1700000000");
        assert_eq!(output["data"]["url"], "https://a.example");
    }

    #[test]
    fn test_show_missing_note_fails() {
        let env = seeded_env();
        env.cmd()
            .show("42")
            .assert()
            .failure()
            .stderr(predicate::str::contains("note not found: 42"));
    }

    #[test]
    fn test_show_invalid_id_fails() {
        let env = seeded_env();
        env.cmd()
            .show("abc")
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid note id"));
    }
}

// ===========================================
// add / rm command tests
// ===========================================
mod write_tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use marginalia::domain::NoteId;

    #[test]
    fn test_add_creates_file_and_prints_id() {
        let env = TestEnv::new();
        let output = env
            .cmd()
            .args(["add", "--url", "https://x.example", "--title", "X"])
            .output_success();

        let id: NoteId = output.trim().parse().expect("prints the new id");
        let notes = env.load();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes.get(&id).map(|n| n.title.as_str()), Some("X"));
    }

    #[test]
    fn test_add_with_id_overwrites() {
        let env = seeded_env();
        env.cmd()
            .args(["add", "--id", "1700000000", "--title", "Alpha v2"])
            .assert()
            .success()
            .stdout("1700000000\n");

        let notes = env.load();
        assert_eq!(notes.len(), 3);
        let note = notes.get(&NoteId::from_secs(1_700_000_000)).unwrap();
        assert_eq!(note.title, "Alpha v2");
        assert_eq!(note.url, "", "overwrite replaces every field");
    }

    #[test]
    fn test_add_with_zero_id_creates() {
        let env = seeded_env();
        let output = env
            .cmd()
            .args(["add", "--id", "0", "--title", "Fresh"])
            .output_success();

        assert_ne!(output.trim(), "0");
        assert_eq!(env.load().len(), 4);
    }

    #[test]
    fn test_add_writes_pretty_json() {
        let env = TestEnv::new();
        env.cmd().args(["add", "--id", "7", "--title", "T"]).assert().success();

        let raw = std::fs::read_to_string(env.data_file()).unwrap();
        assert_eq!(
            raw,
            "{\n    \"7\": {\n        \"url\": \"\",\n        \"title\": \"T\",\n        \"quote\": \"\",\n        \"note\": \"\"\n    }\n}"
        );
    }

    #[test]
    fn test_rm_deletes() {
        let env = seeded_env();
        env.cmd()
            .args(["rm", "1700000100"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Deleted 1700000100"));

        let notes = env.load();
        assert_eq!(notes.len(), 2);
        assert!(!notes.contains(&NoteId::from_secs(1_700_000_100)));
    }

    #[test]
    fn test_rm_missing_fails_without_writing() {
        let env = seeded_env();
        let before = std::fs::read_to_string(env.data_file()).unwrap();

        env.cmd()
            .args(["rm", "99"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("note not found"));

        let after = std::fs::read_to_string(env.data_file()).unwrap();
        assert_eq!(before, after);
    }
}

// ===========================================
// configuration tests
// ===========================================
mod config_tests {
    use super::*;

    #[test]
    fn test_env_data_file_used_without_flag() {
        let env = seeded_env();
        MarginaliaCommand::new()
            .config(&env.dir().join("absent.toml"))
            .env("MARGINALIA_DATA", &env.data_file().to_string_lossy())
            .ls()
            .assert()
            .success()
            .stdout(predicate::str::contains("Alpha"));
    }

    #[test]
    fn test_data_flag_beats_env() {
        let env = seeded_env();
        let empty = TestEnv::new();
        env.cmd()
            .env("MARGINALIA_DATA", &empty.data_file().to_string_lossy())
            .ls()
            .assert()
            .success()
            .stdout(predicate::str::contains("Alpha"));
    }

    #[test]
    fn test_invalid_config_fails() {
        let env = TestEnv::new();
        let config = env.write_file("config.toml", "page_size = \"many\"\n");
        MarginaliaCommand::new()
            .config(&config)
            .ls()
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to parse config file"));
    }
}

// ===========================================
// misc command tests
// ===========================================
mod misc_tests {
    use super::*;

    #[test]
    fn test_hash_password() {
        MarginaliaCommand::new()
            .args(["hash-password", "admin"])
            .assert()
            .success()
            .stdout("8c6976e5b5410415bde908bd4dee15dfb167a9c873fc4bb8a81f6f2ab448a918\n");
    }

    #[test]
    fn test_completions_bash() {
        MarginaliaCommand::new()
            .args(["completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("marginalia"));
    }
}
