//! Integration tests for codecache

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    /// Temporary project with the default contracts/ + configs/ layout
    fn project(epoch: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("contracts")).unwrap();
        fs::create_dir_all(dir.path().join("configs")).unwrap();
        fs::write(dir.path().join("contracts").join("cw20.wasm"), b"\0asm cw20").unwrap();
        set_epoch(dir.path(), epoch);
        dir
    }

    fn set_epoch(root: &Path, epoch: &str) {
        fs::write(
            root.join("configs").join("logs.json"),
            format!(r#"{{"start_time": {}, "chains": []}}"#, epoch),
        )
        .unwrap();
    }

    fn codecache(root: &Path) -> Command {
        let mut cmd = cargo_bin_cmd!("codecache");
        cmd.current_dir(root)
            .env_remove("CODECACHE_LOG_FORMAT")
            .arg("--config")
            .arg(root.join("global.toml"))
            .arg("--no-local")
            .arg("--root")
            .arg(root);
        cmd
    }

    fn store(root: &Path) -> serde_json::Value {
        let raw = fs::read_to_string(root.join("configs").join("contracts.json")).unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    fn stdout_of(cmd: &mut Command) -> String {
        let output = cmd.assert().success().get_output().stdout.clone();
        String::from_utf8(output).unwrap().trim().to_string()
    }

    #[test]
    fn help_displays() {
        cargo_bin_cmd!("codecache")
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("skip redundant contract deployments"));
    }

    #[test]
    fn version_displays() {
        cargo_bin_cmd!("codecache")
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("codecache"));
    }

    #[test]
    fn epoch_prints_trimmed_marker() {
        let dir = project("\"1700000000\\n\"");
        codecache(dir.path())
            .arg("epoch")
            .assert()
            .success()
            .stdout("1700000000\n");
    }

    #[test]
    fn epoch_missing_artifact_fails() {
        let dir = project("1");
        fs::remove_file(dir.path().join("configs").join("logs.json")).unwrap();

        codecache(dir.path())
            .arg("epoch")
            .assert()
            .failure()
            .stderr(predicate::str::contains("File not found"));
    }

    #[test]
    fn fingerprint_normalizes_chain_id() {
        let dir = project("1");
        let dashed = stdout_of(
            codecache(dir.path()).args(["fingerprint", "cw20.wasm", "--chain-id", "local-1"]),
        );
        let plain = stdout_of(
            codecache(dir.path()).args(["fingerprint", "cw20.wasm", "--chain-id", "local1"]),
        );

        assert_eq!(dashed, plain);
        assert_eq!(dashed.len(), 64);
    }

    #[test]
    fn record_then_lookup() {
        let dir = project("42");

        codecache(dir.path())
            .args(["record", "cw20.wasm", "--chain-id", "local-1", "--code-id", "5"])
            .assert()
            .success();

        codecache(dir.path())
            .args(["lookup", "cw20.wasm", "--chain-id", "local-1"])
            .assert()
            .success()
            .stdout("5\n");

        let store = store(dir.path());
        assert_eq!(store["start_time"], 42);
        assert_eq!(store["file_cache"].as_object().unwrap().len(), 1);
    }

    #[test]
    fn lookup_miss_fails_with_hint() {
        let dir = project("42");

        codecache(dir.path())
            .args(["lookup", "cw20.wasm", "--chain-id", "local-1"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("No cached code id"))
            .stderr(predicate::str::contains("codecache record"));
    }

    #[test]
    fn chain_restart_invalidates_cache() {
        let dir = project("42");

        codecache(dir.path())
            .args(["record", "cw20.wasm", "--chain-id", "local-1", "--code-id", "5"])
            .assert()
            .success();

        set_epoch(dir.path(), "99");
        codecache(dir.path())
            .arg("reconcile")
            .assert()
            .success()
            .stdout(predicate::str::contains("dropped 1 entries"));

        let store = store(dir.path());
        assert_eq!(store["start_time"], 99);
        assert!(store["file_cache"].as_object().unwrap().is_empty());

        codecache(dir.path())
            .args(["lookup", "cw20.wasm", "--chain-id", "local-1"])
            .assert()
            .failure();
    }

    #[test]
    fn reconcile_resets_stale_store_with_malformed_entries() {
        let dir = project("7");
        fs::write(
            dir.path().join("configs").join("contracts.json"),
            r#"{"start_time": 1, "file_cache": {"k": "seven"}}"#,
        )
        .unwrap();

        codecache(dir.path())
            .arg("reconcile")
            .assert()
            .success()
            .stdout(predicate::str::contains("Chain restarted (1 -> 7)"));

        assert_eq!(
            store(dir.path()),
            serde_json::json!({"start_time": 7, "file_cache": {}})
        );
    }

    #[test]
    fn show_json_reflects_store() {
        let dir = project("7");

        codecache(dir.path())
            .args(["record", "cw20.wasm", "--chain-id", "c", "--code-id", "3"])
            .assert()
            .success();

        let out = stdout_of(codecache(dir.path()).args(["show", "--format", "json"]));
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, store(dir.path()));
    }

    #[test]
    fn show_creates_store_on_first_use() {
        let dir = project("7");

        codecache(dir.path())
            .args(["show", "--format", "plain"])
            .assert()
            .success()
            .stdout("");

        assert_eq!(
            store(dir.path()),
            serde_json::json!({"start_time": 0, "file_cache": {}})
        );
    }

    #[test]
    fn corrupt_store_is_reported() {
        let dir = project("7");
        fs::write(dir.path().join("configs").join("contracts.json"), "{oops").unwrap();

        codecache(dir.path())
            .arg("reconcile")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid format"));
    }

    #[test]
    fn config_paths_override_layout() {
        let dir = project("7");
        fs::write(
            dir.path().join("global.toml"),
            "[paths]\nstorage_root = \"artifacts\"\n",
        )
        .unwrap();
        fs::create_dir_all(dir.path().join("artifacts")).unwrap();
        fs::write(dir.path().join("artifacts").join("nft.wasm"), b"nft").unwrap();

        codecache(dir.path())
            .args(["fingerprint", "nft.wasm", "--chain-id", "c"])
            .assert()
            .success();

        codecache(dir.path())
            .args(["fingerprint", "cw20.wasm", "--chain-id", "c"])
            .assert()
            .failure();
    }

    #[test]
    fn init_writes_local_config() {
        let dir = TempDir::new().unwrap();

        cargo_bin_cmd!("codecache")
            .args(["init", "--path"])
            .arg(dir.path())
            .assert()
            .success();

        assert!(dir.path().join(".codecache.toml").is_file());

        cargo_bin_cmd!("codecache")
            .args(["init", "--path"])
            .arg(dir.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));
    }

    #[test]
    fn config_show() {
        let dir = project("1");
        codecache(dir.path())
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[paths]"));
    }
}
