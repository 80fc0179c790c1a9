#[cfg(test)]
mod cli {
    use std::fs;
    use std::path::Path;

    use assert_cmd::Command;
    use predicates::str::contains;
    use tempfile::TempDir;

    const CAPTURE: &str = r#"{
        "devices": [
            {
                "name": "core-sw1",
                "device": {"hostname": "10.0.0.1", "sendCommands": ["show version", "show clock"]},
                "responses": [{"result": "VERSION_TEXT"}, {"result": "CLOCK_TEXT"}]
            },
            {
                "name": "edge-r2",
                "device": {"hostname": "10.0.0.2", "sendCommands": ["show ip/route"]},
                "responses": [{"result": "ROUTES"}]
            }
        ]
    }"#;

    const MISALIGNED_CAPTURE: &str = r#"{
        "devices": [
            {
                "name": "core-sw1",
                "device": {"hostname": "10.0.0.1", "sendCommands": ["show version", "show clock"]},
                "responses": [{"result": "VERSION_TEXT"}]
            },
            {
                "name": "edge-r2",
                "device": {"hostname": "10.0.0.2", "sendCommands": ["show ip/route"]},
                "responses": [{"result": "ROUTES"}]
            }
        ]
    }"#;

    /// Temp working dir holding a capture and an empty config file
    fn workspace(capture: &str) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("capture.json"), capture).unwrap();
        fs::write(dir.path().join("config.json"), "{}").unwrap();
        dir
    }

    fn cmdo(dir: &Path) -> Command {
        let mut cmd = Command::cargo_bin("cmdo").expect("Couldn't find cmdo binary");
        cmd.current_dir(dir)
            .env_remove("CMDO_OUTPUT")
            .env_remove("CMDO_CONFIG")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        cmd
    }

    #[test]
    fn test_write_files() {
        let dir = workspace(CAPTURE);

        cmdo(dir.path())
            .args(["write", "capture.json", "--output", "file", "--config", "config.json"])
            .assert()
            .success()
            .stderr(contains("2 succeeded"));

        let outputs = dir.path().join("outputs");
        assert_eq!(
            fs::read_to_string(outputs.join("core-sw1").join("show-version")).unwrap(),
            "VERSION_TEXT"
        );
        assert_eq!(
            fs::read_to_string(outputs.join("core-sw1").join("show-clock")).unwrap(),
            "CLOCK_TEXT"
        );
        assert_eq!(
            fs::read_to_string(outputs.join("edge-r2").join("show-ip-route")).unwrap(),
            "ROUTES"
        );
    }

    #[test]
    fn test_write_files_mode_from_config() {
        let dir = workspace(CAPTURE);
        fs::write(dir.path().join("config.json"), r#"{"output": "file"}"#).unwrap();

        cmdo(dir.path())
            .args(["write", "capture.json", "--config", "config.json"])
            .assert()
            .success();

        assert!(dir.path().join("outputs").join("edge-r2").is_dir());
    }

    #[test]
    fn test_write_timestamped_files() {
        let dir = workspace(CAPTURE);

        cmdo(dir.path())
            .args(["write", "capture.json", "-o", "file", "--timestamp", "-c", "config.json"])
            .assert()
            .success();

        let roots: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.starts_with("outputs_"))
            .collect();
        assert_eq!(roots.len(), 1);
        assert!(!dir.path().join("outputs").exists());
    }

    #[test]
    fn test_write_stdout() {
        let dir = workspace(CAPTURE);

        cmdo(dir.path())
            .args(["write", "capture.json", "--output", "stdout", "--config", "config.json"])
            .assert()
            .success()
            .stdout(contains("core-sw1"))
            .stdout(contains("-- show version:"))
            .stdout(contains("VERSION_TEXT"))
            .stdout(contains("-- show ip/route:"));

        assert!(!dir.path().join("outputs").exists());
    }

    #[test]
    fn test_invalid_output_mode() {
        let dir = workspace(CAPTURE);

        cmdo(dir.path())
            .args(["write", "capture.json", "--output", "bogus", "--config", "config.json"])
            .assert()
            .failure()
            .code(4)
            .stderr(contains("Invalid output mode 'bogus'"));
    }

    #[test]
    fn test_failed_device_continues() {
        let dir = workspace(MISALIGNED_CAPTURE);

        cmdo(dir.path())
            .args(["write", "capture.json", "--output", "file", "--config", "config.json"])
            .assert()
            .success()
            .stderr(contains("[FAIL]"))
            .stderr(contains("1 succeeded"));

        assert!(!dir.path().join("outputs").join("core-sw1").exists());
        assert!(dir.path().join("outputs").join("edge-r2").join("show-ip-route").exists());
    }

    #[test]
    fn test_failed_device_strict() {
        let dir = workspace(MISALIGNED_CAPTURE);

        cmdo(dir.path())
            .args(["--strict", "write", "capture.json", "-o", "file", "-c", "config.json"])
            .assert()
            .failure()
            .code(5)
            .stderr(contains("Partial failure: 1 succeeded, 1 failed"));
    }

    #[test]
    fn test_missing_capture() {
        let dir = workspace(CAPTURE);

        cmdo(dir.path())
            .args(["write", "missing.json", "--config", "config.json"])
            .assert()
            .failure()
            .code(4);
    }

    #[test]
    fn test_sanitize() {
        let dir = tempfile::tempdir().unwrap();

        cmdo(dir.path())
            .args(["sanitize", "show ip/route\"test", "show version"])
            .assert()
            .success()
            .stdout("show-ip-routetest\nshow-version\n");
    }
}
