use anyhow::{Context, Result};
use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

const ENV_VARS: [&str; 4] = [
    "HALALSCREEN_PROJECT_DIR",
    "HALALSCREEN_DATASET",
    "HALALSCREEN_ZERO_GUARD",
    "HALALSCREEN_SESSION",
];

/// Throwaway copy of the demo project, so sessions never leak between tests.
struct ScreenTestEnv {
    _tmp: TempDir,
    root: PathBuf,
}

impl ScreenTestEnv {
    fn new() -> Result<Self> {
        let tmp = tempfile::tempdir()?;
        let project_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .context("Workspace root not found")?
            .join("demos/gulf_market");

        let dest = tmp.path().join("gulf_market");
        Self::copy_dir(&project_root, &dest)?;

        Ok(Self {
            _tmp: tmp,
            root: dest,
        })
    }

    fn copy_dir(src: &Path, dst: &Path) -> std::io::Result<()> {
        let mut options = fs_extra::dir::CopyOptions::new();
        options.skip_exist = true;
        options.content_only = true;

        std::fs::create_dir_all(dst)?;
        fs_extra::dir::copy(src, dst, &options)
            .map(|_| ())
            .map_err(|e| std::io::Error::other(e.to_string()))
    }

    fn halalscreen(&self) -> Command {
        halalscreen_in(&self.root)
    }

    fn json(&self, args: &[&str]) -> Result<Value> {
        let output = self.halalscreen().args(args).output()?;
        assert!(
            output.status.success(),
            "command failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        Ok(serde_json::from_slice(&output.stdout)?)
    }
}

fn halalscreen_in(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("halalscreen"));
    cmd.current_dir(dir);
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

// --- SCREEN ---

#[test]
fn test_screen_compliant_stock_table() -> Result<()> {
    let env = ScreenTestEnv::new()?;

    env.halalscreen()
        .args(["screen", "ADNOC", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ADNOC Drilling (ADNOC)"))
        .stdout(predicate::str::contains("Market Cap: 67.40B"))
        .stdout(predicate::str::contains("Computed: 🟢 Halal"))
        .stdout(predicate::str::contains("Total Debt: 1.44B / Total Assets: 7.20B"))
        .stdout(predicate::str::contains("ADNOC Drilling Secures $1.5 Billion Contract"));
    Ok(())
}

#[test]
fn test_screen_json_findings() -> Result<()> {
    let env = ScreenTestEnv::new()?;
    let json = env.json(&["screen", "3", "--format", "json"])?;

    assert_eq!(json["computedStatus"], "Halal");
    assert_eq!(json["declaredStatus"], "Halal");
    assert_eq!(json["stock"]["code"], "ADNOC");

    let findings = json["findings"].as_array().context("findings array")?;
    let values: Vec<f64> = findings
        .iter()
        .filter_map(|f| f["value"].as_f64())
        .collect();
    let expected = [100.0, 20.0, 20.0, 1.0, 55.0];
    assert_eq!(values.len(), expected.len());
    for (value, expected) in values.iter().zip(expected) {
        assert!((value - expected).abs() < 1e-9, "{} != {}", value, expected);
    }
    assert!(findings.iter().all(|f| f["isCompliant"] == true));

    // ADNOC is mentioned by two articles
    assert_eq!(json["news"].as_array().map(Vec::len), Some(2));
    Ok(())
}

#[test]
fn test_screen_check_fails_on_non_compliant_stock() -> Result<()> {
    let env = ScreenTestEnv::new()?;

    env.halalscreen()
        .args(["screen", "aapl", "--check"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Computed: 🔴 Haram"))
        .stderr(predicate::str::contains("AAPL fails 1 standard(s)"));

    // Without --check the verdict is informative only
    env.halalscreen().args(["screen", "AAPL"]).assert().success();
    Ok(())
}

#[test]
fn test_screen_unknown_stock() -> Result<()> {
    let env = ScreenTestEnv::new()?;

    let output = env.halalscreen().args(["screen", "TSLA"]).output()?;
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    // Reported once, through the diagnostic
    assert_eq!(stderr.matches("Stock 'TSLA' not found").count(), 1, "{}", stderr);
    assert!(stderr.contains("halalscreen::domain::stock_not_found"));
    Ok(())
}

// --- REPORT ---

#[test]
fn test_report_flags_declared_status_mismatch() -> Result<()> {
    let env = ScreenTestEnv::new()?;

    env.halalscreen()
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("Halal: 1 / 4"))
        .stdout(predicate::str::contains("Mismatches: 1"));

    env.halalscreen()
        .args(["report", "--check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "SABIC declared Halal but screens Haram",
        ));
    Ok(())
}

#[test]
fn test_report_json_with_category_filter() -> Result<()> {
    let env = ScreenTestEnv::new()?;
    let json = env.json(&["report", "-c", "Technology", "--format", "json"])?;

    let screenings = json["screenings"].as_array().context("screenings array")?;
    let codes: Vec<&str> = screenings
        .iter()
        .filter_map(|s| s["stock"]["code"].as_str())
        .collect();
    assert_eq!(codes, vec!["AAPL", "MSFT"]);
    assert!(screenings.iter().all(|s| s["computedStatus"] == "Haram"));
    Ok(())
}

#[test]
fn test_zero_guard_env_override() -> Result<()> {
    let env = ScreenTestEnv::new()?;

    // SABIC reports no financials: undefined ratios now count as compliant
    env.halalscreen()
        .args(["report", "--check"])
        .env("HALALSCREEN_ZERO_GUARD", "undefined_compliant")
        .assert()
        .success()
        .stdout(predicate::str::contains("Halal: 2 / 4"))
        .stdout(predicate::str::contains("Mismatches: 0"));
    Ok(())
}

// --- BROWSE ---

#[test]
fn test_search_and_categories() -> Result<()> {
    let env = ScreenTestEnv::new()?;

    env.halalscreen()
        .args(["search", "-t", "apple"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 stock(s) found"))
        .stdout(predicate::str::contains("AAPL"))
        .stdout(predicate::str::contains("MSFT").not());

    env.halalscreen()
        .args(["search", "-c", "Crypto"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No stock matches"));

    let output = env.halalscreen().arg("categories").output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    insta::assert_snapshot!(stdout.trim_end(), @r"
    Technology
    Energy
    Materials
    ");
    Ok(())
}

#[test]
fn test_news_for_stock() -> Result<()> {
    let env = ScreenTestEnv::new()?;

    env.halalscreen()
        .args(["news", "--stock", "SABIC"])
        .assert()
        .success()
        .stdout(predicate::str::contains("News for Saudi Basic Industries"))
        .stdout(predicate::str::contains("Gulf Markets Close Higher"))
        .stdout(predicate::str::contains("Apple").not());

    env.halalscreen()
        .arg("news")
        .assert()
        .success()
        .stdout(predicate::str::contains("Apple Announces"));
    Ok(())
}

// --- SESSION & PORTFOLIO ---

#[test]
fn test_portfolio_requires_sign_in() -> Result<()> {
    let env = ScreenTestEnv::new()?;

    env.halalscreen()
        .arg("portfolio")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No user is signed in"));
    Ok(())
}

#[test]
fn test_session_lifecycle_and_portfolio() -> Result<()> {
    let env = ScreenTestEnv::new()?;

    env.halalscreen()
        .args(["login", "--email", " Demo@Example.com ", "--name", "Demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in as Demo <demo@example.com>"));
    assert!(env.root.join(".halalscreen/session.json").exists());

    env.halalscreen()
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Demo <demo@example.com>"));

    env.halalscreen()
        .arg("portfolio")
        .assert()
        .success()
        .stdout(predicate::str::contains("Value: $5968.40"))
        .stdout(predicate::str::contains("Cost: $5500.00"))
        .stdout(predicate::str::contains("Halal holdings: 1 / 2"));

    let json = env.json(&["portfolio", "--format", "json"])?;
    let total = json["totalValue"].as_f64().context("totalValue")?;
    assert!((total - 5968.4).abs() < 1e-6);
    assert_eq!(json["halalCount"], 1);

    env.halalscreen().arg("logout").assert().success();
    env.halalscreen()
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not signed in"));
    Ok(())
}

#[test]
fn test_login_rejects_invalid_email() -> Result<()> {
    let env = ScreenTestEnv::new()?;

    env.halalscreen()
        .args(["login", "--email", "not-an-email", "--name", "Demo"])
        .assert()
        .failure();
    assert!(!env.root.join(".halalscreen/session.json").exists());
    Ok(())
}

// --- CONFIGURATION ---

#[test]
fn test_missing_project_config() -> Result<()> {
    let tmp = tempfile::tempdir()?;

    halalscreen_in(tmp.path())
        .arg("categories")
        .assert()
        .failure()
        .stderr(predicate::str::contains("halalscreen.yaml"));
    Ok(())
}

#[test]
fn test_dataset_outside_project_is_rejected() -> Result<()> {
    let env = ScreenTestEnv::new()?;

    env.halalscreen()
        .arg("categories")
        .env("HALALSCREEN_DATASET", "../elsewhere/market.yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsafe path"));
    Ok(())
}

#[test]
fn test_project_dir_flag() -> Result<()> {
    let env = ScreenTestEnv::new()?;
    let elsewhere = tempfile::tempdir()?;

    halalscreen_in(elsewhere.path())
        .arg("categories")
        .arg("--project-dir")
        .arg(&env.root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Energy"));
    Ok(())
}
