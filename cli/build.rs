use std::path::Path;
use std::process::Command;

const COMMIT_VARS: [&str; 2] = ["HBT_COMMIT_SHORT_HASH", "HBT_COMMIT_DATE"];

fn commit_info_git() -> Option<(String, String)> {
    let output = Command::new("git")
        .args(["log", "-1", "--date=short", "--format=%h %cd", "--abbrev=7"])
        .output()
        .ok()
        .filter(|output| output.status.success())?;
    let stdout = String::from_utf8(output.stdout).ok()?;
    let mut parts = stdout.split_whitespace();
    Some((parts.next()?.to_string(), parts.next()?.to_string()))
}

fn commit_info_env() -> Option<(String, String)> {
    let [hash, date] = COMMIT_VARS.map(|var| std::env::var(var).ok());
    Some((hash?, date?))
}

fn main() {
    let info = if Path::new("../.git").exists() {
        commit_info_git()
    } else {
        commit_info_env()
    };
    let (hash, date) = info.unwrap_or_else(|| ("unknown".into(), "unknown".into()));
    println!("cargo:rustc-env={}={}", COMMIT_VARS[0], hash);
    println!("cargo:rustc-env={}={}", COMMIT_VARS[1], date);
    for var in COMMIT_VARS {
        println!("cargo:rerun-if-env-changed={var}");
    }
}
