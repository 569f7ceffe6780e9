use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");

    let git_hash = command_stdout("git", &["rev-parse", "--short", "HEAD"])
        .filter(|hash| !hash.is_empty())
        .unwrap_or_else(|| "unknown".to_string());
    emit("HASH", &git_hash);

    let git_status = command_stdout("git", &["status", "--porcelain"])
        .map(|status| if status.is_empty() { "clean" } else { "dirty" })
        .unwrap_or("unknown");
    emit("STATUS", git_status);

    let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    emit("TIMESTAMP", &timestamp);

    emit("TARGET", &env::var("TARGET").unwrap_or_else(|_| "unknown-target".into()));
    emit("PROFILE", &env::var("PROFILE").unwrap_or_else(|_| "unknown-profile".into()));

    let rustc = command_stdout("rustc", &["--version"]).unwrap_or_else(|| "unknown".into());
    emit("RUSTC", &rustc);
}

fn emit(key: &str, value: &str) {
    println!("cargo:rustc-env=POCKET_LEDGER_BUILD_{key}={value}");
}

fn command_stdout(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}
