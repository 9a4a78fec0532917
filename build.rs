use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");

    emit("HASH", command_output("git", &["rev-parse", "--short", "HEAD"]));
    emit("STATUS", tree_status());

    let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    emit("TIMESTAMP", timestamp);

    emit(
        "TARGET",
        env::var("TARGET").unwrap_or_else(|_| "unknown-target".to_string()),
    );
    emit(
        "PROFILE",
        env::var("PROFILE").unwrap_or_else(|_| "unknown-profile".to_string()),
    );
    emit("RUSTC", command_output("rustc", &["--version"]));
}

fn emit(name: &str, value: String) {
    println!("cargo:rustc-env=MONTHLY_BUDGET_BUILD_{name}={value}");
}

fn run(program: &str, args: &[&str]) -> Option<String> {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
}

fn command_output(program: &str, args: &[&str]) -> String {
    run(program, args)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn tree_status() -> String {
    run("git", &["status", "--porcelain"])
        .map(|s| if s.trim().is_empty() { "clean" } else { "dirty" })
        .unwrap_or("unknown")
        .to_string()
}
