//! External tool invocation — petcat cross-assembler and x64 emulator.
//!
//! Both are fire-and-forget collaborators from the engine's point of view:
//! a failure is reported but never aborts a watch loop. petcat runs to
//! completion because the emulator launch depends on its result; the
//! emulator itself runs on a background thread for as long as the user
//! keeps it open.

use crate::console;
use crate::core::types::{ConvertConfig, EmulatorSpeed};
use std::process::Command;
use std::thread;

/// Captured result of one external process run.
#[derive(Debug, Clone)]
pub struct ExecOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ExecOutput {
    /// petcat and x64 report problems on stderr even with exit code 0,
    /// so success requires a clean error stream as well.
    pub fn success(&self) -> bool {
        self.exit_code == 0 && self.stderr.trim().is_empty()
    }
}

/// Run a command to completion, capturing exit code and both streams.
pub fn run_tool(program: &str, args: &[String]) -> Result<ExecOutput, String> {
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| format!("failed to run {}: {}", program, e))?;

    Ok(ExecOutput {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    })
}

/// Assemble the written `.bas` into a loadable `.prg` via
/// `petcat -w2 -o <prg> <bas>`.
pub fn build_prg(config: &ConvertConfig) -> Result<ExecOutput, String> {
    let args = vec![
        "-w2".to_string(),
        "-o".to_string(),
        config.prgfile.display().to_string(),
        config.outfile.display().to_string(),
    ];
    run_tool("petcat", &args)
}

/// Launch `x64` with the `.prg` on a background thread. `-warp` enables
/// warp mode, `+warp` forces normal speed. The thread reports any error
/// when the emulator exits; nothing waits on it.
pub fn launch_emulator(config: &ConvertConfig, speed: EmulatorSpeed) -> thread::JoinHandle<()> {
    let speed_flag = match speed {
        EmulatorSpeed::Warp => "-warp",
        EmulatorSpeed::Normal => "+warp",
    };
    let args = vec![speed_flag.to_string(), config.prgfile.display().to_string()];

    console::status("starting emulator");
    thread::spawn(move || match run_tool("x64", &args) {
        Ok(out) if out.success() => {}
        Ok(out) => console::error(out.stderr.trim()),
        Err(e) => console::error(&e),
    })
}
