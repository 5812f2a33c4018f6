//! Command-line front end.
//!
//! Parses the flag set into an immutable [`ConvertConfig`] and drives the
//! engine: one-shot conversion, or the watch loop in `-w` mode. Engine
//! errors are flattened to strings at this boundary; in watch mode they
//! are reported and the loop keeps observing file changes.

use crate::console;
use crate::core::types::{ConvertConfig, ConvertError, EmulatorSpeed};
use crate::core::{convert, emit};
use crate::tools;
use crate::watch;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "zbas",
    version,
    about = "Text-to-BASIC transpiler — named labels, variables, constants and includes"
)]
pub struct Cli {
    /// Re-run the conversion whenever the input file changes
    #[arg(short, long)]
    pub watch: bool,

    /// Echo the numbered output lines to the console
    #[arg(short = 'o', long)]
    pub echo: bool,

    /// Clear the console before each run
    #[arg(short, long)]
    pub clear: bool,

    /// Build a loadable .prg with petcat after conversion
    #[arg(short = 'p', long = "prg")]
    pub build_prg: bool,

    /// Launch the x64 emulator after a successful petcat run
    #[arg(short, long, requires = "build_prg")]
    pub emulator: bool,

    /// Run the emulator in warp mode (implies --emulator)
    #[arg(long, requires = "build_prg")]
    pub warp: bool,

    /// Input source file
    pub file: PathBuf,
}

impl Cli {
    /// Freeze the parsed flags into the per-run configuration.
    pub fn into_config(self) -> ConvertConfig {
        let mut config = ConvertConfig::new(self.file);
        config.echo = self.echo;
        config.clear = self.clear;
        config.build_prg = self.build_prg;
        config.watch = self.watch;
        config.emulator = if self.warp {
            Some(EmulatorSpeed::Warp)
        } else if self.emulator {
            Some(EmulatorSpeed::Normal)
        } else {
            None
        };
        config
    }
}

/// Entry point after flag parsing.
pub fn run(config: &ConvertConfig) -> Result<(), String> {
    if config.watch {
        // The first run may fail (e.g. a broken include) without killing
        // the watcher; every change gets a fresh attempt.
        if let Err(e) = run_once(config) {
            console::error(&e.to_string());
        }
        watch::watch_file(&config.input, || {
            console::status("file changed");
            if let Err(e) = run_once(config) {
                console::error(&e.to_string());
            }
        })
    } else {
        run_once(config).map_err(|e| e.to_string())
    }
}

/// One full conversion: engine, report, output file, optional tool chain.
fn run_once(config: &ConvertConfig) -> Result<(), ConvertError> {
    if config.clear {
        console::clear();
    }
    console::status(&format!("reading '{}'", config.input.display()));

    let report = convert::convert(config)?;

    if config.echo {
        console::plain("");
        for line in &report.code {
            console::plain(&line.to_string());
        }
        console::plain("");
    }

    for warning in &report.warnings {
        console::warn(warning);
    }

    console::status(&format!(
        "found {} labels, {} variables, {} constants",
        report.labels, report.variables, report.constants
    ));
    console::status(&format!("writing '{}'", config.outfile.display()));
    emit::write_output(&config.outfile, &report.code)?;

    if config.build_prg {
        build_and_launch(config);
    }

    Ok(())
}

/// petcat, then the emulator if requested. Tool failures are reported but
/// never fatal; the .bas output is already on disk at this point.
fn build_and_launch(config: &ConvertConfig) {
    match tools::build_prg(config) {
        Ok(out) if out.success() => {
            console::status(&format!("writing '{}'", config.prgfile.display()));
            if let Some(speed) = config.emulator {
                tools::launch_emulator(config, speed);
            }
        }
        Ok(out) => console::error(out.stderr.trim()),
        Err(e) => console::error(&e),
    }
}
