//! Harvard 8-bit CPU simulator CLI.
//!
//! This binary is the host for the simulator. It performs:
//! 1. **Run:** Load a code image and optional data image (or one combined image) and execute until halt.
//! 2. **Disassemble:** Print the program memory of an image as assembly.
//!
//! Program output goes to stdout; diagnostics, logs, and traces go to stderr.
//! Exit status is 0 on halt, 1 on a load, configuration, or decode error, and 2
//! when the step limit is reached.

use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

use hvsim_core::common::SimError;
use hvsim_core::config::{Config, ImageLayout};
use hvsim_core::isa::disasm;
use hvsim_core::sim::{ExitReason, Simulator, loader};
use hvsim_core::soc::devices::InterruptLine;

/// Exit status for load, configuration, and decode failures.
const EXIT_ERROR: u8 = 1;
/// Exit status when the step limit stops the run.
const EXIT_STEP_LIMIT: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "hvsim",
    author,
    version,
    about = "Harvard-architecture 8-bit CPU simulator",
    long_about = "Run or disassemble program images for the 8-bit Harvard CPU.\n\nExamples:\n  hvsim run code.bin\n  hvsim run code.bin memory.bin --stats\n  hvsim run --image combined.bin --max-steps 100000\n  hvsim disasm code.bin"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program until it halts.
    Run(RunArgs),

    /// Disassemble the program memory of an image.
    Disasm {
        /// Code image (up to 512 bytes).
        #[arg(required_unless_present = "image")]
        code: Option<PathBuf>,

        /// Combined image (512 code bytes followed by up to 256 data bytes).
        #[arg(long, conflicts_with = "code")]
        image: Option<PathBuf>,
    },
}

#[derive(clap::Args, Debug)]
struct RunArgs {
    /// Code image (up to 512 bytes, two bytes per instruction).
    #[arg(required_unless_present = "image")]
    code: Option<PathBuf>,

    /// Data memory image (up to 256 bytes); zero-filled when omitted.
    memory: Option<PathBuf>,

    /// Combined image (512 code bytes followed by up to 256 data bytes).
    #[arg(long, conflicts_with_all = ["code", "memory"])]
    image: Option<PathBuf>,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Trace every executed instruction to stderr.
    #[arg(long)]
    trace: bool,

    /// Stop after this many instructions (overrides the config file).
    #[arg(long)]
    max_steps: Option<u64>,

    /// Print execution statistics when the run ends.
    #[arg(long)]
    stats: bool,

    /// Comma-separated statistics sections to print (summary, instruction_mix, control, io).
    #[arg(long, value_delimiter = ',')]
    stats_sections: Vec<String>,

    /// Make Ctrl-C raise the CPU's interrupt line instead of exiting.
    #[arg(long)]
    interrupt_on_sigint: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            init_logging(args.trace);
            cmd_run(&args)
        }
        Commands::Disasm { code, image } => {
            init_logging(false);
            cmd_disasm(code.as_deref(), image.as_deref())
        }
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` selects the filter (default `warn`); `trace` adds instruction
/// tracing from the execution step on top of it.
fn init_logging(trace: bool) {
    let base = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    let directives = if trace {
        format!("{base},hvsim_core::core::cpu::execution=trace")
    } else {
        base
    };
    let filter = EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Runs a program and maps the outcome to an exit status.
fn cmd_run(args: &RunArgs) -> ExitCode {
    let mut sim = match build_simulator(args) {
        Ok(sim) => sim,
        Err(e) => {
            report(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if args.interrupt_on_sigint {
        install_sigint_handler(sim.interrupt_line());
    }

    let outcome = sim.run();
    sim.system.console.flush();

    let code = match outcome {
        Ok(ExitReason::Halted) => ExitCode::SUCCESS,
        Ok(ExitReason::StepLimit) => {
            eprintln!(
                "[!] step limit reached after {} instructions (pc={:#04x})",
                sim.stats().steps,
                sim.cpu.pc
            );
            ExitCode::from(EXIT_STEP_LIMIT)
        }
        Err(e) => {
            report(&e);
            sim.cpu.dump_state();
            ExitCode::from(EXIT_ERROR)
        }
    };

    if args.stats || !args.stats_sections.is_empty() {
        sim.stats().print_sections(&args.stats_sections);
    }
    code
}

/// Loads configuration and images and assembles the simulator.
fn build_simulator(args: &RunArgs) -> Result<Simulator, SimError> {
    let mut config = args
        .config
        .as_deref()
        .map(Config::from_file)
        .transpose()?
        .unwrap_or_default();
    if args.trace {
        config.general.trace_instructions = true;
    }
    if args.max_steps.is_some() {
        config.general.max_steps = args.max_steps;
    }

    let (layout, code) = match &args.image {
        Some(image) => (ImageLayout::Combined, image.as_path()),
        None => (
            config.loader.layout,
            args.code.as_deref().unwrap_or_else(|| Path::new("")),
        ),
    };
    let (program, data) = loader::load_images(layout, code, args.memory.as_deref())?;

    tracing::info!(code = %code.display(), ?layout, "starting simulation");
    Ok(Simulator::with_stdio(program, data, &config))
}

/// Prints program memory up to its last non-zero word as `addr: word  text`.
fn cmd_disasm(code: Option<&Path>, image: Option<&Path>) -> ExitCode {
    let program = match (image, code) {
        (Some(image), _) => loader::load_combined(image).map(|(program, _)| program),
        (None, code) => loader::load_program(code.unwrap_or_else(|| Path::new(""))),
    };
    match program {
        Ok(program) => {
            for (addr, word, text) in disasm::disassemble_program(&program) {
                println!("{addr:#04x}: {word:04x}  {text}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            report(&e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Prints an error and its source chain to stderr.
fn report(err: &dyn Error) {
    eprintln!("[!] error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("    caused by: {cause}");
        source = cause.source();
    }
}

/// Interrupt line raised by the SIGINT handler.
static SIGINT_LINE: OnceLock<InterruptLine> = OnceLock::new();

extern "C" fn on_sigint(_signal: libc::c_int) {
    if let Some(line) = SIGINT_LINE.get() {
        line.raise();
    }
}

/// Routes SIGINT to `line` for the rest of the process.
fn install_sigint_handler(line: InterruptLine) {
    if SIGINT_LINE.set(line).is_err() {
        return;
    }
    let handler = on_sigint as extern "C" fn(libc::c_int) as libc::sighandler_t;
    // SAFETY: `on_sigint` only reads an initialised `OnceLock` and performs one
    // atomic store, both async-signal-safe. SIGINT is a valid signal number.
    let previous = unsafe { libc::signal(libc::SIGINT, handler) };
    if previous == libc::SIG_ERR {
        tracing::warn!("failed to install SIGINT handler; Ctrl-C will terminate the run");
    }
}
