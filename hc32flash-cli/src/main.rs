//! hc32flash CLI - Command-line tool for flashing HC32L110 microcontrollers.
//!
//! ## Features
//!
//! - Read, write and erase flash over the ROM serial bootloader
//! - RAM-loader bypass mode for external tools
//! - Interactive serial port selection
//! - Shell completion generation
//! - Environment variable support

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use console::style;
use env_logger::Env;
use hc32flash::{ChipFamily, EraseTarget, Operation, Session, FLASH_SIZE};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use std::fs;
use std::io;
use std::path::PathBuf;

mod config;
mod serial;

use config::Config;
use serial::{ask_remember_port, bridge_name, discover_ports, select_serial_port, SerialOptions};

/// User-facing failure classes, mapped to process exit codes.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Invalid invocation or setup issue (exit code 2).
    #[error("{0}")]
    Usage(String),
    /// User cancelled an interactive prompt (exit code 130).
    #[error("{0}")]
    Cancelled(String),
}

/// hc32flash - A tool for flashing HC32L110 chips over the ROM bootloader.
///
/// Environment variables:
///   HC32FLASH_PORT              - Default serial port
///   HC32FLASH_NON_INTERACTIVE   - Non-interactive mode (disable prompts)
#[derive(Parser)]
#[command(name = "hc32flash")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[allow(clippy::struct_excessive_bools)]
struct Cli {
    /// Serial port to use (auto-detected if not specified).
    #[arg(short, long, global = true, env = "HC32FLASH_PORT")]
    port: Option<String>,

    /// Verbose output level (-v, -vv for increasing detail).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (suppress non-essential output).
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Non-interactive mode (fail instead of prompting).
    #[arg(long, global = true, env = "HC32FLASH_NON_INTERACTIVE")]
    non_interactive: bool,

    /// Confirm port selection even for auto-detected ports.
    #[arg(long, global = true)]
    confirm_port: bool,

    /// List all available ports (including unknown types).
    #[arg(long, global = true)]
    list_all_ports: bool,

    /// Path to a configuration file.
    #[arg(long = "config", global = true, value_name = "PATH")]
    config_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Read flash contents into a file.
    Read {
        /// Output file for the flash image.
        file: PathBuf,

        /// Flash start address (requires --length).
        #[arg(short, long, value_parser = parse_hex_u32)]
        address: Option<u32>,

        /// Number of bytes to read (requires --address).
        #[arg(short, long, value_parser = parse_hex_u32)]
        length: Option<u32>,
    },

    /// Write a binary file to flash.
    Write {
        /// Binary file to program.
        file: PathBuf,

        /// Flash start address.
        #[arg(short, long, value_parser = parse_hex_u32, default_value = "0")]
        address: u32,
    },

    /// Erase flash memory.
    Erase {
        /// Erase only the sector containing this address
        /// (omit for whole-chip erase).
        #[arg(short, long, value_parser = parse_hex_u32)]
        address: Option<u32>,
    },

    /// Connect and hold the ROM bootloader without installing the loader.
    ///
    /// Useful for handing the device over to a vendor tool that speaks to
    /// the ROM directly.
    Connect,

    /// List available serial ports.
    ListPorts,

    /// Generate shell completion scripts.
    Completions {
        /// Shell type for completions.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Parse a hexadecimal or decimal address (supports 0x prefix and underscores).
fn parse_hex_u32(s: &str) -> Result<u32, String> {
    let s = s.trim();
    let s: String = s.chars().filter(|c| *c != '_').collect();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16).map_err(|e| format!("Invalid hex address: {e}"))
    } else {
        s.parse::<u32>()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            match e.downcast_ref::<CliError>() {
                Some(CliError::Usage(msg)) => {
                    eprintln!("{} {msg}", style("Error:").red().bold());
                    std::process::exit(2);
                }
                Some(CliError::Cancelled(msg)) => {
                    eprintln!("{msg}");
                    std::process::exit(130);
                }
                None => {
                    eprintln!("{} {e:#}", style("Error:").red().bold());
                    std::process::exit(1);
                }
            }
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let log_level = if cli.quiet {
        "warn"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(log_level));
    builder.format_target(cli.verbose >= 2);
    if cli.verbose >= 2 {
        builder.format_timestamp_millis();
    } else {
        builder.format_timestamp(None);
    }
    builder.init();

    debug!(
        "hc32flash v{} (verbose level: {})",
        env!("CARGO_PKG_VERSION"),
        cli.verbose
    );

    // Load configuration
    let mut config = if let Some(ref path) = cli.config_path {
        Config::load_from_path(path)
    } else {
        Config::load()
    };

    match &cli.command {
        Commands::Read {
            file,
            address,
            length,
        } => cmd_read(&cli, &mut config, file, *address, *length),
        Commands::Write { file, address } => cmd_write(&cli, &mut config, file, *address),
        Commands::Erase { address } => cmd_erase(&cli, &mut config, *address),
        Commands::Connect => cmd_connect(&cli, &mut config),
        Commands::ListPorts => {
            cmd_list_ports();
            Ok(())
        }
        Commands::Completions { shell } => {
            cmd_completions(*shell);
            Ok(())
        }
    }
}

/// Get serial port from CLI args or interactive selection.
fn get_port(cli: &Cli, config: &mut Config) -> Result<String> {
    let options = SerialOptions {
        port: cli.port.clone(),
        list_all_ports: cli.list_all_ports,
        non_interactive: cli.non_interactive,
        confirm_port: cli.confirm_port,
    };

    let selected = select_serial_port(&options, config)?;

    // Ask to remember if not a known device and interactive mode
    if !selected.is_known && !cli.non_interactive {
        ask_remember_port(&selected.port, config)?;
    }

    Ok(selected.port.name)
}

/// Make a byte-granular progress bar, hidden in quiet mode.
fn make_progress(cli: &Cli, total: u64) -> ProgressBar {
    if cli.quiet || !console::Term::stderr().is_term() {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(total);
        #[allow(clippy::unwrap_used)] // Static template string
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb.set_draw_target(indicatif::ProgressDrawTarget::stderr());
        pb
    }
}

fn announce_power_cycle(cli: &Cli, port: &str) {
    if !cli.quiet {
        eprintln!(
            "{} Using port {}",
            style("🔌").cyan(),
            style(port).green()
        );
        eprintln!(
            "{} Power-cycling the device (this takes a few seconds)...",
            style("⏳").yellow()
        );
    }
}

/// Read command implementation.
fn cmd_read(
    cli: &Cli,
    config: &mut Config,
    file: &PathBuf,
    address: Option<u32>,
    length: Option<u32>,
) -> Result<()> {
    // Either both or neither; a lone --address or --length is ambiguous.
    let (addr, len) = match (address, length) {
        (Some(a), Some(l)) => (a, l),
        (None, None) => (0, FLASH_SIZE),
        _ => {
            return Err(CliError::Usage(
                "--address and --length must be given together".to_string(),
            )
            .into());
        }
    };

    if len == 0 {
        return Err(CliError::Usage("--length must be non-zero".to_string()).into());
    }
    check_cli_region(addr, len)?;

    let port = get_port(cli, config)?;
    announce_power_cycle(cli, &port);

    let mut dest = io::BufWriter::new(
        fs::File::create(file)
            .with_context(|| format!("Failed to create output file {}", file.display()))?,
    );

    let flasher = ChipFamily::Hc32l110.create_flasher(&port)?;
    let pb = make_progress(cli, u64::from(len));
    pb.set_message("reading");

    Session::new(flasher).run(
        Operation::Read {
            addr,
            len,
            dest: &mut dest,
        },
        &mut |done, _total| pb.set_position(done as u64),
    )?;

    pb.finish_with_message("done");

    if !cli.quiet {
        eprintln!(
            "\n{} Read {} bytes from {:#06x} into {}",
            style("✓").green().bold(),
            len,
            addr,
            file.display()
        );
    }

    Ok(())
}

/// Write command implementation.
fn cmd_write(cli: &Cli, config: &mut Config, file: &PathBuf, address: u32) -> Result<()> {
    let data = fs::read(file)
        .with_context(|| format!("Failed to read binary file {}", file.display()))?;

    if data.is_empty() {
        return Err(CliError::Usage(format!("{} is empty", file.display())).into());
    }
    let len = u32::try_from(data.len())
        .map_err(|_| CliError::Usage(format!("{} is too large for flash", file.display())))?;
    check_cli_region(address, len)?;

    if !cli.quiet {
        eprintln!(
            "{} Loaded {} ({} bytes) for {:#06x}",
            style("📦").cyan(),
            file.display(),
            data.len(),
            address
        );
    }

    let port = get_port(cli, config)?;
    announce_power_cycle(cli, &port);

    let flasher = ChipFamily::Hc32l110.create_flasher(&port)?;
    let pb = make_progress(cli, data.len() as u64);
    pb.set_message("writing");

    Session::new(flasher).run(
        Operation::Write {
            addr: address,
            data: &data,
        },
        &mut |done, _total| pb.set_position(done as u64),
    )?;

    pb.finish_with_message("done");

    if !cli.quiet {
        eprintln!("\n{} Write complete", style("🎉").green().bold());
    }

    Ok(())
}

/// Erase command implementation.
fn cmd_erase(cli: &Cli, config: &mut Config, address: Option<u32>) -> Result<()> {
    // Address zero and no address both mean the whole chip; sector zero
    // can't be erased on its own through this interface.
    let target = match address {
        None | Some(0) => EraseTarget::Chip,
        Some(addr) => {
            check_cli_region(addr, 1)?;
            EraseTarget::Sector(addr)
        }
    };

    let port = get_port(cli, config)?;
    announce_power_cycle(cli, &port);

    if !cli.quiet {
        match target {
            EraseTarget::Chip => eprintln!("{} Erasing entire flash", style("🗑").red()),
            EraseTarget::Sector(addr) => {
                eprintln!("{} Erasing sector at {addr:#06x}", style("🗑").red());
            }
        }
    }

    let flasher = ChipFamily::Hc32l110.create_flasher(&port)?;
    Session::new(flasher).run(Operation::Erase { target }, &mut |_, _| {})?;

    if !cli.quiet {
        eprintln!("\n{} Erase complete", style("✓").green().bold());
    }

    Ok(())
}

/// Connect command implementation.
fn cmd_connect(cli: &Cli, config: &mut Config) -> Result<()> {
    let port = get_port(cli, config)?;
    announce_power_cycle(cli, &port);

    let flasher = ChipFamily::Hc32l110.create_flasher(&port)?;
    Session::new(flasher).run(Operation::Bypass, &mut |_, _| {})?;

    if !cli.quiet {
        eprintln!(
            "\n{} ROM bootloader is awake on {}; the RAM loader was not installed.",
            style("✓").green().bold(),
            style(&port).green()
        );
        eprintln!("A vendor tool can now talk to the ROM directly on this port.");
    }

    Ok(())
}

/// List ports command implementation.
fn cmd_list_ports() {
    let ports = discover_ports();

    eprintln!("{}", style("Available serial ports:").bold().underlined());

    if ports.is_empty() {
        eprintln!("  {}", style("No serial ports found").dim());
        return;
    }

    for port in &ports {
        let device_type = match (port.vid, port.pid) {
            (Some(vid), Some(pid)) => match bridge_name(vid, pid) {
                Some(bridge) => format!(" [{}]", style(bridge).yellow()),
                None => format!(" ({vid:04X}:{pid:04X})"),
            },
            _ => String::new(),
        };

        let product = port
            .product
            .as_deref()
            .map(|p| format!(" - {}", style(p).dim()))
            .unwrap_or_default();

        eprintln!(
            "  {} {}{}{}",
            style("•").green(),
            style(&port.name).cyan(),
            device_type,
            product
        );
    }
}

/// Generate shell completions.
fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

/// Validate a flash region before touching the device.
fn check_cli_region(addr: u32, len: u32) -> Result<()> {
    let end = u64::from(addr) + u64::from(len);
    if addr >= FLASH_SIZE || end > u64::from(FLASH_SIZE) {
        return Err(CliError::Usage(format!(
            "Region {addr:#06x}+{len:#x} exceeds the {FLASH_SIZE:#06x}-byte flash"
        ))
        .into());
    }
    Ok(())
}
