use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glob::glob;
use serde::Serialize;

use strikedec_core::{Kit, TriggerSpec, parse_instrument, parse_kit};

#[derive(Parser, Debug)]
#[command(name = "strikedec")]
#[command(version)]
#[command(
    about = "Decoder for Strike drum-module kit (.skt) and instrument (.sin) files.",
    long_about = None,
    after_help = "Examples:\n  strikedec kit dump 909Kit.skt -o kit.json\n  strikedec kit csv 909Kit.skt\n  strikedec instrument dump SnareTight.sin --stdout\n  strikedec scan ./internalSD"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Operations on kit (.skt) files.
    Kit {
        #[command(subcommand)]
        command: KitCommands,
    },
    /// Operations on instrument (.sin) files.
    Instrument {
        #[command(subcommand)]
        command: InstrumentCommands,
    },
    /// Walk a directory and list decodable files.
    Scan {
        /// Root directory (e.g., the module's SD card).
        dir: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
enum KitCommands {
    /// Decode a kit file into a JSON document.
    Dump {
        /// Path to a .skt file
        input: PathBuf,

        /// Output path (JSON)
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        out: Option<PathBuf>,

        /// Write JSON to stdout
        #[arg(long, conflicts_with = "out")]
        stdout: bool,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
    /// Print one CSV row per voice (trigger, layer A/B sample names).
    Csv {
        /// Path to a .skt file
        input: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
enum InstrumentCommands {
    /// Decode an instrument file into a JSON document.
    Dump {
        /// Path to a .sin file
        input: PathBuf,

        /// Output path (JSON)
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        out: Option<PathBuf>,

        /// Write JSON to stdout
        #[arg(long, conflicts_with = "out")]
        stdout: bool,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Kit { command } => match command {
            KitCommands::Dump {
                input,
                out,
                stdout,
                pretty,
                compact,
                quiet,
            } => cmd_dump(input, "skt", out, stdout, pretty, compact, quiet, |data| {
                let kit = parse_kit(data).context("kit decode failed")?;
                Ok(serde_json::to_value(kit).context("JSON serialization failed")?)
            }),
            KitCommands::Csv { input } => cmd_kit_csv(input),
        },
        Commands::Instrument { command } => match command {
            InstrumentCommands::Dump {
                input,
                out,
                stdout,
                pretty,
                compact,
                quiet,
            } => cmd_dump(input, "sin", out, stdout, pretty, compact, quiet, |data| {
                let instrument = parse_instrument(data).context("instrument decode failed")?;
                Ok(serde_json::to_value(instrument).context("JSON serialization failed")?)
            }),
        },
        Commands::Scan { dir } => cmd_scan(dir),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_dump(
    input: PathBuf,
    extension: &str,
    out: Option<PathBuf>,
    stdout: bool,
    pretty: bool,
    compact: bool,
    quiet: bool,
    decode: impl Fn(&[u8]) -> Result<serde_json::Value>,
) -> Result<(), CliError> {
    let resolved_input = resolve_input_path(&input, extension)?;
    validate_input_file(&resolved_input, extension)?;

    let data = fs::read(&resolved_input)
        .with_context(|| format!("Failed to read input file: {}", resolved_input.display()))?;
    let value = decode(&data)?;
    let json = serialize_value(&value, pretty, compact)?;

    if stdout {
        print!("{}", json);
        return Ok(());
    }

    let out = out.ok_or_else(|| {
        CliError::new(
            "missing output path",
            Some("use -o/--out or --stdout".to_string()),
        )
    })?;
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(&out, json)
        .with_context(|| format!("Failed to write output: {}", out.display()))?;

    if !quiet {
        eprintln!("OK: decoded {} -> {}", resolved_input.display(), out.display());
    }
    Ok(())
}

fn cmd_kit_csv(input: PathBuf) -> Result<(), CliError> {
    let resolved_input = resolve_input_path(&input, "skt")?;
    validate_input_file(&resolved_input, "skt")?;

    let data = fs::read(&resolved_input)
        .with_context(|| format!("Failed to read input file: {}", resolved_input.display()))?;
    let kit: Kit = parse_kit(&data).context("kit decode failed")?;

    println!("trigger,layer_a,layer_b");
    for voice in &kit.voices {
        println!(
            "{},{},{}",
            format_trigger(&voice.trigger),
            voice.layer_a.sample_name,
            voice.layer_b.sample_name
        );
    }
    Ok(())
}

fn cmd_scan(dir: PathBuf) -> Result<(), CliError> {
    if !dir.is_dir() {
        return Err(CliError::new(
            format!("not a directory: {}", dir.display()),
            Some("pass the root of the module's SD card".to_string()),
        ));
    }

    let mut found = false;
    for (pattern, kind) in [("**/*.skt", "kit"), ("**/*.sin", "instrument")] {
        let full = dir.join(pattern);
        let paths = glob(&full.to_string_lossy()).map_err(|err| {
            CliError::new(
                format!("invalid scan pattern for '{}'", dir.display()),
                Some(format!("pattern error: {}", err.msg)),
            )
        })?;
        for entry in paths.flatten() {
            if entry.is_file() {
                println!("{},{}", entry.display(), kind);
                found = true;
            }
        }
    }

    if !found {
        eprintln!("no .skt or .sin files under {}", dir.display());
    }
    Ok(())
}

fn format_trigger(trigger: &TriggerSpec) -> String {
    let input_type = trigger
        .input_type
        .map(|t| format!("{:?}", t))
        .unwrap_or_else(|| "?".to_string());
    let input_pin = trigger
        .input_pin
        .map(pin_label)
        .unwrap_or("?");
    format!("{}{} {}", input_type, trigger.input_index, input_pin)
}

fn pin_label(pin: strikedec_core::InputPin) -> &'static str {
    use strikedec_core::InputPin;
    match pin {
        InputPin::Head => "Head",
        InputPin::Rim => "Rim",
        InputPin::FootSplash => "Foot Splash",
        InputPin::Bow => "Bow",
        InputPin::Edge => "Edge",
        InputPin::Bell => "Bell",
    }
}

fn serialize_value<T: Serialize>(
    value: &T,
    pretty: bool,
    compact: bool,
) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(value)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(value)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn validate_input_file(input: &PathBuf, extension: &str) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some(format!("use a .{} file", extension)),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some(format!("use a .{} file", extension)),
        ));
    }
    let ext = input
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if ext != extension {
        return Err(CliError::new(
            format!("unsupported input format '{}'", input.display()),
            Some(format!("expected a .{} file", extension)),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &PathBuf, extension: &str) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.clone());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some(format!(
                "check the path or quote the pattern; expected .{} files",
                extension
            )),
        ));
    }
    if matches.len() > 1 {
        return Err(CliError::new(
            format!(
                "multiple files match pattern '{}' ({} matches)",
                pattern,
                matches.len()
            ),
            Some("pass a single file, or run once per file".to_string()),
        ));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
