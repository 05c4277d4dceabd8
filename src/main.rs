//! claude-safety-hooks - PreToolUse safety policy for Claude Code
//!
//! Reads one hook record from stdin, writes one JSON decision to stdout.
//!
//! # Usage
//!
//! ```bash
//! # As a Claude Code hook
//! echo '{"tool_name":"Bash","tool_input":{"command":"rm -rf ~/"}}' | claude-safety-hooks
//!
//! # With safety level override
//! claude-safety-hooks --safety-level strict
//!
//! # Show the rules active at a level
//! claude-safety-hooks --list-rules -l critical
//! ```

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use claude_safety_hooks::{
    audit::AuditLogger,
    config::{Config, SafetyLevel},
    engine::SafetyEngine,
    input::HookInput,
    output::{marker, HookOutput},
};

/// Environment variable holding the diagnostic log filter
const LOG_FILTER_ENV: &str = "CLAUDE_SAFETY_LOG";

/// PreToolUse safety hook: blocks dangerous commands and secret file access
#[derive(Parser, Debug)]
#[command(name = "claude-safety-hooks", version, about)]
struct Cli {
    /// Safety level: critical, high, strict (unrecognized values mean high)
    #[arg(short = 'l', long, env = "CLAUDE_SAFETY_LEVEL")]
    safety_level: Option<String>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Do not write the audit log
    #[arg(long)]
    no_audit: bool,

    /// Print the rules active at the resolved level and exit
    #[arg(long)]
    list_rules: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr).with_target(false))
        .try_init();
}

fn load_config(path: Option<&Path>) -> Config {
    match path {
        Some(path) => Config::load_from(path).unwrap_or_else(|e| {
            warn!("{e}; using defaults");
            Config::default()
        }),
        None => Config::load(),
    }
}

fn print_rules(engine: &SafetyEngine) {
    let catalogs = engine.catalogs();
    println!("safety level: {}", engine.safety_level());
    for catalog in [&catalogs.command, &catalogs.file] {
        println!();
        println!("[{}]", catalog.domain());
        for rule in catalog.active_rules(engine.safety_level()) {
            println!("{} {:<8} {:<28} {}", marker(rule.level), rule.level.as_str(), rule.id, rule.reason);
        }
    }
}

fn write_output(output: &HookOutput) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = writeln!(handle, "{}", output.to_json());
    let _ = handle.flush();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let config = load_config(cli.config.as_deref());
    let safety_level: SafetyLevel = config.resolve_safety_level(cli.safety_level.as_deref());

    // A broken catalog must not turn into "allow everything"
    let engine = match SafetyEngine::from_config(&config, safety_level) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("claude-safety-hooks: rule catalog is invalid: {e}");
            return ExitCode::from(2);
        }
    };

    if cli.list_rules {
        print_rules(&engine);
        return ExitCode::SUCCESS;
    }

    let logger = if cli.no_audit {
        AuditLogger::disabled()
    } else {
        AuditLogger::new(config.audit_dir().as_deref())
    };

    let mut input_json = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input_json) {
        debug!("failed to read stdin: {e}");
    }

    if input_json.trim().is_empty() {
        write_output(&HookOutput::allow());
        return ExitCode::SUCCESS;
    }

    // Malformed input gets no opinion; the host applies its own default
    let input = match HookInput::from_json(&input_json) {
        Ok(input) => input,
        Err(e) => {
            warn!("ignoring malformed hook input: {e}");
            write_output(&HookOutput::allow());
            return ExitCode::SUCCESS;
        }
    };

    let decision = engine.evaluate(&input);
    logger.record(&input, &decision, safety_level);

    write_output(&HookOutput::from_decision(&decision));
    ExitCode::SUCCESS
}
