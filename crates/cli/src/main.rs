mod input;
mod render;

use anyhow::Context;
use cursed_autoplay::{run_autoplay, AutoplayConfig};
use cursed_core::Engine;
use cursed_data::{load_rules_config, load_rules_or_default};
use input::{parse_command, Command};
use render::{render_event, render_snapshot};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
struct CliOptions {
    auto: bool,
    json: bool,
    seed: Option<u32>,
    rules: Option<PathBuf>,
    max_steps: Option<u32>,
}

fn parse_cli_options(args: &[String]) -> anyhow::Result<CliOptions> {
    let mut options = CliOptions {
        auto: false,
        json: false,
        seed: None,
        rules: None,
        max_steps: None,
    };
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--auto" => options.auto = true,
            "--json" => options.json = true,
            "--seed" => {
                let value = args.get(idx + 1).context("--seed needs a value")?;
                options.seed = Some(value.parse().with_context(|| format!("bad seed {value}"))?);
                idx += 1;
            }
            "--rules" => {
                let value = args.get(idx + 1).context("--rules needs a path")?;
                options.rules = Some(PathBuf::from(value));
                idx += 1;
            }
            "--max-steps" => {
                let value = args.get(idx + 1).context("--max-steps needs a value")?;
                options.max_steps =
                    Some(value.parse().with_context(|| format!("bad step count {value}"))?);
                idx += 1;
            }
            other => anyhow::bail!("unknown option {other}"),
        }
        idx += 1;
    }
    Ok(options)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args)?;
    let rules = match options.rules.as_deref() {
        Some(path) => load_rules_config(path)?,
        None => load_rules_or_default(Path::new("assets"))?,
    };
    let mut engine = Engine::new(rules)?;

    if options.auto {
        let mut config = AutoplayConfig {
            seed: options.seed,
            ..AutoplayConfig::default()
        };
        if let Some(max_steps) = options.max_steps {
            config.max_steps = max_steps;
        }
        info!(seed = ?config.seed, max_steps = config.max_steps, "autoplay");
        let result = run_autoplay(&mut engine, &config)?;
        if options.json {
            println!("{}", result.to_json()?);
        } else {
            println!("{}", result.to_text_report());
        }
        return Ok(());
    }

    run_interactive(&mut engine, options.seed, options.json)
}

fn run_interactive(engine: &mut Engine, seed: Option<u32>, json: bool) -> anyhow::Result<()> {
    let snapshot = engine.start_run(seed);
    info!(seed = snapshot.seed, "interactive run");
    let mut out = io::stdout();
    print_help();
    show(&mut out, &snapshot, json)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let command = match parse_command(&line?) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(out, "{message}")?;
                continue;
            }
        };
        match command {
            Command::Play(index) => {
                if let Err(err) = engine.play_card(index) {
                    writeln!(out, "rejected: {err}")?;
                }
            }
            Command::Skip => {
                if let Err(err) = engine.try_skip_room() {
                    writeln!(out, "rejected: {err}")?;
                }
            }
            Command::Restart => {
                engine.restart_with_same_seed();
            }
            Command::New(seed) => {
                engine.start_run(seed);
            }
            Command::State => {}
            Command::Json => {
                if let Some(snapshot) = engine.snapshot() {
                    writeln!(out, "{}", serde_json::to_string_pretty(&snapshot)?)?;
                }
                continue;
            }
            Command::Events => {
                for event in engine.drain_events() {
                    writeln!(out, "  {}", render_event(&event))?;
                }
                continue;
            }
            Command::Help => {
                print_help();
                continue;
            }
            Command::Quit => break,
        }
        if let Some(snapshot) = engine.snapshot() {
            show(&mut out, &snapshot, json)?;
        }
    }
    Ok(())
}

fn show(out: &mut impl Write, snapshot: &cursed_core::RunSnapshot, json: bool) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(snapshot)?)?;
    } else {
        writeln!(out, "{}", render_snapshot(snapshot))?;
    }
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  play|p <i>      play the card at room index i");
    println!("  skip|s          send the full room back to the deck");
    println!("  restart|r       restart with the same seed");
    println!("  new|n [seed]    start a new run");
    println!("  state|st        show the run");
    println!("  json            print the snapshot as JSON");
    println!("  events|e        show what happened since last asked");
    println!("  help|h|?        show this help");
    println!("  quit|q          exit");
}
