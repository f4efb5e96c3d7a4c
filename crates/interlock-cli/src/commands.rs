use anyhow::Context;
use colored::Colorize;
use interlock_crypto::{compute_capability_id, Operation, Signature, PROBE, STORE_INTERFACE};
use interlock_sdk::{Interlock, InterlockConfig, NonStore, SdkError};
use serde::Serialize;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Selectors => cmd_selectors(&cli.format),
        Command::Selector(args) => cmd_selector(args, &cli.format),
        Command::Demo(args) => cmd_demo(args, &cli.format),
    }
}

#[derive(Debug, Serialize)]
struct SelectorRow {
    signature: String,
    selector: String,
}

#[derive(Debug, Serialize)]
struct SelectorTable {
    name: String,
    rows: Vec<SelectorRow>,
    id: String,
}

impl SelectorRow {
    fn from_operation(op: &Operation) -> Self {
        Self {
            signature: op.signature().canonical(),
            selector: op.selector().to_hex(),
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_rows(rows: &[SelectorRow]) {
    for row in rows {
        println!("  {}  {}", row.selector.yellow(), row.signature);
    }
}

fn cmd_selectors(format: &OutputFormat) -> anyhow::Result<()> {
    let iface = &*STORE_INTERFACE;
    let table = SelectorTable {
        name: iface.name().to_string(),
        rows: iface.operations().iter().map(SelectorRow::from_operation).collect(),
        id: iface.id().to_string(),
    };
    let probe = SelectorRow::from_operation(&PROBE);
    let errors: Vec<SelectorRow> = iface
        .errors()
        .map(|sig| SelectorRow {
            signature: sig.canonical(),
            selector: sig.selector().to_hex(),
        })
        .collect();

    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "interface": table,
            "probe": probe,
            "errors": errors,
        })),
        OutputFormat::Text => {
            println!("Interface {}", table.name.bold());
            print_rows(&table.rows);
            println!("Capability id: {}", table.id.cyan().bold());
            println!("Probe:");
            print_rows(std::slice::from_ref(&probe));
            println!("Errors:");
            print_rows(&errors);
            Ok(())
        }
    }
}

fn selector_table(signatures: &[String]) -> anyhow::Result<SelectorTable> {
    let parsed = signatures
        .iter()
        .map(|text| Signature::parse(text).with_context(|| format!("invalid signature {text:?}")))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let id = compute_capability_id(parsed.iter().map(Signature::selector));
    Ok(SelectorTable {
        name: "custom".to_string(),
        rows: parsed
            .iter()
            .map(|sig| SelectorRow {
                signature: sig.canonical(),
                selector: sig.selector().to_hex(),
            })
            .collect(),
        id: id.to_string(),
    })
}

fn cmd_selector(args: SelectorArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let table = selector_table(&args.signatures)?;
    match format {
        OutputFormat::Json => print_json(&table),
        OutputFormat::Text => {
            print_rows(&table.rows);
            println!("Combined id: {}", table.id.cyan().bold());
            Ok(())
        }
    }
}

#[derive(Debug, Serialize)]
struct DemoStep {
    action: String,
    ok: bool,
    outcome: String,
}

impl DemoStep {
    fn record<T>(action: impl Into<String>, result: Result<T, SdkError>) -> Self
    where
        T: std::fmt::Display,
    {
        match result {
            Ok(value) => Self {
                action: action.into(),
                ok: true,
                outcome: value.to_string(),
            },
            Err(err) => Self {
                action: action.into(),
                ok: false,
                outcome: err.to_string(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct DemoReport {
    strategy: String,
    store: String,
    non_store: String,
    steps: Vec<DemoStep>,
    /// The reader kept its original binding and value after the rejection.
    binding_preserved: bool,
}

fn load_config(args: &DemoArgs) -> anyhow::Result<InterlockConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            InterlockConfig::from_toml_str(&text)?
        }
        None => InterlockConfig::default(),
    };
    if let Some(strategy) = args.strategy {
        config.validator.strategy = strategy;
    }
    Ok(config)
}

fn run_demo(config: InterlockConfig, value: i64) -> DemoReport {
    let il = Interlock::new(config);
    let mut steps = Vec::new();

    let store = il.deploy_store();
    let mut reader = il.reader();
    steps.push(DemoStep::record(
        "read before any binding",
        reader.read_store_value(),
    ));

    let mut writer = il.writer();
    steps.push(DemoStep::record(
        format!("writer.setStore({})", store.address().short_hex()),
        writer.set_store(store.address()).map(|()| "bound"),
    ));
    steps.push(DemoStep::record(
        format!("writer.writeStoreValue({value})"),
        writer.write_store_value(value).map(|()| "written"),
    ));

    steps.push(DemoStep::record(
        format!("reader.setStore({})", store.address().short_hex()),
        reader.set_store(store.address()).map(|()| "bound"),
    ));
    steps.push(DemoStep::record("reader.readStoreValue()", reader.read_store_value()));

    let non_store = il.deploy(NonStore::new());
    steps.push(DemoStep::record(
        format!("reader.setStore({})", non_store.address().short_hex()),
        reader.set_store(non_store.address()).map(|()| "bound"),
    ));

    let after = reader.read_store_value();
    let binding_preserved = reader.store() == Some(store.address()) && after == Ok(value);
    steps.push(DemoStep::record("reader.readStoreValue()", after));

    DemoReport {
        strategy: il.validator().strategy().to_string(),
        store: store.address().to_hex(),
        non_store: non_store.address().to_hex(),
        steps,
        binding_preserved,
    }
}

fn cmd_demo(args: DemoArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let config = load_config(&args)?;
    tracing::info!(strategy = %config.validator.strategy, value = args.value, "running demo");
    let report = run_demo(config, args.value);

    match format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Text => {
            println!("Strategy: {}", report.strategy.cyan());
            println!("Store:     {}", report.store.dimmed());
            println!("Non-store: {}", report.non_store.dimmed());
            for step in &report.steps {
                let mark = if step.ok { "✓".green().bold() } else { "✗".red().bold() };
                println!("{} {} -> {}", mark, step.action, step.outcome);
            }
            if report.binding_preserved {
                println!(
                    "{} Reader kept its store after the rejected rebind.",
                    "✓".green().bold()
                );
            } else {
                println!("{} Reader binding changed unexpectedly.", "✗".red().bold());
            }
        }
    }

    if !report.binding_preserved {
        anyhow::bail!("reader binding was not preserved");
    }
    Ok(())
}
