//! docgate CLI entry point.

use aws_sdk_dynamodb::operation::get_item::GetItemInput;
use aws_sdk_dynamodb::operation::scan::ScanInput;
use clap::Parser;
use docgate::{DocumentManager, DynamoStore};
use docgate_cli::cli::{Cli, Commands, GetArgs, ProbeArgs, ScanAllArgs};
use docgate_cli::conversions::{item_to_json, items_to_json, parse_key};
use docgate_cli::error::{CliError, Result};
use docgate_cli::output::format_output;
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type Manager = DocumentManager<DynamoStore>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays pipeable JSON.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.default_log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli.aws_config();
    tracing::debug!(endpoint = %config.target_display(), "connecting");
    let manager = DocumentManager::new(DynamoStore::from_config(&config).await);

    let output = match cli.command {
        Commands::Get(args) => get(&manager, args).await?,
        Commands::ScanAll(args) => scan_all(&manager, args).await?,
        Commands::Probe(args) => probe(&manager, args).await?,
    };

    println!("{}", format_output(&output, cli.format)?);
    Ok(())
}

async fn get(manager: &Manager, args: GetArgs) -> Result<Value> {
    let input = GetItemInput::builder()
        .table_name(args.table)
        .set_key(Some(parse_key(&args.keys)?))
        .consistent_read(args.consistent)
        .build()?;

    let output = manager.get(input).await?;
    Ok(output.item.as_ref().map(item_to_json).unwrap_or(Value::Null))
}

async fn scan_all(manager: &Manager, args: ScanAllArgs) -> Result<Value> {
    let input = ScanInput::builder()
        .table_name(&args.table)
        .set_index_name(args.index_name)
        .set_filter_expression(args.filter_expression)
        .set_projection_expression(args.projection_expression)
        .build()?;

    let items = manager.drain_scan(input).await?;
    tracing::info!(table = %args.table, items = items.len(), "scan complete");
    Ok(items_to_json(&items))
}

async fn probe(manager: &Manager, args: ProbeArgs) -> Result<Value> {
    let client = manager.store().client().clone();
    let table = args.table.clone();
    manager
        .declare_check(move || {
            let client = client.clone();
            let table = table.clone();
            async move {
                client
                    .describe_table()
                    .table_name(table)
                    .send()
                    .await
                    .is_ok()
            }
        })
        .declare_terminal_error(CliError::TableUnavailable {
            table: args.table.clone(),
        });

    let input = ScanInput::builder()
        .table_name(&args.table)
        .limit(1)
        .build()?;
    let output = manager.scan(input).await?;

    Ok(serde_json::json!({
        "table": args.table,
        "fresh": true,
        "sampled": output.count,
        "more": output.last_evaluated_key.is_some(),
    }))
}
