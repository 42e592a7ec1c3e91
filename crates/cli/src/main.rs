//! Command-line front-end for mailing-list management.
//!
//! Run with: `mailvan <task> [args]`
//!
//! This is a CLI tool for operators, so `println!` and `eprintln!` are
//! used for user-facing output; diagnostics go through `tracing`.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::env;
use std::process::ExitCode;

use anyhow::{anyhow, bail, Context};
use mailvan_core::MailingListClient;
use mailvan_domain::{SubscriptionList, User};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging first so .env loading is visible
    init_tracing();

    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) => tracing::debug!(error = %e, "no .env file loaded"),
    }

    let args: Vec<String> = env::args().skip(1).collect();
    let task = args.first().map(String::as_str);

    let result = match task {
        Some("help") | None => {
            print_help();
            Ok(())
        }
        Some(task @ ("lists" | "subscribe" | "unsubscribe" | "move")) => {
            run(task, &args[1..]).await
        }
        Some(unknown) => {
            eprintln!("Unknown task: {unknown}");
            eprintln!();
            print_help();
            Err(anyhow!("Unknown task"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Task failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn print_help() {
    println!("Mailvan mailing-list tasks");
    println!();
    println!("USAGE:");
    println!("    mailvan <TASK> [ARGS]");
    println!();
    println!("TASKS:");
    println!("    lists                                    List the account's mailing lists");
    println!("    subscribe <list-id> <email> [first] [last]  Add a subscriber to a list");
    println!("    unsubscribe <list-id> <email>            Remove a subscriber from a list");
    println!("    move <from-id> <to-id> <email>           Move a subscriber between lists");
    println!("    help                                     Show this help message");
    println!();
    println!("CONFIGURATION:");
    println!("    MAILVAN_SMARTRESPONDER_BASE_URL and MAILVAN_SMARTRESPONDER_API_KEY,");
    println!("    or a mailvan.json / mailvan.toml file with a [smartresponder] section.");
}

async fn run(task: &str, args: &[String]) -> anyhow::Result<()> {
    let config = mailvan_infra::config::load().context("failed to load configuration")?;
    let client = mailvan_infra::connect(&config.smartresponder)
        .context("failed to create SmartResponder client")?;

    match task {
        "lists" => run_lists(&client).await,
        "subscribe" => run_subscribe(&client, args).await,
        "unsubscribe" => run_unsubscribe(&client, args).await,
        "move" => run_move(&client, args).await,
        other => bail!("Unknown task: {other}"),
    }
}

/// Print every list id, one per line
async fn run_lists(client: &dyn MailingListClient) -> anyhow::Result<()> {
    let lists = client.get_lists().await?;
    if lists.is_empty() {
        println!("No lists.");
    }
    for list in lists {
        println!("{list}");
    }
    Ok(())
}

async fn run_subscribe(client: &dyn MailingListClient, args: &[String]) -> anyhow::Result<()> {
    let [list_id, email, rest @ ..] = args else {
        bail!("usage: mailvan subscribe <list-id> <email> [first] [last]");
    };
    let first = rest.first().map_or("", String::as_str);
    let last = rest.get(1).map_or("", String::as_str);

    let user = User::new(email.as_str(), first, last)?;
    let list = SubscriptionList::new(list_id.as_str());

    client.subscribe(&user, &list).await?;
    println!("Subscribed {} to {list}", user.email());
    Ok(())
}

async fn run_unsubscribe(client: &dyn MailingListClient, args: &[String]) -> anyhow::Result<()> {
    let [list_id, email] = args else {
        bail!("usage: mailvan unsubscribe <list-id> <email>");
    };

    let user = User::new(email.as_str(), "", "")?;
    let list = SubscriptionList::new(list_id.as_str());

    client.unsubscribe(&user, &list).await?;
    println!("Unsubscribed {} from {list}", user.email());
    Ok(())
}

async fn run_move(client: &dyn MailingListClient, args: &[String]) -> anyhow::Result<()> {
    let [from_id, to_id, email] = args else {
        bail!("usage: mailvan move <from-id> <to-id> <email>");
    };

    let user = User::new(email.as_str(), "", "")?;
    let from = SubscriptionList::new(from_id.as_str());
    let to = SubscriptionList::new(to_id.as_str());

    client.move_subscriber(&user, &from, &to).await?;
    println!("Moved {} from {from} to {to}", user.email());
    Ok(())
}
