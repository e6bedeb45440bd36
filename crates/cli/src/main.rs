use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rplus_agents::SupportAgent;
use rplus_ai::Generator;
use rplus_catalog::CategoryCatalog;
use rplus_core::{detect_language, messages, Language, MessageInput};
use rplus_observability::{init_tracing, AppMetrics};
use rplus_storage::MemoryStore;
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "rplus")]
#[command(about = "RealtyPlus Franchise Concierge CLI")]
struct Cli {
    /// Path to the canned-response catalog document.
    #[arg(long, default_value = "data/responses.json")]
    responses: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive chat session against the local agent.
    Chat,
    /// Classify and answer a single question, then exit.
    Ask { text: String },
    /// Show which language a question reads as.
    Detect { text: String },
    /// List the loaded catalog.
    Catalog,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("rplus_cli");
    let cli = Cli::parse();

    match cli.command {
        Command::Chat => {
            let agent = build_agent(&cli.responses);
            run_chat(agent).await?;
        }
        Command::Ask { text } => {
            let agent = build_agent(&cli.responses);
            let reply = agent
                .handle_message(MessageInput {
                    user_id: format!("cli-{}", Uuid::new_v4()),
                    text,
                })
                .await;
            for message in reply.messages {
                println!("{message}\n");
            }
        }
        Command::Detect { text } => {
            println!("{}", detect_language(&text).as_code());
        }
        Command::Catalog => {
            let catalog = CategoryCatalog::from_path(&cli.responses);
            let entries = catalog
                .categories()
                .iter()
                .map(|category| {
                    serde_json::json!({
                        "category": category,
                        "display_name_en": category.display_name(Language::English),
                        "display_name_es": category.display_name(Language::Spanish),
                        "response": catalog.response(*category),
                    })
                })
                .collect::<Vec<_>>();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }

    Ok(())
}

async fn run_chat(agent: SupportAgent<Generator, MemoryStore>) -> Result<()> {
    // One session per chat run; sessions do not survive the process anyway.
    let user_id = format!("cli-{}", Uuid::new_v4());

    println!("{}\n", messages::welcome());
    println!("(type 'exit' to quit)\n");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        let text = line.trim();
        if text.eq_ignore_ascii_case("exit") || text.eq_ignore_ascii_case("quit") {
            break;
        }
        if text.is_empty() {
            continue;
        }

        let reply = agent
            .handle_message(MessageInput {
                user_id: user_id.clone(),
                text: text.to_string(),
            })
            .await;

        for message in reply.messages {
            println!("\n{message}");
        }
        println!();
    }

    Ok(())
}

fn build_agent(responses: &PathBuf) -> SupportAgent<Generator, MemoryStore> {
    let metrics = AppMetrics::shared();
    let catalog = Arc::new(CategoryCatalog::from_path(responses));
    if catalog.is_empty() {
        eprintln!(
            "warning: no catalog loaded from {}, every question will take the default path",
            responses.display()
        );
    } else {
        eprintln!(
            "catalog loaded: {} categories: {:?}",
            catalog.len(),
            catalog
                .categories()
                .iter()
                .map(|category| category.label())
                .collect::<Vec<_>>()
        );
    }

    let generator = Arc::new(Generator::from_env());
    SupportAgent::new(catalog, generator, Arc::new(MemoryStore::new()), metrics)
}
