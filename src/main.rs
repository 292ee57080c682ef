use clap::Parser;
use dialoguer::{Confirm, Select};
use indicatif::{ProgressBar, ProgressStyle};
use profpilot::{cli, client, commands, config, error, render, store};
use profpilot_common::{HandoffParams, HandoffStore, KeyValueStore};
use cli::{Cli, Commands};
use client::ApiClient;
use config::Config;
use error::Result;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;
    let base_url = config.api_base_url(cli.api_url.as_deref());
    let store = HandoffStore::new(store::FileStore::new(Config::store_path()?));

    match cli.command {
        Commands::Match { input, select, pick, links, json } => {
            let client = ApiClient::new(&base_url, config.timeout_seconds)?;

            let spinner = spinner("Finding Matches...");
            let result = commands::find_matches(&client, &input).await;
            spinner.finish_and_clear();
            let matches = result?;

            if json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else {
                print!("{}", render::render_matches(&matches, &input, links));
            }

            if let Some(number) = select {
                let handoff = commands::select_match(&store, &matches, number, &input)?;
                println!("\n✔ {} を選択しました", handoff.professor.name);
                println!("  `profpilot generate` でメールを生成できます");
            } else if pick && !matches.is_empty() {
                let labels: Vec<String> = matches
                    .iter()
                    .map(|p| match p.score_label() {
                        Some(score) => format!("{} ({})", p.name, score),
                        None => p.name.clone(),
                    })
                    .collect();

                let chosen = Select::new()
                    .with_prompt("教授を選択")
                    .items(&labels)
                    .default(0)
                    .interact_opt()?;

                if let Some(index) = chosen {
                    let handoff = commands::select_match(&store, &matches, index + 1, &input)?;
                    let proceed = Confirm::new()
                        .with_prompt(format!(
                            "{} を選択しました。メールを生成しますか？",
                            handoff.professor.name
                        ))
                        .default(true)
                        .interact()?;

                    if proceed {
                        generate_and_print(&client, &store, &HandoffParams::default(), None, None).await?;
                    }
                }
            }
        }

        Commands::Select { professor, input } => {
            let professor = commands::parse_professor_arg(&professor)?;
            let handoff = commands::save_selection(&store, professor, &input)?;
            println!("✔ {} を選択しました", handoff.professor.name);
        }

        Commands::Generate { professor, input, output } => {
            if let Some(raw) = &professor {
                commands::parse_professor_arg(raw)?;
            }
            let client = ApiClient::new(&base_url, config.timeout_seconds)?;
            let params = HandoffParams {
                professor,
                input: input.clone(),
            };
            generate_and_print(&client, &store, &params, input.as_deref(), output.as_deref()).await?;
        }

        Commands::Show { clear } => {
            let resolution = commands::resolve_handoff(&HandoffParams::default(), &store);
            print!("{}", render::render_resolution(&resolution));

            if clear {
                store.clear()?;
                println!("✔ 保存済みの選択を削除しました: {}", store.inner().path().display());
            }
        }

        Commands::Config { set_api_url, show } => {
            let mut config = config;

            if let Some(url) = set_api_url {
                config.set_api_base_url(url)?;
                println!("✔ APIのベースURLを設定しました");
            }

            if show {
                println!("設定:");
                println!("  ベースURL: {}", config.api_base_url(cli.api_url.as_deref()));
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  保存先: {}", Config::store_path()?.display());
            }
        }
    }

    Ok(())
}

async fn generate_and_print<S: KeyValueStore>(
    client: &ApiClient,
    store: &HandoffStore<S>,
    params: &HandoffParams,
    input_override: Option<&str>,
    output: Option<&std::path::Path>,
) -> Result<()> {
    let spinner = spinner("Generating...");
    let result = commands::generate_email(client, store, params, input_override).await;
    spinner.finish_and_clear();
    let (resolution, email) = result?;

    println!("✉ {} 宛のメール ({})\n", resolution.handoff.professor.name, resolution.source.as_str());
    match output {
        Some(path) => {
            std::fs::write(path, &email)?;
            println!("✔ メールを保存: {}", path.display());
        }
        None => println!("{}", email),
    }
    Ok(())
}

fn spinner(message: &'static str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        bar.set_style(style);
    }
    bar.set_message(message);
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("profpilot={level},profpilot_common={level}"))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
