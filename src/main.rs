use clap::Parser;
use recipe_generator::app::render;
use recipe_generator::core::{ConfigProvider, GenerationClient};
use recipe_generator::utils::logger::{self, LogFormat};
use recipe_generator::{CliConfig, GeminiClient, InteractionShell, RecipeService, ViewState};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let format = if config.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(config.verbose, format);

    tracing::info!("Starting recipe-generator");

    // 驗證配置：缺少 API key 屬於部署錯誤，直接結束
    let settings = match config.load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };
    tracing::debug!("Settings: {:?}", settings);

    let client = GeminiClient::from_config(&settings)?;
    tracing::info!("Using model {}", client.model_name());
    let service = RecipeService::with_temperature(client, settings.temperature());
    let mut shell = InteractionShell::new(service);

    match config.ingredients.clone() {
        Some(ingredients) => {
            if let Some(notice) = render::loading_notice(&ingredients) {
                eprintln!("{}", notice);
            }
            shell.set_input(ingredients);
            let view = shell.submit().await.clone();
            print_view(&view, config.json)?;
            if !matches!(view, ViewState::Ready(_)) {
                std::process::exit(2);
            }
        }
        None => run_interactive(&mut shell, config.json).await?,
    }

    Ok(())
}

async fn run_interactive<G: GenerationClient>(
    shell: &mut InteractionShell<G>,
    json: bool,
) -> anyhow::Result<()> {
    println!("{}\n", render::render_header());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        eprint!("> ");
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if matches!(line.trim(), "quit" | "exit") {
            break;
        }

        if let Some(notice) = render::loading_notice(&line) {
            eprintln!("{}", notice);
        }
        shell.set_input(line);
        let view = shell.submit().await.clone();
        print_view(&view, json)?;
        println!();
    }

    println!("{}", render::current_footer());
    Ok(())
}

fn print_view(view: &ViewState, json: bool) -> anyhow::Result<()> {
    match view {
        ViewState::Ready(recipe) if json => {
            println!("{}", serde_json::to_string_pretty(recipe)?);
        }
        ViewState::Failed(_) => {
            if let Some(text) = render::render_view(view) {
                eprintln!("{}", text);
            }
        }
        other => {
            if let Some(text) = render::render_view(other) {
                println!("{}", text);
            }
        }
    }
    Ok(())
}
