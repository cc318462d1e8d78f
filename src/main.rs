use clap::Parser;
use sasa_desk::app::render;
use sasa_desk::config::cli::{BookArgs, ChatInput, Command};
use sasa_desk::core::booking::{confirmation, FAILURE_NOTICE};
use sasa_desk::domain::catalog;
use sasa_desk::domain::model::ProviderKind;
use sasa_desk::domain::ports::{ConfigProvider, ConsultationStore};
use sasa_desk::utils::error::{AppError, ErrorSeverity};
use sasa_desk::utils::{logger, validation::Validate};
use sasa_desk::{
    Assistant, BookingForm, BookingService, CliConfig, InMemoryStore, LoadedConfig, SupabaseStore,
};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let config = match LoadedConfig::load(&cli.config) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        exit_with(&e);
    }

    match cli.command.clone() {
        Command::Countries { name } => show_countries(name.as_deref()),
        Command::Pricing => {
            for tier in catalog::PRICING_TIERS {
                println!("{}", render::pricing_tier(tier));
            }
        }
        Command::Blog => print!(
            "{}",
            render::blog(catalog::FEATURED_ARTICLES, catalog::BLOG_CATEGORIES)
        ),
        Command::Faq => print!("{}", render::faq(catalog::FAQ)),
        Command::About => print!(
            "{}",
            render::about(
                catalog::ABOUT,
                catalog::VALUES,
                catalog::FOUNDERS,
                catalog::IMPACT_STATS
            )
        ),
        Command::Ask { provider, message } => {
            let assistant = Assistant::from_config(&config);
            let kind = provider.unwrap_or_else(|| assistant.selected());
            println!("{}", assistant.reply(kind, &message).await);
        }
        Command::Chat { provider } => {
            let mut assistant = Assistant::from_config(&config);
            if let Some(kind) = provider {
                assistant.select(kind);
            }
            run_chat(&mut assistant).await?;
        }
        Command::Book(args) => {
            let result = if cli.offline {
                book(BookingService::new(InMemoryStore::new()), args).await
            } else {
                match config.store() {
                    Some(settings) => {
                        book(BookingService::new(SupabaseStore::new(&settings)), args).await
                    }
                    None => Err(AppError::MissingConfigError {
                        field: "store (SUPABASE_URL / SUPABASE_ANON_KEY)".to_string(),
                    }),
                }
            };
            if let Err(e) = result {
                exit_with(&e);
            }
        }
    }

    Ok(())
}

fn show_countries(name: Option<&str>) {
    match name {
        Some(name) => match catalog::find_country(name) {
            Some(country) => print!(
                "{}",
                render::country_detail(country, catalog::country_profile(name))
            ),
            None => {
                let names: Vec<&str> = catalog::COUNTRIES.iter().map(|c| c.name).collect();
                eprintln!("Unknown country '{}'. Choose one of: {}", name, names.join(", "));
                std::process::exit(1);
            }
        },
        None => {
            println!("Study destinations in Europe");
            for country in catalog::COUNTRIES {
                println!("  {}", render::country_row(country));
            }
        }
    }
}

async fn book<S: ConsultationStore>(service: BookingService<S>, args: BookArgs) -> sasa_desk::Result<()> {
    let base = match args.tier.as_deref() {
        Some(id) => match catalog::find_tier(id) {
            Some(tier) => BookingForm::for_tier(tier),
            None => {
                return Err(AppError::InvalidConfigValueError {
                    field: "tier".to_string(),
                    value: id.to_string(),
                    reason: "unknown pricing tier".to_string(),
                })
            }
        },
        None => BookingForm::new(),
    };
    let form = args.into_form(base);

    match service.submit(&form).await {
        Ok(stored) => {
            println!("Consultation booked!");
            println!("{}", confirmation(&stored));
            println!("Reference: {}", stored.id);
            Ok(())
        }
        Err(e @ AppError::MissingFields { .. }) => Err(e),
        Err(e) => {
            eprintln!("{}", FAILURE_NOTICE);
            Err(e)
        }
    }
}

async fn run_chat(assistant: &mut Assistant) -> anyhow::Result<()> {
    println!("{}", assistant.transcript().messages()[0].text);
    println!("(provider: {}; commands: /reset, /provider <mock|deepseek|openai>, /quit)", assistant.selected().label());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        match ChatInput::parse(&line) {
            ChatInput::Quit => break,
            ChatInput::Reset => {
                assistant.reset();
                println!("{}", assistant.transcript().messages()[0].text);
            }
            ChatInput::Provider(None) => {
                println!("Current provider: {}", assistant.selected().label());
            }
            ChatInput::Provider(Some(name)) => match name.parse::<ProviderKind>() {
                Ok(kind) => {
                    assistant.select(kind);
                    if !assistant.is_available(kind) {
                        println!("{} has no API key configured; replies will fail.", kind.label());
                    }
                }
                Err(e) => println!("{}", e.user_friendly_message()),
            },
            ChatInput::Unknown(command) => {
                println!("Unknown command {}. Try /reset, /provider or /quit.", command);
            }
            ChatInput::Message(text) => {
                if let Some(reply) = assistant.send(text).await {
                    println!("{}", reply);
                }
            }
        }
    }

    tracing::debug!("Chat ended after {} messages", assistant.transcript().len());
    Ok(())
}

fn exit_with(e: &AppError) -> ! {
    tracing::error!(
        "{} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("{}", e.user_friendly_message());
    eprintln!("Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
