use crate::config::DEFAULT_CONFIG_FILE;
use crate::core::booking::BookingForm;
use crate::domain::model::ProviderKind;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "sasa-desk")]
#[command(about = "Study and Settle Abroad: destinations, services, assistant and bookings")]
pub struct CliConfig {
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: String,

    #[arg(long, global = true, help = "Keep bookings in memory instead of the hosted store")]
    pub offline: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Study destinations with yearly cost breakdown
    Countries {
        /// Show requirements, universities and intakes for one country
        name: Option<String>,
    },
    /// Service packages and prices
    Pricing,
    /// Featured articles and categories
    Blog,
    /// Frequently asked questions
    Faq,
    /// Founders, values and impact
    About,
    /// Ask the assistant a single question
    Ask {
        #[arg(short, long)]
        provider: Option<ProviderKind>,
        message: String,
    },
    /// Interactive assistant session (/reset, /provider <name>, /quit)
    Chat {
        #[arg(short, long)]
        provider: Option<ProviderKind>,
    },
    /// Book a consultation
    Book(BookArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct BookArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long)]
    pub country: Option<String>,
    #[arg(long)]
    pub education: Option<String>,
    /// Pricing tier id, e.g. eu-complete
    #[arg(long)]
    pub tier: Option<String>,
    #[arg(long)]
    pub comments: Option<String>,
}

impl BookArgs {
    /// Fills a form, starting from the tier's preselected service when given.
    pub fn into_form(self, base: BookingForm) -> BookingForm {
        BookingForm {
            full_name: self.name,
            email: self.email,
            phone_number: self.phone,
            country_of_choice: self.country.unwrap_or(base.country_of_choice),
            level_of_education: self.education.unwrap_or_default(),
            additional_comments: self.comments.unwrap_or_default(),
            ..base
        }
    }
}

/// One line typed into the interactive chat.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatInput<'a> {
    Quit,
    Reset,
    /// `/provider <name>`; the name is parsed by the caller.
    Provider(Option<&'a str>),
    /// A `/word` that is not a known command.
    Unknown(&'a str),
    Message(&'a str),
}

impl<'a> ChatInput<'a> {
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        if !line.starts_with('/') {
            return ChatInput::Message(line);
        }

        let mut tokens = line.split_whitespace();
        match tokens.next().unwrap_or_default() {
            "/quit" => ChatInput::Quit,
            "/reset" => ChatInput::Reset,
            "/provider" => ChatInput::Provider(tokens.next()),
            other => ChatInput::Unknown(other),
        }
    }
}
