//! LuxeCut CLI
//!
//! Command-line front end over a file-backed store:
//! - Browse services, barbers and time slots
//! - Book appointments through the booking wizard
//! - Run the admin dashboard (services, bookings, content, social links)
//! - Ask the AI concierge for a consultation or chat

use anyhow::{anyhow, bail, Context};
use chrono::{Local, NaiveDate, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use luxecut::admin::{
    booking_rows, delete_service, save_service, DashboardStats, ServiceForm, SocialLinksEditor,
    SocialNetwork, TranslationEditor,
};
use luxecut::booking::{earliest_bookable_date, time_slots, TimeSlot, WizardStep};
use luxecut::catalog::{
    default_barbers, find_barber, format_price, Category, CategoryFilter, Language, LocalizedText,
};
use luxecut::concierge::{
    ConciergeChat, ConciergeError, Consultant, ConsultationSession, GeminiClient, InlineImage,
};
use luxecut::config::{generate_default_config, Config, LoggingConfig};
use luxecut::i18n::ContentField;
use luxecut::site::Site;
use luxecut::storage::FileBackend;

#[derive(Parser)]
#[command(name = "luxecut")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "LuxeCut barbershop: services, bookings, admin and AI concierge")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Data directory (overrides config)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Language (vi, en)
    #[arg(long, global = true)]
    pub lang: Option<Language>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List services
    Services {
        /// Category filter (all, hair, beard, spa)
        #[arg(short, long, default_value = "all")]
        category: CategoryFilter,
    },

    /// List barbers
    Barbers,

    /// List bookable time slots
    Slots,

    /// Add, edit or delete a service
    Service {
        #[command(subcommand)]
        action: ServiceAction,
    },

    /// Book an appointment
    Book {
        /// Service id
        #[arg(long)]
        service: String,
        /// Barber id
        #[arg(long)]
        barber: String,
        /// Date (YYYY-MM-DD), today or later
        #[arg(long)]
        date: NaiveDate,
        /// Time slot (HH:MM, 09:00-20:30 on the half hour)
        #[arg(long)]
        time: TimeSlot,
        /// Customer name
        #[arg(long)]
        name: String,
        /// Customer phone
        #[arg(long)]
        phone: String,
    },

    /// Show all bookings with totals
    Bookings,

    /// Show dashboard totals
    Stats,

    /// Show store status
    Status,

    /// Show or edit social links
    Social {
        #[command(subcommand)]
        action: SocialAction,
    },

    /// Show or edit site copy
    Content {
        #[command(subcommand)]
        action: ContentAction,
    },

    /// Ask for a grooming consultation
    Consult {
        /// What you are looking for
        #[arg(short, long, default_value = "")]
        description: String,
        /// Photo to analyze
        #[arg(short, long)]
        image: Option<PathBuf>,
    },

    /// Chat with the concierge
    Chat,

    /// Restore seeded data and delete all bookings
    Reset {
        /// Skip confirmation
        #[arg(long)]
        yes: bool,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ServiceAction {
    /// Add a service
    Add {
        #[arg(long)]
        title_vi: String,
        #[arg(long)]
        title_en: String,
        #[arg(long, default_value = "")]
        desc_vi: String,
        #[arg(long, default_value = "")]
        desc_en: String,
        /// Price in VND
        #[arg(long)]
        price: u64,
        /// Duration in minutes
        #[arg(long, default_value_t = luxecut::admin::DEFAULT_DURATION)]
        duration: u32,
        #[arg(long, default_value = "hair")]
        category: Category,
        #[arg(long, default_value = "")]
        image_url: String,
    },

    /// Edit a service; omitted fields keep their value
    Edit {
        id: String,
        #[arg(long)]
        title_vi: Option<String>,
        #[arg(long)]
        title_en: Option<String>,
        #[arg(long)]
        desc_vi: Option<String>,
        #[arg(long)]
        desc_en: Option<String>,
        #[arg(long)]
        price: Option<u64>,
        #[arg(long)]
        duration: Option<u32>,
        #[arg(long)]
        category: Option<Category>,
        #[arg(long)]
        image_url: Option<String>,
    },

    /// Delete a service
    Delete {
        id: String,
        /// Skip confirmation
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum SocialAction {
    /// Show social links
    Show,
    /// Set one link
    Set { network: SocialNetwork, url: String },
}

#[derive(Subcommand)]
pub enum ContentAction {
    /// Show editable copy for the selected language
    Show,
    /// Set one field (e.g. hero.titleMain) for the selected language
    Set { field: ContentField, value: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(dir) = &cli.data_dir {
        config.storage.data_dir = dir.to_string_lossy().to_string();
    }
    init_logging(&config.logging)?;

    // Writing a config template must work before any data directory exists
    if let Commands::Config { output } = &cli.command {
        return write_config(output.as_deref());
    }

    let data_dir = expand_home(&config.storage.data_dir);
    let backend = FileBackend::open(&data_dir)
        .with_context(|| format!("Cannot open data directory {:?}", data_dir))?;
    let lang = cli.lang.unwrap_or(config.site.default_language);
    let mut site = Site::open(backend, lang);

    run(cli.command, cli.format, &mut site, &config).await
}

async fn run(
    command: Commands,
    format: OutputFormat,
    site: &mut Site<FileBackend>,
    config: &Config,
) -> anyhow::Result<()> {
    let lang = site.language();

    match command {
        Commands::Services { category } => {
            let services = site.services_filtered(category);
            if format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&services)?);
            } else if services.is_empty() {
                println!("No services in this category.");
            } else {
                println!(
                    "{:<15} {:<28} {:<7} {:>6} {:>14}",
                    "ID", "Service", "Type", "Mins", "Price"
                );
                println!("{}", "-".repeat(74));
                for service in services {
                    println!(
                        "{:<15} {:<28} {:<7} {:>6} {:>14}",
                        service.id,
                        service.title_in(lang),
                        service.category,
                        service.duration,
                        format_price(service.price, lang)
                    );
                }
            }
        }

        Commands::Barbers => {
            let barbers = default_barbers();
            if format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&barbers)?);
            } else {
                println!("{:<5} {:<15} {}", "ID", "Name", "Specialty");
                println!("{}", "-".repeat(50));
                for barber in barbers {
                    println!(
                        "{:<5} {:<15} {}",
                        barber.id,
                        barber.name,
                        barber.specialty.get(lang)
                    );
                }
            }
        }

        Commands::Slots => {
            let slots: Vec<String> = time_slots().iter().map(ToString::to_string).collect();
            if format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&slots)?);
            } else {
                println!("Earliest date: {}", earliest_bookable_date(today()));
                for row in slots.chunks(6) {
                    println!("  {}", row.join("  "));
                }
            }
        }

        Commands::Service { action } => run_service_action(action, site)?,

        Commands::Book {
            service,
            barber,
            date,
            time,
            name,
            phone,
        } => {
            if site.open_booking(Some(&service)) != WizardStep::SelectingBarber {
                site.close_booking();
                bail!("Unknown service: {}", service);
            }
            let barber =
                find_barber(&barber).ok_or_else(|| anyhow!("Unknown barber: {}", barber))?;
            let barber_name = barber.name.clone();

            let wizard = site.wizard_mut();
            wizard.select_barber(barber)?;
            wizard.pick_date(date, today())?;
            wizard.pick_time(time)?;
            wizard.next()?;
            wizard.set_customer_name(name);
            wizard.set_customer_phone(phone);
            let booking = site.submit_booking(Utc::now())?;

            if format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&booking)?);
            } else {
                let strings = &site.strings().booking;
                let summary = site.wizard().summary(lang);
                println!("{}", strings.success);
                if let Some(summary) = summary {
                    println!("  {}: {}", strings.summary, summary.service_title);
                    println!("  {}: {}", strings.total, summary.price);
                }
                println!("  {} | {} | {}", barber_name, booking.date, booking.time);
                println!("{}", strings.success_desc);
            }
            site.close_booking();
        }

        Commands::Bookings => {
            let rows = booking_rows(site.store(), lang);
            let stats = DashboardStats::compute(site.store());
            if format == OutputFormat::Json {
                let body = serde_json::json!({ "bookings": rows, "stats": stats });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else if rows.is_empty() {
                println!("No bookings yet.");
            } else {
                println!(
                    "{:<20} {:<12} {:<24} {:<20} {:>14}",
                    "Customer", "Phone", "Service", "Time", "Price"
                );
                println!("{}", "-".repeat(94));
                for row in &rows {
                    println!(
                        "{:<20} {:<12} {:<24} {:<20} {:>14}",
                        row.customer_name, row.customer_phone, row.service_title, row.when, row.price
                    );
                }
                println!();
                println!(
                    "{} bookings, revenue {}",
                    stats.total_bookings,
                    stats.revenue_display()
                );
            }
        }

        Commands::Stats => {
            let stats = DashboardStats::compute(site.store());
            if format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                let labels = &site.strings().admin.stats;
                println!("{:<20} {}", labels.revenue, stats.revenue_display());
                println!("{:<20} {}", labels.total_bookings, stats.total_bookings);
                println!("{:<20} {}", labels.active_services, stats.active_services);
            }
        }

        Commands::Status => {
            let stats = site.store().stats();
            println!("LuxeCut v{}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Data directory: {:?}", site.store().backend().data_dir());
            println!("Language: {}", lang);
            println!("Store: {}", stats);
            println!(
                "Concierge: {}",
                if config.concierge.gemini().is_some() {
                    "enabled"
                } else {
                    "disabled (no API key)"
                }
            );
        }

        Commands::Social { action } => match action {
            SocialAction::Show => {
                let links = site.store().social_links();
                if format == OutputFormat::Json {
                    println!("{}", serde_json::to_string_pretty(links)?);
                } else {
                    for network in SocialNetwork::all() {
                        println!("{:<10} {}", network, network.link(links));
                    }
                }
            }
            SocialAction::Set { network, url } => {
                let mut editor = SocialLinksEditor::load(site.store());
                editor.set(network, url);
                if editor.is_dirty() {
                    editor.save(site.store_mut())?;
                }
                println!("{} = {}", network, editor.get(network));
            }
        },

        Commands::Content { action } => match action {
            ContentAction::Show => {
                let strings = site.strings();
                if format == OutputFormat::Json {
                    let fields: serde_json::Map<String, serde_json::Value> = ContentField::ALL
                        .iter()
                        .map(|f| (f.key().to_string(), strings.content(*f).into()))
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&fields)?);
                } else {
                    let mut section = "";
                    for field in ContentField::ALL {
                        if field.section() != section {
                            section = field.section();
                            println!("[{}]", section);
                        }
                        println!("  {:<22} {}", field.key(), strings.content(field));
                    }
                }
            }
            ContentAction::Set { field, value } => {
                let mut editor = TranslationEditor::load(site.store());
                editor.set(lang, field, value);
                if editor.is_dirty() {
                    editor.save(site.store_mut())?;
                }
                println!("{} ({}) = {}", field, lang, editor.get(lang, field));
            }
        },

        Commands::Consult { description, image } => {
            let client = concierge_client(config)?;
            let consultant =
                Consultant::new(client).with_model(config.concierge.consultation_model.clone());

            let mut session = ConsultationSession::new();
            session.set_description(description);
            if let Some(path) = image {
                let bytes = std::fs::read(&path)
                    .with_context(|| format!("Cannot read image {:?}", path))?;
                session.set_image(Some(InlineImage::from_bytes(image_mime(&path), &bytes)?));
            }

            let input = session
                .begin()
                .ok_or_else(|| anyhow!("Nothing to analyze: pass --description or --image"))?;
            println!("{}", site.strings().consultation.analyzing);
            let outcome = consultant
                .consult(&input.description, lang, input.image)
                .await;
            session.finish(outcome, &site.strings().consultation.error);

            if let Some(message) = session.error() {
                bail!("{}", message);
            }
            if let Some(result) = session.result() {
                if format == OutputFormat::Json {
                    println!("{}", serde_json::to_string_pretty(result)?);
                } else {
                    let labels = &site.strings().consultation;
                    println!();
                    println!("{}", labels.verdict);
                    println!("  {}", result.recommendation);
                    println!();
                    println!("{}", labels.suggested);
                    for service in &result.suggested_services {
                        println!("  - {}", service);
                    }
                    println!();
                    println!("{}", labels.tips);
                    for (i, tip) in result.style_tips.iter().enumerate() {
                        println!("  {}. {}", i + 1, tip);
                    }
                }
            }
        }

        Commands::Chat => {
            let client = concierge_client(config)?;
            let model = config.concierge.chat_model.clone();
            let mut chat = ConciergeChat::new();

            let strings = site.strings().concierge.clone();
            println!("{}", strings.title);
            println!("{}", strings.welcome);
            println!("(exit or Ctrl-D to leave)");

            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            loop {
                print!("> ");
                std::io::stdout().flush()?;
                let Some(line) = lines.next_line().await? else {
                    break;
                };
                if matches!(line.trim(), "exit" | "quit") {
                    break;
                }
                let services = site.store().services();
                if let Some(reply) = chat
                    .send(&client, &model, &line, services, lang, &strings.error)
                    .await
                {
                    println!("{}", reply.text);
                }
            }
        }

        Commands::Reset { yes } => {
            if !yes && !confirm("Restore default services, links and copy, and delete all bookings?")? {
                println!("Cancelled.");
                return Ok(());
            }
            site.store_mut().reset_to_defaults()?;
            println!("Store reset: {}", site.store().stats());
        }

        Commands::Config { output } => write_config(output.as_deref())?,
    }

    Ok(())
}

fn run_service_action(action: ServiceAction, site: &mut Site<FileBackend>) -> anyhow::Result<()> {
    let lang = site.language();

    match action {
        ServiceAction::Add {
            title_vi,
            title_en,
            desc_vi,
            desc_en,
            price,
            duration,
            category,
            image_url,
        } => {
            let form = ServiceForm {
                title: LocalizedText::new(title_vi, title_en),
                description: LocalizedText::new(desc_vi, desc_en),
                price,
                duration,
                category,
                image_url,
            };
            let service = save_service(site.store_mut(), None, form, Utc::now())?;
            println!(
                "Created {} ({}) at {}",
                service.id,
                service.slug,
                format_price(service.price, lang)
            );
        }

        ServiceAction::Edit {
            id,
            title_vi,
            title_en,
            desc_vi,
            desc_en,
            price,
            duration,
            category,
            image_url,
        } => {
            let existing = site
                .store()
                .service(&id)
                .ok_or_else(|| anyhow!("Service not found: {}", id))?;
            let mut form = ServiceForm::from_service(existing);
            if let Some(v) = title_vi {
                form.title.vi = v;
            }
            if let Some(v) = title_en {
                form.title.en = v;
            }
            if let Some(v) = desc_vi {
                form.description.vi = v;
            }
            if let Some(v) = desc_en {
                form.description.en = v;
            }
            if let Some(v) = price {
                form.price = v;
            }
            if let Some(v) = duration {
                form.duration = v;
            }
            if let Some(v) = category {
                form.category = v;
            }
            if let Some(v) = image_url {
                form.image_url = v;
            }

            let service = save_service(site.store_mut(), Some(&id), form, Utc::now())?;
            println!("Updated {} ({})", service.id, service.title_in(lang));
        }

        ServiceAction::Delete { id, yes } => {
            let mut prompt_error = None;
            let removed = delete_service(site.store_mut(), &id, |service| {
                if yes {
                    return true;
                }
                match confirm(&format!("Delete this service? ({})", service.title_in(lang))) {
                    Ok(answer) => answer,
                    Err(e) => {
                        prompt_error = Some(e);
                        false
                    }
                }
            })?;
            if let Some(e) = prompt_error {
                return Err(e);
            }
            if removed {
                println!("Deleted {}", id);
            } else {
                println!("Cancelled.");
            }
        }
    }

    Ok(())
}

fn write_config(output: Option<&Path>) -> anyhow::Result<()> {
    let template = generate_default_config();
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &template)?;
            println!("Config written to {:?}", path);
        }
        None => print!("{}", template),
    }
    Ok(())
}

fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config.level.contains('=') {
            EnvFilter::new(&config.level)
        } else {
            EnvFilter::new(format!("luxecut={}", config.level))
        }
    });

    let writer = match &config.file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Cannot open log file {}", path))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(std::io::stderr),
    };
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(config.file.is_none());

    let registry = tracing_subscriber::registry().with(filter);
    if config.format == "json" {
        registry.with(layer.json()).init();
    } else {
        registry.with(layer).init();
    }
    Ok(())
}

fn concierge_client(config: &Config) -> anyhow::Result<GeminiClient> {
    let settings = config
        .concierge
        .gemini()
        .ok_or(ConciergeError::MissingApiKey)
        .context("Set API_KEY or [concierge].api_key")?;
    Ok(GeminiClient::new(settings)?)
}

fn confirm(question: &str) -> anyhow::Result<bool> {
    print!("{} [y/N] ", question);
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

fn image_mime(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("heic") => "image/heic",
        _ => "image/jpeg",
    }
}
