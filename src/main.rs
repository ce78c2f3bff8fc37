//! Lookbook - browse and upload tagged style media from the terminal
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use lookbook::intake::{DefaultProbe, ManifestPicker, MediaPicker, PathPicker};
use lookbook::models::TAG_CHOICES;
use lookbook::policy::{self, PolicyGate};
use lookbook::prefs::Preferences;
use lookbook::{Config, Database, Feed, IntakeValidator, Notice, Tag, UploadSession};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (RUST_LOG=debug for verbose output)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match parse_args()? {
        Command::Feed { tag, limit } => feed_cli(&tag, limit).await,
        Command::Validate { source } => validate_cli(source).await,
        Command::Upload {
            tag,
            source,
            agree,
            remember,
        } => upload_cli(&tag, source, agree, remember).await,
        Command::Policy {
            agree,
            remember,
            reset,
        } => policy_cli(agree, remember, reset),
        Command::Like { id } => like_cli(id),
        Command::Share { url, title } => {
            share_cli(&url, &title);
            Ok(())
        }
        Command::Rate => rate_cli(),
        Command::Tags => {
            for tag in TAG_CHOICES {
                println!("{tag}");
            }
            Ok(())
        }
        Command::Help => {
            print_help();
            Ok(())
        }
        Command::Version => {
            println!("lookbook {}", lookbook::VERSION);
            Ok(())
        }
    }
}

/// Where an intake batch comes from
enum Source {
    Paths(Vec<PathBuf>),
    Manifest(PathBuf),
}

/// CLI commands
enum Command {
    Feed {
        tag: String,
        limit: usize,
    },
    Validate {
        source: Source,
    },
    Upload {
        tag: String,
        source: Source,
        agree: bool,
        remember: bool,
    },
    Policy {
        agree: bool,
        remember: bool,
        reset: bool,
    },
    Like {
        id: i64,
    },
    Share {
        url: String,
        title: String,
    },
    Rate,
    Tags,
    Help,
    Version,
}

fn parse_args() -> Result<Command> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() == 1 {
        return Ok(Command::Help);
    }

    let has_flag = |names: &[&str]| args.iter().skip(2).any(|a| names.contains(&a.as_str()));

    match args[1].as_str() {
        "-h" | "--help" | "help" => Ok(Command::Help),
        "-v" | "--version" | "version" => Ok(Command::Version),
        "tags" => Ok(Command::Tags),
        "rate" => Ok(Command::Rate),

        "feed" => {
            let tag = args
                .get(2)
                .ok_or_else(|| anyhow::anyhow!("Missing tag\nRun 'lookbook tags' for choices"))?
                .clone();
            let limit = args
                .iter()
                .position(|a| a == "--limit" || a == "-l")
                .and_then(|i| args.get(i + 1))
                .and_then(|s| s.parse().ok())
                .unwrap_or(20);
            Ok(Command::Feed { tag, limit })
        }

        "validate" => Ok(Command::Validate {
            source: parse_source(&args[2..])?,
        }),

        "upload" => {
            let tag = args
                .get(2)
                .ok_or_else(|| anyhow::anyhow!("Missing tag\nRun 'lookbook tags' for choices"))?
                .clone();
            Ok(Command::Upload {
                tag,
                source: parse_source(&args[3..])?,
                agree: has_flag(&["--agree"]),
                remember: has_flag(&["--remember"]),
            })
        }

        "policy" => Ok(Command::Policy {
            agree: has_flag(&["--agree"]),
            remember: has_flag(&["--remember"]),
            reset: has_flag(&["--reset"]),
        }),

        "like" => {
            let id = args
                .get(2)
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| anyhow::anyhow!("Missing or invalid media id"))?;
            Ok(Command::Like { id })
        }

        "share" => {
            let url = args
                .get(2)
                .ok_or_else(|| anyhow::anyhow!("Missing media URL"))?
                .clone();
            let title = args.get(3).cloned().unwrap_or_else(|| "Lookbook".to_string());
            Ok(Command::Share { url, title })
        }

        other => Err(anyhow::anyhow!(
            "Unknown command: {other}\nRun 'lookbook --help' for usage"
        )),
    }
}

/// Parse `--manifest <file>` or a list of paths, skipping other flags
fn parse_source(rest: &[String]) -> Result<Source> {
    if let Some(i) = rest.iter().position(|a| a == "--manifest" || a == "-m") {
        let path = rest
            .get(i + 1)
            .ok_or_else(|| anyhow::anyhow!("Missing manifest path"))?;
        return Ok(Source::Manifest(PathBuf::from(path)));
    }

    let paths: Vec<PathBuf> = rest
        .iter()
        .filter(|a| !a.starts_with("--"))
        .map(PathBuf::from)
        .collect();
    if paths.is_empty() {
        anyhow::bail!("No files given");
    }
    Ok(Source::Paths(paths))
}

fn print_help() {
    let config_path = Config::default_path()
        .map_or_else(|_| "Unknown".to_string(), |p| p.display().to_string());

    println!(
        r#"Lookbook - browse and upload tagged style media

USAGE:
    lookbook [COMMAND]

COMMANDS:
    feed <tag> [OPTIONS]               Show the media for a tag
      Options:
        -l, --limit <n>                Number of items (default: 20)

    validate <files...>                Check files against the upload rules
    validate --manifest <file.json>    Check a JSON list of assets

    upload <tag> <files...> [OPTIONS]  Validate and upload up to 5 files
      Options:
        -m, --manifest <file.json>     Read assets from a manifest instead
        --agree                        Agree to the content policy
        --remember                     Don't show the policy again

    policy [--agree] [--remember]      Show or accept the content policy
    policy --reset                     Show the policy again next time
    like <id>                          Like or unlike a feed item
    share <url> [title]                Print a share message for an item
    rate                               Leave a review
    tags                               List upload tags

OPTIONS:
    -h, --help                         Show this help message
    -v, --version                      Show version information

CONFIG:
    {}
"#,
        config_path
    );
}

fn print_notices(notices: &[Notice]) {
    for notice in notices {
        if notice.is_error() {
            eprintln!("✗ {notice}");
        } else {
            println!("✓ {notice}");
        }
    }
}

fn picker_for(source: Source) -> AnyPicker {
    match source {
        Source::Paths(paths) => AnyPicker::Paths(PathPicker::new(paths)),
        Source::Manifest(path) => AnyPicker::Manifest(ManifestPicker::new(path)),
    }
}

/// Either picker, dispatched like the API client enum
enum AnyPicker {
    Paths(PathPicker),
    Manifest(ManifestPicker),
}

impl MediaPicker for AnyPicker {
    async fn pick(
        &self,
        limit: usize,
    ) -> std::result::Result<Vec<lookbook::RawMediaAsset>, lookbook::PickError> {
        match self {
            AnyPicker::Paths(p) => p.pick(limit).await,
            AnyPicker::Manifest(p) => p.pick(limit).await,
        }
    }
}

async fn feed_cli(tag: &str, limit: usize) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open()?;
    let prefs = Preferences::new(&db);

    if let Some(referral) = lookbook::share::first_launch_referral(&prefs, &config.app_link)? {
        println!("{}\n", referral.message);
    }

    let tag = Tag::parse(tag).ok_or_else(|| anyhow::anyhow!("Tag must not be empty"))?;
    let client = lookbook::api::MediaClient::new(&config.base_url, config.timeout());
    let feed = Feed::load(&client, &tag, &prefs).await;

    if let Some(error) = &feed.error {
        anyhow::bail!("{error}");
    }

    println!("{} ({} items)", feed.tag, feed.entries.len());
    println!("{}", "─".repeat(60));
    for entry in feed.entries.iter().take(limit) {
        let heart = if entry.liked { "♥" } else { "♡" };
        let kind = if entry.media.is_video() { "video" } else { "image" };
        let when = entry
            .media
            .uploaded_at()
            .map(|dt| format!(" · {}", dt.format("%Y-%m-%d")))
            .unwrap_or_default();
        println!("{heart} #{} [{kind}] {}{when}", entry.media.id, entry.media.url);
    }
    Ok(())
}

async fn validate_cli(source: Source) -> Result<()> {
    let config = Config::load()?;
    let validator = IntakeValidator::new(config.intake_rules(), DefaultProbe::new(config.timeout()));
    let mut session = UploadSession::new();

    let picker = picker_for(source);
    if let Some(outcome) = session.pick(&picker, &validator).await {
        for item in session.selection.items() {
            println!(
                "✓ {} {} ({}, {})",
                item.kind_label(),
                item.file_name,
                item.mime,
                item.size
                    .map_or_else(|| "size unknown".to_string(), |s| format!("{s} bytes"))
            );
        }
        if outcome.dropped > 0 {
            println!("{} item(s) over the limit of 5 were left out", outcome.dropped);
        }
    }
    print_notices(&session.drain_notices());
    Ok(())
}

async fn upload_cli(tag: &str, source: Source, agree: bool, remember: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open()?;
    let prefs = Preferences::new(&db);

    let gate = PolicyGate::new(&prefs, config.auto_skip_policy);
    if gate.should_show() {
        println!("{}", policy::render(72));
        gate.accept(agree, remember)?;
    }

    let validator = IntakeValidator::new(config.intake_rules(), DefaultProbe::new(config.timeout()));
    let client = lookbook::api::MediaClient::new(&config.base_url, config.timeout());

    let mut session = UploadSession::new();
    session.set_tag(tag);
    let picker = picker_for(source);
    session.pick(&picker, &validator).await;
    print_notices(&session.drain_notices());

    if session.selection.is_empty() {
        anyhow::bail!("Nothing to upload");
    }

    let sent = session.submit(&client).await;
    print_notices(&session.drain_notices());
    if !sent {
        std::process::exit(1);
    }
    Ok(())
}

fn policy_cli(agree: bool, remember: bool, reset: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open()?;
    let prefs = Preferences::new(&db);
    let gate = PolicyGate::new(&prefs, config.auto_skip_policy);

    if reset {
        gate.reset()?;
        println!("The policy will be shown before the next upload.");
        return Ok(());
    }

    println!("{}", policy::render(72));
    if agree {
        gate.accept(true, remember)?;
        println!("✓ Policy accepted");
    }
    Ok(())
}

fn like_cli(id: i64) -> Result<()> {
    let db = Database::open()?;
    let prefs = Preferences::new(&db);
    if prefs.toggle_like(id)? {
        println!("♥ Liked #{id}");
    } else {
        println!("♡ Unliked #{id}");
    }
    Ok(())
}

fn share_cli(url: &str, title: &str) {
    let content = lookbook::share::share_media(url, title);
    if let Some(title) = &content.title {
        println!("{title}\n");
    }
    println!("{}", content.message);
}

fn rate_cli() -> Result<()> {
    let config = Config::load()?;
    let db = Database::open()?;
    let prefs = Preferences::new(&db);

    println!("Help us improve the app by leaving us a review in the App Store");
    if !lookbook::review::request_review(&prefs, config.app_store_url.as_deref())? {
        println!("Thanks! No store page is configured, so nothing was opened.");
    }
    Ok(())
}
