use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use zmoda::api;
use zmoda::assets::AssetLoader;
use zmoda::models::{AppConfig, ColorSwatch, UserStyleProfile};
use zmoda::server;
use zmoda::services::ColorAdvisor;

#[derive(Parser)]
#[command(name = "zmoda")]
#[command(about = "ZMODA stylist - personalized outfit color advice")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Print color advice for a garment as JSON
    Advise {
        /// Garment color as HEX or HEX,NAME (repeat for several; first is the base)
        #[arg(short, long = "color")]
        colors: Vec<String>,

        /// Garment type (e.g. "denim jacket")
        #[arg(short, long)]
        garment: Option<String>,

        /// Shopper age
        #[arg(short, long)]
        age: Option<u32>,

        /// Shopper gender
        #[arg(long)]
        gender: Option<String>,

        /// Favorite color name or hex (repeatable)
        #[arg(long = "favorite")]
        favorites: Vec<String>,

        /// Disliked color name or hex (repeatable)
        #[arg(long = "dislike")]
        dislikes: Vec<String>,

        /// Style tag such as "streetwear" or "minimal" (repeatable)
        #[arg(long = "style")]
        styles: Vec<String>,
    },
    /// List the named colors known to the advisor
    Palette,
    /// Extract the embedded config.yaml for customization
    Init {
        /// Destination path
        #[arg(short, long, default_value = "config.yaml")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "ZMODA Stylist API",
        description = "Personalized outfit color advice",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_color_advice,
        api::handle_matching_colors,
        api::handle_palette,
    ),
    components(schemas(
        api::AdviceRequest,
        api::MatchingRequest,
        api::MatchingResponse,
        api::PaletteColor,
        api::PaletteResponse,
        zmoda::models::ColorAdvice,
        zmoda::models::ColorPairing,
        zmoda::models::ColorSwatch,
        zmoda::models::PairingKind,
        zmoda::models::UserStyleProfile,
    )),
    tags(
        (name = "Advice", description = "Personalized color pairing advice"),
        (name = "Colors", description = "Color-wheel relations and named colors")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Advise {
            colors,
            garment,
            age,
            gender,
            favorites,
            dislikes,
            styles,
        }) => {
            let profile = UserStyleProfile {
                age,
                gender,
                favorite_colors: favorites,
                disliked_colors: dislikes,
                style_preferences: styles,
            };
            run_advise_command(&colors, garment.as_deref(), &profile)
        }
        Some(Commands::Palette) => run_palette_command(),
        Some(Commands::Init { output, force }) => run_init_command(&output, force),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for one-shot commands
fn init_cli_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zmoda=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn load_advisor() -> ColorAdvisor {
    let loader = AssetLoader::from_env();
    ColorAdvisor::from_config(&AppConfig::load_from_assets(&loader))
}

/// Parse a `--color` value: `HEX` or `HEX,NAME`.
fn parse_color_arg(arg: &str) -> ColorSwatch {
    match arg.split_once(',') {
        Some((hex, name)) => ColorSwatch::new(name.trim(), hex.trim()),
        None => ColorSwatch::new("", arg.trim()),
    }
}

/// Build advice without a server and print it as JSON
fn run_advise_command(
    colors: &[String],
    garment: Option<&str>,
    profile: &UserStyleProfile,
) -> anyhow::Result<()> {
    init_cli_tracing();

    let advisor = load_advisor();
    let colors: Vec<ColorSwatch> = colors.iter().map(|c| parse_color_arg(c)).collect();
    let advice = advisor.advise(&colors, garment, Some(profile));

    println!("{}", serde_json::to_string_pretty(&advice)?);
    Ok(())
}

/// Print the named color table
fn run_palette_command() -> anyhow::Result<()> {
    init_cli_tracing();

    let advisor = load_advisor();
    let palette = advisor.palette();
    let width = palette
        .colors()
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(0);

    for color in palette.colors() {
        let family = match color.family {
            color_harmony::ColorFamily::Chromatic => "chromatic",
            color_harmony::ColorFamily::Neutral => "neutral",
        };
        println!("  {:<width$}  {}  {family}", color.name, color.hex);
    }
    println!("\n{} colors", palette.len());
    Ok(())
}

/// Extract the embedded config to the filesystem
fn run_init_command(output: &Path, force: bool) -> anyhow::Result<()> {
    if AssetLoader::extract_config(output, force)? {
        println!("  + {}", output.display());
    } else {
        println!(
            "Skipped existing {} (use --force to overwrite)",
            output.display()
        );
    }
    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("ZMODA v{VERSION} - stylist color advice");
    println!("Personalized outfit color pairings\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    let loader = AssetLoader::from_env();
    let source = loader.config_source();
    println!("\nConfig:");
    match (&config_file, &source) {
        (Some(_), zmoda::assets::ConfigSource::Embedded) => {
            println!("  Source: embedded (file not found)")
        }
        _ => println!("  Source: {source}"),
    }

    println!("\nCommands:");
    println!("  zmoda serve     Start the HTTP server");
    println!("  zmoda advise    Print color advice for a garment");
    println!("  zmoda palette   List named colors");
    println!("  zmoda init      Extract embedded config.yaml");
    println!("\nRun 'zmoda --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zmoda=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let asset_loader = AssetLoader::from_env();

    tracing::info!(config = %asset_loader.config_source(), "Config source");

    let state = server::create_app_state(&asset_loader);

    let app = server::build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "ZMODA server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
