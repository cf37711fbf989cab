use refer_earn::{
    config::Config,
    error::{AppError, AppResult},
    initialize_logging,
    referral::{validate, Course, FormData},
    App,
};
use std::{env, path::PathBuf, process};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> AppResult<()> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        process::exit(0);
    }

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        process::exit(0);
    }

    let config_path = config_path_arg(&args)?;
    let config = Config::load(config_path.as_deref()).await?;

    let demo_mode = args.iter().any(|a| a == "--demo") || env::var("REFER_EARN_DEMO_MODE").is_ok();

    if demo_mode {
        initialize_logging(&config.app.log_level, None)
            .map_err(|e| AppError::application(e.to_string()))?;
        run_demo_mode(&config);
        Ok(())
    } else {
        initialize_logging(&config.app.log_level, Some(config.app.log_file.as_path()))
            .map_err(|e| AppError::application(e.to_string()))?;
        info!("{} {} starting", config.app.name, config.app.version);
        App::new(config)?.run().await
    }
}

fn config_path_arg(args: &[String]) -> AppResult<Option<PathBuf>> {
    match args.iter().position(|a| a == "--config") {
        None => Ok(None),
        Some(i) => args
            .get(i + 1)
            .map(|p| Some(PathBuf::from(p)))
            .ok_or_else(|| AppError::config("--config requires a path")),
    }
}

/// Validate two sample referrals and report what the widget would do
fn run_demo_mode(config: &Config) {
    info!("{} demo mode", config.app.name);
    info!("Referrals endpoint: {}/api/referrals", config.api.base_url.trim_end_matches('/'));
    info!(
        "Courses: {}",
        Course::ALL.iter().map(|c| c.id()).collect::<Vec<_>>().join(", ")
    );

    let valid = FormData {
        referrer_name: "Ann".to_string(),
        referrer_email: "ann@x.com".to_string(),
        referee_name: "Bo".to_string(),
        referee_email: "bo@x.com".to_string(),
        course: Course::WebDevelopment.id().to_string(),
    };
    let mut broken = valid.clone();
    broken.referee_email = "not-an-email".to_string();

    for (name, form) in [("valid", &valid), ("broken", &broken)] {
        let errors = validate(form);
        if errors.is_empty() {
            info!("{} referral would be submitted", name);
        } else {
            for (field, message) in errors.iter() {
                warn!("{} referral: {} -> {}", name, field.wire_key(), message);
            }
        }
    }

    info!("Demo finished");
}

fn print_help() {
    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    println!("{}", env!("CARGO_PKG_DESCRIPTION"));
    println!();
    println!("USAGE:");
    println!("    {} [OPTIONS]", env!("CARGO_PKG_NAME"));
    println!();
    println!("OPTIONS:");
    println!("    -h, --help           Print this help message and exit");
    println!("    -V, --version        Print version information and exit");
    println!("        --config <PATH>  Load configuration from PATH");
    println!("        --demo           Validate sample referrals and exit (non-interactive)");
    println!();
    println!("ENVIRONMENT:");
    println!("    REFER_EARN_API_URL   Referrals API base URL (default http://localhost:3001)");
    println!("    NEXT_PUBLIC_API_URL  Fallback name for the API base URL");
    println!("    REFER_EARN_DEMO_MODE Set to run in demo mode");
    println!("    RUST_LOG             Set logging level (debug, info, warn, error)");
}
