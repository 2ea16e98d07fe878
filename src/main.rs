use log::{debug, info, warn};
use std::env;

use rezept_tagebuch::{ClientConfig, ListState, RecipeApi, RecipePage};

const USAGE: &str = "Usage: rezept-tagebuch [--retries N] [OUTPUT]";

enum Command {
    Help,
    Render(Args),
}

struct Args {
    retries: u32,
    output: Option<String>,
}

fn parse_args(
    argv: impl IntoIterator<Item = String>,
) -> Result<Command, Box<dyn std::error::Error>> {
    let mut args = Args {
        retries: 0,
        output: None,
    };

    let mut iter = argv.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--retries" => {
                let value = iter.next().ok_or("--retries needs a value")?;
                args.retries = value.parse()?;
            }
            _ if args.output.is_none() && !arg.starts_with('-') => args.output = Some(arg),
            _ => return Err(format!("Unexpected argument: {arg}\n{USAGE}").into()),
        }
    }

    Ok(Command::Render(args))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = match parse_args(env::args().skip(1))? {
        Command::Help => {
            println!("{USAGE}");
            return Ok(());
        }
        Command::Render(args) => args,
    };

    let api = RecipeApi::new(ClientConfig::load()?)?;
    debug!("Using API at {}", api.config().api_url);

    let mut page = RecipePage::new();
    page.load(&api).await;

    let mut attempts = 0;
    while page.can_retry() && attempts < args.retries {
        attempts += 1;
        warn!("Retrying recipe load ({}/{})", attempts, args.retries);
        page.retry(&api).await;
    }

    let document = page.render_document().await;
    match &args.output {
        Some(path) => {
            tokio::fs::write(path, document).await?;
            info!("Wrote {} recipes to {}", page.count(), path);
        }
        None => print!("{document}"),
    }

    if let ListState::Error(message) = page.state() {
        return Err(message.clone().into());
    }
    Ok(())
}
