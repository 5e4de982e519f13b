use clap::Parser;
use pocket_guide_client::utils::{logger, validation::Validate};
use pocket_guide_client::{Cli, Command, GenerateTourParams, PocketGuideClient, Result};

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting pocket-guide CLI");
    if cli.verbose {
        tracing::debug!("CLI args: {:?}", cli);
    }

    let file_config = match cli.file_config() {
        Ok(file_config) => file_config,
        Err(e) => {
            tracing::error!("❌ Configuration error: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let config = cli.client_config(file_config.as_ref());
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let mut command = cli.command;
    if let Some(file_config) = &file_config {
        command.apply_file_defaults(file_config);
    }

    let client = PocketGuideClient::new(&config)?;
    tracing::debug!("Using API at {}", client.http().base_url());

    match run(&client, command).await {
        Ok(json) => {
            println!("{}", json);
        }
        Err(e) => {
            tracing::error!("❌ Request failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

async fn run(client: &PocketGuideClient, command: Command) -> Result<String> {
    let json = match command {
        Command::Generate {
            city,
            days,
            interests,
            pace,
            language,
            start_location,
            end_location,
        } => {
            let params = GenerateTourParams {
                city,
                days,
                interests,
                pace,
                language,
                start_location,
                end_location,
            };
            serde_json::to_string_pretty(&client.tour().generate(params).await?)?
        }
        Command::Tour { tour_id } => {
            serde_json::to_string_pretty(&client.tours().get(&tour_id).await?)?
        }
        Command::Tours { city, limit, offset } => serde_json::to_string_pretty(
            &client.tours().list(city.as_deref(), limit, offset).await?,
        )?,
        Command::ReplacePoi {
            tour_id,
            original_poi,
            replacement_poi,
            language,
        } => serde_json::to_string_pretty(
            &client
                .tours()
                .replace_poi(&tour_id, &original_poi, &replacement_poi, language.as_deref())
                .await?,
        )?,
        Command::Pois { city } => {
            serde_json::to_string_pretty(&client.pois().list_city(&city).await?)?
        }
        Command::Poi { city, poi_id } => {
            serde_json::to_string_pretty(&client.pois().get(&city, &poi_id).await?)?
        }
        Command::Transcript {
            city,
            poi_id,
            language,
            tour_id,
        } => serde_json::to_string_pretty(
            &client
                .pois()
                .transcript(&city, &poi_id, language.as_deref(), tour_id.as_deref())
                .await?,
        )?,
        Command::ComboTickets { city } => {
            serde_json::to_string_pretty(&client.combo_tickets().list(&city).await?)?
        }
        Command::ComboTicket { city, ticket_id } => {
            serde_json::to_string_pretty(&client.combo_tickets().get(&city, &ticket_id).await?)?
        }
    };

    Ok(json)
}
