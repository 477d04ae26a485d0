use clap::Parser;
use stringtool::config::TomlConfig;
use stringtool::utils::{logger, validation::Validate};
use stringtool::{run_check, CheckOutcome, CliConfig, Parts, ToolError};

const EXIT_INVALID_INPUT: i32 = 1;
const EXIT_CONFIG_ERROR: i32 = 2;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let file_config = match load_config(&config) {
        Ok(file_config) => file_config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(EXIT_CONFIG_ERROR);
        }
    };

    logger::init_cli_logger(
        config.verbose,
        file_config.log_level(),
        file_config.log_format(),
    );
    tracing::debug!("CLI config: {:?}", config);

    let language = config.language(&file_config);
    let outcome = run_check(config.command.check(), config.command.value(), &language);

    if config.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(&outcome);
    }

    if !outcome.valid {
        std::process::exit(EXIT_INVALID_INPUT);
    }

    Ok(())
}

fn load_config(config: &CliConfig) -> Result<TomlConfig, ToolError> {
    config.validate()?;
    config.load_file_config()
}

fn print_outcome(outcome: &CheckOutcome) {
    if !outcome.valid {
        eprintln!(
            "❌ {}",
            outcome.message.as_deref().unwrap_or("invalid input")
        );
        return;
    }

    match &outcome.parts {
        Some(Parts::Domain { sld, tld }) => println!("✅ sld: {}  tld: {}", sld, tld),
        Some(Parts::Storable { login, userid }) => {
            println!("✅ login: {}  userid: {}", login, userid)
        }
        None => println!("✅ '{}' is a valid {}", outcome.input, outcome.check),
    }
}
