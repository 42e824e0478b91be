use assembly_endgame::cli::{Cli, CliInterface, parse_cli, session_summary};
use assembly_endgame::logging::init_logging;
use assembly_endgame::tui::TuiInterface;
use assembly_endgame::wordbank::{
    EMBEDDED_WORDBANK, FixedWordProvider, RandomWordProvider, WordProvider, WordbankError,
    load_wordbank_from_file, load_wordbank_from_str,
};
use assembly_endgame::{Catalog, GameInterface, game_loop_with_rng};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::process::ExitCode;

fn build_provider(cli: &Cli) -> Result<Box<dyn WordProvider>, WordbankError> {
    if let Some(word) = &cli.word {
        return Ok(Box::new(FixedWordProvider::new(word)?));
    }

    let words = match &cli.wordbank_path {
        Some(path) => load_wordbank_from_file(path)?,
        None => load_wordbank_from_str(EMBEDDED_WORDBANK)?,
    };
    log::info!("Loaded {} words", words.len());

    Ok(match cli.seed {
        Some(seed) => Box::new(RandomWordProvider::seeded(words, seed)?),
        None => Box::new(RandomWordProvider::from_entropy(words)?),
    })
}

fn main() -> ExitCode {
    let cli = parse_cli();

    // Logging is best effort; the game runs without it.
    match init_logging(cli.log_file.as_deref()) {
        Ok(path) => log::info!("Logging to {}", path.display()),
        Err(e) => eprintln!("Logging disabled: {e}"),
    }

    let mut provider = match build_provider(&cli) {
        Ok(provider) => provider,
        Err(e) => {
            eprintln!("Failed to prepare word list: {e}");
            return ExitCode::FAILURE;
        }
    };

    let catalog = Catalog::languages();
    let mut interface: Box<dyn GameInterface> = if cli.plain {
        Box::new(CliInterface::new(
            io::stdin().lock(),
            io::stdout(),
            catalog.clone(),
        ))
    } else {
        match TuiInterface::new(catalog.clone()) {
            Ok(tui) => Box::new(tui),
            Err(e) => {
                eprintln!("Failed to start terminal interface: {e}");
                return ExitCode::FAILURE;
            }
        }
    };

    // The same seed drives word choice and farewell phrases.
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let result = game_loop_with_rng(&catalog, provider.as_mut(), interface.as_mut(), &mut rng);
    // Restore the terminal before printing anything.
    drop(interface);

    match result {
        Ok(stats) => {
            log::info!(
                "Session finished: played {}, won {}, lost {}",
                stats.played,
                stats.won,
                stats.lost
            );
            // The plain interface already printed its own exit line.
            if !cli.plain {
                println!("{}", session_summary(&stats));
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Game aborted: {e}");
            eprintln!("Game aborted: {e}");
            ExitCode::FAILURE
        }
    }
}
