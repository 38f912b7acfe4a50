use clap::{App, Arg};
use crossterm::{event, execute, terminal};
use deskfolio::{Config, ErrorType, LogicManager, Locale};
use std::fs::File;
use std::io::{stdout, Read};
use std::path::Path;
use std::process::exit;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let matches = App::new("deskfolio")
        .about("A portfolio presented as a desktop, in the terminal.")
        .arg(
            Arg::with_name("log_file")
                .short("f")
                .long("log_file")
                .takes_value(true)
                .max_values(1)
                .value_name("FILE")
                .required(false)
                .help("Sets the file to write logging output to."),
        )
        .arg(
            Arg::with_name("log_level")
                .short("l")
                .long("log_level")
                .requires("log_file")
                .takes_value(true)
                .value_name("LEVEL")
                .max_values(1)
                .possible_values(&["1", "2", "3", "4"])
                .help("Sets the level of logging to enable."),
        )
        .arg(
            Arg::with_name("config")
                .short("c")
                .takes_value(true)
                .value_name("FILE")
                .max_values(1)
                .help("Specify a config file."),
        )
        .arg(
            Arg::with_name("print-config")
                .long("print-config")
                .takes_value(false)
                .help("Print the default config to stdout."),
        )
        .arg(
            Arg::with_name("config-format")
                .long("config-format")
                .takes_value(true)
                .max_values(1)
                .value_name("FORMAT")
                .possible_values(&["JSON", "TOML"])
                .default_value("TOML")
                .help("Specify the format of the config file."),
        )
        .arg(
            Arg::with_name("locale")
                .long("locale")
                .takes_value(true)
                .max_values(1)
                .value_name("LOCALE")
                .possible_values(&["en", "tr", "auto"])
                .help("Choose the display language. Defaults to the locale environment."),
        )
        .get_matches();

    if matches.is_present("print-config") {
        print_default_config(matches.value_of("config-format").unwrap_or("TOML"));
        return;
    }

    let mut config = load_config(
        matches.value_of("config").map(|s| s.to_string()),
        matches.value_of("config-format").unwrap_or("TOML"),
    );

    if let Some(log_file) = matches.value_of("log_file") {
        config
            .get_environment_mut_ref()
            .set_log_file(log_file.to_string());
    }

    if let Some(log_level) = matches.value_of("log_level") {
        if let Ok(log_level) = log_level.parse() {
            config.get_environment_mut_ref().set_log_level(log_level);
        } else {
            eprintln!("Expected a value of 1, 2, 3 or 4 for the log level.");
            exit(1);
        }
    }

    if let Some(locale) = matches.value_of("locale") {
        config
            .get_environment_mut_ref()
            .set_locale(locale.to_string());
    }

    // Kept alive until exit so buffered log lines are written.
    let _guard = init_logging(&config);

    info!("Completed config load.");

    let locale = Locale::detect(config.get_environment_ref().locale_ref().as_deref());
    info!("Using locale {}", locale.tag());

    let rt = match tokio::runtime::Builder::new_multi_thread()
        .enable_io()
        .enable_time()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to start the async runtime. Error: {}", e);
            exit(1);
        }
    };

    if let Some(err) = rt.block_on(async { deskfolio_start(config, locale).await }) {
        eprintln!("Terminating with error: {}", err);
        error!("Terminated with error: {}", err);
        exit(1);
    }
}

async fn deskfolio_start(config: Config, locale: Locale) -> Option<String> {
    if let Err(e) = terminal::enable_raw_mode() {
        let err = ErrorType::new_enter_raw_mode_error(e.to_string());
        error!("{:?}", err);
        return Some(err.description());
    }

    // We don't care about errors that happen with this function, if it fails that's ok.
    if let Err(e) = execute!(
        stdout(),
        terminal::EnterAlternateScreen,
        event::EnableMouseCapture
    ) {
        warn!("Failed to enter alternate tty screen. Reason: {}", e);
    }

    let err = match LogicManager::new(config, locale) {
        Ok(logic_manager) => logic_manager.start_event_loop().await.err(),
        Err(e) => Some(e),
    };

    // We don't care about errors that happen with this function, if it fails that's ok.
    if let Err(e) = execute!(
        stdout(),
        event::DisableMouseCapture,
        crossterm::cursor::Show,
        crossterm::style::ResetColor,
        terminal::LeaveAlternateScreen
    ) {
        warn!("Failed to leave alternate tty screen. Reason: {}", e);
    }

    if let Err(e) = terminal::disable_raw_mode() {
        warn!("Failed to leave TTY raw mode. Reason: {}", e);
    }

    return err.map(|e| {
        error!("{:?}", e);
        e.description()
    });
}

/// Logging only goes to a file since the terminal belongs to the desktop. `RUST_LOG` overrides
/// the configured level.
fn init_logging(config: &Config) -> Option<WorkerGuard> {
    let environment = config.get_environment_ref();
    let log_file = environment.log_file_ref().as_ref()?;
    let path = Path::new(log_file);

    let directory = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let file_name = match path.file_name() {
        Some(name) => name,
        None => {
            eprintln!("'{}' is not a valid log file.", log_file);
            exit(1);
        }
    };

    if let Err(e) = std::fs::create_dir_all(directory) {
        eprintln!(
            "Failed to open '{}' for logging. Error description: {}",
            log_file, e
        );
        exit(1);
    }

    let level = match environment.log_level() {
        0 | 1 => "error",
        2 => "warn",
        3 => "info",
        _ => "debug",
    };

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    let result = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("deskfolio={},warn", level).into()),
        )
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .try_init();

    if let Err(e) = result {
        eprintln!("Failed to set up logging. Error description: {}", e);
        exit(1);
    }

    return Some(guard);
}

fn load_config(path: Option<String>, format: &str) -> Config {
    let path_string;

    if let Some(path) = path {
        path_string = path;
    } else {
        path_string = match Config::default_path(format) {
            Some(p) => p,
            None => {
                eprintln!("Could not determine a suitable path for the config file.");
                exit(1);
            }
        };
    }

    let path = Path::new(&path_string);

    if !path.exists() {
        return Config::default();
    }

    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!(
                "Failed to read config file at path: {}. Error: {}",
                path_string, e
            );
            exit(1);
        }
    };

    let mut contents = String::new();
    if let Err(e) = file.read_to_string(&mut contents) {
        eprintln!(
            "Failed to read config file at path: {}. Error: {}",
            path_string, e
        );
        exit(1);
    }

    let parsed = match format.to_lowercase().as_str() {
        "toml" => Config::from_toml_string(&contents),
        "json" => Config::from_json_string(&contents),
        _ => {
            eprintln!("Invalid format specified. Choose either 'TOML' or 'JSON'.");
            exit(1);
        }
    };

    return match parsed {
        Ok(c) => c,
        Err(e) => {
            eprintln!(
                "Failed to parse config file at path: {}, due to error: {}",
                path_string, e
            );
            exit(1);
        }
    };
}

fn print_default_config(config_format: &str) {
    let printed = if config_format == "JSON" {
        serde_json::to_string_pretty(&Config::default()).map_err(|e| e.to_string())
    } else {
        toml::to_string(&Config::default()).map_err(|e| e.to_string())
    };

    match printed {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Failed to serialize the default config. Error: {}", e);
            exit(1);
        }
    }
}
