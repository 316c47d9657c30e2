mod logging;
mod ui;

use std::env;
use std::path::PathBuf;

use scc_core::config::Config;
use scc_core::state::ConsoleState;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct CliOptions {
    config: Option<PathBuf>,
    seed: Option<u64>,
    skip_boot: bool,
}

enum CliCommand {
    Help,
    Version,
    Launch(CliOptions),
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    match parse_args(env::args().skip(1).collect())? {
        CliCommand::Help => {
            print_help();
            Ok(())
        }
        CliCommand::Version => {
            println!("scc {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        CliCommand::Launch(options) => launch(options),
    }
}

fn parse_args(args: Vec<String>) -> Result<CliCommand, Box<dyn std::error::Error>> {
    let mut options = CliOptions::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--config" => {
                let Some(value) = args.get(i + 1) else {
                    return Err("--config requires a path".into());
                };
                options.config = Some(PathBuf::from(value));
                i += 2;
            }
            "--seed" => {
                let Some(value) = args.get(i + 1) else {
                    return Err("--seed requires a number".into());
                };
                let seed = value
                    .parse::<u64>()
                    .map_err(|_| format!("invalid seed: {value}"))?;
                options.seed = Some(seed);
                i += 2;
            }
            "--skip-boot" => {
                options.skip_boot = true;
                i += 1;
            }
            other => {
                return Err(format!("unsupported argument: {other}").into());
            }
        }
    }
    Ok(CliCommand::Launch(options))
}

fn launch(options: CliOptions) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = options.config.clone().or_else(Config::default_path);
    let mut config = match &config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.apply_env(|key| env::var(key).ok());
    if options.skip_boot {
        config.boot.skip = true;
    }

    if let Some(log_dir) = config.log_dir() {
        if let Err(err) = logging::init_logging(&config.logging.level, &log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }
    log::info!(
        "event=config_loaded path={} delivery={} relay_configured={} skip_boot={}",
        config_path
            .as_deref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "<none>".to_string()),
        config.contact.delivery.label(),
        config.contact.relay.has_credentials(),
        config.boot.skip
    );

    let state = ConsoleState::new(&config);
    let result = ui::run(state, &config, options.seed);
    if let Some((_, dir)) = logging::logging_status() {
        log::info!("event=app_exit ok={} log_dir={}", result.is_ok(), dir.display());
    }
    result
}

fn print_help() {
    println!(
        "scc {}\n\
         Server Control Center: an animated developer portfolio for the terminal.\n\n\
         Usage:\n  \
         scc [--config PATH] [--seed N] [--skip-boot]\n  \
         scc --help | --version\n\n\
         Options:\n  \
         --config PATH   read settings from PATH instead of the default location\n  \
         --seed N        seed the telemetry simulator for a repeatable session\n  \
         --skip-boot     open the command center without the boot animation\n\n\
         Environment:\n  \
         SCC_RELAY_SERVICE_ID, SCC_RELAY_TEMPLATE_ID, SCC_RELAY_PUBLIC_KEY   mail relay credentials\n  \
         SCC_LOG         log level (trace|debug|info|warn|error|off)\n\n\
         Keys:\n  \
         Tab/Shift-Tab switch sections, 1-6 jump, n notifications, ? help, q quit",
        env!("CARGO_PKG_VERSION")
    );
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    fn launch_options(values: &[&str]) -> CliOptions {
        match parse_args(args(values)).unwrap() {
            CliCommand::Launch(options) => options,
            _ => panic!("expected launch"),
        }
    }

    #[test]
    fn no_arguments_launches_with_defaults() {
        assert_eq!(launch_options(&[]), CliOptions::default());
    }

    #[test]
    fn flags_are_collected() {
        assert_eq!(
            launch_options(&["--seed", "42", "--skip-boot", "--config", "/tmp/scc.toml"]),
            CliOptions {
                config: Some(PathBuf::from("/tmp/scc.toml")),
                seed: Some(42),
                skip_boot: true,
            }
        );
    }

    #[test]
    fn help_wins_over_other_flags() {
        assert!(matches!(
            parse_args(args(&["--skip-boot", "--help"])).unwrap(),
            CliCommand::Help
        ));
    }

    #[test]
    fn bad_arguments_are_errors() {
        assert!(parse_args(args(&["--seed", "many"])).is_err());
        assert!(parse_args(args(&["--config"])).is_err());
        assert!(parse_args(args(&["serve"])).is_err());
    }
}
