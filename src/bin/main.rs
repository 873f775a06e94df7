use letter_register::{cli, config, telemetry};

fn main() {
    let cli = cli::parse_from(std::env::args_os());

    let cfg = if config::config_path().exists() {
        match config::load() {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("config load failed, using defaults: {e}");
                config::Config::default()
            }
        }
    } else {
        config::Config::default()
    };
    telemetry::init(telemetry::TelemetryConfig::new(
        cli.verbose,
        cli.quiet,
        cfg.logging,
    ));

    if let Err(e) = cli::run(cli) {
        tracing::error!("error: {}", e);
        std::process::exit(1);
    }
}
