/*
 * Neural Field
 *
 * Animated "neural network" background for a portfolio page: a field of
 * drifting nodes joined by faint edges whenever two of them come close,
 * with the page content, navigation, theme toggle and a contact form on top.
 */

use clap::Parser;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

use neural_field::app;
use neural_field::{AppConfig, Cli};

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,neural_field=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let cli = Cli::parse();
    let config = match AppConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "invalid configuration");
            std::process::exit(2);
        }
    };
    app::set_config(config);

    nannou::app(app::model).update(app::update).run();
}
