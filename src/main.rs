use cidr_ip_matcher::config::{Config, LOG_CONFIG_FILE};
use cidr_ip_matcher::logging::init_logging;
use cidr_ip_matcher::output::print_report;
use cidr_ip_matcher::Matcher;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging(LOG_CONFIG_FILE)?;
    log::info!("#Start main()");

    let matcher = Matcher::load(Config::default()).map_err(|e| {
        log::error!("failed to initialize matcher: {e}");
        e
    })?;
    let report = matcher.matching();
    print_report(&report);

    Ok(())
}
