use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

/// Initializes process-wide logging with a console appender at `info`.
///
/// Later calls leave the first configuration in place, so tests can call
/// this freely.
///
/// # Errors
/// Returns an error if the logging configuration cannot be built.
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    let encoder = Box::new(PatternEncoder::new("{d(%Y-%m-%d %H:%M:%S%.3f)} [{l}] {t} - {m}{n}"));
    let stdout = ConsoleAppender::builder().encoder(encoder).build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info))?;
    let _ = log4rs::init_config(config);
    Ok(())
}
