use std::io::Write;

/// Initialise the env_logger backend.
///
/// `RUST_LOG` takes precedence over the `debug` flag. Calling this more than once is
/// harmless; only the first call installs the logger.
pub fn init_logging(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} [{}] {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.module_path().unwrap_or("unknown"),
                record.args()
            )
        })
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logging_twice_does_not_panic() {
        init_logging(true);
        init_logging(false);
        log::debug!("logger installed");
    }
}
