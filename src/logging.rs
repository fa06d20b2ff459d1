use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use env_logger::{Builder, Env, Target};

/// Route the `log` facade to an append-mode file.
///
/// One `<timestamp> - <LEVEL> - <message>` line per record. The filter
/// defaults to `info` and can be overridden through `RUST_LOG`.
pub fn init_logging(log_file: &Path) -> std::io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(log_file)?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                buf.timestamp_seconds(),
                record.level(),
                record.args()
            )
        })
        .init();

    Ok(())
}
