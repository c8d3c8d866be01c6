use core::fmt;
use std::fs::OpenOptions;
use std::sync::Once;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::fmt::format::{self, FormatEvent, FormatFields};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, fmt as tracingfmt};

/// Column-aligned event formatter: `LEVEL [crate/module] file.rs:line: message`.
/// An optional `nac` field is lifted out of the message and shown as a prefix.
struct AlignedFormatter;

struct NacVisitor {
    nac: Option<String>,
}

impl tracing::field::Visit for NacVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "nac" {
            self.nac = Some(format!("{:?}", value));
        }
    }
}

/// "crates/p25-pdus/src/pdu/ambtc/mod.rs" becomes "[pdus/pdu] mod.rs"
fn shorten_source_path(file_path: &str) -> String {
    let Some(src_idx) = file_path.find("/src/") else {
        return file_path.to_string();
    };
    let before_src = &file_path[..src_idx];
    let after_src = &file_path[src_idx + 5..];

    let crate_name = if let Some(p25_idx) = before_src.rfind("p25-") {
        &before_src[p25_idx + 4..]
    } else {
        before_src.rsplit('/').next().unwrap_or("unknown")
    };

    if let Some(last_slash) = after_src.rfind('/') {
        let first_module = after_src[..last_slash].split('/').next().unwrap_or("");
        format!("[{}/{}] {}", crate_name, first_module, &after_src[last_slash + 1..])
    } else {
        format!("[{}] {}", crate_name, after_src)
    }
}

/// Removes the `nac=<value>` field the formatter already shows as a prefix
fn strip_nac_field(message_buf: &mut String) {
    let Some(nac_idx) = message_buf.find("nac=") else {
        return;
    };
    match message_buf[nac_idx..].find(' ') {
        Some(space_idx) => message_buf.replace_range(nac_idx..nac_idx + space_idx + 1, ""),
        None => message_buf.truncate(nac_idx),
    }
}

impl<S, N> FormatEvent<S, N> for AlignedFormatter
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(&self, ctx: &FmtContext<'_, S, N>, mut writer: format::Writer<'_>, event: &tracing::Event<'_>) -> fmt::Result {
        let metadata = event.metadata();

        let mut visitor = NacVisitor { nac: None };
        event.record(&mut visitor);
        let has_nac = visitor.nac.is_some();
        let nac_str = visitor.nac.map(|n| format!("NAC:{:<5}", n)).unwrap_or_else(|| " ".repeat(9));

        let (color_level, color_reset) = match *metadata.level() {
            tracing::Level::ERROR => ("\x1b[31m", "\x1b[0m"),
            tracing::Level::WARN => ("\x1b[33m", "\x1b[0m"),
            tracing::Level::INFO => ("\x1b[32m", "\x1b[0m"),
            tracing::Level::DEBUG => ("\x1b[34m", "\x1b[0m"),
            tracing::Level::TRACE => ("\x1b[35m", "\x1b[0m"),
        };

        let location = format!(
            "{}{:<5}{} {} {}:{}:",
            color_level,
            metadata.level(),
            color_reset,
            nac_str,
            shorten_source_path(metadata.file().unwrap_or("unknown")),
            metadata.line().unwrap_or(0)
        );

        let mut message_buf = String::new();
        let message_writer = format::Writer::new(&mut message_buf);
        ctx.field_format().format_fields(message_writer, event)?;

        if has_nac {
            strip_nac_field(&mut message_buf);
        }

        write!(writer, "{:<width$} {}", location, message_buf.trim_end(), width = 70)?;
        writeln!(writer)
    }
}

static INIT_LOG: Once = Once::new();

/// Sets up logging with maximum verbosity (trace level)
/// Mainly for unit tests
pub fn setup_logging_verbose() {
    setup_logging(EnvFilter::new("trace"), None);
}

/// Sets up default logging to stdout and optionally, a verbose log file
/// Returns a guard, that needs to be kept alive for logging to file to work
pub fn setup_logging_default(verbose_logfile: Option<String>) -> Option<WorkerGuard> {
    let stdout_filter = get_default_stdout_filter();
    let logfile_and_filter = verbose_logfile.map(|file| (file, get_default_logfile_filter()));
    setup_logging(stdout_filter, logfile_and_filter)
}

pub fn get_default_stdout_filter() -> EnvFilter {
    EnvFilter::new("info")
        // Decoders log unknown opcodes at debug, dropped blocks at warn
        .add_directive("p25_pdus::lc=info".parse().unwrap())
        .add_directive("p25_pdus::tsbk=info".parse().unwrap())
        .add_directive("p25_pdus::pdu=debug".parse().unwrap())
}

fn get_default_logfile_filter() -> EnvFilter {
    EnvFilter::new("debug")
}

/// Sets up logging to stdout and optionally, a verbose log file
/// If an output file is requested, returns Some<WorkerGuard>. Keep this value alive
/// or logging to file may cease working. If no output file is provided, returns None.
fn setup_logging(stdout_filter: EnvFilter, outfile: Option<(String, EnvFilter)>) -> Option<WorkerGuard> {
    if let Some((outfile, outfile_filter)) = outfile {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(outfile)
            .expect("Failed to open log file");
        let (file_writer, guard) = tracing_appender::non_blocking(file);

        INIT_LOG.call_once(|| {
            let file_layer = tracingfmt::layer()
                .event_format(AlignedFormatter)
                .with_writer(file_writer)
                .with_ansi(false);
            let stdout_layer = tracingfmt::layer().event_format(AlignedFormatter);

            tracing_subscriber::registry()
                .with(file_layer.with_filter(outfile_filter))
                .with(stdout_layer.with_filter(stdout_filter))
                .init();
        });

        Some(guard)
    } else {
        INIT_LOG.call_once(|| {
            let stdout_layer = tracingfmt::layer().event_format(AlignedFormatter);
            tracing_subscriber::registry()
                .with(stdout_layer.with_filter(stdout_filter))
                .init();
        });
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_source_path() {
        assert_eq!(shorten_source_path("crates/p25-pdus/src/pdu/ambtc/mod.rs"), "[pdus/pdu] mod.rs");
        assert_eq!(shorten_source_path("crates/p25-core/src/bit_message.rs"), "[core] bit_message.rs");
        assert_eq!(shorten_source_path("main.rs"), "main.rs");
    }

    #[test]
    fn test_strip_nac_field() {
        let mut buf = String::from("nac=659 unknown ambtc opcode 0x3F");
        strip_nac_field(&mut buf);
        assert_eq!(buf, "unknown ambtc opcode 0x3F");

        // field rendered last
        let mut buf = String::from("unknown lc opcode 0x3F nac=659");
        strip_nac_field(&mut buf);
        assert_eq!(buf, "unknown lc opcode 0x3F ");

        let mut buf = String::from("sequence block 1/2");
        strip_nac_field(&mut buf);
        assert_eq!(buf, "sequence block 1/2");
    }
}
