//! Command implementations for the autocorrect CLI.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use log::{debug, info, warn};

use crate::cli::args::{AutocorrectArgs, OutputFormat, USAGE};
use crate::cli::output::write_suggestions;
use crate::error::{AutocorrectError, Result};
use crate::spelling::suggest::Autocorrector;
use crate::spelling::trie::WordIndex;

/// Diagnostic written when the REPL cannot read its input.
pub const REPL_ERROR: &str = "ERROR: Invalid input for REPL";

/// Execute a CLI invocation. No web front-end is built: `--gui` only logs a
/// warning, and `--gui` without `--data` exits successfully.
pub fn execute_command(args: AutocorrectArgs) -> Result<()> {
    if args.gui {
        warn!(
            "No web front-end is built into this binary; ignoring --gui (port {})",
            args.port
        );
    }

    if !args.has_data() {
        if args.gui {
            return Ok(());
        }
        println!("ERROR: usage");
        println!("{USAGE}");
        return Err(AutocorrectError::usage("--data is required"));
    }

    let config = args.suggest_config()?;
    info!(
        "Suggestion settings: prefix={} whitespace={} led={} max={}",
        config.prefix, config.whitespace, config.max_edit_distance, config.max_suggestions
    );

    let start_time = Instant::now();
    let index = WordIndex::from_corpus_files(&args.data);
    info!(
        "Built index from {} corpus file(s) in {} ms",
        args.data.len(),
        start_time.elapsed().as_millis()
    );

    let autocorrector = Autocorrector::new(index, config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_repl(&autocorrector, stdin.lock(), stdout.lock(), args.output_format)
}

/// Answer every line of `reader` with its suggestions until EOF.
///
/// Lines are decoded lossily, so bytes that are not valid UTF-8 become
/// separators like any other non-letter. An I/O failure while reading
/// writes [`REPL_ERROR`] and ends the loop without an error. Failures to
/// write are returned.
pub fn run_repl<R: BufRead, W: Write>(
    autocorrector: &Autocorrector,
    mut reader: R,
    mut writer: W,
    format: OutputFormat,
) -> Result<()> {
    let mut line = Vec::new();
    loop {
        line.clear();
        match reader.read_until(b'\n', &mut line) {
            Ok(0) => break,
            Ok(_) => {
                let suggestions = autocorrector.suggest(&String::from_utf8_lossy(&line));
                write_suggestions(&mut writer, &suggestions, format)?;
            }
            Err(e) => {
                debug!("REPL read failed: {e}");
                writeln!(writer, "{REPL_ERROR}")?;
                break;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Read};

    use super::*;
    use crate::spelling::suggest::SuggestConfig;

    fn autocorrector(config: SuggestConfig) -> Autocorrector {
        let index: WordIndex = ["apple", "apply", "ape", "bat", "bats", "batman", "cat"]
            .iter()
            .collect();
        Autocorrector::new(index, config)
    }

    fn repl(config: SuggestConfig, input: &[u8], format: OutputFormat) -> String {
        let mut out = Vec::new();
        run_repl(&autocorrector(config), Cursor::new(input), &mut out, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_repl_lines() {
        let config = SuggestConfig::default().with_prefix(true);
        let output = repl(config, b"ap\nhello ap\n\n!!!\nzzz\nbatm", OutputFormat::Human);
        assert_eq!(
            output,
            "ape\napple\napply\nhello ape\nhello apple\nhello apply\nbatman\n"
        );
    }

    #[test]
    fn test_repl_json() {
        let config = SuggestConfig::default().with_max_edit_distance(1);
        let output = repl(config, b"aple\nzzzz\n", OutputFormat::Json);
        assert_eq!(output, "[\"ape\",\"apple\"]\n[]\n");
    }

    #[test]
    fn test_repl_empty_input() {
        let config = SuggestConfig::default().with_prefix(true);
        assert_eq!(repl(config, b"", OutputFormat::Human), "");
    }

    #[test]
    fn test_repl_invalid_utf8_separates_tokens() {
        let config = SuggestConfig::default().with_prefix(true);
        let output = repl(config, b"ap\n\xff\xfe\nbat\xe9\ncat\n", OutputFormat::Human);
        assert_eq!(output, "ape\napple\napply\nbat\nbatman\nbats\ncat\n");
    }

    #[test]
    fn test_repl_accented_byte_ends_token() {
        let index: WordIndex = ["cafe", "caf", "cat"].iter().collect();
        let autocorrector = Autocorrector::new(index, SuggestConfig::default().with_prefix(true));
        let mut out = Vec::new();
        run_repl(
            &autocorrector,
            Cursor::new(&b"caf\xe9\ncat\n"[..]),
            &mut out,
            OutputFormat::Human,
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "caf\ncafe\ncat\n");
    }

    struct FailingReader;

    impl io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin closed"))
        }
    }

    #[test]
    fn test_repl_read_error_writes_diagnostic() {
        let config = SuggestConfig::default().with_prefix(true);
        let reader = io::Cursor::new(&b"ap\n"[..]).chain(FailingReader);
        let mut out = Vec::new();
        run_repl(&autocorrector(config), io::BufReader::new(reader), &mut out, OutputFormat::Human)
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("ape\napple\napply\n{REPL_ERROR}\n")
        );
    }

    #[test]
    fn test_missing_data_is_usage_error() {
        use clap::Parser;

        let args = AutocorrectArgs::try_parse_from(["autocorrect", "--prefix"]).unwrap();
        assert!(matches!(
            execute_command(args),
            Err(AutocorrectError::Usage(_))
        ));

        let args = AutocorrectArgs::try_parse_from(["autocorrect", "--gui"]).unwrap();
        assert!(execute_command(args).is_ok());
    }
}
