//! Command-line interface for deep link grammars
//! Runs the demo application grammar against a link that has already been split into path
//! segments and query pairs, and prints where the link leads as JSON.
//!
//! Usage:
//!   deeplink `<segment>...` [--query `<key=value>`]... [--scheme] [--partial]
//!   deeplink `<segment>...` --config `<file>` [--strategy whole|first|prefix]

mod grammar;

use clap::{Arg, ArgAction, ArgMatches, Command};
use deeplink_config::{DeepLinkConfig, Loader};
use deeplink_parser::{Cursor, LinkKind, MatchStrategy};
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("deeplink")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Match a decomposed deep link against the demo application grammar")
        .arg(
            Arg::new("segments")
                .help("Path segments in order; with --scheme the first one is the host")
                .action(ArgAction::Append)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("query")
                .long("query")
                .short('q')
                .help("Query entry as KEY=VALUE (repeatable)")
                .action(ArgAction::Append)
                .value_parser(parse_query_entry),
        )
        .arg(
            Arg::new("scheme")
                .long("scheme")
                .help("Treat the link as scheme-based instead of universal")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("strategy")
                .long("strategy")
                .help("How patterns are applied to segments (overrides patterns.strategy)")
                .value_parser(["whole", "first", "prefix"]),
        )
        .arg(
            Arg::new("partial")
                .long("partial")
                .help("Accept links with unmatched segments or query entries")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    init_logging(&config);
    handle_parse_command(&matches, &config);
}

/// Split `KEY=VALUE` at the first `=`. The value may be empty, the key may not.
fn parse_query_entry(entry: &str) -> Result<(String, String), String> {
    match entry.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{}'", entry)),
    }
}

fn load_config(matches: &ArgMatches) -> Result<DeepLinkConfig, deeplink_config::ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(strategy) = matches.get_one::<String>("strategy") {
        loader = loader.set_override("patterns.strategy", strategy.as_str())?;
    }
    loader.build()
}

fn init_logging(config: &DeepLinkConfig) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Build the cursor a URL decomposer would have produced for these arguments.
fn build_cursor(segments: &[String], query: &[(String, String)], scheme: bool) -> Cursor {
    let mut original = if scheme {
        format!("app://{}", segments.join("/"))
    } else {
        format!("https://www.app.com/{}", segments.join("/"))
    };
    if !query.is_empty() {
        let pairs: Vec<String> = query.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        original.push('?');
        original.push_str(&pairs.join("&"));
    }

    let kind = if scheme {
        LinkKind::SchemeBased
    } else {
        LinkKind::Universal
    };
    // Universal link paths are rooted, so splitting them yields a leading "/" segment.
    let root = (!scheme).then(|| "/".to_string());
    let path = root.into_iter().chain(segments.iter().cloned());
    Cursor::new(original, kind, path, query.iter().cloned())
}

/// Handle the parse command
fn handle_parse_command(matches: &ArgMatches, config: &DeepLinkConfig) {
    let segments: Vec<String> = matches
        .get_many::<String>("segments")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let query: Vec<(String, String)> = matches
        .get_many::<(String, String)>("query")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let strategy: MatchStrategy = config.patterns.strategy;

    let mut cursor = build_cursor(&segments, &query, matches.get_flag("scheme"));
    config.preprocessing.apply(&mut cursor);
    debug!(%cursor, %strategy, "parsing link");

    let destination =
        grammar::parse_destination(cursor, strategy, matches.get_flag("partial"))
            .unwrap_or_else(|e| {
                eprintln!("Parse error: {}", e);
                std::process::exit(1);
            });

    let json = serde_json::to_string_pretty(&destination).unwrap_or_else(|e| {
        eprintln!("Error formatting destination: {}", e);
        std::process::exit(1);
    });
    println!("{}", json);
}
