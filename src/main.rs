//! sterile - Clean up text for the web

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use sterile::markup::{Span, spans};
use sterile::util::{read_text, read_text_file, resolve_encoding};
use sterile::{
    SlugOptions, StrExt, StripOptions, TransliterateOptions, scan_text, sluggerize_with,
    strip_tags_with,
};

#[derive(Parser)]
#[command(name = "sterile")]
#[command(version, about = "Clean up text for the web", long_about = None)]
#[command(after_help = "EXAMPLES:
    sterile transliterate 'Straße'          Print 'Strasse'
    sterile slug 'Hello world!'             Print 'hello-world'
    sterile smart --html -f page.html       Curl the quotes in an HTML page
    echo '<b>hi</b>' | sterile strip        Read from stdin")]
struct Cli {
    /// Log more (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

/// Where the text comes from.
#[derive(Args)]
struct Input {
    /// Text to process (reads stdin when omitted)
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Encoding to try when file or stdin input is not valid UTF-8
    #[arg(short, long, value_name = "LABEL")]
    encoding: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate Unicode to plain ASCII
    Transliterate {
        #[command(flatten)]
        input: Input,

        /// Prefer visual lookalikes over phonetic renderings
        #[arg(long)]
        optical: bool,
    },

    /// Encode non-ASCII characters as HTML entities
    Encode {
        #[command(flatten)]
        input: Input,
    },

    /// Decode HTML entities
    Decode {
        #[command(flatten)]
        input: Input,
    },

    /// Remove HTML/XML tags
    Strip {
        #[command(flatten)]
        input: Input,

        /// Keep whitespace as-is instead of collapsing it
        #[arg(long)]
        keep_whitespace: bool,

        /// Drop CDATA sections instead of keeping their content
        #[arg(long)]
        drop_cdata: bool,
    },

    /// Print the text between tags, one span per line
    Scan {
        #[command(flatten)]
        input: Input,

        /// Emit a JSON array instead
        #[arg(long)]
        json: bool,

        /// Include tags in the JSON output as {"tag": ...} objects
        #[arg(long, requires = "json")]
        tags: bool,
    },

    /// Curly quotes, dashes and ellipses
    Smart {
        #[command(flatten)]
        input: Input,

        /// Only rewrite text between tags and entity-encode the result
        #[arg(long)]
        html: bool,
    },

    /// Turn typographic glyphs back into ASCII
    Plain {
        #[command(flatten)]
        input: Input,

        /// Only rewrite text between tags
        #[arg(long)]
        html: bool,
    },

    /// Title-case the text
    Titlecase {
        #[command(flatten)]
        input: Input,
    },

    /// Transliterate and strip tags
    Sterilize {
        #[command(flatten)]
        input: Input,
    },

    /// Make a URL slug
    Slug {
        #[command(flatten)]
        input: Input,

        /// Word delimiter
        #[arg(short, long, default_value = "-")]
        delimiter: String,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Transliterate { .. } => "transliterate",
            Command::Encode { .. } => "encode",
            Command::Decode { .. } => "decode",
            Command::Strip { .. } => "strip",
            Command::Scan { .. } => "scan",
            Command::Smart { .. } => "smart",
            Command::Plain { .. } => "plain",
            Command::Titlecase { .. } => "titlecase",
            Command::Sterilize { .. } => "sterilize",
            Command::Slug { .. } => "slug",
        }
    }

    fn input(&self) -> &Input {
        match self {
            Command::Transliterate { input, .. }
            | Command::Encode { input }
            | Command::Decode { input }
            | Command::Strip { input, .. }
            | Command::Scan { input, .. }
            | Command::Smart { input, .. }
            | Command::Plain { input, .. }
            | Command::Titlecase { input }
            | Command::Sterilize { input }
            | Command::Slug { input, .. } => input,
        }
    }
}

/// One span of `scan --json --tags` output.
#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum JsonSpan<'a> {
    Tag(&'a str),
    Text(&'a str),
}

impl<'a> From<Span<'a>> for JsonSpan<'a> {
    fn from(span: Span<'a>) -> Self {
        match span {
            Span::Tag(tag) => JsonSpan::Tag(tag),
            Span::Text(text) => JsonSpan::Text(text),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(command: &Command) -> sterile::Result<()> {
    let text = read_input(command.input())?;
    log::info!("{}: {} bytes of input", command.name(), text.len());

    let output = match command {
        Command::Transliterate { optical, .. } => {
            text.transliterate_with(TransliterateOptions::new().with_optical(*optical))
        }
        Command::Encode { .. } => text.encode_entities(),
        Command::Decode { .. } => text.decode_entities(),
        Command::Strip {
            keep_whitespace,
            drop_cdata,
            ..
        } => strip_tags_with(
            &text,
            StripOptions::new()
                .with_keep_whitespace(*keep_whitespace)
                .with_keep_cdata(!*drop_cdata),
        ),
        Command::Scan { json, tags, .. } => return print_scan(&text, *json, *tags),
        Command::Smart { html: true, .. } => text.smart_format_tags(),
        Command::Smart { html: false, .. } => text.smart_format(),
        Command::Plain { html: true, .. } => text.plain_format_tags(),
        Command::Plain { html: false, .. } => text.plain_format(),
        Command::Titlecase { .. } => text.titlecase(),
        Command::Sterilize { .. } => text.sterilize(),
        Command::Slug { delimiter, .. } => {
            sluggerize_with(&text, &SlugOptions::new().with_delimiter(delimiter.as_str()))
        }
    };

    log::debug!("{}: {} bytes of output", command.name(), output.len());
    println!("{output}");
    Ok(())
}

/// The text argument, or the decoded contents of a file or stdin.
///
/// A single trailing newline is removed from file and stdin input.
fn read_input(input: &Input) -> sterile::Result<String> {
    if let Some(label) = &input.encoding {
        let encoding = resolve_encoding(label)?;
        log::debug!("non-UTF-8 input will be decoded as {}", encoding.name());
    }
    let hint = input.encoding.as_deref();

    let mut text = match (&input.text, &input.file) {
        (Some(text), _) => return Ok(text.clone()),
        (None, Some(path)) => {
            log::debug!("reading {}", path.display());
            read_text_file(path, hint)?
        }
        (None, None) => read_text(io::stdin().lock(), hint)?,
    };

    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}

fn print_scan(text: &str, json: bool, tags: bool) -> sterile::Result<()> {
    let mut out = io::stdout().lock();

    if !json {
        for part in scan_text(text) {
            writeln!(out, "{part}")?;
        }
        return Ok(());
    }

    if tags {
        let parts: Vec<JsonSpan> = spans(text).map(JsonSpan::from).collect();
        serde_json::to_writer(&mut out, &parts).map_err(io::Error::from)?;
    } else {
        let parts: Vec<&str> = scan_text(text).collect();
        serde_json::to_writer(&mut out, &parts).map_err(io::Error::from)?;
    }
    writeln!(out)?;
    Ok(())
}
