//! Main `cache-expiry` executable, to be used as cli tool. For help run this
//! command with `-h`.
//!
//! Headers may be given with dedicated options, as raw lines or through
//! stdin, eg. `curl -sI https://example.com/ | cache-expiry --stdin`.

#![warn(missing_docs)]

use anyhow::{Context, Error};
use cache_expiry::{
    clock::FixedClock,
    expires::parse_http_date,
    resolver::{Resolver, resolve_expiry},
};
use cache_expiry_cli::{
    header_line::{parse_header_line, read_header_lines},
    output::Format,
};
use clap::Parser;
use http::{HeaderMap, HeaderValue, header};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::io::stdin;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Arguments {
    /// Value of `expires` header.
    #[arg(long)]
    pub expires: Option<String>,

    /// Value of `cache-control` header.
    #[arg(long)]
    pub cache_control: Option<String>,

    /// Raw header line, eg. `Cache-Control: max-age=60`. May be repeated.
    #[arg(long = "header", short = 'H')]
    pub headers: Vec<String>,

    /// Read raw header lines (eg. `curl -I` output) from stdin. Status line
    /// and blank lines are skipped.
    #[arg(long)]
    pub stdin: bool,

    /// Evaluate as of given http date instead of current time.
    #[arg(long)]
    pub now: Option<String>,

    /// Output format of resolved timestamp.
    #[arg(long, value_enum, default_value_t = Format::HttpDate)]
    pub format: Format,
}
impl Arguments {
    /// Collects headers from all sources, in order: stdin, `--header`,
    /// `--expires` and `--cache-control`.
    pub fn headers(&self) -> Result<HeaderMap, Error> {
        let mut headers = if self.stdin {
            read_header_lines(stdin().lock()).context("stdin")?
        } else {
            HeaderMap::new()
        };

        for header_line in &self.headers {
            let (name, value) = parse_header_line(header_line)?;
            headers.append(name, value);
        }

        if let Some(expires) = &self.expires {
            headers.append(
                header::EXPIRES,
                HeaderValue::from_str(expires).context("expires")?,
            );
        }
        if let Some(cache_control) = &self.cache_control {
            headers.append(
                header::CACHE_CONTROL,
                HeaderValue::from_str(cache_control).context("cache control")?,
            );
        }

        Ok(headers)
    }
}

fn main() -> Result<(), Error> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    let arguments = Arguments::parse();

    let headers = arguments.headers()?;
    log::debug!("resolving expiry for {headers:?}");

    let expiry = match &arguments.now {
        Some(now) => {
            let now = parse_http_date(now).context("now")?;
            Resolver::new(FixedClock::new(now)).resolve(&headers)
        }
        None => resolve_expiry(&headers),
    };

    println!("{}", arguments.format.format(&expiry));

    Ok(())
}
