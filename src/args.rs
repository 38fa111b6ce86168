use std::path::PathBuf;
use clap::{Arg, ArgMatches, Command};
use crate::config::{Args, SitemapConfig, BASE_DOMAIN, MAX_URLS_PER_SITEMAP, SITEMAP_FOLDER};
use crate::io::print_error;

/// Upper bound on URLs in one sitemap file set by the sitemaps.org protocol.
const PROTOCOL_MAX_URLS: u64 = 50_000;

fn command() -> Command {
    Command::new("smapgen")
        .version("0.1.0")
        .about("Generate split XML sitemaps and a sitemap index for every HTML file in a directory tree.")
        .arg(
            Arg::new("source")
                .short('s')
                .long("source")
                .value_parser(clap::value_parser!(String))
                .value_name("SOURCE_DIR")
                .help("Directory to scan for .html files (defaults to current directory if not provided)"),
        )
        .arg(
            Arg::new("base-url")
                .short('b')
                .long("base-url")
                .value_parser(clap::value_parser!(String))
                .value_name("BASE_URL")
                .default_value(BASE_DOMAIN)
                .help("Domain prefixed to every URL"),
        )
        .arg(
            Arg::new("max-urls")
                .short('m')
                .long("max-urls")
                .value_parser(clap::value_parser!(u64).range(1..=PROTOCOL_MAX_URLS))
                .value_name("COUNT")
                .help("Maximum number of URLs per sitemap file (defaults to 500)"),
        )
        .arg(
            Arg::new("folder")
                .short('f')
                .long("folder")
                .value_parser(clap::value_parser!(String))
                .value_name("FOLDER")
                .default_value(SITEMAP_FOLDER)
                .help("Output subfolder, created under the source directory"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(clap::ArgAction::SetTrue)
                .help("Enables verbose output"),
        )
}

/// parse command line arguments
pub fn parse_args() -> Args {
    args_from_matches(&command().get_matches())
}

fn args_from_matches(matches: &ArgMatches) -> Args {
    let source_dir_str = matches
        .get_one::<String>("source")
        .cloned()
        .unwrap_or_else(|| {
            std::env::current_dir()
                .map(|p| p.to_string_lossy().to_string())
                .unwrap_or_else(|_| {
                    print_error("Unable to determine the current directory.");
                    std::process::exit(1);
                })
        });

    let base_url = matches
        .get_one::<String>("base-url")
        .map(String::as_str)
        .unwrap_or(BASE_DOMAIN);
    let max_urls = matches
        .get_one::<u64>("max-urls")
        .map(|n| *n as usize)
        .unwrap_or(MAX_URLS_PER_SITEMAP);
    let folder = matches
        .get_one::<String>("folder")
        .map(String::as_str)
        .unwrap_or(SITEMAP_FOLDER);

    Args {
        source: PathBuf::from(source_dir_str),
        config: SitemapConfig::new(base_url, max_urls, folder),
        verbose: matches.get_flag("verbose"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        let matches = command().try_get_matches_from(argv).unwrap();
        args_from_matches(&matches)
    }

    #[test]
    fn defaults_match_compiled_constants() {
        let args = parse(&["smapgen", "-s", "site"]);
        assert_eq!(args.source, PathBuf::from("site"));
        assert_eq!(args.config, SitemapConfig::default());
        assert!(!args.verbose);
    }

    #[test]
    fn overrides_are_applied() {
        let args = parse(&[
            "smapgen", "--source", "public", "--base-url", "https://example.org/",
            "--max-urls", "100", "--folder", "maps", "-v",
        ]);
        assert_eq!(args.source, PathBuf::from("public"));
        assert_eq!(args.config.base_domain, "https://example.org");
        assert_eq!(args.config.max_urls_per_sitemap, 100);
        assert_eq!(args.config.sitemap_folder, "maps");
        assert!(args.verbose);
    }

    #[test]
    fn source_defaults_to_current_directory() {
        let args = parse(&["smapgen"]);
        assert_eq!(args.source, std::env::current_dir().unwrap());
    }

    #[test]
    fn max_urls_outside_protocol_range_is_rejected() {
        assert!(command().try_get_matches_from(["smapgen", "-m", "0"]).is_err());
        assert!(command().try_get_matches_from(["smapgen", "-m", "50001"]).is_err());
    }
}
