mod args;
mod config;
mod io;
mod site_map;
mod sitemap;

use std::io as stdio;

use crate::args::parse_args;
use crate::config::Args;
use crate::io::{ensure_output_dir, print_error, print_info};
use crate::site_map::collect_html_paths;
use crate::sitemap::{chunk_count, write_sitemap_index, write_sitemaps};

const NO_HTML_NOTICE: &str = "No HTML files found.";

#[derive(Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub url_count: usize,
    pub sitemap_count: usize,
}

fn main() {
    let args = parse_args();

    if args.verbose {
        print_info("Verbose mode enabled.");
        print_info(&format!("Source directory: {}", args.source.display()));
        print_info(&format!("Base URL: {}", args.config.base_domain));
    }

    if let Err(e) = run(&args) {
        print_error(&format!("Sitemap generation failed: {}", e));
        std::process::exit(1);
    }
}

fn run(args: &Args) -> stdio::Result<RunSummary> {
    let config = &args.config;
    config.validate()?;

    let output_dir = args.source.join(&config.sitemap_folder);
    ensure_output_dir(&output_dir, args.verbose)?;

    let url_paths = collect_html_paths(&args.source, args.verbose)?;
    if url_paths.is_empty() {
        println!("{}", NO_HTML_NOTICE);
        return Ok(RunSummary { url_count: 0, sitemap_count: 0 });
    }

    if args.verbose {
        print_info(&format!(
            "Identified {} HTML files, splitting into {} sitemap(s).",
            url_paths.len(),
            chunk_count(url_paths.len(), config.max_urls_per_sitemap)
        ));
    }

    let filenames = write_sitemaps(config, &output_dir, &url_paths, args.verbose)?;
    write_sitemap_index(config, &output_dir, &filenames)?;

    println!(
        "Generated {} sitemap(s) and sitemap_index.xml in '{}/'",
        filenames.len(),
        config.sitemap_folder
    );

    Ok(RunSummary {
        url_count: url_paths.len(),
        sitemap_count: filenames.len(),
    })
}
