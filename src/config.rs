use std::{io, path::PathBuf};

/// Domain every URL in the generated sitemaps is rooted at.
pub const BASE_DOMAIN: &str = "https://tha.hitools.space";
pub const MAX_URLS_PER_SITEMAP: usize = 500;
/// Output subfolder, also used as the URL segment in the index.
pub const SITEMAP_FOLDER: &str = "sitemaps";

pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
pub const SITEMAP_INDEX_FILENAME: &str = "sitemap_index.xml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapConfig {
    pub base_domain: String,
    pub max_urls_per_sitemap: usize,
    pub sitemap_folder: String,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        SitemapConfig {
            base_domain: BASE_DOMAIN.to_string(),
            max_urls_per_sitemap: MAX_URLS_PER_SITEMAP,
            sitemap_folder: SITEMAP_FOLDER.to_string(),
        }
    }
}

impl SitemapConfig {
    pub fn new(base_domain: &str, max_urls_per_sitemap: usize, sitemap_folder: &str) -> Self {
        SitemapConfig {
            base_domain: base_domain.trim_end_matches('/').to_string(),
            max_urls_per_sitemap,
            sitemap_folder: sitemap_folder.to_string(),
        }
    }

    pub fn validate(&self) -> io::Result<()> {
        if self.base_domain.is_empty() {
            return Err(invalid_input("Base URL must not be empty."));
        }
        if self.max_urls_per_sitemap == 0 {
            return Err(invalid_input("Maximum URLs per sitemap must be at least 1."));
        }
        if self.sitemap_folder.is_empty() {
            return Err(invalid_input("Sitemap folder name must not be empty."));
        }
        Ok(())
    }

    /// `<base>/<url_path>`, the text of a sitemap `loc` element.
    pub fn page_url(&self, url_path: &str) -> String {
        format!("{}/{}", self.base_domain, url_path)
    }

    /// `<base>/<folder>/<filename>`, the text of an index `loc` element.
    pub fn sitemap_url(&self, filename: &str) -> String {
        format!("{}/{}/{}", self.base_domain, self.sitemap_folder, filename)
    }
}

fn invalid_input(message: &str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, message.to_string())
}

#[derive(Debug)]
pub struct Args {
    pub source: PathBuf,
    pub config: SitemapConfig,
    pub verbose: bool,
}

pub const COLOR_RED: &str = "\x1b[31m";
pub const COLOR_YELLOW: &str = "\x1b[33m";
pub const COLOR_CYAN: &str = "\x1b[36m";
pub const COLOR_RESET: &str = "\x1b[0m";
