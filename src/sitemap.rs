use quick_xml::events::{BytesDecl, BytesText, Event};
use quick_xml::Writer;
use std::{io, path::Path};

use crate::config::{SitemapConfig, SITEMAP_INDEX_FILENAME, SITEMAP_NAMESPACE};
use crate::io::{print_info, write_atomically};

/// Number of sitemap files needed for `total` URLs.
pub fn chunk_count(total: usize, max_per_sitemap: usize) -> usize {
    total.div_ceil(max_per_sitemap)
}

pub fn sitemap_filename(index: usize) -> String {
    format!("sitemap{}.xml", index)
}

/// Writes one sitemap per chunk of `url_paths` and returns the filenames in
/// chunk order.
pub fn write_sitemaps(
    config: &SitemapConfig,
    output_dir: &Path,
    url_paths: &[String],
    verbose: bool,
) -> io::Result<Vec<String>> {
    let mut filenames = Vec::with_capacity(chunk_count(url_paths.len(), config.max_urls_per_sitemap));

    for (i, chunk) in url_paths.chunks(config.max_urls_per_sitemap).enumerate() {
        let filename = write_sitemap(config, output_dir, chunk, i + 1)?;
        if verbose {
            print_info(&format!("Wrote {} with {} URL(s).", filename, chunk.len()));
        }
        filenames.push(filename);
    }

    Ok(filenames)
}

pub fn write_sitemap(
    config: &SitemapConfig,
    output_dir: &Path,
    url_paths: &[String],
    index: usize,
) -> io::Result<String> {
    let mut writer = new_document()?;
    writer
        .create_element("urlset")
        .with_attribute(("xmlns", SITEMAP_NAMESPACE))
        .write_inner_content(|w| -> io::Result<()> {
            for url_path in url_paths {
                let loc = config.page_url(url_path);
                w.create_element("url").write_inner_content(|w| -> io::Result<()> {
                    w.create_element("loc").write_text_content(BytesText::new(&loc))?;
                    Ok(())
                })?;
            }
            Ok(())
        })?;

    let filename = sitemap_filename(index);
    write_atomically(&output_dir.join(&filename), &finish(writer))?;
    Ok(filename)
}

/// Writes `sitemap_index.xml`, listing `filenames` in the order given.
pub fn write_sitemap_index(
    config: &SitemapConfig,
    output_dir: &Path,
    filenames: &[String],
) -> io::Result<()> {
    let mut writer = new_document()?;
    writer
        .create_element("sitemapindex")
        .with_attribute(("xmlns", SITEMAP_NAMESPACE))
        .write_inner_content(|w| -> io::Result<()> {
            for filename in filenames {
                let loc = config.sitemap_url(filename);
                w.create_element("sitemap").write_inner_content(|w| -> io::Result<()> {
                    w.create_element("loc").write_text_content(BytesText::new(&loc))?;
                    Ok(())
                })?;
            }
            Ok(())
        })?;

    write_atomically(&output_dir.join(SITEMAP_INDEX_FILENAME), &finish(writer))
}

fn new_document() -> io::Result<Writer<Vec<u8>>> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    Ok(writer)
}

fn finish(writer: Writer<Vec<u8>>) -> Vec<u8> {
    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    bytes
}
