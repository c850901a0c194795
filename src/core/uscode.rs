use crate::core::config::DOWNLOAD_PAGE_PATH;
use crate::error::{Result, UscGetError};
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use scraper::{Html, Selector};

/// Title attribute of the anchor that carries the bulk ZIP link.
pub const BULK_XML_LINK_TITLE: &str = "All USC Titles in XML";

/// How much of the page body to keep as diagnostic context when the link
/// cannot be found.
const HTML_SNIPPET_CHARS: usize = 2000;

const UA: &str = concat!("uscget/", env!("CARGO_PKG_VERSION"));

/// Client for the uscode.house.gov download page.
pub struct UscodeClient {
    origin: String,
    client: Client,
}

impl UscodeClient {
    pub fn new(origin: &str) -> Self {
        Self {
            origin: origin.to_string(),
            client: Client::new(),
        }
    }

    /// Fetches the download page and returns its body.
    pub fn fetch_download_page(&self) -> Result<String> {
        let url = format!("{}{}", self.origin, DOWNLOAD_PAGE_PATH);
        let response = self.client.get(&url).header(USER_AGENT, UA).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(UscGetError::Network {
                url,
                status: status.as_u16(),
            });
        }

        Ok(response.text()?)
    }

    /// Resolves the current bulk XML ZIP URL from the download page.
    ///
    /// The page is not stable across release points, so the link is
    /// discovered by its title attribute rather than hardcoded.
    pub fn resolve_bulk_xml_url(&self) -> Result<String> {
        println!("Fetching download page...");
        let html = self.fetch_download_page()?;

        let href = find_bulk_xml_href(&html).ok_or_else(|| UscGetError::LinkNotFound {
            snippet: snippet(&html),
        })?;

        Ok(self.resolve_href(&href))
    }

    fn resolve_href(&self, href: &str) -> String {
        if href.starts_with("http") {
            href.to_string()
        } else {
            format!("{}{}", self.origin, href)
        }
    }
}

/// Returns the href of the first anchor titled [`BULK_XML_LINK_TITLE`],
/// or `None` when the anchor or its href is missing.
pub fn find_bulk_xml_href(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let anchors = Selector::parse("a").unwrap();

    document
        .select(&anchors)
        .find(|a| a.value().attr("title") == Some(BULK_XML_LINK_TITLE))
        .and_then(|a| a.value().attr("href"))
        .map(str::to_string)
}

fn snippet(html: &str) -> String {
    html.chars().take(HTML_SNIPPET_CHARS).collect()
}
