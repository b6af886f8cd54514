use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};

use crate::api::{Error, Result};
use crate::technologies::{tag_technologies, ALL_TECHNOLOGIES};
use crate::types::{Listing, SALARY_NOT_SPECIFIED};

lazy_static! {
    static ref TITLE: Selector = Selector::parse(".g-h2").unwrap();
    static ref COMPANY: Selector = Selector::parse("div.l-n a").unwrap();
    static ref DESCRIPTION: Selector = Selector::parse(".l-vacancy").unwrap();
    static ref LOCATION: Selector = Selector::parse(".place").unwrap();
    static ref SALARY: Selector = Selector::parse(".salary").unwrap();
}

/// Build a listing from the rendered html of a vacancy page, tagged against the full vocabulary
pub fn extract(html: &str, current_url: &str) -> Result<Listing> {
    extract_with(html, current_url, &ALL_TECHNOLOGIES)
}

/// Either every required field is found or no listing is produced.
/// A missing salary is not a failure, it falls back to the sentinel.
pub fn extract_with(html: &str, current_url: &str, vocabulary: &[&str]) -> Result<Listing> {
    let doc = Html::parse_document(html);
    let title = single_line(required(&doc, &TITLE, "Title")?);
    let company = single_line(required(&doc, &COMPANY, "Company")?);
    let description = rendered_text(required(&doc, &DESCRIPTION, "Vacancy description")?);
    let technologies = tag_technologies(&description, vocabulary);
    let location = single_line(required(&doc, &LOCATION, "Location")?);
    let salary = doc
        .select(&SALARY)
        .next()
        .map(rendered_text)
        .unwrap_or_else(|| SALARY_NOT_SPECIFIED.to_owned());

    Ok(Listing {
        title,
        company,
        technologies,
        location,
        salary,
        link: current_url.to_owned(),
    })
}

fn required<'a>(doc: &'a Html, selector: &Selector, name: &'static str) -> Result<ElementRef<'a>> {
    doc.select(selector)
        .next()
        .ok_or(Error::ElementNotFound(name))
}

/// Elements whose content is never rendered
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template", "head"];

/// Elements that start and end a line of rendered text
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li",
    "main", "nav", "ol", "p", "pre", "section", "table", "td", "th", "tr", "ul",
];

/// Text as a browser renders it: hidden elements skipped, a line break at `<br>`
/// and around block elements, whitespace collapsed within each line, blank lines dropped
fn rendered_text(el: ElementRef) -> String {
    let mut raw = String::new();
    push_rendered(el, &mut raw);
    raw.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn push_rendered(el: ElementRef, out: &mut String) {
    for child in el.children() {
        if let Some(text) = child.value().as_text() {
            // source newlines are plain whitespace once rendered
            out.extend(text.chars().map(|c| if c.is_whitespace() { ' ' } else { c }));
            continue;
        }
        let Some(child) = ElementRef::wrap(child) else {
            continue;
        };
        let name = child.value().name();
        if HIDDEN_ELEMENTS.contains(&name) {
            continue;
        }
        if name == "br" {
            out.push('\n');
            continue;
        }
        let block = BLOCK_ELEMENTS.contains(&name);
        if block {
            out.push('\n');
        }
        push_rendered(child, out);
        if block {
            out.push('\n');
        }
    }
}

/// Rendered text on one line, line breaks become spaces
fn single_line(el: ElementRef) -> String {
    rendered_text(el)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
