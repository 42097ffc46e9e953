use crate::constants::*;
use crate::dom;
use globe_core::{DetailsPanel, Destination};
use web_sys as web;

/// Details panel and status line backed by page elements.
pub struct DomDetailsPanel {
    document: web::Document,
    title: web::Element,
    image: web::HtmlImageElement,
    summary: web::Element,
    facts: web::Element,
    status: web::Element,
}

impl DomDetailsPanel {
    pub fn from_document(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            document: document.clone(),
            title: dom::required_element(document, TITLE_ID)?,
            image: dom::required_element_as::<web::HtmlImageElement>(document, IMAGE_ID)?,
            summary: dom::required_element(document, SUMMARY_ID)?,
            facts: dom::required_element(document, FACTS_ID)?,
            status: dom::required_element(document, STATUS_ID)?,
        })
    }
}

impl DetailsPanel for DomDetailsPanel {
    fn show_destination(&mut self, destination: &Destination) {
        self.title.set_text_content(Some(&destination.name));
        self.image.set_src(&destination.image);
        self.image.set_alt(&destination.name);
        self.summary.set_text_content(Some(&destination.summary));

        self.facts.set_inner_html("");
        for fact in &destination.facts {
            match self.document.create_element("li") {
                Ok(li) => {
                    li.set_text_content(Some(fact));
                    _ = self.facts.append_child(&li);
                }
                Err(e) => log::warn!("[panel] could not create list item: {:?}", e),
            }
        }
    }

    fn set_status(&mut self, text: &str) {
        self.status.set_text_content(Some(text));
    }
}
