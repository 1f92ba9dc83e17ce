//! Field extraction from `.nuspec` metadata documents.
//!
//! A nuspec is a small XML document with flat descriptive tags under
//! `<package><metadata>`. Extraction is deliberately permissive: a missing
//! tag leaves the field absent, and a malformed document yields whatever
//! was captured before the parse stopped. Nothing here returns an error.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Descriptive fields extracted from a metadata document.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Nuspec {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub authors: Option<String>,
    pub owners: Option<String>,
    /// Space-delimited tag list, kept as the raw string.
    pub tags: Option<String>,
    pub project_url: Option<String>,
    pub license_url: Option<String>,
    pub icon: Option<String>,
    pub icon_url: Option<String>,
    /// The `url` attribute of the `<repository>` element.
    pub repository_url: Option<String>,
}

#[derive(Debug, Clone, Copy)]
enum Field {
    Id,
    Title,
    Description,
    Authors,
    Owners,
    Tags,
    ProjectUrl,
    LicenseUrl,
    Icon,
    IconUrl,
}

impl Field {
    fn from_tag(name: &[u8]) -> Option<Field> {
        match name {
            b"id" => Some(Field::Id),
            b"title" => Some(Field::Title),
            b"description" => Some(Field::Description),
            b"authors" => Some(Field::Authors),
            b"owners" => Some(Field::Owners),
            b"tags" => Some(Field::Tags),
            b"projectUrl" => Some(Field::ProjectUrl),
            b"licenseUrl" => Some(Field::LicenseUrl),
            b"icon" => Some(Field::Icon),
            b"iconUrl" => Some(Field::IconUrl),
            _ => None,
        }
    }
}

impl Nuspec {
    /// Parse a metadata document. A parse error mid-document stops
    /// extraction and keeps the fields captured so far.
    pub fn parse(text: &str) -> Self {
        let mut reader = Reader::from_str(text);
        reader.config_mut().trim_text(true);

        let mut doc = Nuspec::default();
        let mut current: Option<Field> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(element)) => {
                    current = Field::from_tag(element.local_name().as_ref());
                    doc.capture_repository(&element);
                }
                Ok(Event::Empty(element)) => {
                    doc.capture_repository(&element);
                }
                Ok(Event::Text(text)) => {
                    if let Some(field) = current
                        && let Ok(value) = text.unescape()
                        && !value.is_empty()
                    {
                        let slot = doc.slot(field);
                        // First occurrence wins
                        if slot.is_none() {
                            *slot = Some(value.into_owned());
                        }
                    }
                }
                Ok(Event::End(_)) => current = None,
                Ok(Event::Eof) => break,
                Err(_) => break,
                Ok(_) => {}
            }
        }

        doc
    }

    fn capture_repository(&mut self, element: &BytesStart<'_>) {
        // The url attribute may be preceded by any number of other
        // attributes (type, branch, commit).
        if element.local_name().as_ref() == b"repository"
            && self.repository_url.is_none()
            && let Ok(Some(attribute)) = element.try_get_attribute("url")
            && let Ok(value) = attribute.unescape_value()
        {
            self.repository_url = Some(value.into_owned());
        }
    }

    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Id => &mut self.id,
            Field::Title => &mut self.title,
            Field::Description => &mut self.description,
            Field::Authors => &mut self.authors,
            Field::Owners => &mut self.owners,
            Field::Tags => &mut self.tags,
            Field::ProjectUrl => &mut self.project_url,
            Field::LicenseUrl => &mut self.license_url,
            Field::Icon => &mut self.icon,
            Field::IconUrl => &mut self.icon_url,
        }
    }
}
