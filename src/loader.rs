use crate::errors::LoadError;
use log::debug;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Reads the file at `path` and parses it as a single JSON document.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Value, LoadError> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|err| LoadError::Io(path.to_path_buf(), err))?;
    let document = serde_json::from_reader(BufReader::new(file))
        .map_err(|err| LoadError::Parse(path.to_path_buf(), err))?;

    debug!("loaded document {}", path.display());
    Ok(document)
}

fn into_sequence(path: PathBuf, document: Value) -> Result<Vec<Value>, LoadError> {
    match document {
        Value::Array(items) => Ok(items),
        _ => Err(LoadError::NotASequence(path)),
    }
}

/// Keeps a missing key distinct from an explicit `null`: the former is
/// `None`, the latter `Some(Value::Null)`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CatalogueEntry {
    pub title: String,

    /// Left untyped so that a missing or non-numeric price only becomes a
    /// problem for the sales that actually reference this entry.
    #[serde(default, deserialize_with = "present")]
    pub price: Option<Value>,
}

/// The ordered list of products and their prices.
///
/// Elements that are not objects with a string `title` can never match a
/// sale and are left out. When several entries share a title only the first
/// one is reachable through [`PriceCatalogue::lookup`].
#[derive(Debug, Default)]
pub struct PriceCatalogue {
    entries: Vec<CatalogueEntry>,
    index: HashMap<String, usize>,
}

impl PriceCatalogue {
    pub fn from_entries(items: Vec<Value>) -> Self {
        let mut catalogue = PriceCatalogue::default();

        for item in items {
            let entry: CatalogueEntry = match serde_json::from_value(item) {
                Ok(entry) => entry,
                Err(err) => {
                    debug!("skipping catalogue entry: {}", err);
                    continue;
                }
            };

            let position = catalogue.entries.len();
            catalogue
                .index
                .entry(entry.title.clone())
                .or_insert(position);
            catalogue.entries.push(entry);
        }

        catalogue
    }

    /// Returns the first entry whose title is exactly `title`.
    pub fn lookup(&self, title: &str) -> Option<&CatalogueEntry> {
        self.index.get(title).map(|&position| &self.entries[position])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<PathBuf> for PriceCatalogue {
    type Error = LoadError;

    fn try_from(path: PathBuf) -> Result<Self, Self::Error> {
        let document = load_document(&path)?;
        let items = into_sequence(path, document)?;

        Ok(PriceCatalogue::from_entries(items))
    }
}

/// The ordered list of sales to be costed. Records are kept as raw JSON so
/// that malformed ones can be reported individually.
#[derive(Debug, Default)]
pub struct SalesRecord {
    sales: Vec<Value>,
}

impl SalesRecord {
    pub fn from_entries(sales: Vec<Value>) -> Self {
        Self { sales }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.sales.iter()
    }

    pub fn len(&self) -> usize {
        self.sales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sales.is_empty()
    }
}

impl TryFrom<PathBuf> for SalesRecord {
    type Error = LoadError;

    fn try_from(path: PathBuf) -> Result<Self, Self::Error> {
        let document = load_document(&path)?;
        let items = into_sequence(path, document)?;

        Ok(SalesRecord::from_entries(items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_document(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn should_load_a_catalogue_from_disk() {
        let file = write_document(r#"[{"title": "Widget", "price": 2.5}]"#);

        let catalogue = PriceCatalogue::try_from(file.path().to_path_buf()).unwrap();
        assert_eq!(catalogue.len(), 1);
        assert_eq!(
            catalogue.lookup("Widget"),
            Some(&CatalogueEntry {
                title: String::from("Widget"),
                price: Some(json!(2.5)),
            })
        );
    }

    #[test]
    fn should_fail_to_load_a_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let err = SalesRecord::try_from(path.clone()).unwrap_err();
        assert!(matches!(err, LoadError::Io(_, _)));
        assert_eq!(err.path(), &path);
    }

    #[test]
    fn should_fail_to_load_malformed_json() {
        let file = write_document(r#"[{"Product": "Widget", "Quantity": 4"#);

        let err = SalesRecord::try_from(file.path().to_path_buf()).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_, _)));
    }

    #[test]
    fn should_reject_a_document_that_is_not_an_array() {
        let file = write_document(r#"{"title": "Widget", "price": 2.5}"#);

        let err = PriceCatalogue::try_from(file.path().to_path_buf()).unwrap_err();
        assert!(matches!(err, LoadError::NotASequence(_)));
    }

    #[test]
    fn should_load_empty_documents() {
        let file = write_document("[]");

        let catalogue = PriceCatalogue::try_from(file.path().to_path_buf()).unwrap();
        let sales = SalesRecord::try_from(file.path().to_path_buf()).unwrap();
        assert!(catalogue.is_empty());
        assert!(sales.is_empty());

        let unusable = PriceCatalogue::from_entries(vec![json!({"price": 1.0})]);
        assert!(unusable.is_empty());
    }

    #[test]
    fn should_resolve_duplicate_titles_to_the_first_entry() {
        let catalogue = PriceCatalogue::from_entries(vec![
            json!({"title": "Widget", "price": 1.0}),
            json!({"title": "Widget", "price": 9.0}),
        ]);

        assert_eq!(catalogue.len(), 2);
        assert_eq!(catalogue.lookup("Widget").unwrap().price, Some(json!(1.0)));
    }

    #[test]
    fn should_match_titles_case_sensitively() {
        let catalogue = PriceCatalogue::from_entries(vec![json!({"title": "Widget", "price": 1.0})]);

        assert!(catalogue.lookup("widget").is_none());
        assert!(catalogue.lookup("Widget ").is_none());
    }

    #[test]
    fn should_skip_entries_without_a_string_title() {
        let catalogue = PriceCatalogue::from_entries(vec![
            json!({"price": 1.0}),
            json!({"title": 7, "price": 1.0}),
            json!("Widget"),
            json!({"title": "Widget"}),
        ]);

        assert_eq!(catalogue.len(), 1);
        assert_eq!(catalogue.lookup("Widget").unwrap().price, None);
    }

    #[test]
    fn should_distinguish_a_null_price_from_a_missing_one() {
        let catalogue = PriceCatalogue::from_entries(vec![
            json!({"title": "Null", "price": null}),
            json!({"title": "Absent"}),
        ]);

        assert_eq!(catalogue.lookup("Null").unwrap().price, Some(Value::Null));
        assert_eq!(catalogue.lookup("Absent").unwrap().price, None);
    }
}
