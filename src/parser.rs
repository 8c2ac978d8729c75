//! Parsing the Gene Ontology and category keyword files

/// Module to parse the `go.obo` file
pub mod go_obo;

/// Module to parse category keyword files
///
/// Every line defines one category: the category name and a list of
/// keywords, separated by a comma. The keywords are separated by semicolons.
/// Category names that contain a comma must be quoted.
///
/// ```text
/// golgi,golgi
/// plasma membrane,plasma membrane;plasma-membrane
/// "golgi, cis",cis-golgi
/// ```
pub mod keyword_file;
