use obocats::parser::keyword_file::read_keyword_file;
use obocats::{
    DirectionMode, Extension, GraphConfig, Namespace, OboError, OboGraph, SubGraphCollection,
    SubGraphConfig,
};

fn cellular_component() -> OboGraph {
    let config = GraphConfig::new().with_namespace(Namespace::CellularComponent);
    OboGraph::from_obo_file("tests/small.obo", config).unwrap()
}

fn ids(graph: &OboGraph, group: &obocats::NodeGroup) -> Vec<String> {
    let mut ids: Vec<String> = group
        .iter()
        .map(|idx| graph.node(idx).unwrap().id().to_string())
        .collect();
    ids.sort();
    ids
}

#[test]
fn categories_from_keyword_file() {
    let graph = cellular_component();
    assert_eq!(graph.len(), 11);
    assert_eq!(graph.root_nodes().len(), 1);

    let categories = read_keyword_file("tests/keywords.csv").unwrap();
    let collection = SubGraphCollection::build(
        &graph,
        &categories,
        &SubGraphConfig::inherit(graph.config()),
    )
    .unwrap();

    assert_eq!(collection.len(), 3);
    assert_eq!(collection.failures().len(), 1);
    let (name, err) = &collection.failures()[0];
    assert_eq!(name, "nucleus");
    assert!(matches!(err, OboError::NoSeedNodes { .. }));

    let golgi = collection.get("golgi").unwrap();
    assert_eq!(golgi.category_node().unwrap().id(), "GO:0005794");
    assert_eq!(
        golgi.content_mapping().unwrap()["GO:0005794"],
        ["GO:0005794", "GO:0005795", "GO:0005802"]
    );

    let membrane = collection.get("membrane").unwrap();
    assert_eq!(membrane.category_node().unwrap().id(), "GO:0016020");
    assert_eq!(
        membrane.content_mapping().unwrap()["GO:0016020"],
        [
            "GO:0000139",
            "GO:0005886",
            "GO:0005887",
            "GO:0016020",
            "GO:0031090"
        ]
    );

    let plasma_membrane = collection.get("plasma membrane").unwrap();
    assert_eq!(plasma_membrane.category_node().unwrap().id(), "GO:0005886");
    assert_eq!(
        plasma_membrane.content_mapping().unwrap()["GO:0005886"],
        ["GO:0005886", "GO:0005887"]
    );
}

#[test]
fn supersets_are_collapsed() {
    let graph = cellular_component();
    let categories = read_keyword_file("tests/keywords.csv").unwrap();
    let collection = SubGraphCollection::build(
        &graph,
        &categories,
        &SubGraphConfig::inherit(graph.config()),
    )
    .unwrap();

    let subsets = collection.category_subsets().unwrap();
    assert_eq!(subsets.len(), 1);
    assert!(subsets["GO:0005886"].contains("GO:0016020"));

    let mapping = collection.mapping(false).unwrap();
    let categories: Vec<&String> = mapping.categories("GO:0005887").unwrap().iter().collect();
    assert_eq!(categories, ["GO:0005886"]);
    let categories: Vec<&String> = mapping.categories("GO:0000139").unwrap().iter().collect();
    assert_eq!(categories, ["GO:0016020"]);
    assert!(mapping.categories("GO:0110165").is_none());

    let mapping = collection.mapping(true).unwrap();
    let categories: Vec<&String> = mapping.categories("GO:0005887").unwrap().iter().collect();
    assert_eq!(categories, ["GO:0005886", "GO:0016020"]);
    assert_eq!(mapping.content_mapping().len(), 3);
}

#[test]
fn conservative_extension_stays_within_seeds() {
    let graph = cellular_component();
    let categories = read_keyword_file("tests/keywords.csv").unwrap();
    let config = SubGraphConfig::inherit(graph.config()).with_extension(Extension::Conservative);
    let collection = SubGraphCollection::build(&graph, &categories, &config).unwrap();

    let golgi = collection.get("golgi").unwrap();
    assert!(golgi.term("GO:0000139").is_some());
    assert!(golgi.term("GO:0043226").is_none());
    assert_eq!(golgi.root_id_mapping().unwrap().len(), 3);
}

#[test]
fn has_part_direction() {
    let graph = cellular_component();
    let plasma_membrane = graph.index_of("GO:0005886").unwrap();
    let integral = graph.index_of("GO:0005887").unwrap();
    assert!(graph.descendants(plasma_membrane).contains(&integral));
    assert_eq!(
        ids(&graph, &graph.ancestors(integral)),
        ["GO:0005575", "GO:0005886", "GO:0016020", "GO:0110165"]
    );

    let config = GraphConfig::new()
        .with_namespace(Namespace::CellularComponent)
        .with_direction(DirectionMode::Original);
    let graph = OboGraph::from_obo_file("tests/small.obo", config).unwrap();
    let plasma_membrane = graph.index_of("GO:0005886").unwrap();
    let integral = graph.index_of("GO:0005887").unwrap();
    assert!(graph.descendants(integral).contains(&plasma_membrane));
    assert!(!graph.descendants(plasma_membrane).contains(&integral));
}

#[test]
fn mismatching_subgraph_config() {
    let graph = cellular_component();
    let categories = read_keyword_file("tests/keywords.csv").unwrap();

    let config = SubGraphConfig::new().with_namespace(Namespace::BiologicalProcess);
    let err = SubGraphCollection::build(&graph, &categories, &config).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn biological_process() {
    let config = GraphConfig::new()
        .with_namespace(Namespace::BiologicalProcess)
        .with_allowed_relationships(["is_a", "regulates"])
        .unwrap();
    let graph = OboGraph::from_obo_file("tests/small.obo", config).unwrap();
    assert_eq!(graph.len(), 4);
    assert_eq!(graph.relationship_count()["regulates"], 1);

    // regulates does not scope, so it does not create parents
    let regulation = graph.term("GO:0060627").unwrap();
    let parents: Vec<&str> = regulation.parents().map(|term| term.id().as_str()).collect();
    assert_eq!(parents, ["GO:0008150"]);
}
