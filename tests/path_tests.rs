//! Path normalization and equality, observed through resolution.

use std::collections::HashSet;

use objectpath::{ObjectPath, Path, Value};

fn subject() -> Value {
    Value::from(serde_json::json!({
        "projects": {"php": ["peridot", "leo"]},
    }))
}

/// Every notation for the same location normalizes to the same segments.
#[test]
fn test_notations_normalize_to_identical_paths() {
    let expected = Path::from_segments(["projects", "php", "0"]);

    assert_eq!(Path::parse("projects[php][0]"), expected);
    assert_eq!(Path::parse("projects->php[0]"), expected);
    assert_eq!(Path::parse("projects->php->0"), expected);
    assert_eq!(Path::parse("projects['php'][0]"), expected);
}

#[test]
fn test_equal_paths_hash_equal() {
    let mut seen = HashSet::new();
    seen.insert(Path::parse("projects[php][0]"));
    assert!(seen.contains(&Path::from_segments(["projects", "php", "0"])));
}

#[test]
fn test_display_renders_a_parseable_expression() {
    let path = Path::parse("projects['php'][0]");
    assert_eq!(path.to_string(), "projects->php[0]");
    assert_eq!(Path::parse(&path.to_string()), path);
}

/// Garbage input degrades to segments that miss at traversal; it never
/// panics and never raises.
#[test]
fn test_malformed_expressions_fail_to_resolve() {
    let mut value = subject();
    let path = ObjectPath::new(&mut value);

    assert_eq!(path.read("projects[php"), None);
    assert_eq!(path.read("projects->->php"), None);
    assert_eq!(path.read("[']["), None);
}

#[test]
fn test_leading_and_trailing_delimiters_are_trimmed() {
    let mut value = subject();
    let path = ObjectPath::new(&mut value);

    assert_eq!(path.read("->projects->php[0]"), Some(&Value::from("peridot")));
    assert_eq!(path.read("projects->php[0]->"), Some(&Value::from("peridot")));
}

#[test]
fn test_out_of_bounds_index_reads_as_absent() {
    let mut value = subject();
    let path = ObjectPath::new(&mut value);

    assert_eq!(path.read("projects[php][5]"), None);
}

#[test]
fn test_path_reuse_across_operations() {
    let mut value = subject();
    let mut path_resolver = ObjectPath::new(&mut value);
    let path = Path::parse("projects->php[0]");

    assert_eq!(path_resolver.read(&path), Some(&Value::from("peridot")));
    path_resolver.write(&path, "object-path");
    assert_eq!(path_resolver.read(&path), Some(&Value::from("object-path")));
    path_resolver.delete(&path);
    assert_eq!(path_resolver.read(&path), Some(&Value::from("leo")));
}
