//! Tests for iterating list and map values

use conf_tree::{Config, Iter};
use pretty_assertions::assert_eq;

fn config() -> Config {
    Config::from_yaml(
        r#"
hosts:
  - name: alpha
    port: 8080
  - name: beta
    port: 9090
limits:
  cpu: 2
  memory: 512
  disk: 100
name: single
"#,
    )
    .unwrap()
}

#[test]
fn test_iterate_list() {
    let config = config();
    let hosts = config.get("hosts");
    assert_eq!(hosts.count(), 2);

    let collected: Vec<(usize, String, i64)> = hosts
        .iterate()
        .map(|entry| {
            let host = entry.value().config();
            (entry.index(), host.get("name").string(), host.get("port").int())
        })
        .collect();

    assert_eq!(
        collected,
        vec![(0, "alpha".to_string(), 8080), (1, "beta".to_string(), 9090)]
    );
}

#[test]
fn test_list_entries_have_no_key() {
    let config = config();
    assert!(config.get("hosts").iterate().all(|e| e.key().is_none()));
}

#[test]
fn test_iterate_map_in_document_order() {
    let config = config();
    let limits = config.get("limits");
    assert_eq!(limits.count(), 0);

    let collected: Vec<(usize, &str, i64)> = limits
        .iterate()
        .map(|entry| (entry.index(), entry.key().unwrap(), entry.value().int()))
        .collect();

    assert_eq!(
        collected,
        vec![(0, "cpu", 2), (1, "memory", 512), (2, "disk", 100)]
    );
}

#[test]
fn test_scalars_and_missing_iterate_empty() {
    let config = config();
    assert!(matches!(config.get("name").iterate(), Iter::Empty));
    assert!(matches!(config.get("missing").iterate(), Iter::Empty));
    assert_eq!(config.get("missing").iterate().count(), 0);
}

#[test]
fn test_iterate_root() {
    let config = config();
    let keys: Vec<_> = config.iterate().filter_map(|e| e.key()).collect();
    assert_eq!(keys, vec!["hosts", "limits", "name"]);
    assert_eq!(config.keys().collect::<Vec<_>>(), keys);
}

#[test]
fn test_manual_cursor_style() {
    let config = config();
    let mut iter = config.get("limits").iterate();
    let mut total = 0;
    while !iter.is_finished() {
        if let Some(entry) = iter.next() {
            total += entry.value().int();
        }
    }
    assert_eq!(total, 614);
}
