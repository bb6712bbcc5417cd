//! End-to-end inventory runs over scan trees on disk.

#[path = "helpers.rs"]
mod helpers;

use helpers::{host, hostnames, os_match, port, read_export, scan_document, ScanTree};
use scan_inventory::error_handling::{ConfigError, InventoryError};
use scan_inventory::{run_inventory, Config, ExportFormat, Method};

fn config_for(tree: &ScanTree, output: &str) -> Config {
    Config {
        input_dirs: vec![tree.scans_dir()],
        output: tree.output(output),
        ..Default::default()
    }
}

fn office_scan() -> String {
    let windows = host(
        "up",
        "10.1.0.10",
        &format!(
            "{}<ports>{}{}</ports>{}",
            hostnames(&["ws10.corp.local"]),
            port("tcp", 135, "open", r#"name="msrpc" product="Microsoft Windows RPC""#),
            port("tcp", 445, "open", r#"name="microsoft-ds""#),
            os_match("Microsoft Windows 7", 100),
        ),
    );
    let web = host(
        "up",
        "10.1.0.11",
        &format!(
            "<ports>{}{}</ports>",
            port("tcp", 22, "open", r#"name="ssh" product="OpenSSH" version="6.6.1p1""#),
            port(
                "tcp",
                80,
                "open",
                r#"name="http" product="Apache httpd" version="2.4.7" extrainfo="Ubuntu Linux""#
            ),
        ),
    );
    let down = host("down", "10.1.0.12", "");
    scan_document(&[windows, web, down], true)
}

#[test]
fn test_full_run_writes_inventory() {
    let tree = ScanTree::new();
    tree.write_scan("office/2024-05-01.xml", &office_scan());
    tree.write_scan(
        "office/running.xml",
        &scan_document(&[host("up", "10.1.0.99", "")], false),
    );
    tree.write_scan("notes.txt", "not a scan");

    let config = config_for(&tree, "inventory.tsv");
    let output = config.output.clone();
    let report = run_inventory(config).expect("run should succeed");

    assert_eq!(report.hosts, 2);
    assert_eq!(report.classified, 2);
    assert_eq!(report.rows, 4);
    assert_eq!(report.summary.by_method.get(&Method::OsGuess), Some(&1));
    assert_eq!(report.summary.by_method.get(&Method::WebService), Some(&1));

    let (header, rows) = read_export(&output, '\t');
    assert_eq!(
        header,
        vec![
            "ip",
            "host",
            "device_type",
            "os_flavor",
            "port",
            "name",
            "product",
            "version",
            "extrainfo",
            "method"
        ]
    );
    assert_eq!(rows.len(), 4);
    assert_eq!(
        rows[0],
        vec![
            "10.1.0.10",
            "ws10.corp.local",
            "windows",
            "microsoft windows 7",
            "135",
            "msrpc",
            "microsoft windows rpc",
            "null",
            "null",
            "1"
        ]
    );
    assert_eq!(rows[1][4], "445");
    assert_eq!(rows[1][6], "null");
    assert_eq!(
        rows[3],
        vec![
            "10.1.0.11",
            "null",
            "linux",
            "ubuntu linux",
            "80",
            "http",
            "apache httpd",
            "2.4.7",
            "ubuntu linux",
            "3"
        ]
    );
    assert!(rows.iter().all(|r| r[0] != "10.1.0.12" && r[0] != "10.1.0.99"));
}

#[test]
fn test_zero_up_hosts_aborts_before_output() {
    let tree = ScanTree::new();
    tree.write_scan(
        "quiet.xml",
        &scan_document(&[host("down", "10.3.0.1", ""), host("down", "10.3.0.2", "")], true),
    );

    let config = config_for(&tree, "inventory.tsv");
    let output = config.output.clone();
    let err = run_inventory(config).expect_err("no up hosts");

    assert!(matches!(
        err.downcast_ref::<InventoryError>(),
        Some(InventoryError::NoUpHosts { files: 1 })
    ));
    assert!(!output.exists(), "no output file may be created");
}

#[test]
fn test_no_completed_scans_aborts_before_output() {
    let tree = ScanTree::new();
    tree.write_scan(
        "partial.xml",
        &scan_document(&[host("up", "10.3.1.1", "")], false),
    );

    let config = config_for(&tree, "inventory.tsv");
    let output = config.output.clone();
    let err = run_inventory(config).expect_err("nothing completed");

    assert!(matches!(
        err.downcast_ref::<InventoryError>(),
        Some(InventoryError::NoCompletedScans { searched: 1 })
    ));
    assert!(!output.exists());
}

#[test]
fn test_missing_directory_is_a_config_error() {
    let tree = ScanTree::new();
    let config = Config {
        input_dirs: vec![tree.output("does-not-exist")],
        output: tree.output("inventory.tsv"),
        ..Default::default()
    };
    let err = run_inventory(config).expect_err("bad directory");
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::DirectoryNotFound(_))
    ));
    assert!(format!("{:#}", err).contains("does-not-exist"));
}

#[test]
fn test_comma_delimiter_is_a_config_error() {
    let tree = ScanTree::new();
    tree.write_scan("office.xml", &office_scan());
    let config = Config {
        delimiter: ',',
        ..config_for(&tree, "inventory.csv")
    };
    let err = run_inventory(config).expect_err("comma rejected");
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::InvalidDelimiter(','))
    ));
}

#[test]
fn test_bad_files_and_hosts_are_skipped() {
    let tree = ScanTree::new();
    tree.write_scan("good.xml", &office_scan());
    // Completed, but truncated mid-host
    tree.write_scan(
        "broken.xml",
        r#"<nmaprun><host><address addr="10.4.0.1" addrtype="ipv4"/></ports></host><runstats><finished exit="success"/></runstats></nmaprun>"#,
    );
    // Up host with only a MAC address
    tree.write_scan(
        "mac-only.xml",
        &scan_document(
            &[r#"<host><status state="up"/><address addr="00:11:22:33:44:55" addrtype="mac"/></host>"#
                .to_string()],
            true,
        ),
    );

    let report = run_inventory(config_for(&tree, "inventory.tsv")).expect("run should succeed");
    assert_eq!(report.hosts, 2);
    assert_eq!(report.rows, 4);
}

#[test]
fn test_jsonl_export_keeps_all_fields() {
    let tree = ScanTree::new();
    tree.write_scan("office.xml", &office_scan());
    let config = Config {
        format: ExportFormat::Jsonl,
        ..config_for(&tree, "inventory.jsonl")
    };
    let output = config.output.clone();
    run_inventory(config).expect("run should succeed");

    let content = std::fs::read_to_string(output).expect("read export");
    let rows: Vec<serde_json::Value> = content
        .lines()
        .map(|l| serde_json::from_str(l).expect("valid json line"))
        .collect();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["os_guess"], "microsoft windows 7");
    assert_eq!(rows[0]["protocol"], "tcp");
    assert_eq!(rows[0]["method"], "1");
    assert!(rows[2].get("host").is_none());
}

#[test]
fn test_custom_delimiter() {
    let tree = ScanTree::new();
    tree.write_scan("office.xml", &office_scan());
    let config = Config {
        delimiter: ';',
        ..config_for(&tree, "inventory.txt")
    };
    let output = config.output.clone();
    run_inventory(config).expect("run should succeed");

    let (header, rows) = read_export(&output, ';');
    assert_eq!(header.len(), 10);
    assert!(rows.iter().all(|r| r.len() == 10));
}

#[test]
fn test_mode_caps_files_and_hosts() {
    let tree = ScanTree::new();
    for i in 0..7 {
        let hosts: Vec<String> = (0..20)
            .map(|h| {
                host(
                    "up",
                    &format!("10.5.{i}.{h}"),
                    &format!("<ports>{}</ports>", port("tcp", 22, "open", r#"name="ssh""#)),
                )
            })
            .collect();
        tree.write_scan(&format!("batch-{i}.xml"), &scan_document(&hosts, true));
    }

    let full = run_inventory(config_for(&tree, "full.tsv")).expect("full run");
    assert_eq!(full.hosts, 140);

    let capped = run_inventory(Config {
        test_mode: true,
        ..config_for(&tree, "capped.tsv")
    })
    .expect("test-mode run");
    assert_eq!(capped.hosts, 50);
    assert_eq!(capped.rows, 50);
}
