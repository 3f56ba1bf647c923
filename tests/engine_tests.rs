mod common;
use blocktracker::{AppError, BlockInfo, DailyStat, Engine, WriteOutcome};
use common::{date, memory_engine, setup_test_db};
use std::collections::HashMap;

fn seeded() -> Engine {
    let engine = memory_engine();
    engine.create_project("P", "7d").unwrap();
    engine.add_block("P", "B", 60).unwrap();
    engine
}

#[test]
fn create_project_twice_keeps_one_row_and_first_interval() {
    let engine = memory_engine();

    assert_eq!(engine.create_project("P", "7d").unwrap(), WriteOutcome::Created);
    assert_eq!(
        engine.create_project("P", "30d").unwrap(),
        WriteOutcome::AlreadyExists
    );

    let projects = engine.list_projects().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].name, "P");
    assert_eq!(projects[0].refresh_interval, "7d");
}

#[test]
fn add_block_reports_each_outcome() {
    let engine = memory_engine();
    engine.create_project("P", "7d").unwrap();

    assert_eq!(engine.add_block("P", "B", 45).unwrap(), WriteOutcome::Created);
    assert_eq!(
        engine.add_block("P", "B", 90).unwrap(),
        WriteOutcome::AlreadyExists
    );
    assert_eq!(
        engine.add_block("NoSuchProject", "B", 45).unwrap(),
        WriteOutcome::NotFound
    );

    // existing target untouched
    let blocks = engine.get_project_blocks("P").unwrap();
    assert_eq!(blocks[0].target_minutes, 45);
}

#[test]
fn same_block_name_in_two_projects() {
    let engine = memory_engine();
    engine.create_project("A", "7d").unwrap();
    engine.create_project("Z", "7d").unwrap();

    assert!(engine.add_block("A", "rust", 60).unwrap().is_written());
    assert!(engine.add_block("Z", "rust", 30).unwrap().is_written());

    engine.add_entry("A", "rust", 10, date("2024-01-01")).unwrap();

    assert_eq!(engine.get_project_blocks("A").unwrap()[0].total_minutes, 10);
    assert_eq!(engine.get_project_blocks("Z").unwrap()[0].total_minutes, 0);
}

#[test]
fn entries_on_same_date_are_summed_at_query_time() {
    let engine = seeded();
    engine.add_entry("P", "B", 20, date("2024-01-01")).unwrap();
    engine.add_entry("P", "B", 25, date("2024-01-01")).unwrap();

    let report = engine.get_project_report("P").unwrap();
    assert_eq!(
        report,
        vec![DailyStat {
            date: date("2024-01-01"),
            block_name: "B".into(),
            total_minutes: 45,
            target_minutes: 60,
        }]
    );

    // both rows are stored
    assert_eq!(engine.database_info().unwrap().entries, 2);
}

#[test]
fn report_orders_by_date_desc_then_block_name() {
    let engine = seeded();
    engine.add_block("P", "A", 30).unwrap();
    engine.add_block("P", "C", 30).unwrap();

    engine.add_entry("P", "C", 5, date("2024-01-02")).unwrap();
    engine.add_entry("P", "B", 5, date("2024-01-01")).unwrap();
    engine.add_entry("P", "A", 5, date("2024-01-02")).unwrap();
    engine.add_entry("P", "B", 5, date("2024-01-03")).unwrap();

    let order: Vec<(String, String)> = engine
        .get_project_report("P")
        .unwrap()
        .into_iter()
        .map(|s| (s.date.to_string(), s.block_name))
        .collect();

    assert_eq!(
        order,
        vec![
            ("2024-01-03".to_string(), "B".to_string()),
            ("2024-01-02".to_string(), "A".to_string()),
            ("2024-01-02".to_string(), "C".to_string()),
            ("2024-01-01".to_string(), "B".to_string()),
        ]
    );
}

#[test]
fn blocks_without_entries_are_listed() {
    let engine = seeded();
    engine.add_block("P", "A", 15).unwrap();
    engine.add_block("P", "Zero", 10).unwrap();
    engine.add_entry("P", "B", 30, date("2024-01-01")).unwrap();
    engine.add_entry("P", "Zero", 0, date("2024-01-01")).unwrap();

    let blocks = engine.get_project_blocks("P").unwrap();
    assert_eq!(
        blocks,
        vec![
            BlockInfo {
                name: "A".into(),
                target_minutes: 15,
                total_minutes: 0,
                has_data: false,
            },
            BlockInfo {
                name: "B".into(),
                target_minutes: 60,
                total_minutes: 30,
                has_data: true,
            },
            BlockInfo {
                name: "Zero".into(),
                target_minutes: 10,
                total_minutes: 0,
                has_data: true,
            },
        ]
    );
}

#[test]
fn cleanup_clears_entries_but_keeps_blocks() {
    let engine = seeded();
    engine.add_entry("P", "B", 30, date("2024-01-01")).unwrap();

    assert_eq!(engine.cleanup_project("P").unwrap(), 1);

    assert!(engine.get_project_report("P").unwrap().is_empty());
    let blocks = engine.get_project_blocks("P").unwrap();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].name, "B");
    assert_eq!(blocks[0].total_minutes, 0);
    assert!(!blocks[0].has_data);
}

#[test]
fn cleanup_only_touches_the_named_project() {
    let engine = seeded();
    engine.create_project("Other", "7d").unwrap();
    engine.add_block("Other", "B", 60).unwrap();
    engine.add_entry("P", "B", 10, date("2024-01-01")).unwrap();
    engine.add_entry("Other", "B", 15, date("2024-01-01")).unwrap();

    engine.cleanup_project("P").unwrap();

    assert_eq!(engine.get_project_report("Other").unwrap()[0].total_minutes, 15);
    assert_eq!(engine.cleanup_project("NoSuchProject").unwrap(), 0);
}

#[test]
fn unknown_project_yields_empty_views() {
    let engine = seeded();
    engine.add_entry("P", "B", 10, date("2024-01-01")).unwrap();

    assert!(engine.get_project_report("NoSuchProject").unwrap().is_empty());
    assert!(engine.get_project_blocks("NoSuchProject").unwrap().is_empty());
}

#[test]
fn orphan_entry_writes_nothing() {
    let engine = seeded();

    assert_eq!(
        engine
            .add_entry("NoSuchProject", "B", 10, date("2024-01-01"))
            .unwrap(),
        WriteOutcome::NotFound
    );
    assert_eq!(
        engine.add_entry("P", "NoSuchBlock", 10, date("2024-01-01")).unwrap(),
        WriteOutcome::NotFound
    );

    assert!(engine.get_project_report("P").unwrap().is_empty());
    assert_eq!(engine.database_info().unwrap().entries, 0);
}

#[test]
fn report_totals_match_inserted_minutes() {
    let engine = seeded();
    engine.add_block("P", "C", 30).unwrap();

    let inserts = [
        ("B", 10, "2024-01-01"),
        ("C", 7, "2024-01-01"),
        ("B", 33, "2024-01-02"),
        ("B", 0, "2024-01-02"),
        ("C", 12, "2024-02-10"),
        ("B", 5, "2024-01-01"),
    ];
    let mut expected: HashMap<&str, i64> = HashMap::new();
    for (block, minutes, day) in inserts {
        engine.add_entry("P", block, minutes, date(day)).unwrap();
        *expected.entry(block).or_default() += i64::from(minutes);
    }

    let mut reported: HashMap<String, i64> = HashMap::new();
    for s in engine.get_project_report("P").unwrap() {
        *reported.entry(s.block_name).or_default() += s.total_minutes;
    }

    assert_eq!(reported["B"], expected["B"]);
    assert_eq!(reported["C"], expected["C"]);
}

#[test]
fn views_are_repeatable() {
    let engine = seeded();
    engine.add_entry("P", "B", 10, date("2024-01-01")).unwrap();

    assert_eq!(
        engine.get_project_report("P").unwrap(),
        engine.get_project_report("P").unwrap()
    );
    assert_eq!(
        engine.get_project_blocks("P").unwrap(),
        engine.get_project_blocks("P").unwrap()
    );
}

#[test]
fn report_between_is_inclusive() {
    let engine = seeded();
    for day in ["2024-01-01", "2024-01-15", "2024-01-31", "2024-02-01"] {
        engine.add_entry("P", "B", 10, date(day)).unwrap();
    }

    let dates: Vec<String> = engine
        .get_project_report_between("P", date("2024-01-01"), date("2024-01-31"))
        .unwrap()
        .into_iter()
        .map(|s| s.date.to_string())
        .collect();

    assert_eq!(dates, vec!["2024-01-31", "2024-01-15", "2024-01-01"]);
}

#[test]
fn remove_project_cascades() {
    let engine = seeded();
    engine.add_entry("P", "B", 30, date("2024-01-01")).unwrap();

    assert!(engine.remove_project("P").unwrap());
    assert!(!engine.remove_project("P").unwrap());

    let info = engine.database_info().unwrap();
    assert_eq!((info.projects, info.blocks, info.entries), (0, 0, 0));

    // a recreated project starts empty
    engine.create_project("P", "7d").unwrap();
    assert!(engine.get_project_blocks("P").unwrap().is_empty());
}

#[test]
fn remove_block_cascades_to_its_entries_only() {
    let engine = seeded();
    engine.add_block("P", "Keep", 60).unwrap();
    engine.add_entry("P", "B", 30, date("2024-01-01")).unwrap();
    engine.add_entry("P", "Keep", 15, date("2024-01-01")).unwrap();

    assert!(engine.remove_block("P", "B").unwrap());
    assert!(!engine.remove_block("P", "B").unwrap());

    let report = engine.get_project_report("P").unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].block_name, "Keep");
    assert_eq!(engine.database_info().unwrap().entries, 1);
}

#[test]
fn names_are_bound_not_interpolated() {
    let engine = memory_engine();
    let tricky = "x'); DROP TABLE projects; --";

    assert!(engine.create_project(tricky, "7d").unwrap().is_written());
    assert!(engine.add_block(tricky, "it's", 60).unwrap().is_written());
    engine.add_entry(tricky, "it's", 5, date("2024-01-01")).unwrap();

    assert_eq!(engine.list_projects().unwrap()[0].name, tricky);
    assert_eq!(engine.get_project_blocks(tricky).unwrap()[0].name, "it's");
    assert_eq!(engine.get_project_report(tricky).unwrap()[0].total_minutes, 5);
}

#[test]
fn blank_names_are_rejected() {
    let engine = memory_engine();

    assert!(matches!(
        engine.create_project("   ", "7d"),
        Err(AppError::InvalidName(_))
    ));
    engine.create_project("P", "7d").unwrap();
    assert!(matches!(
        engine.add_block("P", "", 60),
        Err(AppError::InvalidName(_))
    ));
    assert!(engine.list_projects().unwrap().len() == 1);
}

#[test]
fn default_bucket_shortcuts() {
    let engine = memory_engine();

    assert_eq!(engine.create_block("reading").unwrap(), WriteOutcome::Created);
    assert_eq!(
        engine.create_block("reading").unwrap(),
        WriteOutcome::AlreadyExists
    );
    engine
        .add_default_entry("reading", 25, date("2024-03-01"))
        .unwrap();

    let report = engine.get_default_report().unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].target_minutes, 60);
    assert_eq!(report, engine.get_project_report("default").unwrap());

    let projects = engine.list_projects().unwrap();
    assert_eq!(projects[0].name, "default");
    assert_eq!(projects[0].refresh_interval, "7d");
    assert_eq!(projects[0].block_count, 1);
}

#[test]
fn file_ledger_survives_reopen() {
    let db_path = setup_test_db("engine_reopen");

    {
        let engine = Engine::open(&db_path).unwrap();
        engine.create_project("P", "14d").unwrap();
        engine.add_block("P", "B", 60).unwrap();
        engine.add_entry("P", "B", 40, date("2024-05-01")).unwrap();
    }

    let engine = Engine::open(&db_path).unwrap();
    engine.ensure_schema().unwrap();
    assert_eq!(engine.get_project_report("P").unwrap()[0].total_minutes, 40);
    assert_eq!(engine.list_projects().unwrap()[0].refresh_interval, "14d");
    assert!(engine.database_info().unwrap().file_size > 0);
}

#[test]
fn unreachable_path_is_a_connection_error() {
    let mut path = std::env::temp_dir();
    path.push("blocktracker_no_such_dir");
    path.push("nested");
    path.push("ledger.sqlite");

    assert!(matches!(
        Engine::open(&path),
        Err(AppError::Connection { .. })
    ));
}

#[test]
fn incompatible_existing_table_is_a_schema_error() {
    let db_path = setup_test_db("engine_bad_schema");
    {
        let conn = rusqlite::Connection::open(&db_path).unwrap();
        conn.execute_batch("CREATE TABLE blocks (id INTEGER PRIMARY KEY, label TEXT);")
            .unwrap();
    }

    assert!(matches!(Engine::open(&db_path), Err(AppError::Schema(_))));
}

#[test]
fn tables_without_keys_or_cascades_are_a_schema_error() {
    let db_path = setup_test_db("engine_unconstrained_schema");
    {
        let conn = rusqlite::Connection::open(&db_path).unwrap();
        conn.execute_batch(
            "CREATE TABLE projects (id INTEGER PRIMARY KEY, name TEXT, refresh_interval TEXT);
             CREATE TABLE blocks (id INTEGER PRIMARY KEY, project_id INTEGER, name TEXT, target_minutes INTEGER);
             CREATE TABLE entries (id INTEGER PRIMARY KEY, block_id INTEGER, minutes INTEGER, date TEXT);",
        )
        .unwrap();
    }

    match Engine::open(&db_path) {
        Err(AppError::Schema(msg)) => {
            assert!(msg.contains("UNIQUE(name)"), "{msg}");
            assert!(msg.contains("UNIQUE(project_id, name)"), "{msg}");
            assert!(msg.contains("FOREIGN KEY(project_id)"), "{msg}");
            assert!(msg.contains("FOREIGN KEY(block_id)"), "{msg}");
        }
        other => panic!("expected a schema error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn cascade_without_on_delete_is_a_schema_error() {
    let db_path = setup_test_db("engine_fk_no_cascade");
    {
        let conn = rusqlite::Connection::open(&db_path).unwrap();
        conn.execute_batch(
            "CREATE TABLE projects (id INTEGER PRIMARY KEY, name TEXT UNIQUE, refresh_interval TEXT);
             CREATE TABLE blocks (
                 id INTEGER PRIMARY KEY, project_id INTEGER, name TEXT, target_minutes INTEGER,
                 UNIQUE(name, project_id),
                 FOREIGN KEY(project_id) REFERENCES projects(id)
             );",
        )
        .unwrap();
    }

    match Engine::open(&db_path) {
        Err(AppError::Schema(msg)) => {
            assert!(msg.contains("ON DELETE CASCADE"), "{msg}");
            assert!(!msg.contains("UNIQUE"), "{msg}");
        }
        other => panic!("expected a schema error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn loose_legacy_values_do_not_break_views() {
    let db_path = setup_test_db("engine_loose_values");
    {
        let conn = rusqlite::Connection::open(&db_path).unwrap();
        conn.execute_batch(
            "CREATE TABLE projects (id INTEGER PRIMARY KEY, name TEXT UNIQUE, refresh_interval TEXT);
             CREATE TABLE blocks (
                 id INTEGER PRIMARY KEY, project_id INTEGER, name TEXT, target_minutes INTEGER,
                 UNIQUE(project_id, name),
                 FOREIGN KEY(project_id) REFERENCES projects(id) ON DELETE CASCADE
             );
             CREATE TABLE entries (
                 id INTEGER PRIMARY KEY, block_id INTEGER, minutes INTEGER, date TEXT,
                 FOREIGN KEY(block_id) REFERENCES blocks(id) ON DELETE CASCADE
             );
             INSERT INTO projects (id, name, refresh_interval) VALUES (1, 'old', NULL);
             INSERT INTO blocks (id, project_id, name, target_minutes) VALUES (1, 1, 'B', -5);
             INSERT INTO entries (block_id, minutes, date) VALUES (1, 15, '2024-01-01');",
        )
        .unwrap();
    }

    let engine = Engine::open(&db_path).unwrap();

    let projects = engine.list_projects().unwrap();
    assert_eq!(projects[0].refresh_interval, "7d");

    let blocks = engine.get_project_blocks("old").unwrap();
    assert_eq!(blocks[0].target_minutes, 0);
    assert_eq!(blocks[0].total_minutes, 15);

    let report = engine.get_project_report("old").unwrap();
    assert_eq!(report[0].target_minutes, 0);
}

#[test]
fn older_projects_table_gains_refresh_interval() {
    let db_path = setup_test_db("engine_legacy_projects");
    {
        let conn = rusqlite::Connection::open(&db_path).unwrap();
        conn.execute_batch(
            "CREATE TABLE projects (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT NOT NULL UNIQUE);
             INSERT INTO projects (name) VALUES ('old');",
        )
        .unwrap();
    }

    let engine = Engine::open(&db_path).unwrap();
    let projects = engine.list_projects().unwrap();
    assert_eq!(projects[0].name, "old");
    assert_eq!(projects[0].refresh_interval, "7d");

    let audit = engine.load_audit().unwrap();
    assert!(audit.iter().any(|r| r.operation == "migration_applied"));
}
