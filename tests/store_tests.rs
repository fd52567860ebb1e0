//! Local store contract, exercised through the library DB API.

use chrono::{NaiveDate, NaiveTime};
use rsupplylog::db::open_store;
use rsupplylog::db::queries::{
    count_reports, delete_report, insert_report, load_all_reports, load_reports_by_date,
};
use rsupplylog::db::stats::day_stats;
use rsupplylog::models::day_stats::DayStats;
use rsupplylog::models::report::NewReport;

mod common;
use common::setup_test_db;

fn sample_report(date: &str, time: &str) -> NewReport {
    NewReport {
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        time: NaiveTime::parse_from_str(time, "%H:%M").unwrap(),
        supply_cards: 12,
        supply_amount: 500.50,
        supply_total: 6000.00,
        exchange_cards: 3,
        exchange_amount: 250.75,
        notes: "shift A".to_string(),
        image: "data:image/png;base64,AAAA".to_string(),
        timestamp: "2025-09-01T09:31:00+02:00".to_string(),
    }
}

#[test]
fn test_insert_then_list_round_trips() {
    let db_path = setup_test_db("store_round_trip");
    let mut pool = open_store(&db_path).expect("open store");

    let rec = sample_report("2025-09-01", "09:30");
    let id = insert_report(&pool.conn, &rec).expect("insert");

    let all = load_all_reports(&mut pool).expect("list all");
    assert_eq!(all.len(), 1);

    let got = &all[0];
    assert_eq!(got.id, id);
    assert_eq!(got.date_str(), "2025-09-01");
    assert_eq!(got.time_str(), "09:30");
    assert_eq!(got.supply_cards, rec.supply_cards);
    assert_eq!(got.supply_amount, rec.supply_amount);
    assert_eq!(got.supply_total, rec.supply_total);
    assert_eq!(got.exchange_cards, rec.exchange_cards);
    assert_eq!(got.exchange_amount, rec.exchange_amount);
    assert_eq!(got.notes, rec.notes);
    assert_eq!(got.image, rec.image);
    assert_eq!(got.timestamp, rec.timestamp);
}

#[test]
fn test_ids_are_store_assigned_and_never_reused() {
    let db_path = setup_test_db("store_fresh_ids");
    let mut pool = open_store(&db_path).expect("open store");

    let first = insert_report(&pool.conn, &sample_report("2025-09-01", "09:30")).unwrap();
    let second = insert_report(&pool.conn, &sample_report("2025-09-01", "10:30")).unwrap();
    assert!(second > first);

    // deleting the latest row must not free its id for reuse
    delete_report(&mut pool, second).unwrap();
    let third = insert_report(&pool.conn, &sample_report("2025-09-01", "11:30")).unwrap();
    assert!(third > second);
}

#[test]
fn test_open_is_idempotent() {
    let db_path = setup_test_db("store_idempotent_open");

    {
        let pool = open_store(&db_path).expect("first open");
        insert_report(&pool.conn, &sample_report("2025-09-01", "09:30")).unwrap();
    }

    // a second open must not recreate or clear the table
    let mut pool = open_store(&db_path).expect("second open");
    assert_eq!(count_reports(&mut pool).unwrap(), 1);
}

#[test]
fn test_day_stats_scenario() {
    let db_path = setup_test_db("store_day_stats");
    let mut pool = open_store(&db_path).expect("open store");

    let mut a = sample_report("2025-09-01", "09:30");
    a.supply_cards = 2;
    a.exchange_cards = 3;
    a.supply_total = 10.0;
    a.exchange_amount = 5.0;

    let mut b = sample_report("2025-09-01", "10:30");
    b.supply_cards = 1;
    b.exchange_cards = 0;
    b.supply_total = 0.0;
    b.exchange_amount = 0.0;

    // a record on another day must not leak into the summary
    let other_day = sample_report("2025-09-02", "09:00");

    insert_report(&pool.conn, &a).unwrap();
    insert_report(&pool.conn, &b).unwrap();
    insert_report(&pool.conn, &other_day).unwrap();

    let date = NaiveDate::parse_from_str("2025-09-01", "%Y-%m-%d").unwrap();
    let stats = day_stats(&mut pool, &date).unwrap();

    assert_eq!(
        stats,
        DayStats {
            operations: 2,
            supply_cards: 3,
            exchange_cards: 3,
            total_amount: 15.0,
        }
    );
}

#[test]
fn test_day_stats_empty_day_is_zeroed() {
    let db_path = setup_test_db("store_day_stats_empty");
    let mut pool = open_store(&db_path).expect("open store");

    let date = NaiveDate::parse_from_str("2030-01-01", "%Y-%m-%d").unwrap();
    let stats = day_stats(&mut pool, &date).unwrap();

    assert_eq!(stats, DayStats::default());
}

#[test]
fn test_list_by_date_filters() {
    let db_path = setup_test_db("store_list_by_date");
    let mut pool = open_store(&db_path).expect("open store");

    insert_report(&pool.conn, &sample_report("2025-09-01", "09:30")).unwrap();
    insert_report(&pool.conn, &sample_report("2025-09-02", "10:00")).unwrap();
    insert_report(&pool.conn, &sample_report("2025-09-01", "17:45")).unwrap();

    let date = NaiveDate::parse_from_str("2025-09-01", "%Y-%m-%d").unwrap();
    let day = load_reports_by_date(&mut pool, &date).unwrap();

    assert_eq!(day.len(), 2);
    assert!(day.iter().all(|r| r.date_str() == "2025-09-01"));
}

#[test]
fn test_delete_unknown_id_is_a_noop_success() {
    let db_path = setup_test_db("store_delete_unknown");
    let mut pool = open_store(&db_path).expect("open store");

    insert_report(&pool.conn, &sample_report("2025-09-01", "09:30")).unwrap();

    let affected = delete_report(&mut pool, 99_999).expect("idempotent delete");
    assert_eq!(affected, 0);
    assert_eq!(count_reports(&mut pool).unwrap(), 1);
}

#[test]
fn test_delete_existing_report() {
    let db_path = setup_test_db("store_delete_existing");
    let mut pool = open_store(&db_path).expect("open store");

    let id = insert_report(&pool.conn, &sample_report("2025-09-01", "09:30")).unwrap();

    let affected = delete_report(&mut pool, id).expect("delete");
    assert_eq!(affected, 1);
    assert_eq!(count_reports(&mut pool).unwrap(), 0);
}
