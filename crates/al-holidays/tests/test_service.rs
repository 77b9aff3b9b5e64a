//! Integration tests for `HolidayService` against in-memory sources.

use std::sync::Arc;
use std::time::Duration;

use al_holidays::{
    parse_year_payload, HolidayService, HolidaySource, HolidayType, StaticHolidaySource,
};
use al_time::Date;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn service(source: StaticHolidaySource) -> HolidayService {
    HolidayService::new(Arc::new(source))
}

fn source_2024() -> StaticHolidaySource {
    StaticHolidaySource::new().with_records(
        2024,
        &[
            ("2024-01-01", "New Year", true),
            ("2024-10-01", "National Day", true),
            ("2024-10-05", "", true),
            ("2024-10-06", "National Day", true),
            ("2024-10-12", "National Day (makeup)", false),
        ],
    )
}

/// `n` consecutive off-day records from 2025-01-01.
fn records_2025(n: i32) -> Vec<(String, bool)> {
    let start = date(2025, 1, 1);
    (0..n)
        .map(|i| (start.add_days(i).unwrap().to_iso(), true))
        .collect()
}

fn source_2025(n: i32) -> StaticHolidaySource {
    let owned = records_2025(n);
    let records: Vec<(&str, &str, bool)> = owned
        .iter()
        .map(|(d, off)| (d.as_str(), "Spring Festival", *off))
        .collect();
    StaticHolidaySource::new().with_records(2025, &records)
}

// ─── Classification ───────────────────────────────────────────────────────────

#[test]
fn uncached_year_uses_weekend_rule() {
    let service = service(StaticHolidaySource::new());
    // 2024-10-12 Saturday, 2024-10-13 Sunday, 2024-10-14 Monday
    assert_eq!(
        service.classify(date(2024, 10, 12)),
        (HolidayType::RestDay, String::new())
    );
    assert_eq!(service.classify(date(2024, 10, 13)).0, HolidayType::RestDay);
    assert_eq!(
        service.classify(date(2024, 10, 14)),
        (HolidayType::None, String::new())
    );
    assert!(service.is_rest_day(date(2024, 10, 13)));
    assert!(!service.is_rest_day(date(2024, 10, 14)));
}

#[tokio::test]
async fn makeup_workday_overrides_weekend() {
    let service = service(source_2024());
    assert!(service.fetch_year(2024).await);

    assert_eq!(
        service.classify(date(2024, 10, 12)),
        (HolidayType::WorkDay, "National Day (makeup)".to_string())
    );
    assert!(!service.is_rest_day(date(2024, 10, 12)));
}

#[tokio::test]
async fn named_holiday_wins_regardless_of_weekday() {
    let service = service(source_2024());
    assert!(service.fetch_year(2024).await);

    // Monday
    assert_eq!(
        service.classify(date(2024, 1, 1)),
        (HolidayType::Holiday, "New Year".to_string())
    );
    // Sunday
    assert_eq!(
        service.classify(date(2024, 10, 6)),
        (HolidayType::Holiday, "National Day".to_string())
    );
    // Unnamed Saturday off-day stays a plain rest day.
    assert_eq!(
        service.classify(date(2024, 10, 5)),
        (HolidayType::RestDay, String::new())
    );
    assert!(service.is_rest_day(date(2024, 10, 1)));
}

#[tokio::test]
async fn dates_missing_from_a_cached_year_fall_back() {
    let service = service(source_2024());
    assert!(service.fetch_year(2024).await);
    assert_eq!(
        service.classify(date(2024, 3, 5)),
        (HolidayType::None, String::new())
    );
    assert_eq!(service.classify(date(2024, 3, 9)).0, HolidayType::RestDay);
}

// ─── Fetching ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn failed_fetch_leaves_cache_untouched() {
    let source = source_2024()
        .failing_year(2025)
        .with_body(2026, "{}")
        .with_body(2027, "<html>busy</html>");
    let service = service(source);

    assert!(!service.fetch_year(2025).await);
    assert!(!service.fetch_year(2026).await);
    assert!(!service.fetch_year(2027).await);
    assert!(!service.fetch_year(2030).await);
    assert!(service.cached_years().is_empty());

    assert!(service.fetch_year(2024).await);
    assert_eq!(service.cached_years(), vec![2024]);
    assert_eq!(service.cached_record_count(2024), Some(5));
}

#[tokio::test]
async fn failed_refetch_keeps_previous_dataset() {
    let service = service(source_2024());
    let first = parse_year_payload(
        2025,
        r#"{"2025-01-01": {"date": "2025-01-01", "name": "New Year", "isOffDay": true}}"#,
    )
    .unwrap();
    assert_eq!(service.install_year(2025, first), 1);

    // The source has nothing for 2025.
    assert!(!service.fetch_year(2025).await);
    assert_eq!(service.cached_record_count(2025), Some(1));
    assert_eq!(
        service.classify(date(2025, 1, 1)),
        (HolidayType::Holiday, "New Year".to_string())
    );
}

#[tokio::test]
async fn try_fetch_reports_the_error() {
    let service = service(StaticHolidaySource::new().failing_year(2025));
    let err = service.try_fetch_year(2025).await.unwrap_err();
    assert!(err.is_recoverable());
    assert!(err.to_string().contains("2025"));
}

#[tokio::test]
async fn preload_isolates_failures() {
    let source = source_2024().failing_year(2025).with_records(
        2026,
        &[("2026-01-01", "New Year", true)],
    );
    let service = service(source);

    let installed = service.preload(&[2024, 2025, 2026]).await;
    assert_eq!(installed, 2);
    assert!(service.is_year_cached(2024));
    assert!(!service.is_year_cached(2025));
    assert!(service.is_year_cached(2026));
}

#[tokio::test]
async fn preload_runs_concurrently() {
    let source = Arc::new(
        source_2024()
            .with_records(2025, &[("2025-01-01", "New Year", true)])
            .with_delay(Duration::from_millis(200)),
    );
    let service = HolidayService::new(source.clone() as Arc<dyn HolidaySource>);

    let started = std::time::Instant::now();
    assert_eq!(service.preload(&[2024, 2025]).await, 2);
    // Sequential fetches would take at least 400ms.
    assert!(started.elapsed() < Duration::from_millis(390));
    assert_eq!(source.request_count(), 2);
}

#[tokio::test]
async fn clear_cache_restores_default_rule() {
    let service = service(source_2024());
    assert!(service.fetch_year(2024).await);
    assert_eq!(service.classify(date(2024, 10, 12)).0, HolidayType::WorkDay);

    service.clear_cache();
    assert!(!service.is_year_cached(2024));
    assert_eq!(service.classify(date(2024, 10, 12)).0, HolidayType::RestDay);
}

// ─── Concurrency ──────────────────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_fetches_replace_atomically() {
    const RECORDS: usize = 40;
    let source = source_2025(RECORDS as i32).with_delay(Duration::from_millis(20));
    let service = Arc::new(service(source));

    let reader = {
        let service = service.clone();
        tokio::spawn(async move {
            for _ in 0..2_000 {
                if let Some(n) = service.cached_record_count(2025) {
                    assert_eq!(n, RECORDS);
                }
                tokio::task::yield_now().await;
            }
        })
    };

    let a = tokio::spawn({
        let service = service.clone();
        async move { service.fetch_year(2025).await }
    });
    let b = tokio::spawn({
        let service = service.clone();
        async move { service.fetch_year(2025).await }
    });

    assert!(a.await.unwrap());
    assert!(b.await.unwrap());
    reader.await.unwrap();

    assert_eq!(service.cached_record_count(2025), Some(RECORDS));
    assert_eq!(
        service.classify(date(2025, 1, 1)),
        (HolidayType::Holiday, "Spring Festival".to_string())
    );
}

#[test]
fn racing_installs_never_expose_partial_years() {
    let service = Arc::new(service(StaticHolidaySource::new()));
    let small = records_2025(10);
    let large = records_2025(25);
    let to_body = |records: &[(String, bool)]| {
        let entries: Vec<String> = records
            .iter()
            .map(|(d, off)| format!(r#""{d}": {{"date": "{d}", "name": "", "isOffDay": {off}}}"#))
            .collect();
        format!("{{{}}}", entries.join(","))
    };
    let small_body = to_body(&small);
    let large_body = to_body(&large);

    std::thread::scope(|scope| {
        for body in [&small_body, &large_body] {
            let service = &service;
            scope.spawn(move || {
                for _ in 0..200 {
                    let records = parse_year_payload(2025, body).unwrap();
                    service.install_year(2025, records);
                }
            });
        }
        let service = &service;
        scope.spawn(move || {
            for _ in 0..2_000 {
                if let Some(n) = service.cached_record_count(2025) {
                    assert!(n == 10 || n == 25, "observed {n} records");
                }
            }
        });
    });
}
