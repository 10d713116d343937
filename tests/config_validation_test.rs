use std::path::Path;

use mockapi::config::{AppConfig, FixturesSection};
use mockapi::fixture::Fixture;

#[test]
fn default_config_resolves_fixtures_under_dir() {
    let config = AppConfig::default();
    let store = config.fixtures.to_store();

    assert_eq!(
        store.path(Fixture::Transactions),
        Path::new("./fixtures/transactions.json")
    );
    assert_eq!(
        store.path(Fixture::WaterMeasurements),
        Path::new("./fixtures/water_measurements.json")
    );
}

#[test]
fn absolute_fixture_paths_ignore_dir() {
    let fixtures = FixturesSection {
        dir: "./fixtures".to_string(),
        transactions: "/srv/mock/tx.json".to_string(),
        ..Default::default()
    };
    let store = fixtures.to_store();

    assert_eq!(store.path(Fixture::Transactions), Path::new("/srv/mock/tx.json"));
    assert_eq!(
        store.path(Fixture::WaterMeasurements),
        Path::new("./fixtures/water_measurements.json")
    );
}

#[test]
fn default_server_binds_all_interfaces() {
    let config = AppConfig::default();
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 3000);
}
