// crates/citytz-core/tests/embedded.rs
//
// Loader-level tests against the bundled dataset.

#![cfg(feature = "embedded")]

use citytz_core::CityDb;

#[test]
fn loads_the_bundled_dataset() {
    let db = CityDb::load().expect("bundled dataset must load");
    assert!(!db.is_empty());
}

#[test]
fn shared_instance_is_loaded_once() {
    let a = CityDb::shared().expect("shared table must load");
    let b = CityDb::shared().expect("shared table must load");
    assert!(std::ptr::eq(a, b));
    assert_eq!(a.len(), CityDb::load().unwrap().len());
}

#[test]
fn bundled_rows_are_well_formed() {
    let db = CityDb::shared().unwrap();
    for (i, record) in db.all().iter().enumerate() {
        assert!(!record.city.is_empty(), "row {i} has an empty city");
        assert!(!record.country.is_empty(), "row {i} ({}) has an empty country", record.city);
        assert!(!record.timezone.is_empty(), "row {i} ({}) has an empty timezone", record.city);
        assert!(
            (-90.0..=90.0).contains(&record.lat),
            "row {i} ({}) latitude out of range: {}",
            record.city,
            record.lat
        );
        assert!(
            (-180.0..=180.0).contains(&record.lng),
            "row {i} ({}) longitude out of range: {}",
            record.city,
            record.lng
        );
    }
}

#[test]
fn bundled_dataset_answers_the_reference_queries() {
    let db = CityDb::shared().unwrap();

    let chicago = db.lookup_by_city("Chicago");
    assert!(!chicago.is_empty());
    assert!((chicago[0].lat - 41.82999066).abs() < 1e-6);
    assert_eq!(chicago, db.lookup_by_city("chicago"));

    let springfield = db.find_by_city_state_province("springfield mo");
    assert!(springfield.iter().any(|c| (c.lat - 37.18001609).abs() < 1e-6));

    let german = db.find_by_iso_code("de");
    assert!(!german.is_empty());
    assert_eq!(german, db.find_by_iso_code("DE"));
    assert!(german.iter().any(|c| (c.lat - 49.98247246).abs() < 1e-6));

    assert!(!db.find_by_coordinates("41.8299,-87.7500").is_empty());
    assert!(db.find_by_coordinates("invalid").is_empty());
    assert!(db.find_by_coordinates("123.45").is_empty());
}

#[test]
fn exact_lookup_identity_holds_for_every_bundled_row() {
    let db = CityDb::shared().unwrap();
    for record in db.all() {
        assert!(
            db.lookup_by_city(&record.city)
                .iter()
                .any(|c| std::ptr::eq(*c, record)),
            "lookup_by_city({:?}) lost its own row",
            record.city
        );
    }
}

#[test]
fn stats_are_consistent_with_the_table() {
    let db = CityDb::shared().unwrap();
    let stats = db.stats();
    assert_eq!(stats.cities, db.len());
    assert!(stats.countries >= 1 && stats.countries <= stats.cities);
    assert!(stats.timezones >= 1 && stats.timezones <= stats.cities);
}
