use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;

use crate::{Error, Mapping, Result};

lazy_static! {
    // Entries of the JS array literal inlined in the page, e.g.
    // `{ code: "33", area: "דן" }`. ASCII digits only.
    static ref AREA_ENTRY: Regex =
        Regex::new(r#"\{ code: "([0-9]+)", area: "([א-ת ]+)" \}"#).unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaRecord {
    pub code: i64,
    pub name: String,
}

/// Every area entry embedded in `html`, in document order.
pub fn parse_records(html: &str) -> Result<Vec<AreaRecord>> {
    AREA_ENTRY
        .captures_iter(html)
        .map(|caps| {
            let code = &caps[1];
            Ok(AreaRecord {
                code: code.parse().map_err(|source| Error::Number {
                    value: code.to_owned(),
                    source,
                })?,
                name: caps[2].to_owned(),
            })
        })
        .collect()
}

/// Sorts by code and folds into name -> code.
///
/// When two records share a name the one with the higher code wins, since it
/// is inserted last.
pub fn into_mapping(mut records: Vec<AreaRecord>) -> Mapping {
    records.sort_by_key(|record| record.code);

    let mut areas = Mapping::with_capacity(records.len());
    for AreaRecord { code, name } in records {
        if let Some(previous) = areas.get(&name) {
            warn!(
                "area {:?} appears with codes {} and {}, keeping {}",
                name, previous, code, code
            );
        }
        areas.insert(name, code);
    }

    areas
}

pub fn extract_areas(html: &str) -> Result<Mapping> {
    let records = parse_records(html)?;
    debug!("matched {} area entries", records.len());

    if records.is_empty() {
        return Err(Error::NoMatches("area entries"));
    }

    Ok(into_mapping(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAKAR: &str = include_str!("../fixtures/pakar.html");

    fn record(code: i64, name: &str) -> AreaRecord {
        AreaRecord {
            code,
            name: name.to_string(),
        }
    }

    #[test]
    fn parse_fixture_records() {
        let records = parse_records(PAKAR).unwrap();
        assert_eq!(records.len(), 7);
        assert_eq!(records[0], record(10, "גליל עליון"));
        assert_eq!(records[6], record(5, "דן"));
    }

    #[test]
    fn skips_malformed_entries() {
        let records = parse_records(PAKAR).unwrap();
        assert!(records.iter().all(|r| r.name != "שגוי" && r.name != "Invalid"));
    }

    #[test]
    fn extract_fixture_one_entry_per_distinct_name() {
        let areas = extract_areas(PAKAR).unwrap();
        let names: Vec<_> = areas.keys().map(String::as_str).collect();
        assert_eq!(
            names,
            ["גולן צפון", "קו העימות", "דן", "גליל עליון", "מנשה", "ירקון"]
        );
        assert_eq!(areas["גולן צפון"], 1);
        assert_eq!(areas["קו העימות"], 2);
        assert_eq!(areas["גליל עליון"], 10);
        assert_eq!(areas["מנשה"], 10);
        assert_eq!(areas["ירקון"], 21);
    }

    #[test]
    fn sorts_numerically() {
        let html = r#"{ code: "10", area: "ב" } { code: "2", area: "א" }"#;
        let areas = extract_areas(html).unwrap();
        let codes: Vec<_> = areas.values().copied().collect();
        assert_eq!(codes, [2, 10]);
    }

    #[test]
    fn duplicate_name_keeps_last_sorted() {
        let areas = into_mapping(vec![record(2, "X"), record(1, "X")]);
        assert_eq!(areas.len(), 1);
        assert_eq!(areas["X"], 2);

        let html = r#"{ code: "1", area: "ת" }{ code: "2", area: "ת" }"#;
        assert_eq!(extract_areas(html).unwrap()["ת"], 2);
    }

    #[test]
    fn duplicate_name_keeps_first_position() {
        let areas = into_mapping(vec![record(1, "א"), record(2, "ב"), record(3, "א")]);
        let entries: Vec<_> = areas.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        assert_eq!(entries, [("א", 3), ("ב", 2)]);
    }

    #[test]
    fn no_matches_is_an_error() {
        let html = "<html><body><script>var areasList = [];</script></body></html>";
        match extract_areas(html) {
            Err(Error::NoMatches(_)) => {}
            other => panic!("expected NoMatches, got {:?}", other),
        }
    }

    #[test]
    fn non_ascii_digits_do_not_match() {
        let html = r#"{ code: "١٢", area: "א" } { code: "12", area: "ב" }"#;
        let areas = extract_areas(html).unwrap();
        assert_eq!(areas.len(), 1);
        assert_eq!(areas["ב"], 12);

        assert!(matches!(
            extract_areas(r#"{ code: "١٢", area: "א" }"#),
            Err(Error::NoMatches(_))
        ));
    }

    #[test]
    fn oversized_code_is_an_error() {
        let html = r#"{ code: "99999999999999999999999", area: "א" }"#;
        match extract_areas(html) {
            Err(Error::Number { value, .. }) => assert_eq!(value, "99999999999999999999999"),
            other => panic!("expected Number, got {:?}", other),
        }
    }
}
