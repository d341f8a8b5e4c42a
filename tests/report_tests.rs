use paysheet::errors::AppError;
use paysheet::models::day::DayOfWeek;
use paysheet::report::document::TEMPLATE_PAGES;
use paysheet::report::field_map::DayAttr;
use paysheet::report::{
    Document, FieldKey, FieldPlacement, ReportFieldMap, TemplateSource, load_template,
    publish_atomic, publish_report, render, report_file_name,
};
use std::fs;

mod common;
use common::{pdf_files, sample_record};

fn bundled() -> Document {
    load_template(&TemplateSource::Bundled).expect("bundled template")
}

fn placed(doc: &Document, map: &ReportFieldMap, key: FieldKey) -> String {
    let f = map.get(key).expect("key in map");
    doc.pages[f.page]
        .text_at(f.x, f.y)
        .expect("text placed")
        .to_string()
}

#[test]
fn standard_map_is_complete_and_valid() {
    let map = ReportFieldMap::standard();
    map.validate().expect("standard map valid");
    for key in FieldKey::required() {
        assert!(map.get(key).is_some(), "missing {key}");
    }
}

#[test]
fn field_keys_round_trip_through_text() {
    for key in ReportFieldMap::standard()
        .fields
        .iter()
        .map(|f| FieldKey::parse(&f.key).expect("parsable"))
    {
        assert_eq!(FieldKey::parse(&key.to_string()), Some(key));
    }
    assert_eq!(
        FieldKey::parse("week2.day[0].hours"),
        Some(FieldKey::Day {
            week: 1,
            day: DayOfWeek::Sunday,
            attr: DayAttr::Hours
        })
    );
    assert_eq!(FieldKey::parse("week3.total"), None);
    assert_eq!(FieldKey::parse("week1.day[7].hours"), None);
}

#[test]
fn render_places_identity_days_and_totals() {
    let record = sample_record("E100", "ops");
    let map = ReportFieldMap::standard();
    let report = render(&record, &map, &bundled()).expect("render");

    assert_eq!(report.document.pages.len(), TEMPLATE_PAGES);
    assert_eq!(placed(&report.document, &map, FieldKey::EmployeeName), "Ada WorkerE100");
    assert_eq!(placed(&report.document, &map, FieldKey::EmployeeNumber), "E100");
    assert_eq!(placed(&report.document, &map, FieldKey::HourlyRate), "$22.50");
    assert_eq!(placed(&report.document, &map, FieldKey::CasualMark), "X");
    assert_eq!(placed(&report.document, &map, FieldKey::PeriodStart), "2025-01-14");
    assert_eq!(placed(&report.document, &map, FieldKey::PeriodEnd), "2025-01-27");

    let sunday_w1 = FieldKey::Day {
        week: 0,
        day: DayOfWeek::Sunday,
        attr: DayAttr::Hours,
    };
    assert_eq!(placed(&report.document, &map, sunday_w1), "8");
    let sunday_date = FieldKey::Day {
        week: 0,
        day: DayOfWeek::Sunday,
        attr: DayAttr::Date,
    };
    assert_eq!(placed(&report.document, &map, sunday_date), "January 19");

    assert_eq!(placed(&report.document, &map, FieldKey::WeekTotal(0)), "40");
    assert_eq!(placed(&report.document, &map, FieldKey::WeekTotal(1)), "40");
    assert_eq!(placed(&report.document, &map, FieldKey::GrandTotal), "80");
    assert_eq!(map.get(FieldKey::GrandTotal).map(|f| f.page), Some(1));
}

#[test]
fn totals_match_day_sum() {
    let record = sample_record("E100", "ops");
    let report = render(&record, &ReportFieldMap::standard(), &bundled()).expect("render");
    let sum: f64 = record
        .weeks
        .iter()
        .flat_map(|w| w.days.iter())
        .map(|d| d.hours.value())
        .sum();
    assert_eq!(report.totals.grand, sum);
    assert_eq!(report.totals.grand, record.grand_total());
}

#[test]
fn template_is_not_mutated_and_stays_reusable() {
    let template = bundled();
    let before = template.clone();
    let map = ReportFieldMap::standard();

    let a = render(&sample_record("E1", "ops"), &map, &template).expect("render a");
    let b = render(&sample_record("E2", "ops"), &map, &template).expect("render b");

    assert_eq!(template, before);
    assert_eq!(placed(&a.document, &map, FieldKey::EmployeeNumber), "E1");
    assert_eq!(placed(&b.document, &map, FieldKey::EmployeeNumber), "E2");
}

#[test]
fn unresolvable_key_aborts_render() {
    let mut map = ReportFieldMap::standard();
    map.fields.push(FieldPlacement {
        key: "week1.day[2].overtime".into(),
        page: 0,
        x: 10.0,
        y: 10.0,
        font_size: 10.0,
        max_width: None,
    });

    match render(&sample_record("E1", "ops"), &map, &bundled()) {
        Err(AppError::UnresolvedField(key)) => assert_eq!(key, "week1.day[2].overtime"),
        other => panic!("expected UnresolvedField, got {other:?}"),
    }
}

#[test]
fn incomplete_map_fails_validation() {
    let mut map = ReportFieldMap::standard();
    map.fields.retain(|f| f.key != "grandTotal");
    let err = map.validate().expect_err("incomplete");
    assert!(err.to_string().contains("grandTotal"), "{err}");

    let mut map = ReportFieldMap::standard();
    map.fields[0].page = 2;
    assert!(matches!(map.validate(), Err(AppError::FieldMapInvalid(_))));
}

#[test]
fn field_map_version_must_match_template() {
    let mut map = ReportFieldMap::standard();
    map.version = 2;
    assert!(matches!(
        render(&sample_record("E1", "ops"), &map, &bundled()),
        Err(AppError::FieldMapInvalid(_))
    ));
}

#[test]
fn unversioned_template_and_map_share_the_default_version() {
    let template = Document::from_yaml("pages:\n  - texts: []\n  - texts: []\n")
        .expect("template without version");
    let map: ReportFieldMap =
        serde_yaml::from_str("fields: []\n").expect("map without version");
    assert_eq!(template.version, map.version);

    let report = render(
        &sample_record("E1", "ops"),
        &ReportFieldMap::standard(),
        &template,
    )
    .expect("unversioned template renders with the standard map");
    assert_eq!(report.document.pages.len(), TEMPLATE_PAGES);
}

fn with_extra_key(key: &str) -> ReportFieldMap {
    let mut map = ReportFieldMap::standard();
    map.fields.push(FieldPlacement {
        key: key.into(),
        page: 0,
        x: 20.0,
        y: 20.0,
        font_size: 10.0,
        max_width: None,
    });
    map
}

#[test]
fn aliased_day_index_cannot_duplicate_a_field() {
    for alias in ["week1.day[+0].hours", "week1.day[00].hours", " week1.day[0].hours"] {
        let map = with_extra_key(alias);
        assert!(
            matches!(
                map.validate(),
                Err(AppError::FieldMapInvalid(_) | AppError::UnresolvedField(_))
            ),
            "{alias:?} accepted"
        );
    }
    assert_eq!(FieldKey::parse("week1.day[+0].hours"), None);
    assert_eq!(FieldKey::parse("week1.day[00].hours"), None);
}

#[test]
fn unknown_key_fails_validation() {
    match with_extra_key("week1.day[2].overtime").validate() {
        Err(AppError::UnresolvedField(key)) => assert_eq!(key, "week1.day[2].overtime"),
        other => panic!("expected UnresolvedField, got {other:?}"),
    }
}

#[test]
fn missing_template_file_is_not_found() {
    let dir = tempfile::tempdir().expect("tmp");
    let source = TemplateSource::File(dir.path().join("nope.yaml"));
    assert!(matches!(
        load_template(&source),
        Err(AppError::TemplateNotFound(_))
    ));
}

#[test]
fn template_needs_two_pages() {
    let dir = tempfile::tempdir().expect("tmp");
    let path = dir.path().join("one_page.yaml");
    fs::write(&path, "version: 1\npages:\n  - texts: []\n").expect("write");
    assert!(matches!(
        load_template(&TemplateSource::File(path)),
        Err(AppError::TemplateInvalid(_))
    ));
}

#[test]
fn template_source_from_config() {
    assert_eq!(TemplateSource::from_config(None), TemplateSource::Bundled);
    assert_eq!(TemplateSource::from_config(Some("  ")), TemplateSource::Bundled);
    assert!(matches!(
        TemplateSource::from_config(Some("/tmp/t.yaml")),
        TemplateSource::File(_)
    ));
}

#[test]
fn pdf_output_is_a_pdf() {
    let report = render(
        &sample_record("E1", "ops"),
        &ReportFieldMap::standard(),
        &bundled(),
    )
    .expect("render");
    let bytes = report.document.to_pdf();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn each_employee_gets_a_distinct_report() {
    let dir = tempfile::tempdir().expect("tmp");
    let map = ReportFieldMap::standard();
    let template = bundled();

    for number in ["E1", "E2"] {
        let record = sample_record(number, "ops");
        let report = render(&record, &map, &template).expect("render");
        publish_report(dir.path(), &record, &report.document).expect("publish");
    }

    assert_eq!(
        pdf_files(dir.path()),
        vec![
            "timesheet_E1_2025-01-14.pdf".to_string(),
            "timesheet_E2_2025-01-14.pdf".to_string()
        ]
    );
}

#[test]
fn file_names_are_sanitised() {
    let record = sample_record("../x y", "ops");
    assert_eq!(report_file_name(&record), "timesheet____x_y_2025-01-14.pdf");
}

#[test]
fn publishing_replaces_without_leftovers() {
    let dir = tempfile::tempdir().expect("tmp");
    let path = publish_atomic(dir.path(), "r.pdf", b"first").expect("first");
    publish_atomic(dir.path(), "r.pdf", b"second").expect("second");

    assert_eq!(fs::read(&path).expect("read"), b"second");
    let names: Vec<_> = fs::read_dir(dir.path())
        .expect("dir")
        .filter_map(Result::ok)
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["r.pdf".to_string()]);
}
