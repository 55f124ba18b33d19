use chrono::{NaiveDate, NaiveDateTime};
use interval_humanize::{
    age, interval, DurationComponents, FormatOptions, HumanizeError, Humanizer, TimeUnit,
};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

fn reference() -> NaiveDateTime {
    at(2014, 3, 15, 10, 30, 0)
}

fn render(from: &str, till: &str, options: &FormatOptions) -> String {
    Humanizer::new()
        .interval_at(&from.into(), &till.into(), reference(), options)
        .unwrap()
}

#[test]
fn test_birthday_age_in_years() {
    let rendered = render("28.06.1986", "2013-06-28", &FormatOptions::new("en"));
    assert_eq!(rendered, "27 years");
}

#[test]
fn test_english_intervals() {
    let options = FormatOptions::new("en");
    let cases = [
        ("2012-01-15", "2013-03-15", "1 year 2 months"),
        ("2014-03-14", "2014-03-15", "1 day"),
        ("2014-03-15 10:00:00", "2014-03-15 12:45:30", "2 hours 45 minutes 30 seconds"),
        ("2014-02-15", "2014-03-15", "1 month"),
    ];

    for (from, till, expected) in cases {
        assert_eq!(render(from, till, &options), expected, "{from} -> {till}");
    }
}

#[test]
fn test_russian_intervals() {
    let options = FormatOptions::new("ru");
    let cases = [
        ("2012-01-10", "2014-04-10", "2 года 3 месяца"),
        ("2013-03-15", "2014-03-15", "1 год"),
        ("2009-03-15", "2014-03-15", "5 лет"),
        ("1993-03-15", "2014-03-15", "21 год"),
    ];

    for (from, till, expected) in cases {
        assert_eq!(render(from, till, &options), expected, "{from} -> {till}");
    }
}

#[test]
fn test_swapped_endpoints_read_the_same() {
    let options = FormatOptions::new("en");
    assert_eq!(
        render("2013-06-28", "28.06.1986", &options),
        render("28.06.1986", "2013-06-28", &options)
    );
}

#[test]
fn test_truncation_to_most_significant_unit() {
    let options = FormatOptions::new("en").with_max_units(1);
    let rendered = render("2012-01-15", "2013-03-17", &options);
    assert_eq!(rendered, "1 year");
}

#[test]
fn test_zero_span_renders_empty() {
    let rendered = render("now", "now", &FormatOptions::new("en"));
    assert_eq!(rendered, "");
}

#[test]
fn test_invalid_date_message() {
    let err = Humanizer::new()
        .interval_at(
            &"whenever".into(),
            &"now".into(),
            reference(),
            &FormatOptions::new("en"),
        )
        .unwrap_err();
    assert_eq!(err.to_string(), "Not a valid date string: \"whenever\"");
}

#[test]
fn test_unsupported_locale_message() {
    let err = Humanizer::new()
        .interval_at(
            &"yesterday".into(),
            &"now".into(),
            reference(),
            &FormatOptions::new("xx"),
        )
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unsupported locale \"xx\", supported locales are (en, ru)"
    );
}

#[test]
fn test_out_of_range_max_units_message() {
    let err = Humanizer::new()
        .interval_at(
            &"yesterday".into(),
            &"now".into(),
            reference(),
            &FormatOptions::new("en").with_max_units(9),
        )
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Max number of units should be between 1 and 6, got 9"
    );
    assert!(matches!(err, HumanizeError::InvalidArgument { value: 9 }));
}

#[test]
fn test_components_between_instants() {
    let humanizer = Humanizer::new();
    let from = at(2012, 1, 10, 0, 0, 0);
    let till = at(2014, 4, 10, 0, 0, 0);

    let components = humanizer.components(from, till).unwrap();
    assert_eq!(components.years, 2);
    assert_eq!(components.months, 3);
    assert_eq!(components.apply_to(from), Some(till));
}

#[test]
fn test_one_shot_helpers() {
    let options = FormatOptions::new("en");
    assert_eq!(age("now", &options).unwrap(), "");
    // Both endpoints resolve against one clock reading, so a degenerate
    // relative pair is stable no matter when it runs.
    assert_eq!(
        interval("today", Some("today".into()), &options).unwrap(),
        ""
    );

    // An omitted second endpoint means now; the leading unit is fixed even
    // though the time-of-day tail is not.
    let rendered = interval("yesterday", None, &options).unwrap();
    assert!(rendered.starts_with("1 day"), "got {rendered:?}");
}

#[test]
fn test_components_serialize_with_unit_keys() {
    let components = DurationComponents {
        years: 1,
        months: 2,
        ..Default::default()
    };
    let json = serde_json::to_string(&components).unwrap();
    assert_eq!(
        json,
        r#"{"years":1,"months":2,"days":0,"hours":0,"minutes":0,"seconds":0}"#
    );
    assert_eq!(serde_json::to_string(&TimeUnit::Years).unwrap(), "\"years\"");
}
