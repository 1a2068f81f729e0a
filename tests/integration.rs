use weekgrid::{
    Day, DaySlottableOptions, RangeSerie, SlottableOptions, Time, TimeRange, Week, Weekday,
};

#[test]
fn business_week_roundtrips_through_text() {
    let text = "\n08:30-12:30,14:00-18:00\n08:30-12:30,14:00-18:00\n08:30-12:30\n08:30-12:30,14:00-18:00\n08:30-12:30,14:00-16:00";
    let week: Week = text.parse().unwrap();

    assert!(week.sunday().is_empty());
    assert!(week.saturday().is_empty());
    assert_eq!(week.wednesday().range_text(), "08:30-12:30");

    let reparsed: Week = week.to_string().parse().unwrap();
    assert_eq!(reparsed, week);
}

#[test]
fn day_slices_into_bookable_appointments() {
    let open_hours: TimeRange = "09:00-12:00".parse().unwrap();
    let options = DaySlottableOptions {
        weekday: Weekday::Tuesday,
        slot: SlottableOptions {
            time_required: Some(60),
            ..Default::default()
        },
    };

    // every valid 60-minute placement on a 30-minute grid
    let day = Day::slottable(30, &open_hours, &options).unwrap();
    assert_eq!(day.weekday(), Weekday::Tuesday);
    assert_eq!(
        day.range_text(),
        "09:00-10:00,09:30-10:30,10:00-11:00,10:30-11:30,11:00-12:00"
    );

    let lunchtime = Time::new(11, 30);
    let last_fit = day.find_containing(&lunchtime).unwrap();
    assert_eq!(last_fit.to_string(), "10:30-11:30");
}

#[test]
fn serie_mutations_keep_canonical_order() {
    let mut serie: RangeSerie = "14:00-18:00,08:30-12:30".parse().unwrap();

    serie.set("13:00-13:45".parse().unwrap());
    assert_eq!(serie.to_string(), "08:30-12:30,13:00-13:45,14:00-18:00");

    serie.replace("13:00-13:45", "13:00-13:30".parse().unwrap());
    assert_eq!(serie.to_string(), "08:30-12:30,13:00-13:30,14:00-18:00");

    // replacing onto an existing entry is refused
    serie.replace("13:00-13:30", "14:00-18:00".parse().unwrap());
    assert!(serie.has("13:00-13:30"));

    assert!(serie.delete("08:30-12:30"));
    assert_eq!(serie.first().unwrap().to_string(), "13:00-13:30");
}

#[test]
fn overflowing_slots_stay_within_tolerance() {
    let range: TimeRange = "10:00-11:30".parse().unwrap();
    let tolerant = SlottableOptions {
        time_required: Some(45),
        allowed_minutes_overflow: 45,
    };

    let slots = RangeSerie::slottable(45, &range, &tolerant).unwrap();
    assert_eq!(slots.to_string(), "10:00-10:45,10:45-11:30,11:30-12:15");

    let strict = SlottableOptions {
        time_required: Some(45),
        ..Default::default()
    };
    let slots = RangeSerie::slottable(45, &range, &strict).unwrap();
    assert_eq!(slots.to_string(), "10:00-10:45,10:45-11:30");
}

#[cfg(feature = "serde")]
#[test]
fn serde_week_mirrors_structured_attributes() {
    let week: Week = "\n09:00-17:00".parse().unwrap();
    let json = serde_json::to_value(&week).unwrap();

    assert_eq!(json["sunday"], serde_json::json!([]));
    assert_eq!(json["monday"][0]["start"]["hours"], 9);
    assert_eq!(json["monday"][0]["end"]["minutes"], 0);

    let back: Week = serde_json::from_value(json).unwrap();
    assert_eq!(back, week);
}
