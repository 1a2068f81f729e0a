use weekgrid::{RangeSerie, SlottableOptions, Time, Week, Weekday};

fn main() -> weekgrid::Result<()> {
    let week: Week = "\n09:00-17:00\n09:00-17:00\n09:00-17:00\n09:00-17:00\n09:00-13:00".parse()?;

    println!("now: {}", Time::now());
    println!("friday: {}", week.day(Weekday::Friday).range_text());

    let open_hours = "09:00-12:00".parse()?;
    let slots = RangeSerie::slottable(30, &open_hours, &SlottableOptions::default())?;
    println!("30-minute slots: {slots}");

    Ok(())
}
