use super::day::Day;
use super::hours::HourRange;
use serde::Serialize;

/// Weekly availability: one optional hour range per day, in column order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Availability {
    days: [HourRange; 7],
}

impl Availability {
    pub fn get(&self, day: Day) -> HourRange {
        self.days[day.index()]
    }

    pub fn set(&mut self, day: Day, hours: HourRange) {
        self.days[day.index()] = hours;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Day, HourRange)> + '_ {
        Day::ALL.iter().map(|d| (*d, self.days[d.index()]))
    }
}
