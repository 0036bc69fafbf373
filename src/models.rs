use std::fmt;
use std::fmt::Formatter;

/// One entry in a schedule
///
/// Holds the planned and the observed time of an occurrence together with its time of day and the
/// index of the city it belongs to. No range checks are made on any field: hours above 23, minutes
/// above 59 or a city index outside the caller's city list are stored as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScheduleEntry {
    scheduled_tstamp: u32,
    actual_tstamp: u32,
    hours: u8,
    minutes: u8,
    city_index: u8,
}

impl ScheduleEntry {
    /// Returns a new ScheduleEntry with all fields set to zero
    ///
    pub fn new() -> ScheduleEntry {
        ScheduleEntry::default()
    }

    /// Sets the time the entry is planned to occur
    ///
    /// # Arguments
    ///
    /// * 'scheduled_tstamp' - planned time in seconds, epoch given by the caller
    pub fn set_scheduled_tstamp(&mut self, scheduled_tstamp: u32) {
        self.scheduled_tstamp = scheduled_tstamp;
    }

    pub fn scheduled_tstamp(&self) -> u32 {
        self.scheduled_tstamp
    }

    /// Sets the time the entry was actually observed to occur
    ///
    /// # Arguments
    ///
    /// * 'actual_tstamp' - observed time in seconds, unrelated to the scheduled time
    pub fn set_actual_tstamp(&mut self, actual_tstamp: u32) {
        self.actual_tstamp = actual_tstamp;
    }

    pub fn actual_tstamp(&self) -> u32 {
        self.actual_tstamp
    }

    /// Sets the hour of day, nominally 0 - 23
    ///
    /// # Arguments
    ///
    /// * 'hours' - hour of day
    pub fn set_hours(&mut self, hours: u8) {
        self.hours = hours;
    }

    pub fn hours(&self) -> u8 {
        self.hours
    }

    /// Sets the minute of hour, nominally 0 - 59
    ///
    /// # Arguments
    ///
    /// * 'minutes' - minute of hour
    pub fn set_minutes(&mut self, minutes: u8) {
        self.minutes = minutes;
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Sets the index of the city the entry belongs to
    ///
    /// # Arguments
    ///
    /// * 'city_index' - index into a city list kept by the caller
    pub fn set_city_index(&mut self, city_index: u8) {
        self.city_index = city_index;
    }

    pub fn city_index(&self) -> u8 {
        self.city_index
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{:>02}:{:>02} city {:>3}: scheduled {:>10}, actual {:>10}",
               self.hours, self.minutes,
               self.city_index,
               self.scheduled_tstamp, self.actual_tstamp)
    }
}
