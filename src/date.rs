//! Calendar-independant date.

use std::ops::{Add, Sub};

/// First Julian day number counted in the Gregorian calendar (1582-10-15).
pub const GREGORIAN_REFORM_JDN: u32 = 2299161;

/// A calendar-independant date.
///
/// Supported range begins from January 1, 4713 BC, proleptic Julian calendar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: u32,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub fn from_jdn(jdn: u32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> u32 {
        self.jdn
    }

    /// Creates a `Date` with a civil calendar date: Gregorian from
    /// 1582-10-15 on, Julian before that.
    ///
    /// `year` should be an astronomical year number, i.e. 1 BC is `0`, 2
    /// BC is `-1`, etc.
    ///
    /// The fields are not checked against month lengths, so e.g. February
    /// 30 lands on the matching day of March. Returns `None` if `month` is
    /// not in `1..=12` or the result is out of supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// assert_eq!(2460115, Date::from_civil(2023, 6, 19).unwrap().jdn());
    /// // The day before the reform, counted in the Julian calendar.
    /// assert_eq!(2299160, Date::from_civil(1582, 10, 4).unwrap().jdn());
    /// ```
    pub fn from_civil(year: i32, month: u32, day: u32) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        let (d, m) = (day as i64, month as i64);
        let a = (14 - m) / 12;
        let y = year as i64 + 4800 - a;
        let m = m + 12 * a - 3;
        let base = d + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4);
        let mut jdn = base - y.div_euclid(100) + y.div_euclid(400) - 32045;
        if jdn < GREGORIAN_REFORM_JDN as i64 {
            jdn = base - 32083;
        }
        u32::try_from(jdn).map(Self::from_jdn).ok()
    }
    /// Represents the date in the civil calendar (see [`Date::from_civil`]).
    ///
    /// Returns in `(year, month, day)` format.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// assert_eq!((2000, 1, 1), Date::from_jdn(2451545).civil());
    /// assert_eq!((1582, 10, 15), Date::from_jdn(2299161).civil());
    /// assert_eq!((1582, 10, 4), Date::from_jdn(2299160).civil());
    /// ```
    pub fn civil(&self) -> (i32, u32, u32) {
        let jdn = self.jdn as i64;
        let (b, c) = if jdn >= GREGORIAN_REFORM_JDN as i64 {
            let a = jdn + 32044;
            let b = (4 * a + 3) / 146097;
            (b, a - (146097 * b) / 4)
        } else {
            (0, jdn + 32082)
        };
        let d = (4 * c + 3) / 1461;
        let e = c - (1461 * d) / 4;
        let m = (5 * e + 2) / 153;
        let day = e - (153 * m + 2) / 5 + 1;
        let month = m + 3 - 12 * (m / 10);
        let year = 100 * b + d - 4800 + m / 10;
        (year as i32, month as u32, day as u32)
    }
    /// Formats the civil date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// let date = Date::from_civil(2000, 1, 1).unwrap();
    /// assert_eq!("2000-01-01", date.iso_civil());
    /// ```
    pub fn iso_civil(&self) -> String {
        let (y, m, d) = self.civil();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }

    /// Returns the day of week of the date, in ISO-8601 numbering (i.e.
    /// `1..=7` for Monday through Sunday)
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// let date = Date::from_civil(2000, 1, 1).unwrap();
    /// assert_eq!(6, date.day_of_week()); // Saturday
    /// ```
    pub fn day_of_week(&self) -> u32 {
        self.jdn % 7 + 1
    }
    /// Returns the sexagenary (can chi) day number of the date, numbered
    /// from 1 (Giáp Tý) to 60 (Quý Hợi).
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// let date = Date::from_civil(2000, 1, 1).unwrap();
    /// assert_eq!(55, date.sexagenary()); // Mậu Ngọ
    /// ```
    pub fn sexagenary(&self) -> u32 {
        (self.jdn + 49) % 60 + 1
    }
}

impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        Date::from_jdn(if rhs >= 0 {
            self.jdn + rhs as u32
        } else {
            self.jdn - rhs.wrapping_neg() as u32
        })
    }
}
impl Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> Self::Output {
        self.jdn as i32 - rhs.jdn as i32
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in the civil calendar: Julian
    /// rule before 1582, Gregorian rule from 1582 on.
    pub fn from_civil(year: i32) -> Self {
        let leap = if year < 1582 {
            year.rem_euclid(4) == 0
        } else {
            year % 4 == 0 && year % 100 != 0 || year % 400 == 0
        };
        if leap { Self::Leap } else { Self::Common }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
}
