//! Ngày dương lịch
//!
//! Lịch Gregory từ 15/10/1582, lịch Julius trước đó, xem
//! [`Date::from_civil`].

use tracing::debug;

use super::lunar::LunarDate;
use super::{FIRST_YEAR, LAST_YEAR, check_window};
use crate::date::{Date, YearType};
use crate::error::{Constraint, InvalidDate};

/// Ngày dương lịch chưa kiểm tra.
///
/// # Ví dụ
///
/// ```
/// use amlich::SolarYmd;
///
/// let lunar = SolarYmd::new(2023, 6, 19).resolve().unwrap().to_lunar();
/// assert_eq!((2023, 5, 2), (lunar.year(), lunar.month(), lunar.day()));
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SolarYmd {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl SolarYmd {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// `true` nếu ngày hợp lệ.
    ///
    /// # Ví dụ
    ///
    /// ```
    /// use amlich::SolarYmd;
    ///
    /// assert!(SolarYmd::new(2024, 2, 29).is_valid());
    /// assert!(!SolarYmd::new(2023, 2, 29).is_valid());
    /// assert!(!SolarYmd::new(1582, 10, 10).is_valid()); // bị bỏ khi đổi lịch
    /// ```
    pub fn is_valid(&self) -> bool {
        self.resolve().is_ok()
    }

    /// Kiểm tra và xác định ngày.
    ///
    /// Trả về `Err` nếu ngày không tồn tại hoặc nằm ngoài khoảng
    /// [`first_day`](super::first_day) đến [`last_day`](super::last_day).
    pub fn resolve(&self) -> Result<SolarDate, InvalidDate> {
        self.try_resolve()
            .inspect_err(|e| debug!(ymd = ?self, "rejected solar date: {e}"))
    }

    fn try_resolve(&self) -> Result<SolarDate, InvalidDate> {
        let Self { year, month, day } = *self;
        if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
            return Err(Constraint::YearOutOfRange(year).into());
        }
        if !(1..=12).contains(&month) {
            return Err(Constraint::MonthOutOfRange(month).into());
        }
        if !(1..=31).contains(&day) {
            return Err(Constraint::DayOutOfRange(day).into());
        }
        let date = Date::from_civil(year, month, day)
            .filter(|date| date.civil() == (year, month, day))
            .ok_or(Constraint::NonexistentCivilDate(year, month, day))?;
        check_window(date)?;
        Ok(SolarDate { date })
    }
}

/// Ngày dương lịch đã xác định.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct SolarDate {
    date: Date,
}

/// Bản chụp các trường của một [`SolarDate`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SolarSnapshot {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub leap_year: bool,
    pub julian: u32,
}

impl SolarDate {
    /// Tạo ngày dương lịch từ `date`.
    ///
    /// Trả về `Err` nếu ngày nằm ngoài khoảng được hỗ trợ.
    pub fn from_date(date: Date) -> Result<Self, InvalidDate> {
        check_window(date)?;
        Ok(SolarDate { date })
    }

    /// Thay bằng ngày `ymd`. Nếu `ymd` không hợp lệ thì giữ nguyên giá trị cũ.
    pub fn set_date(&mut self, ymd: SolarYmd) -> Result<(), InvalidDate> {
        *self = ymd.resolve()?;
        Ok(())
    }

    pub fn year(&self) -> i32 {
        self.date.civil().0
    }
    pub fn month(&self) -> u32 {
        self.date.civil().1
    }
    pub fn day(&self) -> u32 {
        self.date.civil().2
    }
    /// `true` nếu năm dương lịch là năm nhuận
    pub fn leap_year(&self) -> bool {
        YearType::from_civil(self.year()).is_leap()
    }
    pub fn date(&self) -> Date {
        self.date
    }
    pub fn jdn(&self) -> u32 {
        self.date.jdn()
    }

    /// Chuyển sang âm lịch.
    pub fn to_lunar(&self) -> LunarDate {
        LunarDate::from(*self)
    }

    pub fn get(&self) -> SolarSnapshot {
        let (year, month, day) = self.date.civil();
        SolarSnapshot {
            day,
            month,
            year,
            leap_year: YearType::from_civil(year).is_leap(),
            julian: self.jdn(),
        }
    }
}

impl From<LunarDate> for SolarDate {
    fn from(date: LunarDate) -> Self {
        SolarDate { date: date.date() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve() {
        for ((y, m, d), jdn) in [
            ((2023, 6, 19), 2460115),
            ((2023, 1, 1), 2459946),
            ((1200, 1, 31), 2159388),
            ((2199, 12, 31), 2524593),
            ((1582, 10, 4), 2299160),
            ((1582, 10, 15), 2299161),
            ((1500, 2, 29), 2268992),
        ] {
            let date = SolarYmd::new(y, m, d).resolve().unwrap();
            assert_eq!(jdn, date.jdn());
            assert_eq!((y, m, d), (date.year(), date.month(), date.day()));
        }
    }

    #[test]
    fn resolve_errors() {
        use Constraint::*;
        let data = [
            ((2023, 2, 29), NonexistentCivilDate(2023, 2, 29)),
            ((2023, 4, 31), NonexistentCivilDate(2023, 4, 31)),
            ((1582, 10, 5), NonexistentCivilDate(1582, 10, 5)),
            ((1582, 10, 14), NonexistentCivilDate(1582, 10, 14)),
            ((1700, 2, 29), NonexistentCivilDate(1700, 2, 29)),
            ((2023, 6, 0), DayOutOfRange(0)),
            ((2023, 6, 32), DayOutOfRange(32)),
            ((2023, 13, 1), MonthOutOfRange(13)),
            ((1199, 12, 31), YearOutOfRange(1199)),
            ((2200, 1, 1), YearOutOfRange(2200)),
            ((1200, 1, 30), BeforeFirstDay),
        ];
        for ((y, m, d), std) in data {
            assert_eq!(
                Err(InvalidDate(std)),
                SolarYmd::new(y, m, d).resolve(),
                "{y}-{m}-{d}"
            );
        }
    }

    #[test]
    fn to_lunar() {
        let lunar = SolarYmd::new(2023, 1, 1).resolve().unwrap().to_lunar();
        assert_eq!((2022, 12, 10), (lunar.year(), lunar.month(), lunar.day()));
        assert!(!lunar.leap_year());

        let lunar = SolarYmd::new(2023, 4, 6).resolve().unwrap().to_lunar();
        assert_eq!((2023, 2, 16, true), (lunar.year(), lunar.month(), lunar.day(), lunar.leap_month()));
    }

    #[test]
    fn round_trip() {
        let date = SolarYmd::new(2023, 6, 19).resolve().unwrap();
        assert_eq!(date, date.to_lunar().to_solar());
    }

    #[test]
    fn set_date() {
        let mut date = SolarYmd::new(2023, 6, 19).resolve().unwrap();
        assert!(date.set_date(SolarYmd::new(2023, 2, 30)).is_err());
        assert_eq!(2460115, date.jdn());
        date.set_date(SolarYmd::new(2024, 2, 29)).unwrap();
        assert_eq!((2024, 2, 29), (date.year(), date.month(), date.day()));
    }

    #[test]
    fn snapshot() {
        let date = SolarYmd::new(2024, 1, 11).resolve().unwrap();
        assert_eq!(
            SolarSnapshot {
                day: 11,
                month: 1,
                year: 2024,
                leap_year: true,
                julian: 2460321,
            },
            date.get()
        );
    }
}
