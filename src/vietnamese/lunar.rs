//! Ngày âm lịch
//!
//! [`LunarYmd`] giữ ngày tháng năm do người dùng nhập, chưa kiểm tra.
//! [`LunarYmd::resolve`] kiểm tra và tạo ra [`LunarDate`], giá trị đã xác
//! định đầy đủ (ngày Julius, năm nhuận, số ngày trong tháng) và không đổi.

use tracing::debug;

use super::fmt::{self, LuckyHour};
use super::solar::SolarDate;
use super::sun::sun_sector;
use super::{LunarYear, Month, TIME_ZONE, check_window};
use super::{sexagenary_for_first_hour, sexagenary_for_month, sexagenary_for_year};
use crate::date::Date;
use crate::error::{Constraint, InvalidDate};

/// Ngày âm lịch chưa kiểm tra.
///
/// `leap_month` là `Some(true)` nếu muốn chỉ tháng nhuận. Nếu tháng
/// được chỉ không phải tháng nhuận của năm đó thì dùng tháng thường cùng số.
///
/// # Ví dụ
///
/// ```
/// use amlich::LunarYmd;
///
/// let date = LunarYmd::new(2023, 2, 1).leap_month(true).resolve().unwrap();
/// assert_eq!("2023-03-22", date.date().iso_civil());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LunarYmd {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub leap_month: Option<bool>,
}

impl LunarYmd {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month,
            day,
            leap_month: None,
        }
    }
    /// Đặt cờ tháng nhuận.
    pub fn leap_month(self, leap_month: bool) -> Self {
        Self {
            leap_month: Some(leap_month),
            ..self
        }
    }

    /// `true` nếu ngày hợp lệ.
    ///
    /// # Ví dụ
    ///
    /// ```
    /// use amlich::LunarYmd;
    ///
    /// assert!(LunarYmd::new(2023, 5, 30).is_valid());
    /// assert!(!LunarYmd::new(2023, 3, 30).is_valid()); // tháng 3 thiếu
    /// assert!(!LunarYmd::new(1200, 1, 13).is_valid()); // trước 31/1/1200
    /// ```
    pub fn is_valid(&self) -> bool {
        self.resolve().is_ok()
    }

    /// Kiểm tra và xác định ngày.
    ///
    /// Trả về `Err` nếu năm ngoài khoảng 1200 đến 2199, tháng ngoài `1..=12`,
    /// ngày vượt quá số ngày thực của tháng, hoặc ngày nằm ngoài khoảng
    /// [`first_day`](super::first_day) đến [`last_day`](super::last_day).
    pub fn resolve(&self) -> Result<LunarDate, InvalidDate> {
        self.try_resolve()
            .inspect_err(|e| debug!(ymd = ?self, "rejected lunar date: {e}"))
    }

    fn try_resolve(&self) -> Result<LunarDate, InvalidDate> {
        self.check_fields()?;
        let year = LunarYear::new(self.year)?;
        let month = if self.leap_month == Some(true) && year.code.leap_month() == Some(self.month)
        {
            Month::Leap(self.month)
        } else {
            Month::Common(self.month)
        };
        let m = year
            .month(month)
            .ok_or(Constraint::MonthOutOfRange(self.month))?;
        if self.day > m.length {
            return Err(Constraint::DayExceedsMonth {
                day: self.day,
                length: m.length,
            }
            .into());
        }
        let date = m.start + (self.day - 1) as i32;
        check_window(date)?;
        Ok(LunarDate {
            year: self.year,
            month,
            day: self.day,
            leap_year: year.is_leap(),
            length: m.length,
            date,
        })
    }

    fn check_fields(&self) -> Result<(), InvalidDate> {
        if !(super::FIRST_YEAR..=super::LAST_YEAR).contains(&self.year) {
            return Err(Constraint::YearOutOfRange(self.year).into());
        }
        if !(1..=12).contains(&self.month) {
            return Err(Constraint::MonthOutOfRange(self.month).into());
        }
        if !(1..=30).contains(&self.day) {
            return Err(Constraint::DayOutOfRange(self.day).into());
        }
        Ok(())
    }
}

/// Ngày âm lịch đã xác định.
///
/// # Ví dụ
///
/// ```
/// use amlich::{Date, LunarDate};
///
/// let date = LunarDate::from_date(Date::from_civil(2023, 6, 19).unwrap()).unwrap();
/// assert_eq!((2023, 5, 2), (date.year(), date.month(), date.day()));
/// assert!(date.leap_year());
/// assert_eq!("Quý Mão", date.year_name());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LunarDate {
    year: i32,
    month: Month,
    day: u32,
    leap_year: bool,
    length: u32,
    date: Date,
}

/// Bản chụp các trường của một [`LunarDate`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LunarSnapshot {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub leap_month: bool,
    pub leap_year: bool,
    pub julian: u32,
    pub year_name: String,
}

impl LunarDate {
    /// Chuyển một ngày sang âm lịch.
    ///
    /// Trả về `Err` nếu ngày nằm ngoài khoảng được hỗ trợ.
    pub fn from_date(date: Date) -> Result<Self, InvalidDate> {
        check_window(date)?;
        let year = LunarYear::from_date(date)?;
        let m = year
            .month_for(date)
            .expect("lunar year bracketing the date");
        Ok(LunarDate {
            year: year.year,
            month: m.month,
            day: (date - m.start) as u32 + 1,
            leap_year: year.is_leap(),
            length: m.length,
            date,
        })
    }

    /// Thay bằng ngày `ymd`. Nếu `ymd` không hợp lệ thì giữ nguyên giá trị cũ.
    ///
    /// # Ví dụ
    ///
    /// ```
    /// use amlich::LunarYmd;
    ///
    /// let mut date = LunarYmd::new(2023, 5, 2).resolve().unwrap();
    /// assert!(date.set_date(LunarYmd::new(2023, 2, 31)).is_err());
    /// assert_eq!(2, date.day());
    /// date.set_date(LunarYmd::new(2023, 5, 3)).unwrap();
    /// assert_eq!(2460116, date.jdn());
    /// ```
    pub fn set_date(&mut self, ymd: LunarYmd) -> Result<(), InvalidDate> {
        *self = ymd.resolve()?;
        Ok(())
    }

    pub fn year(&self) -> i32 {
        self.year
    }
    pub fn month(&self) -> u32 {
        self.month.num()
    }
    /// Tháng, phân biệt tháng thường và tháng nhuận
    pub fn lunar_month(&self) -> Month {
        self.month
    }
    pub fn day(&self) -> u32 {
        self.day
    }
    /// `true` nếu là tháng nhuận
    pub fn leap_month(&self) -> bool {
        self.month.is_leap()
    }
    /// `true` nếu năm có 13 tháng
    pub fn leap_year(&self) -> bool {
        self.leap_year
    }
    /// Số ngày của tháng chứa ngày này
    pub fn length(&self) -> u32 {
        self.length
    }
    pub fn date(&self) -> Date {
        self.date
    }
    pub fn jdn(&self) -> u32 {
        self.date.jdn()
    }

    /// Chuyển sang dương lịch.
    pub fn to_solar(&self) -> SolarDate {
        SolarDate::from(*self)
    }

    pub fn get(&self) -> LunarSnapshot {
        LunarSnapshot {
            day: self.day,
            month: self.month(),
            year: self.year,
            leap_month: self.leap_month(),
            leap_year: self.leap_year,
            julian: self.jdn(),
            year_name: self.year_name(),
        }
    }

    /// Can chi của năm, ví dụ "Quý Mão".
    pub fn year_name(&self) -> String {
        fmt::sexagenary(sexagenary_for_year(self.year))
    }
    /// Can chi của tháng, thêm " (nhuận)" nếu là tháng nhuận.
    pub fn month_name(&self) -> String {
        let name = fmt::sexagenary(sexagenary_for_month(self.year, self.month()));
        if self.leap_month() {
            name + " (nhuận)"
        } else {
            name
        }
    }
    /// Can chi của ngày
    pub fn day_name(&self) -> String {
        fmt::sexagenary(self.date.sexagenary())
    }
    /// Can chi của giờ đầu ngày (giờ Tý)
    pub fn hour_name(&self) -> String {
        fmt::sexagenary(sexagenary_for_first_hour(self.date))
    }
    /// Thứ trong tuần, ví dụ "Thứ hai"
    pub fn day_of_week(&self) -> &'static str {
        fmt::day_of_week(self.date.day_of_week())
    }
    /// Tiết khí của ngày
    pub fn solar_term(&self) -> &'static str {
        fmt::solar_term(sun_sector(self.jdn() + 1, TIME_ZONE))
    }
    /// Các giờ hoàng đạo của ngày
    pub fn lucky_hours(&self) -> Vec<LuckyHour> {
        fmt::lucky_hours((self.date.sexagenary() + 11) % 12)
    }
}

impl From<SolarDate> for LunarDate {
    fn from(date: SolarDate) -> Self {
        LunarDate::from_date(date.date()).expect("solar date within the supported range")
    }
}
