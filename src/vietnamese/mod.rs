//! Âm lịch Việt Nam
//!
//! Ghi chú: để tiện dùng thuật ngữ, tài liệu của mô-đun này viết bằng tiếng Việt.
//!
//! Chương trình dùng bảng mã cấu trúc năm tính sẵn, xem [`year_code`]. Các
//! ngày được hỗ trợ nằm trong khoảng [`first_day`] đến [`last_day`].

use tracing::trace;

use crate::date::Date;
use crate::error::{Constraint, InvalidDate};

pub mod fmt;
pub mod lunar;
pub mod solar;
pub mod sun;
pub mod year_code;

pub use lunar::{LunarDate, LunarSnapshot, LunarYmd};
pub use solar::{SolarDate, SolarSnapshot, SolarYmd};
pub use year_code::{FIRST_YEAR, LAST_YEAR, YearCode};

/// Múi giờ (UTC+7) dùng để tính tiết khí
pub const TIME_ZONE: f64 = 7.0;

/// Một năm âm lịch, tính từ mùng 1 Tết đến hết tháng Chạp (tháng 12).
///
/// # Ví dụ
///
/// ```
/// use amlich::Date;
/// use amlich::vietnamese::{LunarYear, Month::*};
///
/// let date = Date::from_civil(2023, 6, 19).unwrap();
/// let year = LunarYear::from_date(date).unwrap();
///
/// assert_eq!(Ok((2023, Common(5), 2)), year.ymd_for(date));
/// ```
#[derive(Debug, Clone)]
pub struct LunarYear {
    /// Năm dương lịch chứa mùng 1 Tết
    pub year: i32,
    /// Mã cấu trúc của năm
    pub code: YearCode,
    /// Các tháng theo thứ tự, 12 hoặc 13 tháng
    pub months: Vec<LunarMonth>,
}

/// Thông tin một tháng âm lịch
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LunarMonth {
    /// Tên tháng
    pub month: Month,
    /// Ngày mùng 1 của tháng
    pub start: Date,
    /// Số ngày trong tháng, 29 hoặc 30
    pub length: u32,
}

impl LunarMonth {
    /// Ngày đầu tiên sau tháng này
    pub fn end(&self) -> Date {
        self.start + self.length as i32
    }
    /// `true` nếu `date` thuộc tháng này
    pub fn contains(&self, date: Date) -> bool {
        (self.start..self.end()).contains(&date)
    }
}

/// Tên tháng, `Common` là tháng thường, `Leap` là tháng nhuận.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Month {
    Common(u32),
    Leap(u32),
}
impl Month {
    /// Số thứ tự của tháng, không phân biệt nhuận.
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// `true` nếu là tháng nhuận
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
}

/// Ngày đầu tiên được hỗ trợ: 31/1/1200.
pub fn first_day() -> Date {
    Date::from_jdn(2159388)
}
/// Ngày cuối cùng được hỗ trợ: 31/12/2199.
pub fn last_day() -> Date {
    Date::from_jdn(2524593)
}

/// Kiểm tra `date` có nằm trong khoảng được hỗ trợ không.
pub(crate) fn check_window(date: Date) -> Result<(), InvalidDate> {
    if date < first_day() {
        Err(Constraint::BeforeFirstDay.into())
    } else if date > last_day() {
        Err(Constraint::AfterLastDay.into())
    } else {
        Ok(())
    }
}

/// Ngày mùng 1 Tết của năm âm lịch bắt đầu trong năm dương lịch `year`.
///
/// # Ví dụ
///
/// ```
/// use amlich::vietnamese::{YearCode, new_year};
///
/// let code = YearCode::get(2023).unwrap();
/// assert_eq!("2023-01-22", new_year(2023, code).iso_civil());
/// ```
pub fn new_year(year: i32, code: YearCode) -> Date {
    let jan1 = Date::from_civil(year, 1, 1).expect("year within the code table");
    jan1 + code.new_year_offset() as i32
}

/// Giải mã bảng tháng của năm `year` từ mã cấu trúc `code`.
///
/// Tháng nhuận, nếu có, đứng ngay sau tháng thường cùng số.
pub fn decode(year: i32, code: YearCode) -> Vec<LunarMonth> {
    use Month::*;
    let leap = code.leap_month();
    let mut months = Vec::with_capacity(if leap.is_some() { 13 } else { 12 });
    let mut start = new_year(year, code);
    for num in 1..=12 {
        let length = code.month_length(num);
        months.push(LunarMonth {
            month: Common(num),
            start,
            length,
        });
        start = start + length as i32;
        if leap == Some(num) {
            let length = code.leap_month_length();
            months.push(LunarMonth {
                month: Leap(num),
                start,
                length,
            });
            start = start + length as i32;
        }
    }
    trace!(year, months = months.len(), "decoded lunar year");
    months
}

impl LunarYear {
    /// Lấy năm âm lịch bắt đầu trong năm dương lịch `year`.
    ///
    /// Trả về `Err` nếu không có dữ liệu cho năm đó.
    ///
    /// # Ví dụ
    ///
    /// ```
    /// use amlich::vietnamese::LunarYear;
    ///
    /// let year = LunarYear::new(2023).unwrap();
    /// assert_eq!(13, year.months.len());
    /// ```
    pub fn new(year: i32) -> Result<Self, InvalidDate> {
        let code = YearCode::get(year)?;
        Ok(LunarYear {
            year,
            code,
            months: decode(year, code),
        })
    }
    /// Lấy năm âm lịch chứa ngày `date`.
    ///
    /// Một ngày thuộc năm dương lịch *Y* nằm trong năm âm lịch *Y*, hoặc
    /// *Y* - 1 nếu trước Tết. Trả về `Err` nếu bảng dữ liệu không có năm
    /// cần thiết.
    ///
    /// # Ví dụ
    ///
    /// ```
    /// use amlich::Date;
    /// use amlich::vietnamese::LunarYear;
    ///
    /// let date = Date::from_civil(2023, 1, 1).unwrap();
    /// assert_eq!(2022, LunarYear::from_date(date).unwrap().year);
    /// ```
    pub fn from_date(date: Date) -> Result<Self, InvalidDate> {
        let year = Self::new(date.civil().0)?;
        if date < year.start() {
            return Self::new(year.year - 1);
        }
        Ok(year)
    }

    /// Ngày mùng 1 Tết
    pub fn start(&self) -> Date {
        self.months[0].start
    }
    /// Ngày đầu tiên của năm âm lịch kế tiếp
    pub fn end(&self) -> Date {
        self.months.last().expect("month table is never empty").end()
    }
    /// `true` nếu năm có tháng nhuận (13 tháng)
    pub fn is_leap(&self) -> bool {
        self.months.len() == 13
    }
    /// Tìm tháng `month` trong năm.
    pub fn month(&self, month: Month) -> Option<&LunarMonth> {
        self.months.iter().find(|m| m.month == month)
    }
    /// Tìm tháng chứa ngày `date`.
    pub fn month_for(&self, date: Date) -> Result<&LunarMonth, OtherYear> {
        if date < self.start() {
            return Err(OtherYear::Before);
        } else if date >= self.end() {
            return Err(OtherYear::After);
        }
        let idx = self.months.partition_point(|m| m.start <= date) - 1;
        Ok(&self.months[idx])
    }

    /// Lấy ngày tháng năm âm lịch của `date`, dạng `(năm, tháng, ngày)`.
    ///
    /// Nếu `date` không thuộc năm này thì trả về `Err` cho biết nó nằm
    /// trước hay sau.
    ///
    /// # Ví dụ
    ///
    /// ```
    /// use amlich::Date;
    /// use amlich::vietnamese::{LunarYear, Month::*, OtherYear};
    ///
    /// let year = LunarYear::new(2023).unwrap();
    /// let date = Date::from_civil(2023, 4, 6).unwrap();
    ///
    /// assert_eq!(Ok((2023, Leap(2), 16)), year.ymd_for(date));
    /// let date = Date::from_civil(2023, 1, 1).unwrap();
    /// assert_eq!(Err(OtherYear::Before), year.ymd_for(date));
    /// ```
    pub fn ymd_for(&self, date: Date) -> Result<(i32, Month, u32), OtherYear> {
        let m = self.month_for(date)?;
        Ok((self.year, m.month, (date - m.start) as u32 + 1))
    }
}

/// Cho biết ngày cần tìm không thuộc năm này, nằm trước hay sau.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum OtherYear {
    Before,
    After,
}

/// Số can chi (1 là Giáp Tý, 60 là Quý Hợi) của năm âm lịch `year`.
///
/// # Ví dụ
///
/// ```
/// use amlich::vietnamese::sexagenary_for_year;
///
/// assert_eq!(1, sexagenary_for_year(1984)); // Giáp Tý
/// assert_eq!(40, sexagenary_for_year(2023)); // Quý Mão
/// ```
pub fn sexagenary_for_year(year: i32) -> u32 {
    (year.rem_euclid(60) as u32 + 2696) % 60 + 1
}

/// Số can chi của tháng `month` năm `year`. Tháng nhuận mang can chi của
/// tháng thường cùng số.
pub fn sexagenary_for_month(year: i32, month: u32) -> u32 {
    (12 * year + month as i32 + 13).rem_euclid(60) as u32 + 1
}

/// Số can chi của giờ Tý (giờ đầu tiên) trong ngày `date`.
pub fn sexagenary_for_first_hour(date: Date) -> u32 {
    12 * ((date.jdn() - 1) % 5) + 1
}
