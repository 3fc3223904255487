//! Bảng mã cấu trúc năm âm lịch
//!
//! Mỗi năm dương lịch từ [`FIRST_YEAR`] đến [`LAST_YEAR`] có một mã 24 bit mô
//! tả năm âm lịch bắt đầu trong năm đó. Dữ liệu được tính sẵn và nhúng vào
//! chương trình (`data/year_codes.txt`), không tính lại khi chạy.
//!
//! Bố cục bit:
//!
//! - bit 17 trở lên: số ngày từ 1 tháng 1 dương lịch đến mùng 1 Tết
//! - bit 16: tháng nhuận đủ (30 ngày) nếu là 1, thiếu (29 ngày) nếu là 0
//! - bit 15 đến 4: tháng 1 đến 12, bit bật là tháng đủ
//! - bit 3 đến 0: tháng nhuận, 0 nếu năm không nhuận

use std::num::ParseIntError;

use once_cell::sync::Lazy;
use tracing::trace;

use crate::error::{Constraint, InvalidDate};

/// Năm đầu tiên có dữ liệu
pub const FIRST_YEAR: i32 = 1200;
/// Năm cuối cùng có dữ liệu
pub const LAST_YEAR: i32 = 2199;

/// Mã cấu trúc của một năm âm lịch
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct YearCode(u32);

static DATA: Lazy<Vec<YearCode>> = Lazy::new(|| {
    parse_raw_data().unwrap_or_else(|e| panic!("error parsing year code data: {:?}", e))
});

impl YearCode {
    /// Lấy mã của năm âm lịch bắt đầu trong năm dương lịch `year`.
    ///
    /// Trả về `Err` nếu năm nằm ngoài khoảng `1200..=2199`.
    ///
    /// # Ví dụ
    ///
    /// ```
    /// use amlich::vietnamese::YearCode;
    ///
    /// assert_eq!(2775890, YearCode::get(2023).unwrap().raw());
    /// assert!(YearCode::get(2200).is_err());
    /// ```
    pub fn get(year: i32) -> Result<Self, InvalidDate> {
        if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
            return Err(Constraint::YearOutOfRange(year).into());
        }
        Ok(DATA[(year - FIRST_YEAR) as usize])
    }
    /// Giá trị nguyên gốc của mã
    pub fn raw(self) -> u32 {
        self.0
    }
    /// Số ngày từ 1 tháng 1 dương lịch đến mùng 1 Tết
    pub fn new_year_offset(self) -> u32 {
        self.0 >> 17
    }
    /// Tháng nhuận của năm, `None` nếu năm không nhuận
    pub fn leap_month(self) -> Option<u32> {
        match self.0 & 0xf {
            0 => None,
            m => Some(m),
        }
    }
    /// Số ngày của tháng nhuận
    pub fn leap_month_length(self) -> u32 {
        if self.0 >> 16 & 1 == 1 { 30 } else { 29 }
    }
    /// Số ngày của tháng thường `month` (`1..=12`).
    ///
    /// # Panics
    ///
    /// Nếu `month` không thuộc `1..=12`.
    pub fn month_length(self, month: u32) -> u32 {
        assert!((1..=12).contains(&month), "month {} not in 1..=12", month);
        if self.0 >> (16 - month) & 1 == 1 { 30 } else { 29 }
    }
}

static RAW_DATA: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/year_codes.txt"));

fn parse_raw_data() -> Result<Vec<YearCode>, RawDataError> {
    use ErrorType::*;
    let mut res = Vec::with_capacity((LAST_YEAR - FIRST_YEAR + 1) as usize);
    for (line_num, line) in (1usize..).zip(RAW_DATA.lines()).skip(1) {
        let mut it = line.split_whitespace();
        let year: i32 = match it.next() {
            None => continue,
            Some(s) => s
                .parse()
                .map_err(|e| RawDataError::new(line_num, 1, InvalidInt(e)))?,
        };
        if year != FIRST_YEAR + res.len() as i32 {
            return Err(RawDataError::new(line_num, 1, OutOfOrder(year)));
        }
        let code = it.next().ok_or(RawDataError::new(line_num, 2, MissingField))?;
        let code = u32::from_str_radix(code.trim_start_matches("0x"), 16)
            .map_err(|e| RawDataError::new(line_num, 2, InvalidInt(e)))?;
        res.push(YearCode(code));
    }
    if res.len() != (LAST_YEAR - FIRST_YEAR + 1) as usize {
        return Err(RawDataError::new(res.len() + 1, 1, MissingField));
    }
    trace!("parsed {} year codes", res.len());
    Ok(res)
}

#[derive(Debug)]
struct RawDataError {
    pub line_num: usize,
    pub field_num: usize,
    pub reason: ErrorType,
}

impl RawDataError {
    fn new(line_num: usize, field_num: usize, reason: ErrorType) -> Self {
        Self {
            line_num,
            field_num,
            reason,
        }
    }
}

#[derive(Debug)]
enum ErrorType {
    InvalidInt(ParseIntError),
    OutOfOrder(i32),
    MissingField,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_codes() {
        let dataset = [
            (2023, 2775890),
            (2022, 4107600),
            (1250, 4384048),
            (1350, 4894112),
            (1450, 1774961),
            (1550, 2271910),
            (1650, 4090715),
            (1750, 4868832),
            (1850, 5547216),
            (1950, 6188192),
            (2150, 3689190),
        ];
        for (year, std) in dataset {
            assert_eq!(std, YearCode::get(year).unwrap().raw(), "{year}");
        }
    }

    #[test]
    fn out_of_range() {
        for year in [1199, 2200, 0, -1200] {
            assert_eq!(
                Err(InvalidDate(Constraint::YearOutOfRange(year))),
                YearCode::get(year)
            );
        }
        assert!(YearCode::get(FIRST_YEAR).is_ok());
        assert!(YearCode::get(LAST_YEAR).is_ok());
    }

    #[test]
    fn fields() {
        // 2023: Tết 22/1, nhuận tháng 2 (thiếu)
        let code = YearCode::get(2023).unwrap();
        assert_eq!(21, code.new_year_offset());
        assert_eq!(Some(2), code.leap_month());
        assert_eq!(29, code.leap_month_length());
        let lengths: Vec<_> = (1..=12).map(|m| code.month_length(m)).collect();
        assert_eq!(vec![29, 30, 29, 30, 30, 29, 30, 30, 29, 30, 29, 30], lengths);

        let code = YearCode::get(2022).unwrap();
        assert_eq!(None, code.leap_month());
    }

    #[test]
    fn table_is_complete() {
        assert_eq!((LAST_YEAR - FIRST_YEAR + 1) as usize, DATA.len());
    }
}
