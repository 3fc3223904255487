//! Các bảng tên gọi

use super::Month;

/// Thiên can, số thứ tự can chi chia 10 lấy dư. Phần tử 0 là "Quý" để số 1 ứng với "Giáp".
const STEMS: &[&str] = &[
    "Quý", "Giáp", "Ất", "Bính", "Đinh", "Mậu", "Kỷ", "Canh", "Tân", "Nhâm",
];
/// Địa chi, bắt đầu từ "Tý"
pub const BRANCHES: &[&str] = &[
    "Tý", "Sửu", "Dần", "Mão", "Thìn", "Tỵ", "Ngọ", "Mùi", "Thân", "Dậu", "Tuất", "Hợi",
];

/// Số can chi chuyển sang dạng chữ.
///
/// # Ví dụ
///
/// ```
/// use amlich::vietnamese;
///
/// assert_eq!("Giáp Tý", vietnamese::fmt::sexagenary(1));
/// assert_eq!("Quý Mão", vietnamese::fmt::sexagenary(40));
/// ```
pub fn sexagenary(num: u32) -> String {
    format!(
        "{} {}",
        STEMS[(num % 10) as usize],
        BRANCHES[((num + 11) % 12) as usize]
    )
}

/// Tên tháng theo cách gọi thông thường, tháng 1 là tháng Giêng, tháng 12 là tháng Chạp.
///
/// # Ví dụ
///
/// ```
/// use amlich::vietnamese::{self, Month::*};
///
/// assert_eq!("tháng Giêng", vietnamese::fmt::month(Common(1)));
/// assert_eq!("tháng Hai nhuận", vietnamese::fmt::month(Leap(2)));
/// ```
///
/// # Panics
///
/// Nếu số tháng không thuộc `1..=12`.
pub fn month(m: Month) -> String {
    const NAMES: &[&str] = &[
        "Giêng", "Hai", "Ba", "Tư", "Năm", "Sáu", "Bảy", "Tám", "Chín", "Mười", "Một", "Chạp",
    ];
    let num = m.num();
    assert!((1..=12).contains(&num), "month {} not in 1..=12", num);
    let mut rt = format!("tháng {}", NAMES[num as usize - 1]);
    if m.is_leap() {
        rt += " nhuận";
    }
    rt
}

/// Tên ngày, mười ngày đầu tháng gọi là "mùng".
///
/// # Ví dụ
///
/// ```
/// use amlich::vietnamese;
///
/// assert_eq!("mùng 2", vietnamese::fmt::day(2));
/// assert_eq!("ngày 15", vietnamese::fmt::day(15));
/// ```
///
/// # Panics
///
/// Nếu số ngày không thuộc `1..=30`.
pub fn day(d: u32) -> String {
    match d {
        1..=10 => format!("mùng {}", d),
        11..=30 => format!("ngày {}", d),
        _ => panic!("day {} not in 1..=30", d),
    }
}

/// Tên tiết khí theo cung 15°, `0..=23` bắt đầu từ Xuân phân.
///
/// # Ví dụ
///
/// ```
/// use amlich::vietnamese;
///
/// assert_eq!("Mang chủng", vietnamese::fmt::solar_term(5));
/// ```
pub fn solar_term(sector: u32) -> &'static str {
    const NAMES: &[&str] = &[
        "Xuân phân", "Thanh minh", "Cốc vũ", "Lập hạ", "Tiểu mãn", "Mang chủng",
        "Hạ chí", "Tiểu thử", "Đại thử", "Lập thu", "Xử thử", "Bạch lộ",
        "Thu phân", "Hàn lộ", "Sương giáng", "Lập đông", "Tiểu tuyết", "Đại tuyết",
        "Đông chí", "Tiểu hàn", "Đại hàn", "Lập xuân", "Vũ thủy", "Kinh trập",
    ];
    NAMES[(sector % 24) as usize]
}

/// Tên thứ trong tuần, đánh số theo ISO-8601 (`1..=7` là thứ Hai đến Chủ nhật).
pub fn day_of_week(dow: u32) -> &'static str {
    const NAMES: &[&str] = &[
        "Chủ nhật", "Thứ hai", "Thứ ba", "Thứ tư", "Thứ năm", "Thứ sáu", "Thứ bảy",
    ];
    NAMES[(dow % 7) as usize]
}

/// Một giờ hoàng đạo: tên chi của giờ và khoảng giờ `(bắt đầu, kết thúc)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LuckyHour {
    pub name: &'static str,
    pub time: (u32, u32),
}

/// Các giờ hoàng đạo của ngày có địa chi `branch` (0 là Tý).
///
/// # Ví dụ
///
/// ```
/// use amlich::vietnamese::fmt::lucky_hours;
///
/// let hours = lucky_hours(8); // ngày Thân
/// assert_eq!(6, hours.len());
/// assert_eq!(("Tý", (23, 1)), (hours[0].name, hours[0].time));
/// ```
pub fn lucky_hours(branch: u32) -> Vec<LuckyHour> {
    // Giờ Tý đến giờ Hợi, 1 là giờ hoàng đạo; ngày Tý và ngày Ngọ dùng chung một dòng.
    const PATTERNS: &[&str] = &[
        "110100101100",
        "001101001011",
        "110011010010",
        "101100110100",
        "001011001101",
        "010010110011",
    ];
    PATTERNS[(branch % 6) as usize]
        .bytes()
        .enumerate()
        .filter(|&(_, b)| b == b'1')
        .map(|(i, _)| LuckyHour {
            name: BRANCHES[i],
            time: ((2 * i as u32 + 23) % 24, (2 * i as u32 + 1) % 24),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sexagenary() {
        for (std, num) in [
            ("Giáp Tý", 1),
            ("Canh Dần", 27),
            ("Mậu Ngọ", 55),
            ("Nhâm Tý", 49),
            ("Quý Hợi", 60),
        ] {
            assert_eq!(std, sexagenary(num));
        }
    }

    #[test]
    fn test_month() {
        use Month::*;
        assert_eq!("tháng Tư", month(Common(4)));
        assert_eq!("tháng Chạp", month(Common(12)));
        assert_eq!("tháng Sáu nhuận", month(Leap(6)));
    }

    #[test]
    fn test_day() {
        for (std, d) in [("mùng 1", 1), ("mùng 10", 10), ("ngày 11", 11), ("ngày 30", 30)] {
            assert_eq!(std, day(d));
        }
    }

    #[test]
    fn test_day_of_week() {
        assert_eq!("Thứ hai", day_of_week(1));
        assert_eq!("Thứ bảy", day_of_week(6));
        assert_eq!("Chủ nhật", day_of_week(7));
    }

    #[test]
    fn test_solar_term() {
        assert_eq!("Xuân phân", solar_term(0));
        assert_eq!("Đông chí", solar_term(18));
        assert_eq!("Kinh trập", solar_term(23));
    }

    #[test]
    fn test_lucky_hours() {
        let names: Vec<_> = lucky_hours(8).iter().map(|h| (h.name, h.time)).collect();
        assert_eq!(
            vec![
                ("Tý", (23, 1)),
                ("Sửu", (1, 3)),
                ("Thìn", (7, 9)),
                ("Tỵ", (9, 11)),
                ("Mùi", (13, 15)),
                ("Tuất", (19, 21)),
            ],
            names
        );
        for branch in 0..12 {
            assert_eq!(6, lucky_hours(branch).len());
        }
    }
}
