//! Kinh độ Mặt Trời và tiết khí
//!
//! Công thức là chuỗi rút gọn (kinh độ trung bình, phương trình tâm và hiệu
//! chỉnh chương động), đủ chính xác để xác định ngày thuộc cung 15° nào.

use std::f64::consts::PI;

/// Kinh độ hoàng đạo biểu kiến của Mặt Trời (radian, `[0, 2π)`) tại thời
/// điểm `jd` (ngày Julius, UT).
///
/// # Ví dụ
///
/// ```
/// use amlich::vietnamese::sun::sun_longitude;
///
/// let l = sun_longitude(2460115.0);
/// assert!((l - 1.535354586742642).abs() < 1e-9);
/// ```
pub fn sun_longitude(jd: f64) -> f64 {
    let t = (jd - 2451545.0) / 36525.0;
    let t2 = t * t;
    let dr = PI / 180.0;
    let m = 357.52910 + 35999.05030 * t - 0.0001559 * t2 - 0.00000048 * t * t2;
    let l0 = 280.46645 + 36000.76983 * t + 0.0003032 * t2;
    let mut dl = (1.914600 - 0.004817 * t - 0.000014 * t2) * (dr * m).sin();
    dl += (0.019993 - 0.000101 * t) * (dr * 2.0 * m).sin() + 0.000290 * (dr * 3.0 * m).sin();
    let theta = l0 + dl;
    let omega = 125.04 - 1934.136 * t;
    let lambda = (theta - 0.00569 - 0.00478 * (omega * dr).sin()) * dr;
    lambda - 2.0 * PI * (lambda / (2.0 * PI)).floor()
}

/// Cung 15° (`0..=23`, 0 là Xuân phân) chứa Mặt Trời lúc nửa đêm đầu ngày
/// `jdn` theo giờ địa phương UTC+`utc_offset`.
///
/// # Ví dụ
///
/// ```
/// use amlich::vietnamese::sun::sun_sector;
///
/// assert_eq!(5, sun_sector(2460115, 7.0)); // Mang chủng
/// ```
pub fn sun_sector(jdn: u32, utc_offset: f64) -> u32 {
    let l = sun_longitude(jdn as f64 - 0.5 - utc_offset / 24.0);
    (l / PI * 12.0).floor() as u32 % 24
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longitude() {
        for (jd, std) in [(2460115.0, 1.535354586742642), (2460100.0, 1.2850851093476763)] {
            assert!((sun_longitude(jd) - std).abs() < 1e-9, "{jd}");
        }
    }

    #[test]
    fn longitude_range() {
        let mut jd = 2159388.0;
        while jd < 2524594.0 {
            let l = sun_longitude(jd);
            assert!((0.0..2.0 * PI).contains(&l), "{jd}");
            jd += 7.3;
        }
    }

    #[test]
    fn sectors() {
        assert_eq!(5, sun_sector(2460115, 7.0));
        assert_eq!(4, sun_sector(2460100, 7.0));
        // Xuân phân 2023 lúc 4 giờ sáng 21/3 (UTC+7)
        assert_eq!(23, sun_sector(2460025, 7.0));
        assert_eq!(0, sun_sector(2460026, 7.0));
        // Đông chí 2023 lúc 10 giờ sáng 22/12
        assert_eq!(17, sun_sector(2460301, 7.0));
        assert_eq!(18, sun_sector(2460302, 7.0));
    }
}
