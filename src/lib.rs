//! Utilities for converting between solar dates and the Vietnamese
//! lunisolar calendar (âm lịch).
//!
//! Supported dates range from 1200-01-31 to 2199-12-31. The lunar calendar
//! is read from a precomputed table with one packed code per year, see
//! [`vietnamese::year_code`].
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use amlich::Date;
//!
//! let date = Date::from_civil(2000, 1, 1).unwrap();
//!
//! assert_eq!(6, date.day_of_week()); // Saturday
//! assert_eq!(2451545, date.jdn());
//! ```
//!
//! Solar to lunar and back:
//!
//! ```
//! use amlich::{LunarYmd, SolarYmd};
//!
//! let solar = SolarYmd::new(2023, 6, 19).resolve().unwrap();
//! let lunar = solar.to_lunar();
//!
//! assert_eq!((2023, 5, 2), (lunar.year(), lunar.month(), lunar.day()));
//! assert_eq!("Quý Mão", lunar.year_name());
//!
//! let leap = LunarYmd::new(2023, 2, 1).leap_month(true).resolve().unwrap();
//! assert_eq!("2023-03-22", leap.to_solar().date().iso_civil());
//! ```
//!
//! Lunar years and months:
//!
//! ```
//! use amlich::Date;
//! use amlich::vietnamese::{LunarYear, Month::*};
//!
//! let date = Date::from_civil(2023, 1, 1).unwrap();
//! let year = LunarYear::from_date(date).unwrap();
//!
//! assert_eq!(Ok((2022, Common(12), 10)), year.ymd_for(date));
//! ```

pub mod date;
pub mod error;
pub mod vietnamese;

pub use date::{Date, YearType};
pub use error::{Constraint, InvalidDate};
pub use vietnamese::{LunarDate, LunarYmd, SolarDate, SolarYmd};
