use chrono::{Duration, Local, NaiveDate};
use crate::core::library::{LibraryError, LibraryResult};

pub const DATE_FMT: &str = "%Y-%m-%d";
pub const DISPLAY_DATE_FMT: &str = "%d/%m/%Y";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

// default expected-return date of a loan
pub fn due_date(loan_date: NaiveDate, loan_days: i64) -> NaiveDate {
    loan_date + Duration::days(loan_days)
}

pub fn format_display(date: NaiveDate) -> String {
    format!("{}", date.format(DISPLAY_DATE_FMT))
}

// accepts `2024-03-01` as well as timestamps such as `2024-03-01T10:00:00`
pub fn parse_date(str_date: &str) -> LibraryResult<NaiveDate> {
    let trimmed = str_date.trim();
    let day = trimmed.get(..10).unwrap_or(trimmed);
    NaiveDate::parse_from_str(day, DATE_FMT).map_err(|err| {
        LibraryError::validation(format!("invalid date {} {}", str_date, err).as_str(), None)
    })
}

pub mod serializer {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::{DATE_FMT, parse_date};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        format!("{}", date.format(DATE_FMT)).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let str_date: String = Deserialize::deserialize(deserializer)?;
        parse_date(&str_date).map_err(D::Error::custom)
    }
}

pub mod opt_serializer {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::{DATE_FMT, parse_date};

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error> {
        date.map(|d| format!("{}", d.format(DATE_FMT))).serialize(serializer)
    }

    // blank strings are read as no date
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
        let str_date: Option<String> = Deserialize::deserialize(deserializer)?;
        match str_date {
            Some(s) if !s.trim().is_empty() => parse_date(&s).map(Some).map_err(D::Error::custom),
            _ => Ok(None),
        }
    }
}
