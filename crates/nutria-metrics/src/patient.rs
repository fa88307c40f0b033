use jiff::civil::Date;
use nutria_core::PatientRecord;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::vocabulary::PatientFields;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientSummary {
    pub name: Option<String>,
    pub sex: Option<String>,
    pub birth_date: Option<String>,
    pub phone: Option<String>,
    pub record_number: Option<String>,
    /// Whole years on the reference date passed to [`patient_summary`].
    pub age_years: Option<i16>,
}

pub fn patient_summary(record: &PatientRecord, fields: &PatientFields, as_of: Date) -> PatientSummary {
    let birth_date = record.text(&fields.section, &fields.birth_date);
    PatientSummary {
        name: record.text(&fields.section, &fields.name),
        sex: record.text(&fields.section, &fields.sex),
        phone: record.text(&fields.section, &fields.phone),
        record_number: record.text(&fields.section, &fields.record_number),
        age_years: birth_date.as_deref().and_then(|b| age_on(b, as_of)),
        birth_date,
    }
}

/// Age in whole years on `as_of`.
///
/// A full `YYYY-MM-DD` date gives the exact age. Otherwise the leading year
/// (text before the first `-`) gives a plain year difference.
pub fn age_on(birth_date: &str, as_of: Date) -> Option<i16> {
    let birth_date = birth_date.trim();
    if let Ok(born) = birth_date.parse::<Date>() {
        let mut years = as_of.year() - born.year();
        if (as_of.month(), as_of.day()) < (born.month(), born.day()) {
            years -= 1;
        }
        return Some(years);
    }
    let year: i16 = birth_date.split('-').next()?.trim().parse().ok()?;
    as_of.year().checked_sub(year)
}
