use chrono::{DateTime, Utc};

use crate::shared::constants::{FILE_DATE_FORMAT, PLAN_DATE_FORMAT};

pub fn format_file_date(created_at: &DateTime<Utc>) -> String {
    created_at.format(FILE_DATE_FORMAT).to_string()
}

pub fn format_plan_date(period_end: &DateTime<Utc>) -> String {
    period_end.format(PLAN_DATE_FORMAT).to_string()
}
