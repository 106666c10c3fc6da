//! Batch salary list as CSV (Toplu Personel Maaş Listesi).
//!
//! Layout:
//!
//! ```text
//! <BOM>Rapor Türü: Toplu Personel Maaş Listesi
//! Tarih Aralığı: 2025-01-01 - 2025-01-31
//!
//! Personel,Çalışma Günü,Toplam Saat,...,Net Maaş
//! Ayşe Yılmaz,1,10.00,2.00,0.00,0.00,0.00,31300.00
//! GENEL TOPLAM,1,10.00,2.00,0.00,-,-,31300.00
//! ```
//!
//! The UTF-8 byte order mark lets spreadsheet software pick the right
//! encoding for Turkish characters.

use std::io::Write;

use rust_decimal::Decimal;

use crate::calculation::round_currency;
use crate::error::{EngineError, EngineResult};
use crate::models::{BatchReport, PeriodReport};

const BOM: &str = "\u{FEFF}";
const REPORT_TITLE: &str = "Rapor Türü: Toplu Personel Maaş Listesi";
const GRAND_TOTAL_LABEL: &str = "GENEL TOPLAM";
const NOT_APPLICABLE: &str = "-";

/// Column headings of the salary list.
pub const CSV_COLUMNS: [&str; 8] = [
    "Personel",
    "Çalışma Günü",
    "Toplam Saat",
    "Fazla Mesai (Normal + Pazar)",
    "Eksik Süre",
    "Primler",
    "Kesintiler",
    "Net Maaş",
];

fn io_error(error: std::io::Error) -> EngineError {
    EngineError::ExportError {
        message: error.to_string(),
    }
}

/// Two-decimal rendering used for every numeric column.
fn money(value: Decimal) -> String {
    let rounded = round_currency(value);
    if rounded.is_zero() {
        return "0.00".to_string();
    }
    format!("{:.2}", rounded)
}

fn item_row(item: &PeriodReport) -> [String; 8] {
    [
        item.employee_name.clone(),
        item.work_days.to_string(),
        money(item.total_hours),
        money(item.total_overtime_hours()),
        money(item.undertime_hours),
        money(item.total_bonuses),
        money(item.total_deductions),
        money(item.net_salary),
    ]
}

fn grand_total_row(report: &BatchReport) -> [String; 8] {
    [
        GRAND_TOTAL_LABEL.to_string(),
        report.grand_total_work_days.to_string(),
        money(report.grand_total_hours),
        money(report.grand_total_overtime_hours),
        money(report.grand_total_undertime_hours),
        NOT_APPLICABLE.to_string(),
        NOT_APPLICABLE.to_string(),
        money(report.grand_total_net_salary),
    ]
}

/// Writes the batch report as a CSV salary list.
///
/// # Arguments
///
/// * `report` - The computed batch report
/// * `writer` - Destination for the UTF-8 CSV bytes
///
/// # Returns
///
/// `ExportError` if the destination cannot be written.
pub fn write_batch_csv<W: Write>(report: &BatchReport, mut writer: W) -> EngineResult<()> {
    write!(
        writer,
        "{BOM}{REPORT_TITLE}\nTarih Aralığı: {} - {}\n\n",
        report.start_date, report.end_date
    )
    .map_err(io_error)?;

    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(CSV_COLUMNS)?;
    for item in &report.items {
        csv_writer.write_record(item_row(item))?;
    }
    csv_writer.write_record(grand_total_row(report))?;
    csv_writer.flush().map_err(io_error)?;

    Ok(())
}

/// Renders the batch report as a CSV string.
///
/// # Examples
///
/// ```
/// use bordro_engine::calculation::{compute_batch_report, WorkRules};
/// use bordro_engine::export::batch_csv_string;
/// use bordro_engine::models::Employee;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut employee = Employee::new("e1", "Ali Kaya");
/// employee.base_salary = Decimal::new(30000, 0);
///
/// let batch = compute_batch_report(
///     &[employee],
///     NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 4, 30).unwrap(),
///     &WorkRules::default(),
/// )
/// .unwrap();
///
/// let csv = batch_csv_string(&batch).unwrap();
/// assert!(csv.contains("Ali Kaya,0,0.00,0.00,0.00,0.00,0.00,30000.00"));
/// ```
pub fn batch_csv_string(report: &BatchReport) -> EngineResult<String> {
    let mut buffer = Vec::new();
    write_batch_csv(report, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| EngineError::ExportError {
        message: e.to_string(),
    })
}

/// Download file name for a batch report.
pub fn csv_file_name(report: &BatchReport) -> String {
    format!("rapor_{}_{}.csv", report.start_date, report.end_date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{WorkRules, compute_batch_report};
    use crate::models::{Bonus, Employee, TimeLog};
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn batch() -> BatchReport {
        let mut ayse = Employee::new("1", "Ayşe Yılmaz");
        ayse.base_salary = dec("30000");
        ayse.hourly_rate = dec("100");
        ayse.time_logs = vec![TimeLog {
            id: "t1".to_string(),
            date: date("2025-01-06"),
            check_in: Some("08:00".to_string()),
            check_out: Some("18:00".to_string()),
        }];

        let mut ali = Employee::new("2", "Kaya, Ali");
        ali.base_salary = dec("15000");
        ali.bonuses = vec![Bonus {
            id: "b1".to_string(),
            date: date("2025-01-10"),
            amount: dec("333.335"),
            description: String::new(),
        }];

        compute_batch_report(
            &[ayse, ali],
            date("2025-01-01"),
            date("2025-01-31"),
            &WorkRules::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_layout() {
        let csv = batch_csv_string(&batch()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "\u{FEFF}Rapor Türü: Toplu Personel Maaş Listesi");
        assert_eq!(lines[1], "Tarih Aralığı: 2025-01-01 - 2025-01-31");
        assert_eq!(lines[2], "");
        assert_eq!(
            lines[3],
            "Personel,Çalışma Günü,Toplam Saat,Fazla Mesai (Normal + Pazar),Eksik Süre,Primler,Kesintiler,Net Maaş"
        );
        assert_eq!(lines[4], "Ayşe Yılmaz,1,10.00,2.00,0.00,0.00,0.00,31300.00");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_names_with_commas_are_quoted_and_money_rounded() {
        let csv = batch_csv_string(&batch()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        // 15000 / 30 x 31 = 15500, plus a 333.335 bonus
        assert_eq!(
            lines[5],
            "\"Kaya, Ali\",0,0.00,0.00,0.00,333.34,0.00,15833.34"
        );
    }

    #[test]
    fn test_grand_total_row_comes_from_report_totals() {
        let report = batch();
        let csv = batch_csv_string(&report).unwrap();
        let last = csv.lines().last().unwrap();

        assert_eq!(last, "GENEL TOPLAM,1,10.00,2.00,0.00,-,-,47133.34");
        assert_eq!(report.grand_total_net_salary, dec("47133.335"));
    }

    #[test]
    fn test_file_name() {
        assert_eq!(csv_file_name(&batch()), "rapor_2025-01-01_2025-01-31.csv");
    }

    #[test]
    fn test_money_formatting() {
        assert_eq!(money(dec("10")), "10.00");
        assert_eq!(money(dec("-0.001")), "0.00");
        assert_eq!(money(dec("-12.345")), "-12.35");
    }
}
