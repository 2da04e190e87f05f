//! 端末向けの表フォーマット

use spec_extractor_common::{DatabaseRecord, SpecEntry};

/// 左寄せの表を組み立てる
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = Vec::with_capacity(rows.len() + 2);
    out.push(line(headers.to_vec()));
    let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push(line(dashes.iter().map(String::as_str).collect()));
    for row in rows {
        out.push(line(row.iter().map(String::as_str).collect()));
    }
    out.join("\n")
}

/// 抽出結果の表（Specification / Value）
pub fn spec_table(entries: &[SpecEntry]) -> String {
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|e| vec![e.name.clone(), e.value.clone()])
        .collect();
    render_table(&["Specification", "Value"], &rows)
}

/// レコード一覧の表（# / Model / Date）
pub fn record_table(records: &[&DatabaseRecord]) -> String {
    let rows: Vec<Vec<String>> = records
        .iter()
        .enumerate()
        .map(|(i, r)| vec![(i + 1).to_string(), r.model.clone(), r.date_display().to_string()])
        .collect();
    render_table(&["#", "Model", "Date"], &rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_table_layout() {
        let table = spec_table(&[
            SpecEntry::new("CPU", "i9-13900K"),
            SpecEntry::new("RAM", "32GB"),
        ]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "Specification  Value");
        assert_eq!(lines[1], "-------------  ---------");
        assert_eq!(lines[2], "CPU            i9-13900K");
        assert_eq!(lines[3], "RAM            32GB");
    }

    #[test]
    fn test_record_table_numbers_and_placeholder() {
        let a = DatabaseRecord::new("B450M", Some("2024-01-01"));
        let b = DatabaseRecord::new("Z790", None);
        let table = record_table(&[&a, &b]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "#  Model  Date");
        assert_eq!(lines[2], "1  B450M  2024-01-01");
        assert_eq!(lines[3], "2  Z790   -");
    }

    #[test]
    fn test_empty_tables_have_headers() {
        assert_eq!(spec_table(&[]).lines().count(), 2);
        assert_eq!(record_table(&[]).lines().count(), 2);
    }
}
