#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use punchlog::libs::event::LogEvent;
    use punchlog::libs::export::{ExportData, ExportFormat, Exporter};
    use punchlog::libs::session::{Reconstruct, Vocabulary};
    use punchlog::libs::summary::{ReportSummary, SummaryCalculator};
    use punchlog::libs::zone::ReportZone;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
        summary: ReportSummary,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let at = |day: u32, h: u32| Utc.with_ymd_and_hms(2024, 6, day, h, 0, 0).unwrap();
            let events = vec![
                LogEvent::new(at(1, 9), "IN", ""),
                LogEvent::new(at(1, 17), "OUT", ""),
                LogEvent::new(at(2, 10), "IN", ""),
                LogEvent::new(at(2, 12), "OUT", ""),
            ];
            let summary = events.reconstruct(Vocabulary::Local, &ReportZone::utc()).unwrap().summarize().unwrap();

            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                summary,
            }
        }
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_grid_csv(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("grid.csv");
        Exporter::new(ExportFormat::Csv, Some(path.clone()))
            .export(ExportData::Grid, &ctx.summary)
            .unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], ",Date,Time In,Time Out,Duration");
        assert_eq!(lines[1], ",2024-06-01,09:00:00,17:00:00,08:00:00");
        assert_eq!(lines.len(), 3);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_summary_json(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("summary.json");
        Exporter::new(ExportFormat::Json, Some(path.clone()))
            .export(ExportData::Summary, &ctx.summary)
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(json["total_hours"], "10:00:00");
        assert_eq!(json["sessions"], 2);
        assert_eq!(json["days"][1]["date"], "2024-06-02");
        assert_eq!(json["days"][1]["hours"], "02:00:00");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_grid_json_lists_sessions(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("grid.json");
        Exporter::new(ExportFormat::Json, Some(path.clone()))
            .export(ExportData::Grid, &ctx.summary)
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 2);
        assert_eq!(json[0]["time_in"], "09:00:00");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_excel_files_are_written(ctx: &mut ExportTestContext) {
        for data in [ExportData::Grid, ExportData::Summary] {
            let path = ctx.temp_dir.path().join(format!("{}.xlsx", data));
            Exporter::new(ExportFormat::Excel, Some(path.clone())).export(data, &ctx.summary).unwrap();
            assert!(path.exists());
            assert!(std::fs::metadata(&path).unwrap().len() > 0);
        }
    }

    #[test]
    fn test_default_name_uses_format_extension() {
        let exporter = Exporter::new(ExportFormat::Excel, None);
        let name = exporter.output_path().to_string_lossy().to_string();
        assert!(name.starts_with("punchlog_export_"));
        assert!(name.ends_with(".xlsx"));
    }
}
