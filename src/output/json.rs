use crate::cli::View;
use crate::output::activity::activity_json;
use crate::output::format::ViewOptions;
use crate::output::summary::summary_json;
use crate::output::users::users_json;
use crate::source::Report;

impl View {
    fn json_key(self) -> &'static str {
        match self {
            View::Summary => "summary",
            View::Users => "users",
            View::Activity => "activity",
        }
    }
}

/// One JSON object per analyzed transcript, in input order
pub(crate) fn output_json(reports: &[Report], view: View, opts: ViewOptions<'_>) -> String {
    let output: Vec<serde_json::Value> = reports
        .iter()
        .map(|report| {
            let body = match view {
                View::Summary => summary_json(&report.stats, opts),
                View::Users => users_json(&report.stats, opts),
                View::Activity => activity_json(&report.stats),
            };
            let mut obj = serde_json::json!({
                "file": report.name,
                "lines": report.lines,
                "dropped_lines": report.dropped_lines(),
            });
            obj[view.json_key()] = body;
            obj
        })
        .collect();

    serde_json::to_string_pretty(&output).unwrap_or_else(|e| {
        eprintln!("Failed to serialize JSON output: {}", e);
        "[]".to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TimestampPolicy;
    use crate::source::loader::analyze_text;

    fn opts() -> ViewOptions<'static> {
        ViewOptions {
            use_color: false,
            compact: false,
            top: 3,
            user: None,
        }
    }

    #[test]
    fn output_json_wraps_each_report() {
        let reports = vec![
            analyze_text(
                "a.txt".to_string(),
                "01.01.2024, 09:00 - Alice: hi\nnoise",
                TimestampPolicy::Strict,
            )
            .unwrap(),
            analyze_text("b.txt".to_string(), "", TimestampPolicy::Strict).unwrap(),
        ];
        let json: serde_json::Value =
            serde_json::from_str(&output_json(&reports, View::Summary, opts())).unwrap();
        let arr = json.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[0]["file"], "a.txt");
        assert_eq!(arr[0]["dropped_lines"], 1);
        assert_eq!(arr[0]["summary"]["total_messages"], 1);
        assert_eq!(arr[1]["summary"]["total_messages"], 0);
        assert_eq!(arr[1]["summary"]["days_span"], 0);
    }

    #[test]
    fn output_json_uses_view_key() {
        let reports = vec![
            analyze_text(
                "a.txt".to_string(),
                "01.01.2024, 09:00 - Alice: hi",
                TimestampPolicy::Strict,
            )
            .unwrap(),
        ];
        let json: serde_json::Value =
            serde_json::from_str(&output_json(&reports, View::Activity, opts())).unwrap();
        assert!(json[0].get("activity").is_some());
        assert!(json[0].get("summary").is_none());
    }
}
