//! 文字報表

use courier_calc::{preview_order, DispatchResult};
use courier_core::{Parcel, TableRow};
use rust_decimal::Decimal;

/// 報表中每位騎手列出的目的地數量
const DESTINATIONS_SHOWN: usize = 3;

fn format_kg(value: Decimal) -> String {
    let mut rounded = value;
    rounded.rescale(2);
    rounded.to_string()
}

/// 分派報表：每位有包裹的騎手一行（依騎手ID），接著是未分派清單
///
/// `R1 | 9.00 | 2 | Hall A, Hall B`
pub fn render_assignments(result: &DispatchResult) -> Vec<String> {
    let mut lines: Vec<String> = result
        .assignments
        .iter()
        .map(|(rider_id, parcels)| {
            let total = result.total_load(rider_id);
            let destinations: Vec<&str> = parcels
                .iter()
                .take(DESTINATIONS_SHOWN)
                .map(|p| p.destination.as_str())
                .collect();
            format!(
                "{} | {} | {} | {}",
                rider_id,
                format_kg(total),
                parcels.len(),
                destinations.join(", ")
            )
        })
        .collect();

    lines.push(format!("Unassigned: {}", id_list(result.unassigned.iter())));
    if !result.orphaned.is_empty() {
        lines.push(format!("Orphaned: {}", id_list(result.orphaned.iter())));
    }
    lines
}

fn id_list<'a>(ids: impl Iterator<Item = &'a String>) -> String {
    let ids: Vec<&str> = ids.map(String::as_str).collect();
    format!("[{}]", ids.join(", "))
}

/// 預覽：急件在前，再將重量 ≥ 門檻的包裹排前
pub fn render_preview(rider_id: &str, parcels: &[Parcel], threshold_kg: Decimal) -> Vec<String> {
    let mut lines = vec![format!("Preview for {}:", rider_id)];
    lines.extend(
        preview_order(parcels, threshold_kg)
            .map(|p| format!("  {} ({}kg)", p.parcel_id, p.weight_kg)),
    );
    lines
}

/// 載重累計：依分派順序列出每件包裹與累計重量
pub fn render_loads(rider_id: &str, result: &DispatchResult) -> Vec<String> {
    let mut lines = vec![format!("Load for {}:", rider_id)];
    lines.extend(result.load_iter(rider_id).map(|step| {
        format!(
            "  {} +{}kg = {}kg",
            step.parcel_id, step.weight_kg, step.cumulative_kg
        )
    }));
    lines
}

/// 表格：標題列加上每筆實體一行
pub fn render_table<T: TableRow>(title: &str, items: &[T]) -> Vec<String> {
    let mut lines = vec![format!("{} ({})", title, items.len()), T::HEADERS.join(" | ")];
    lines.extend(items.iter().map(|item| item.to_row().join(" | ")));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use courier_core::{Hub, Priority};
    use std::collections::BTreeMap;

    fn parcel(id: &str, priority: Priority, destination: &str, kg: Decimal) -> Parcel {
        Parcel::new(
            id.to_string(),
            "Student".to_string(),
            priority,
            "H1".to_string(),
            destination.to_string(),
            kg,
        )
    }

    fn result() -> DispatchResult {
        let mut assignments = BTreeMap::new();
        assignments.insert(
            "R2".to_string(),
            vec![parcel("P2", Priority::Express, "Library", Decimal::from(5))],
        );
        assignments.insert(
            "R1".to_string(),
            vec![
                parcel("P1", Priority::Express, "Hall A", Decimal::from(6)),
                parcel("P3", Priority::Normal, "Hall B", Decimal::new(25, 1)),
                parcel("P5", Priority::Normal, "Hall C", Decimal::ONE),
                parcel("P6", Priority::Normal, "Hall D", Decimal::ONE),
            ],
        );
        DispatchResult {
            assignments,
            unassigned: ["P9".to_string(), "P4".to_string()].into_iter().collect(),
            ..DispatchResult::default()
        }
    }

    #[test]
    fn test_render_assignments() {
        let lines = render_assignments(&result());

        assert_eq!(
            lines,
            vec![
                "R1 | 10.50 | 4 | Hall A, Hall B, Hall C",
                "R2 | 5.00 | 1 | Library",
                "Unassigned: [P4, P9]",
            ]
        );
    }

    #[test]
    fn test_render_assignments_with_orphans() {
        let mut result = DispatchResult::empty();
        result.orphaned.insert("P7".to_string());

        let lines = render_assignments(&result);
        assert_eq!(lines, vec!["Unassigned: []", "Orphaned: [P7]"]);
    }

    #[test]
    fn test_render_preview() {
        let result = result();
        let lines = render_preview("R1", result.parcels_for("R1"), Decimal::from(2));

        assert_eq!(
            lines,
            vec![
                "Preview for R1:",
                "  P1 (6kg)",
                "  P3 (2.5kg)",
                "  P5 (1kg)",
                "  P6 (1kg)",
            ]
        );
        assert_eq!(render_preview("R9", &[], Decimal::ONE), vec!["Preview for R9:"]);
    }

    #[test]
    fn test_render_loads() {
        let lines = render_loads("R1", &result());
        assert_eq!(lines[0], "Load for R1:");
        assert_eq!(lines[2], "  P3 +2.5kg = 8.5kg");
        assert_eq!(lines[4], "  P6 +1kg = 10.5kg");
    }

    #[test]
    fn test_render_table() {
        let hubs = vec![Hub::new(
            "H1".to_string(),
            "Haviz Cafe".to_string(),
            "UCU".to_string(),
        )];
        assert_eq!(
            render_table("Hubs", &hubs),
            vec!["Hubs (1)", "hub_id | hub_name | campus", "H1 | Haviz Cafe | UCU"]
        );
    }
}
