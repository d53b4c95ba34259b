use crate::handler::{Handler, Next, Request};

use crosstitch_core::{
    async_trait,
    stmt::{Value, ValueRecord},
    Result,
};

const IMPACT: &str = "impact";
const PRIO_CODE: &str = "prio_code";
const CRITICALITY: &str = "criticality";
const PRIO_CRITICALITY: &str = "priorityCriticality";

/// Attaches the computed response attributes to each risk row:
/// `criticality` bucketed from the impact measure, `priorityCriticality`
/// mapped from the priority code. Pure per-record mapping; no dependency on
/// remote data.
#[derive(Debug, Default)]
pub struct Derive;

#[async_trait]
impl Handler for Derive {
    async fn call(&self, req: Request, next: Next<'_>) -> Result<Vec<ValueRecord>> {
        let mut rows = next.run(req).await?;
        for row in &mut rows {
            derive_row(row);
        }
        Ok(rows)
    }
}

fn derive_row(row: &mut ValueRecord) {
    // Missing or non-numeric impact falls in the low-criticality branch.
    let critical = matches!(row.get(IMPACT), Some(Value::I64(impact)) if *impact >= 100_000);
    row.insert(CRITICALITY, if critical { 1_i64 } else { 2 });

    // Unknown or missing codes leave the field unset; permissive on purpose.
    let level = match row.get(PRIO_CODE).and_then(Value::as_str) {
        Some("H") => Some(1_i64),
        Some("M") => Some(2),
        Some("L") => Some(3),
        _ => None,
    };
    if let Some(level) = level {
        row.insert(PRIO_CRITICALITY, level);
    }
}
