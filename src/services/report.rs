use crate::domain::models::{AllocationConfig, AllocationResult};

/// Render the downloadable plain-text summary. Field order is part of the
/// export contract; `generated_on` is injected so the renderer stays
/// deterministic under test.
pub fn summary_report(
    config: &AllocationConfig,
    results: &AllocationResult,
    generated_on: &str,
) -> String {
    let mut out = String::new();

    out.push_str("SHADOW SHARE ALLOCATION SUMMARY\n");
    out.push_str(&format!("Generated on: {}\n\n", generated_on));

    out.push_str("FINANCIAL OVERVIEW\n");
    out.push_str(&format!("Total Profit: ${}\n", amount(config.profit)));
    out.push_str(&format!(
        "Reserve Amount: ${}\n",
        amount(results.reserve_amount)
    ));
    out.push_str(&format!(
        "Available for Distribution: ${}\n",
        amount(results.available_for_distribution)
    ));
    out.push_str(&format!(
        "Total Shadow Share Payout: ${}\n\n",
        amount(results.total_shadow_share_payout)
    ));

    out.push_str("ALLOCATION DETAILS\n");
    out.push_str(&format!("Total Units: {}\n", amount(results.total_units)));
    out.push_str(&format!(
        "Value per Unit: ${:.2}\n",
        results.per_unit_value
    ));
    out.push_str(&format!("Total Employees: {}\n\n", results.total_employees));

    out.push_str("GRADE DISTRIBUTION\n");
    for grade in &results.grade_distribution {
        out.push_str(&format!(
            "Grade {}: {} employees, {} units, ${} total, ${} per employee\n",
            grade.grade,
            grade.employees,
            amount(grade.total_units),
            amount(grade.total_payout),
            amount(grade.payout_per_employee)
        ));
    }
    out.push('\n');

    out.push_str("TREASURY STATUS\n");
    out.push_str(&format!(
        "Updated Treasury Reserve: ${}\n",
        amount(results.treasury_reserve)
    ));

    out
}

/// Whole values print without a fractional part; everything else rounds to
/// cents.
fn amount(v: f64) -> String {
    if v.fract().abs() < 1e-9 {
        format!("{}", v as i64)
    } else {
        format!("{:.2}", v)
    }
}
