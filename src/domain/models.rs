use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One salary band. `units` is the only user-editable field; `employees`
/// comes from a roster import and `unit_value` is broadcast from the single
/// global value-per-unit input.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SalaryGrade {
    pub grade: String,
    pub units: f64,
    #[serde(default)]
    pub unit_value: f64,
    #[serde(default)]
    pub employees: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AllocationConfig {
    pub salary_grades: Vec<SalaryGrade>,
    pub profit: f64,
    pub reserve_ratio: f64,
    pub shadow_shares_base_percent: f64,
    pub treasury_reserve: f64,
}

/// Per-grade slice of a computed allocation: the original grade fields plus
/// the derived payout figures.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GradePayout {
    pub grade: String,
    pub units: f64,
    pub unit_value: f64,
    pub employees: u32,
    pub total_units: f64,
    pub total_payout: f64,
    pub payout_per_employee: f64,
}

/// Immutable snapshot produced by `allocator::compute`. Never mutated in
/// place; a recomputation replaces the whole value.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AllocationResult {
    pub total_units: f64,
    pub total_employees: u32,
    pub per_unit_value: f64,
    pub total_shadow_share_payout: f64,
    pub grade_distribution: Vec<GradePayout>,
    pub treasury_reserve: f64,
    pub reserve_amount: f64,
    pub available_for_distribution: f64,
}

#[derive(Debug, Serialize, Clone)]
pub struct GradePreview {
    pub grade: String,
    pub total_units: f64,
    pub expected_payout: f64,
}

/// Recommendation-stage figures. Uses the reserve-deducted pool formula,
/// which intentionally differs from the one in `allocator::compute`.
#[derive(Debug, Serialize, Clone)]
pub struct PreviewFigures {
    pub reserve_amount: f64,
    pub available_for_distribution: f64,
    pub shadow_shares_allocation: f64,
    pub total_units: f64,
    pub value_per_unit: f64,
    pub grade_previews: Vec<GradePreview>,
}

#[derive(Debug, Serialize)]
pub struct GradeRow {
    pub grade: String,
    pub units: f64,
    pub unit_value: f64,
    pub employees: u32,
    pub expected_payout: f64,
}

/// Configuration-stage summary: per-grade expected payouts from the global
/// value-per-unit input, independent of profit/reserve/percent.
#[derive(Debug, Serialize)]
pub struct GradesReport {
    pub grades: Vec<GradeRow>,
    pub total_expected_payout: f64,
    pub total_employees: u32,
}

#[derive(Debug, Serialize)]
pub struct RosterReport {
    pub fingerprint: String,
    pub headcounts: Vec<RosterHeadcount>,
    pub total_employees: u32,
}

#[derive(Debug, Serialize)]
pub struct RosterHeadcount {
    pub grade: String,
    pub employees: u32,
}

#[derive(Debug, Serialize)]
pub struct LoginReport {
    pub email: String,
    pub authenticated: bool,
}

/// The whole interactive state carried between invocations: authentication,
/// the editable configuration, and the last computed snapshot.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Session {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub user_email: String,
    pub config: AllocationConfig,
    #[serde(default)]
    pub total_expected_payout: f64,
    #[serde(default)]
    pub roster_fingerprint: Option<String>,
    #[serde(default)]
    pub final_results: Option<AllocationResult>,
}
