use crate::domain::models::{
    AllocationConfig, AllocationResult, GradePayout, GradePreview, PreviewFigures, SalaryGrade,
};

/// Compute the final shadow share allocation for a configuration.
///
/// Pure and total: every numeric edge case (zero units, zero employees,
/// zero or negative profit, empty grade list) degrades to zero outputs via
/// the `total_units > 0` guard instead of failing.
///
/// The distributable pool is a direct percentage of total profit. The
/// reserve ratio is snapshotted into `reserve_amount` /
/// `available_for_distribution` for reporting but is NOT deducted before
/// the pool is taken — `preview` is the path that deducts it. The two
/// formulas diverge on purpose; see DESIGN.md before changing either.
pub fn compute(config: &AllocationConfig) -> AllocationResult {
    let total_units = total_units(&config.salary_grades);
    let total_employees = total_employees(&config.salary_grades);

    let shadow_shares_allocation = config.profit * (config.shadow_shares_base_percent / 100.0);

    let per_unit_value = if total_units > 0.0 {
        shadow_shares_allocation / total_units
    } else {
        0.0
    };

    let grade_distribution = config
        .salary_grades
        .iter()
        .map(|grade| {
            let grade_units = grade.units * grade.employees as f64;
            GradePayout {
                grade: grade.grade.clone(),
                units: grade.units,
                unit_value: grade.unit_value,
                employees: grade.employees,
                total_units: grade_units,
                total_payout: grade_units * per_unit_value,
                // Payout attributable to one employee's unit count, not the
                // grade total divided by headcount.
                payout_per_employee: grade.units * per_unit_value,
            }
        })
        .collect();

    let reserve_amount = config.profit * (config.reserve_ratio / 100.0);

    AllocationResult {
        total_units,
        total_employees,
        per_unit_value,
        total_shadow_share_payout: shadow_shares_allocation,
        grade_distribution,
        treasury_reserve: config.treasury_reserve,
        reserve_amount,
        available_for_distribution: config.profit - reserve_amount,
    }
}

/// Recommendation-stage preview. Deducts the reserve from profit before
/// applying the shadow share percentage, unlike `compute`.
pub fn preview(config: &AllocationConfig) -> PreviewFigures {
    let reserve_amount = config.profit * (config.reserve_ratio / 100.0);
    let available_for_distribution = config.profit - reserve_amount;
    let shadow_shares_allocation =
        available_for_distribution * (config.shadow_shares_base_percent / 100.0);

    let total_units = total_units(&config.salary_grades);
    let value_per_unit = if total_units > 0.0 {
        shadow_shares_allocation / total_units
    } else {
        0.0
    };

    let grade_previews = config
        .salary_grades
        .iter()
        .map(|grade| {
            let grade_units = grade.units * grade.employees as f64;
            GradePreview {
                grade: grade.grade.clone(),
                total_units: grade_units,
                expected_payout: grade_units * value_per_unit,
            }
        })
        .collect();

    PreviewFigures {
        reserve_amount,
        available_for_distribution,
        shadow_shares_allocation,
        total_units,
        value_per_unit,
        grade_previews,
    }
}

/// Configuration-stage total: units x value-per-unit x headcount summed over
/// grades. Independent of profit/reserve/percent and of the derived
/// per-unit value used by `compute`.
pub fn expected_payout(grades: &[SalaryGrade]) -> f64 {
    grades
        .iter()
        .map(|g| g.units * g.unit_value * g.employees as f64)
        .sum()
}

pub fn total_units(grades: &[SalaryGrade]) -> f64 {
    grades.iter().map(|g| g.units * g.employees as f64).sum()
}

pub fn total_employees(grades: &[SalaryGrade]) -> u32 {
    grades.iter().map(|g| g.employees).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grade(label: &str, units: f64, employees: u32) -> SalaryGrade {
        SalaryGrade {
            grade: label.to_string(),
            units,
            unit_value: 0.0,
            employees,
        }
    }

    fn five_grade_config() -> AllocationConfig {
        AllocationConfig {
            salary_grades: vec![
                grade("A", 10.0, 5),
                grade("B", 8.0, 10),
                grade("C", 6.0, 15),
                grade("D", 4.0, 20),
                grade("E", 2.0, 25),
            ],
            profit: 1000.0,
            reserve_ratio: 10.0,
            shadow_shares_base_percent: 15.0,
            treasury_reserve: 500.0,
        }
    }

    #[test]
    fn worked_example_matches_hand_calculation() {
        let result = compute(&five_grade_config());

        // pool = 1000 * 15% = 150; units = 50+80+90+80+50 = 350
        assert!((result.total_shadow_share_payout - 150.0).abs() < 1e-10);
        assert!((result.total_units - 350.0).abs() < 1e-10);
        assert_eq!(result.total_employees, 75);
        assert!((result.per_unit_value - 150.0 / 350.0).abs() < 1e-10);

        let a = &result.grade_distribution[0];
        assert!((a.total_units - 50.0).abs() < 1e-10);
        assert!((a.total_payout - 50.0 * 150.0 / 350.0).abs() < 1e-10);
        assert!((a.payout_per_employee - 10.0 * 150.0 / 350.0).abs() < 1e-10);
    }

    #[test]
    fn grade_payouts_sum_to_distributable_pool() {
        let result = compute(&five_grade_config());
        let sum: f64 = result
            .grade_distribution
            .iter()
            .map(|g| g.total_payout)
            .sum();
        assert!((sum - result.total_shadow_share_payout).abs() < 1e-9);
    }

    #[test]
    fn zero_units_guard_yields_zero_not_infinity() {
        let mut config = five_grade_config();
        for g in &mut config.salary_grades {
            g.employees = 0;
        }
        let result = compute(&config);
        assert_eq!(result.total_units, 0.0);
        assert_eq!(result.per_unit_value, 0.0);
        assert!(result.grade_distribution.iter().all(|g| g.total_payout == 0.0));
        // pool is still a direct percentage of profit
        assert!((result.total_shadow_share_payout - 150.0).abs() < 1e-10);
    }

    #[test]
    fn zero_profit_zeroes_every_payout() {
        let mut config = five_grade_config();
        config.profit = 0.0;
        let result = compute(&config);
        assert_eq!(result.total_shadow_share_payout, 0.0);
        assert_eq!(result.per_unit_value, 0.0);
        assert!(result
            .grade_distribution
            .iter()
            .all(|g| g.total_payout == 0.0 && g.payout_per_employee == 0.0));
    }

    #[test]
    fn empty_grade_list_is_tolerated() {
        let config = AllocationConfig {
            salary_grades: vec![],
            profit: 1000.0,
            reserve_ratio: 10.0,
            shadow_shares_base_percent: 15.0,
            treasury_reserve: 0.0,
        };
        let result = compute(&config);
        assert_eq!(result.total_units, 0.0);
        assert_eq!(result.total_employees, 0);
        assert_eq!(result.per_unit_value, 0.0);
        assert!(result.grade_distribution.is_empty());
    }

    #[test]
    fn total_employees_ignores_units_and_profit() {
        let mut config = five_grade_config();
        config.profit = -4000.0;
        for g in &mut config.salary_grades {
            g.units = 0.0;
        }
        assert_eq!(compute(&config).total_employees, 75);
    }

    #[test]
    fn compute_is_idempotent() {
        let config = five_grade_config();
        let a = compute(&config);
        let b = compute(&config);
        assert_eq!(
            serde_json::to_value(&a).unwrap(),
            serde_json::to_value(&b).unwrap()
        );
    }

    #[test]
    fn treasury_reserve_passes_through_untouched() {
        let result = compute(&five_grade_config());
        assert_eq!(result.treasury_reserve, 500.0);
    }

    #[test]
    fn preview_deducts_reserve_but_compute_does_not() {
        let config = five_grade_config();
        let p = preview(&config);
        let r = compute(&config);

        // preview: (1000 - 100) * 15% = 135; compute: 1000 * 15% = 150
        assert!((p.reserve_amount - 100.0).abs() < 1e-10);
        assert!((p.available_for_distribution - 900.0).abs() < 1e-10);
        assert!((p.shadow_shares_allocation - 135.0).abs() < 1e-10);
        assert!((r.total_shadow_share_payout - 150.0).abs() < 1e-10);
        assert!((r.reserve_amount - 100.0).abs() < 1e-10);
        assert!((r.available_for_distribution - 900.0).abs() < 1e-10);
    }

    #[test]
    fn expected_payout_uses_broadcast_unit_value_only() {
        let mut grades = five_grade_config().salary_grades;
        for g in &mut grades {
            g.unit_value = 2.0;
        }
        // 350 total units * $2
        assert!((expected_payout(&grades) - 700.0).abs() < 1e-10);
    }
}
