use crate::*;

pub fn handle_runtime_commands(cli: &Cli, session: &mut Session) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Grades { command } => match command {
            GradeCommands::List => {
                let report = grades_report(session);
                if cli.json {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&JsonOut {
                            ok: true,
                            data: report
                        })?
                    );
                } else {
                    for row in &report.grades {
                        println!(
                            "{}\tunits={}\tvalue=${}\temployees={}\texpected=${:.2}",
                            row.grade, row.units, row.unit_value, row.employees, row.expected_payout
                        );
                    }
                    println!(
                        "total expected payout: ${:.2} ({} employees)",
                        report.total_expected_payout, report.total_employees
                    );
                }
            }
            GradeCommands::Set { grade, units } => {
                // Invalid (negative) entry is coerced to zero at this
                // boundary; the calculator itself never validates.
                let units = units.max(0.0);
                let entry = session
                    .config
                    .salary_grades
                    .iter_mut()
                    .find(|g| g.grade == *grade)
                    .ok_or_else(|| AppError::UnknownGrade(grade.clone()))?;
                entry.units = units;
                session.total_expected_payout =
                    allocator::expected_payout(&session.config.salary_grades);
                save_session(session)?;
                let report = grades_report(session);
                print_one(cli.json, report, |r| {
                    format!(
                        "grade {} units set to {} (total expected payout ${:.2})",
                        grade, units, r.total_expected_payout
                    )
                })?;
            }
        },
        Commands::Value { command } => match command {
            ValueCommands::Set { amount } => {
                let amount = amount.max(0.0);
                for g in &mut session.config.salary_grades {
                    g.unit_value = amount;
                }
                session.total_expected_payout =
                    allocator::expected_payout(&session.config.salary_grades);
                save_session(session)?;
                let report = grades_report(session);
                print_one(cli.json, report, |r| {
                    format!(
                        "value per unit set to ${} (total expected payout ${:.2})",
                        amount, r.total_expected_payout
                    )
                })?;
            }
        },
        Commands::Roster { command } => match command {
            RosterCommands::Import { file } => {
                let roster = FileRoster::new(file);
                let imported = roster.import(session.config.salary_grades.len())?;
                for (g, count) in session
                    .config
                    .salary_grades
                    .iter_mut()
                    .zip(&imported.headcounts)
                {
                    g.employees = *count;
                }
                session.roster_fingerprint = Some(imported.fingerprint.clone());
                session.total_expected_payout =
                    allocator::expected_payout(&session.config.salary_grades);
                audit(
                    "roster_import",
                    serde_json::json!({"fingerprint": imported.fingerprint}),
                );
                save_session(session)?;

                let report = RosterReport {
                    fingerprint: imported.fingerprint,
                    headcounts: session
                        .config
                        .salary_grades
                        .iter()
                        .map(|g| RosterHeadcount {
                            grade: g.grade.clone(),
                            employees: g.employees,
                        })
                        .collect(),
                    total_employees: allocator::total_employees(&session.config.salary_grades),
                };
                if cli.json {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&JsonOut {
                            ok: true,
                            data: report
                        })?
                    );
                } else {
                    for h in &report.headcounts {
                        println!("{}\t{} employees", h.grade, h.employees);
                    }
                    println!("imported {} employees from roster", report.total_employees);
                }
            }
        },
        Commands::Params { command } => match command {
            ParamCommands::Set {
                profit,
                reserve_ratio,
                share_percent,
                treasury_reserve,
            } => {
                if let Some(v) = profit {
                    session.config.profit = *v;
                }
                if let Some(v) = reserve_ratio {
                    session.config.reserve_ratio = *v;
                }
                if let Some(v) = share_percent {
                    session.config.shadow_shares_base_percent = *v;
                }
                if let Some(v) = treasury_reserve {
                    session.config.treasury_reserve = *v;
                }
                save_session(session)?;
                print_one(cli.json, session.config.clone(), |c| {
                    format!(
                        "profit=${} reserve_ratio={}% share_percent={}% treasury_reserve=${}",
                        c.profit, c.reserve_ratio, c.shadow_shares_base_percent, c.treasury_reserve
                    )
                })?;
            }
        },
        Commands::Preview => {
            let figures = allocator::preview(&session.config);
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: figures
                    })?
                );
            } else {
                println!("reserve amount: ${:.2}", figures.reserve_amount);
                println!(
                    "available for distribution: ${:.2}",
                    figures.available_for_distribution
                );
                println!(
                    "shadow shares allocation: ${:.2}",
                    figures.shadow_shares_allocation
                );
                println!("total units: {}", figures.total_units);
                println!("value per unit: ${:.2}", figures.value_per_unit);
                for g in &figures.grade_previews {
                    println!(
                        "grade {}: {} units, ${:.2}",
                        g.grade, g.total_units, g.expected_payout
                    );
                }
            }
        }
        Commands::Compute => {
            let results = allocator::compute(&session.config);
            audit(
                "compute",
                serde_json::json!({
                    "total_units": results.total_units,
                    "total_shadow_share_payout": results.total_shadow_share_payout
                }),
            );
            session.final_results = Some(results.clone());
            save_session(session)?;
            print_result(cli.json, &results)?;
        }
        Commands::Show => {
            let results = require_results(session)?.clone();
            print_result(cli.json, &results)?;
        }
        Commands::Export { out } => {
            let results = require_results(session)?;
            let text = report::summary_report(&session.config, results, &unix_now());
            audit("export", serde_json::json!({"to_file": out.is_some()}));
            match out {
                Some(path) => {
                    std::fs::write(path, &text)?;
                    print_one(
                        cli.json,
                        serde_json::json!({"path": path.to_string_lossy()}),
                        |_| format!("wrote allocation summary to {}", path.display()),
                    )?;
                }
                None => {
                    if cli.json {
                        println!(
                            "{}",
                            serde_json::to_string_pretty(&JsonOut {
                                ok: true,
                                data: text
                            })?
                        );
                    } else {
                        print!("{}", text);
                    }
                }
            }
        }
        Commands::Login { .. } | Commands::Logout | Commands::Reset => {
            unreachable!("handled before the auth gate")
        }
    }

    Ok(())
}

fn print_result(json: bool, results: &AllocationResult) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: results
            })?
        );
    } else {
        println!(
            "total shadow share payout: ${:.2}",
            results.total_shadow_share_payout
        );
        println!("total units: {}", results.total_units);
        println!("value per unit: ${:.2}", results.per_unit_value);
        println!("total employees: {}", results.total_employees);
        for g in &results.grade_distribution {
            println!(
                "grade {}: {} employees, {} units, ${:.2} total, ${:.2} per employee",
                g.grade, g.employees, g.total_units, g.total_payout, g.payout_per_employee
            );
        }
        println!("treasury reserve: ${}", results.treasury_reserve);
    }
    Ok(())
}

fn grades_report(session: &Session) -> GradesReport {
    GradesReport {
        grades: session
            .config
            .salary_grades
            .iter()
            .map(|g| GradeRow {
                grade: g.grade.clone(),
                units: g.units,
                unit_value: g.unit_value,
                employees: g.employees,
                expected_payout: g.units * g.unit_value * g.employees as f64,
            })
            .collect(),
        total_expected_payout: allocator::expected_payout(&session.config.salary_grades),
        total_employees: allocator::total_employees(&session.config.salary_grades),
    }
}
