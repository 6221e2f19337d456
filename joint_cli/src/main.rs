//! # Jointcalc CLI Application
//!
//! Command-line front end for `joint_core`. Each subcommand runs one
//! calculation and prints a short report, or the result JSON with `--json`.
//! Errors are printed as text followed by their JSON form.

mod args;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

use joint_core::calculations::bolted_joint::{self, BoltedJoint, JointParameters};
use joint_core::calculations::{
    bolt, member_stiffness, BoltInput, BoltedJointInput, CalculationItem, CalculationResult,
    GeometryOverrides, MemberStiffnessInput, MomentTerm, SecondaryShear, WeldGroup, WeldGroupInput,
    WeldStress,
};
use joint_core::equations::combined_stiffness;
use joint_core::file_io::{load_project, read_json, save_project};
use joint_core::project::{GlobalSettings, Project};
use joint_core::tables::{BoltGrade, MemberMaterial, TorsionGroup, WeldGeometry, WeldGroupKind};
use joint_core::units::{FtLb, InLb, Kips, Ksi, MlbPerIn, Pounds, Psi};
use joint_core::{CalcError, CalcResult, Diagnostics};

use args::{
    BoltArgs, Cli, CombineArgs, Commands, GlobalOpts, InitArgs, JointArgs, RunArgs, StiffnessArgs,
    WeldArgs,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.global);

    let global = cli.global;
    let outcome = match cli.command {
        Commands::Bolt(args) => run_bolt(args, &global),
        Commands::Joint(args) => run_joint(args, &global),
        Commands::Weld(args) => run_weld(args, &global),
        Commands::Stiffness(args) => run_stiffness(args, &global),
        Commands::Combine(args) => run_combine(args, &global),
        Commands::Run(args) => run_project(args, &global),
        Commands::Init(args) => run_init(args),
    };

    match outcome {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(global: &GlobalOpts) {
    let default_level = if global.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn print_json<T: Serialize>(value: &T) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| CalcError::SerializationError {
        reason: e.to_string(),
    })?;
    println!("{}", json);
    Ok(())
}

fn print_diagnostics(diagnostics: &Diagnostics) {
    for diagnostic in diagnostics.iter() {
        eprintln!("note: {}", diagnostic);
    }
}

// ============================================================================
// Subcommands
// ============================================================================

fn run_bolt(args: BoltArgs, global: &GlobalOpts) -> CalcResult<ExitCode> {
    let settings = GlobalSettings {
        nut_factor: args.nut_factor,
        default_grade: BoltGrade::try_from(args.grade)?,
        connection: args.connection.into(),
    };
    let input = BoltInput {
        label: "cli".to_string(),
        diameter_in: args.diameter,
        tpi: args.tpi,
        grade: None,
        preload_lb: args.preload,
    };
    let result = bolt::calculate(&input, &settings)?;

    if global.json {
        print_json(&result)?;
        return Ok(ExitCode::SUCCESS);
    }

    let bolt = &result.bolt;
    let strength = bolt.strength();
    println!("Bolt {} in x {} TPI, {}", bolt.diameter_in(), args.tpi.unwrap_or_default(), bolt.grade().display_name());
    println!();
    println!("  A_d  = {:.4} in²", bolt.area_in2());
    println!("  A_t  = {:.4} in²  (Table 8-2)", bolt.tensile_stress_area_in2());
    println!(
        "  S_p  = {:.0} ksi, S_ut = {:.0} ksi, S_y = {:.0} ksi  (Table 8-9)",
        strength.proof().0,
        strength.tensile().0,
        strength.yield_strength().0
    );
    println!(
        "  F_p  = {} ({})",
        Pounds(result.proof_load_lb),
        Kips::from(Pounds(result.proof_load_lb))
    );
    println!();
    println!("  F_i  = {}", Pounds(result.preload_lb));
    println!(
        "  T    = {} ({})",
        InLb(result.torque_inlb),
        FtLb::from(InLb(result.torque_inlb))
    );
    println!(
        "  σ    = {:.0} psi ({:.2} ksi)",
        result.tensile_stress_psi,
        Ksi::from(Psi(result.tensile_stress_psi)).0
    );
    Ok(ExitCode::SUCCESS)
}

fn run_joint(args: JointArgs, global: &GlobalOpts) -> CalcResult<ExitCode> {
    let (file_params, ignored) = match &args.params {
        Some(path) => JointParameters::from_json_lenient(&read_json(path)?)?,
        None => (JointParameters::default(), Diagnostics::new()),
    };

    let mut joint = BoltedJoint::new(file_params)?;
    joint.set(JointParameters {
        preload_lb: args.preload,
        total_load_lb: args.load,
        bolt_count: args.bolts,
        grip_length_in: args.grip,
    })?;
    let unresolved = joint.check_unresolved();
    let result = bolted_joint::BoltedJointResult {
        joint,
        ignored,
        unresolved,
    };

    if global.json {
        print_json(&result)?;
        return Ok(ExitCode::SUCCESS);
    }

    let inputs = result.joint.inputs();
    let loads = result.joint.loads();
    println!("Bolted joint");
    println!();
    print_optional("F_i", inputs.preload_lb, "lb");
    print_optional("P_total", inputs.total_load_lb, "lb");
    print_optional("n", inputs.bolt_count.map(f64::from), "");
    print_optional("grip", inputs.grip_length_in, "in");
    println!();
    print_optional("k_b", loads.k_bolt, "Mlb/in");
    print_optional("k_m", loads.k_member, "Mlb/in");
    print_optional("C_b", loads.c_bolt, "");
    print_optional("C_m", loads.c_member, "");
    println!();
    print_optional("P", loads.per_bolt_load_lb, "lb");
    print_optional("P_b", loads.bolt_load_lb, "lb");
    print_optional("P_m", loads.member_load_lb, "lb");
    print_optional("F_b", loads.bolt_force_lb, "lb");
    print_optional("F_m", loads.member_force_lb, "lb");
    print_diagnostics(&result.diagnostics());
    Ok(ExitCode::SUCCESS)
}

fn print_optional(name: &str, value: Option<f64>, unit: &str) {
    match value {
        Some(v) => println!("  {:<8} = {:.4} {}", name, v, unit),
        None => println!("  {:<8} = (unresolved)", name),
    }
}

fn run_weld(args: WeldArgs, global: &GlobalOpts) -> CalcResult<ExitCode> {
    let kind = WeldGroupKind::from_number(args.loading.into(), args.group)?;
    let mut group = WeldGroup::new(WeldGeometry::default());
    let mut diagnostics = group.select(
        kind,
        GeometryOverrides {
            h: args.h,
            b: args.b,
            d: args.d,
            r: args.r,
        },
    )?;

    let mut stress = WeldStress::new(&group);
    if let Some(force) = args.force {
        stress.primary_shear(force)?;
    }
    if !args.moments.is_empty() {
        let outcome = stress.secondary_shear(&args.moments)?;
        if let Some(diagnostic) = outcome.diagnostic() {
            diagnostics.push(diagnostic);
        }
    }

    let selection = group.require_selection()?;

    if global.json {
        print_json(&serde_json::json!({
            "geometry": group.geometry(),
            "selection": selection,
            "primary_shear_psi": stress.primary(),
            "secondary_shear": stress.secondary(),
            "diagnostics": diagnostics,
        }))?;
        return Ok(ExitCode::SUCCESS);
    }

    let g = group.geometry();
    let symbol = selection.second_moment.symbol();
    println!("{}", kind);
    println!("  h = {}, b = {}, d = {}, r = {} in", g.h, g.b, g.d, g.r);
    println!();
    println!("  A     = {:.4} in²", selection.area);
    println!("  x̄, ȳ  = {:.4}, {:.4} in", selection.x, selection.y);
    println!("  {}u    = {:.4} in³", symbol, selection.second_moment.unit());
    println!("  {}     = {:.4} in⁴", symbol, selection.second_moment.scaled());

    if let Some(primary) = stress.primary() {
        println!();
        println!("  τ'    = {:.0} psi", primary);
    }
    match stress.secondary() {
        Some(SecondaryShear::Stress { moment, value }) => {
            println!("  M     = {:.1} in-lb", moment);
            println!("  τ''   = {:.1} psi per in from the centroid", value);
        }
        Some(SecondaryShear::Symmetric { .. }) => println!("  τ''   = 0 (symmetric)"),
        None => {}
    }
    print_diagnostics(&diagnostics);
    Ok(ExitCode::SUCCESS)
}

fn run_stiffness(args: StiffnessArgs, global: &GlobalOpts) -> CalcResult<ExitCode> {
    let material = MemberMaterial::from_str_flexible(&args.material)?;
    let result = member_stiffness::calculate(&MemberStiffnessInput {
        label: "cli".to_string(),
        material,
        bolt_diameter_in: args.diameter,
        member_1_thickness_in: args.t1,
        member_2_thickness_in: args.t2,
        k_bolt_mlb_per_in: args.k_bolt,
    })?;

    if global.json {
        print_json(&result)?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("Member stiffness, {} (Table 8-8)", material.display_name());
    println!("  l   = {:.4} in", result.grip_length_in);
    println!("  k_m = {}", MlbPerIn(result.k_member_mlb_per_in));
    if let Some(c) = result.joint_constant {
        println!("  C   = {:.4}", c);
    }
    Ok(ExitCode::SUCCESS)
}

fn run_combine(args: CombineArgs, global: &GlobalOpts) -> CalcResult<ExitCode> {
    let k = combined_stiffness(&args.stiffnesses)?;
    if global.json {
        print_json(&serde_json::json!({ "stiffnesses": args.stiffnesses, "combined": k }))?;
    } else {
        println!("k = {:.6}", k);
    }
    Ok(ExitCode::SUCCESS)
}

fn run_project(args: RunArgs, global: &GlobalOpts) -> CalcResult<ExitCode> {
    let project = load_project(&args.project)?;
    let reports = project.evaluate_all();
    let failures = reports.iter().filter(|r| r.outcome.is_err()).count();

    if global.json {
        print_json(&reports)?;
    } else {
        println!(
            "{} - job {} ({} items)",
            args.project.display(),
            project.meta.job_id,
            reports.len()
        );
        for report in &reports {
            match &report.outcome {
                Ok(result) => {
                    println!("  [OK]   {} ({})", report.label, report.calc_type);
                    println!("         {}", summarize(result));
                    print_diagnostics(&result.diagnostics());
                }
                Err(e) => println!("  [FAIL] {} ({}): {}", report.label, report.calc_type, e),
            }
        }
    }

    if failures > 0 {
        log::warn!("{} of {} items failed", failures, reports.len());
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn summarize(result: &CalculationResult) -> String {
    match result {
        CalculationResult::Bolt(r) => format!(
            "F_i = {:.0} lb, T = {:.1} in-lb, A_t = {} in²",
            r.preload_lb,
            r.torque_inlb,
            r.bolt.tensile_stress_area_in2()
        ),
        CalculationResult::BoltedJoint(r) => match r.joint.loads().bolt_force_lb {
            Some(f_b) => format!("F_b = {:.1} lb", f_b),
            None => format!("{} unresolved fields", r.unresolved.len()),
        },
        CalculationResult::WeldGroup(r) => match (r.primary_shear_psi, r.secondary_shear) {
            (Some(primary), Some(secondary)) => format!(
                "{}: τ' = {:.0} psi, τ'' = {:.1} psi/in",
                r.selection.citation,
                primary,
                secondary.value()
            ),
            (Some(primary), None) => format!("{}: τ' = {:.0} psi", r.selection.citation, primary),
            _ => format!("{}: A = {:.4} in²", r.selection.citation, r.selection.area),
        },
        CalculationResult::MemberStiffness(r) => format!("k_m = {:.4} Mlb/in", r.k_member_mlb_per_in),
    }
}

fn run_init(args: InitArgs) -> CalcResult<ExitCode> {
    if args.project.exists() && !args.force {
        return Err(CalcError::file_error(
            "create",
            args.project.display().to_string(),
            "File already exists (use --force to overwrite)",
        ));
    }

    let mut project = Project::new(args.engineer, args.job, args.client);
    if args.sample {
        add_sample_items(&mut project);
    }
    save_project(&project, &args.project)?;
    report_created(&args.project, &project);
    Ok(ExitCode::SUCCESS)
}

fn report_created(path: &Path, project: &Project) {
    println!("Created {} ({} items)", path.display(), project.item_count());
}

fn add_sample_items(project: &mut Project) {
    project.add_item(CalculationItem::Bolt(BoltInput {
        label: "B-1".to_string(),
        diameter_in: 0.5,
        tpi: Some(13),
        grade: None,
        preload_lb: None,
    }));
    project.add_item(CalculationItem::BoltedJoint(BoltedJointInput::new(
        "J-1",
        JointParameters {
            preload_lb: Some(500.0),
            total_load_lb: Some(10_000.0),
            bolt_count: Some(2),
            grip_length_in: Some(3.5),
        },
    )));
    project.add_item(CalculationItem::MemberStiffness(MemberStiffnessInput {
        label: "M-1".to_string(),
        material: MemberMaterial::Steel,
        bolt_diameter_in: 0.5,
        member_1_thickness_in: 0.75,
        member_2_thickness_in: 0.75,
        k_bolt_mlb_per_in: Some(1.79),
    }));
    project.add_item(CalculationItem::WeldGroup(WeldGroupInput {
        label: "W-1".to_string(),
        group: TorsionGroup::ParallelLines.into(),
        geometry: WeldGeometry {
            h: 0.375,
            b: 2.0,
            d: 4.0,
            r: 1.0,
        },
        shear_force_lb: Some(5000.0),
        moments: vec![MomentTerm::new(5000.0, 6.0)],
    }));
}
