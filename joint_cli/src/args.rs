//! CLI argument definitions using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use joint_core::calculations::{Connection, MomentTerm};
use joint_core::tables::LoadingCategory;

#[derive(Parser)]
#[command(name = "jointcalc")]
#[command(author, version, about = "Bolted and welded joint calculator")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Print results as JSON only
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Bolt areas, strengths and tightening torque
    Bolt(BoltArgs),

    /// Load split in a preloaded bolted joint
    Joint(JointArgs),

    /// Weld group properties and shear stresses
    Weld(WeldArgs),

    /// Member stiffness estimate from the Table 8-8 fit
    Stiffness(StiffnessArgs),

    /// Combine stiffnesses in series
    Combine(CombineArgs),

    /// Evaluate every item in a project file
    Run(RunArgs),

    /// Create a new project file
    Init(InitArgs),
}

#[derive(Args, Debug)]
pub struct BoltArgs {
    /// Nominal diameter (in)
    #[arg(long, short = 'd')]
    pub diameter: f64,

    /// Threads per inch
    #[arg(long, short = 't')]
    pub tpi: Option<u32>,

    /// SAE grade (1, 2, 4, 7 or 8)
    #[arg(long, short = 'g', default_value_t = 8)]
    pub grade: u8,

    /// Desired preload (lb); defaults to the recommended preload
    #[arg(long, short = 'p')]
    pub preload: Option<f64>,

    /// Torque (nut) factor K
    #[arg(long, short = 'k', default_value_t = 0.2)]
    pub nut_factor: f64,

    /// Connection type for the recommended preload
    #[arg(long, value_enum, default_value = "reused")]
    pub connection: ConnectionArg,
}

#[derive(Args, Debug)]
pub struct JointArgs {
    /// Bolt preload F_i (lb)
    #[arg(long)]
    pub preload: Option<f64>,

    /// Total external load (lb)
    #[arg(long)]
    pub load: Option<f64>,

    /// Number of bolts
    #[arg(long)]
    pub bolts: Option<u32>,

    /// Grip length (in)
    #[arg(long)]
    pub grip: Option<f64>,

    /// JSON file of parameters; flags given on the command line take precedence
    #[arg(long)]
    pub params: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct WeldArgs {
    /// Loading category
    #[arg(long, short = 'l', value_enum)]
    pub loading: LoadingArg,

    /// Group number within the table
    #[arg(long, short = 'n')]
    pub group: u8,

    /// Fillet leg size (in)
    #[arg(long = "leg")]
    pub h: Option<f64>,

    /// Width b (in)
    #[arg(long = "width")]
    pub b: Option<f64>,

    /// Depth d (in)
    #[arg(long = "depth")]
    pub d: Option<f64>,

    /// Radius r (in)
    #[arg(long = "radius")]
    pub r: Option<f64>,

    /// Shear force through the centroid (lb)
    #[arg(long)]
    pub force: Option<f64>,

    /// Moment term as FORCE,DISTANCE (repeatable)
    #[arg(long = "moment", short = 'm', value_parser = parse_moment_term)]
    pub moments: Vec<MomentTerm>,
}

#[derive(Args, Debug)]
pub struct StiffnessArgs {
    /// Member material (steel, aluminum, copper, gray cast iron, general)
    #[arg(long, default_value = "steel")]
    pub material: String,

    /// Bolt diameter (in)
    #[arg(long, short = 'd')]
    pub diameter: f64,

    /// Thickness of the first member (in)
    #[arg(long)]
    pub t1: f64,

    /// Thickness of the second member (in)
    #[arg(long, default_value_t = 0.0)]
    pub t2: f64,

    /// Bolt stiffness k_b (Mlb/in) to report the joint constant
    #[arg(long)]
    pub k_bolt: Option<f64>,
}

#[derive(Args, Debug)]
pub struct CombineArgs {
    /// Stiffnesses in series
    #[arg(required = true, num_args = 1..)]
    pub stiffnesses: Vec<f64>,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Project file (.jcp)
    pub project: PathBuf,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project file to create (.jcp)
    pub project: PathBuf,

    #[arg(long, default_value = "")]
    pub engineer: String,

    #[arg(long, default_value = "")]
    pub job: String,

    #[arg(long, default_value = "")]
    pub client: String,

    /// Add one sample item of each kind
    #[arg(long)]
    pub sample: bool,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ConnectionArg {
    Reused,
    Permanent,
}

impl From<ConnectionArg> for Connection {
    fn from(arg: ConnectionArg) -> Self {
        match arg {
            ConnectionArg::Reused => Connection::Reused,
            ConnectionArg::Permanent => Connection::Permanent,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LoadingArg {
    Torsion,
    Bending,
}

impl From<LoadingArg> for LoadingCategory {
    fn from(arg: LoadingArg) -> Self {
        match arg {
            LoadingArg::Torsion => LoadingCategory::Torsion,
            LoadingArg::Bending => LoadingCategory::Bending,
        }
    }
}

fn parse_moment_term(s: &str) -> Result<MomentTerm, String> {
    let (force, distance) = s
        .split_once(',')
        .ok_or_else(|| format!("expected FORCE,DISTANCE, got '{}'", s))?;
    let force: f64 = force
        .trim()
        .parse()
        .map_err(|e| format!("bad force '{}': {}", force, e))?;
    let distance: f64 = distance
        .trim()
        .parse()
        .map_err(|e| format!("bad distance '{}': {}", distance, e))?;
    Ok(MomentTerm::new(force, distance))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_moment_term() {
        let term = parse_moment_term("500, -3.5").unwrap();
        assert_eq!(term.force_lb, 500.0);
        assert_eq!(term.distance_in, -3.5);
        assert!(parse_moment_term("500").is_err());
        assert!(parse_moment_term("a,b").is_err());
    }

    #[test]
    fn test_cli_parses_weld_command() {
        let cli = Cli::try_parse_from([
            "jointcalc", "weld", "-l", "torsion", "-n", "2", "--leg", "0.25", "--depth", "4", "-m", "100,2",
            "-m", "50,4",
        ])
        .unwrap();
        match cli.command {
            Commands::Weld(args) => {
                assert_eq!(args.group, 2);
                assert_eq!(args.moments.len(), 2);
            }
            _ => panic!("expected weld"),
        }
    }

    #[test]
    fn test_cli_verifies() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
