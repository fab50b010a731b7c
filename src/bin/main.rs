use clap::Parser;
use exact_riemann::{
    gas_law::AdiabaticIndex,
    physical_quantities::{Primitive, State},
    ExactRiemannSolver, PVRiemannSolver, RiemannStarSolver, SolverConfig, TRRiemannSolver,
    TSRiemannSolver,
};
use std::{
    error::Error,
    fmt::Display,
    fs,
    path::{self, PathBuf},
};
use yaml_rust::{Yaml, YamlLoader};

#[derive(Debug)]
pub enum ConfigError {
    MissingParameter(String),
    UnknownRiemannSolver(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingParameter(name) => {
                write!(f, "Missing required parameter in configuration: {}", name)
            }
            ConfigError::UnknownRiemannSolver(name) => {
                write!(f, "Unknown type of Riemann solver configured: {}", name)
            }
        }
    }
}

impl Error for ConfigError {}

fn parse_state(yaml: &Yaml, section: &str) -> Result<State<Primitive>, ConfigError> {
    let get = |prop: &str| {
        yaml[prop]
            .as_f64()
            .ok_or(ConfigError::MissingParameter(format!("{}:{}", section, prop)))
    };
    Ok(State::<Primitive>::new(
        get("density")?,
        get("velocity")?,
        get("pressure")?,
    ))
}

struct ProblemCfg {
    gamma: f64,
    left: State<Primitive>,
    right: State<Primitive>,
}

impl ProblemCfg {
    fn parse(yaml: &Yaml) -> Result<Self, ConfigError> {
        let gamma = yaml["gamma"].as_f64().ok_or(ConfigError::MissingParameter(
            "riemann_problem:gamma".to_string(),
        ))?;
        Ok(Self {
            gamma,
            left: parse_state(&yaml["left"], "riemann_problem:left")?,
            right: parse_state(&yaml["right"], "riemann_problem:right")?,
        })
    }
}

struct SolverCfg {
    kind: String,
    config: SolverConfig,
}

impl SolverCfg {
    fn parse(yaml: &Yaml) -> Result<Self, ConfigError> {
        let kind = yaml["kind"].as_str().unwrap_or("Exact").to_string();
        let mut config = SolverConfig::default();
        if let Some(tolerance) = yaml["tolerance"].as_f64() {
            config.tolerance = tolerance;
        }
        if let Some(max_iterations) = yaml["max_iterations"].as_i64() {
            config.max_iterations = max_iterations as usize;
        }
        Ok(Self { kind, config })
    }
}

struct SamplingCfg {
    s_min: f64,
    s_max: f64,
    n_samples: usize,
}

impl SamplingCfg {
    fn parse(yaml: &Yaml) -> Result<Self, ConfigError> {
        Ok(Self {
            s_min: yaml["s_min"].as_f64().unwrap_or(-2.),
            s_max: yaml["s_max"].as_f64().unwrap_or(2.),
            n_samples: yaml["n_samples"].as_i64().unwrap_or(100) as usize,
        })
    }
}

struct Config {
    problem: ProblemCfg,
    solver: SolverCfg,
    sampling: SamplingCfg,
}

impl Config {
    fn parse(file: PathBuf) -> Result<Self, Box<dyn Error>> {
        let docs = YamlLoader::load_from_str(&fs::read_to_string(file)?)?;
        let config_yml = &docs[0];

        Ok(Self {
            problem: ProblemCfg::parse(&config_yml["riemann_problem"])?,
            solver: SolverCfg::parse(&config_yml["riemann_solver"])?,
            sampling: SamplingCfg::parse(&config_yml["sampling"])?,
        })
    }
}

#[derive(Parser)]
pub struct Cli {
    /// The path to the config file to read
    #[clap(parse(from_os_str))]
    pub config: path::PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    // parse command line parameters
    let args = Cli::parse();

    // read configuration
    let config = Config::parse(args.config)?;

    let eos: AdiabaticIndex = config.problem.gamma.into();
    let left = config.problem.left;
    let right = config.problem.right;
    let a_l = eos.sound_speed(left.pressure(), 1. / left.density());
    let a_r = eos.sound_speed(right.pressure(), 1. / right.density());

    let solver: Box<dyn RiemannStarSolver> = match config.solver.kind.as_str() {
        "Exact" => Box::new(ExactRiemannSolver::new(config.solver.config)),
        "PVRS" => Box::new(PVRiemannSolver),
        "TRRS" => Box::new(TRRiemannSolver),
        "TSRS" => Box::new(TSRiemannSolver),
        _ => Err(ConfigError::UnknownRiemannSolver(config.solver.kind))?,
    };

    let solution = solver.solve(&left, &right, a_l, a_r, &eos)?;
    println!(
        "# p* = {}, u* = {}, rho*_l = {}, rho*_r = {} ({} iterations)",
        solution.star.p, solution.star.u, solution.star.rho_l, solution.star.rho_r, solution.n_iter
    );
    if !solution.converged {
        eprintln!(
            "WARNING: Newton-Raphson iteration did not converge within {} iterations",
            solution.n_iter
        );
    }

    println!("# s rho u p");
    let n = config.sampling.n_samples.max(2);
    let ds = (config.sampling.s_max - config.sampling.s_min) / (n - 1) as f64;
    for i in 0..n {
        let s = config.sampling.s_min + i as f64 * ds;
        let sampled = solver.sample(&solution.star, &left, &right, a_l, a_r, s, &eos);
        println!(
            "{} {} {} {}",
            s,
            sampled.density(),
            sampled.velocity(),
            sampled.pressure()
        );
    }

    Ok(())
}
