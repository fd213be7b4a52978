use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::SeedableRng;

use nnl::{evaluate, train_stochastic, Network, TrainConfig};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Info)
        .parse_env(env_logger::Env::default().filter_or("NNL_LOG", "info"))
        .init();

    let matches = Command::new("nnl")
        .version(clap::crate_version!())
        .about("Train a three-layer sigmoid network on a small dataset and report its accuracy")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a JSON training configuration")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("iterations")
                .short('i')
                .long("iterations")
                .help("Number of single-sample training steps")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("hidden")
                .long("hidden")
                .help("Hidden layer width")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("learning_rate")
                .short('l')
                .long("learning-rate")
                .help("SGD learning rate")
                .value_parser(clap::value_parser!(f32)),
        )
        .arg(
            Arg::new("trials")
                .short('t')
                .long("trials")
                .help("Evaluation passes over the dataset")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .help("Random seed for reproducible runs")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the evaluation report as JSON")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = load_config(&matches)?;
    config.validate().context("invalid training configuration")?;

    let start = Instant::now();
    let report = run(&config)?;
    log::info!("run took {:.3?}", start.elapsed());

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

/// Config file (or defaults) with command-line overrides applied.
fn load_config(matches: &ArgMatches) -> Result<TrainConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            log::info!("loading config from {:?}", path);
            TrainConfig::load_json(path)
                .with_context(|| format!("failed to load config: {}", path.display()))?
        }
        None => TrainConfig::default(),
    };

    if let Some(&iterations) = matches.get_one::<usize>("iterations") {
        config.iterations = iterations;
    }
    if let Some(&hidden) = matches.get_one::<usize>("hidden") {
        config.hidden_dim = hidden;
    }
    if let Some(&learning_rate) = matches.get_one::<f32>("learning_rate") {
        config.learning_rate = learning_rate;
    }
    if let Some(&trials) = matches.get_one::<usize>("trials") {
        config.trials = trials;
    }
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config.seed = Some(seed);
    }
    Ok(config)
}

fn run(config: &TrainConfig) -> Result<nnl::EvalReport> {
    let mut rng = match config.seed {
        Some(seed) => {
            log::info!("using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    log::info!(
        "network {}->{}->{}, learning rate {}, {} iterations",
        config.input_dim,
        config.hidden_dim,
        config.output_dim,
        config.learning_rate,
        config.iterations
    );
    let mut network = Network::with_rng(
        config.input_dim,
        config.hidden_dim,
        config.output_dim,
        config.learning_rate,
        &mut rng,
    );

    train_stochastic(
        &mut network,
        &config.samples,
        config.iterations,
        &mut rng,
        config.log_interval,
    )
    .context("training failed")?;

    let report = evaluate(&network, &config.samples, config.trials, config.threshold)
        .context("evaluation failed")?;
    Ok(report)
}
