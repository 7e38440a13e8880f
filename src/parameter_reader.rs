use std::collections::HashMap;
use std::fs;
use std::str::FromStr;

use crate::error::{PercolationError, PercolationResult};
use crate::percolation_results::arange;
use crate::percolation_sweep::SweepConfig;

pub const REQUIRED_PARAMETERS: [&str; 5] = [
    "rows",
    "cols",
    "samples",
    "probabilities",
    "outputfile",
];

pub const OPTIONAL_PARAMETERS: [&str; 3] = [
    "probability_step",
    "seed",
    "labels_file",
];

/// Parses `name: value` lines. Blank lines and lines starting with `#` are skipped.
fn build_new_map(content: &str) -> PercolationResult<HashMap<&'static str, String>>
{
    let mut parameter_map: HashMap<&'static str, String> = HashMap::new();
    for line in content.lines().map(str::trim).filter(|line| !line.is_empty() && !line.starts_with('#'))
    {
        let Some((key, value)) = line.split_once(':') else
        {
            return Err(PercolationError::Parameter(format!("Bad delimiter in line {line:?}")));
        };
        let key = key.trim();
        let Some(&name) = REQUIRED_PARAMETERS.iter().chain(OPTIONAL_PARAMETERS.iter()).find(|&&name| name == key) else
        {
            log::warn!("Ignoring unknown parameter {key:?}");
            continue;
        };
        parameter_map.insert(name, value.trim().to_owned());
    }
    for name in REQUIRED_PARAMETERS
    {
        if !parameter_map.contains_key(name)
        {
            return Err(PercolationError::Parameter(format!("Missing parameter: {name}")));
        }
    }
    Ok(parameter_map)
}

fn parse_value<T: FromStr>(params: &HashMap<&'static str, String>, name: &str) -> PercolationResult<T>
{
    params[name].parse().map_err(|_| PercolationError::Parameter(format!("Could not parse {name:?}: {:?}", params[name])))
}

fn parse_optional<T: FromStr>(params: &HashMap<&'static str, String>, name: &str) -> PercolationResult<Option<T>>
{
    if params.contains_key(name) {parse_value(params, name).map(Some)} else {Ok(None)}
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParameters
{
    pub sweep: SweepConfig,
    pub probabilities: Vec<f64>,
    pub outputfile: String,
    pub labels_file: Option<String>,
}

impl SimulationParameters
{
    pub fn parse(content: &str) -> PercolationResult<Self>
    {
        let params = build_new_map(content)?;

        let rows: usize    = parse_value(&params, "rows")?;
        let cols: usize    = parse_value(&params, "cols")?;
        let samples: usize = parse_value(&params, "samples")?;
        let seed           = parse_optional::<u64>(&params, "seed")?;
        let outputfile     = params["outputfile"].clone();
        let labels_file    = params.get("labels_file").cloned();

        let listed = params["probabilities"]
            .split(',')
            .map(|p| p.trim().parse::<f64>().map_err(|_| PercolationError::Parameter(format!("Could not parse probability {p:?}"))))
            .collect::<PercolationResult<Vec<_>>>()?;

        let probabilities = match parse_optional::<f64>(&params, "probability_step")?
        {
            Some(step) =>
            {
                let &[start, stop] = listed.as_slice() else
                {
                    return Err(PercolationError::Parameter(String::from("With probability_step, probabilities must be \"start, stop\"")));
                };
                arange(start, stop, step)?
            }
            None => listed,
        };
        if probabilities.is_empty()
        {
            return Err(PercolationError::Parameter(String::from("No probabilities to simulate")));
        }

        let sweep = SweepConfig {rows, cols, samples, seed};
        sweep.validate()?;
        Ok(Self {sweep, probabilities, outputfile, labels_file})
    }
    /// Reads the parameter file named by the first command line argument.
    pub fn read(args: &[String]) -> PercolationResult<Self>
    {
        if args.len() < 2
        {
            return Err(PercolationError::Parameter(String::from("Not enough arguments: need filename containing parameters")));
        }
        let content = fs::read_to_string(&args[1])?;
        Self::parse(&content)
    }
}
