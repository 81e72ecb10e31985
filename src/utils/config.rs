use serde::{Deserialize, Serialize};
use argh::FromArgs;
use super::error::Error;

/// Solve a quadratic assignment instance with an ant colony
#[derive(FromArgs)]
pub struct Arguments {
    /// path to instance file (size, distance rows, flow rows)
    #[argh(positional)]
    pub instance: String,
    /// path to configuration file
    #[argh(option, short='c', default="String::from(\"data/config/default.yaml\")")]
    pub config: String,
    /// override random seed
    #[argh(option, short='s')]
    pub seed: Option<u64>,
    /// override number of ants per iteration
    #[argh(option, short='a')]
    pub ants: Option<usize>,
    /// override number of iterations
    #[argh(option, short='i')]
    pub iterations: Option<usize>,
    /// write best solution and history to this yaml file
    #[argh(option, short='o')]
    pub output: Option<String>,
    /// do not print a line per iteration
    #[argh(switch, short='q')]
    pub quiet: bool,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct Config {
    pub name: String,
    #[serde(default)]
    pub seed: u64,
    #[serde(default)]
    pub parameters: Parameters,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Parameters {
    pub num_ants: usize,
    pub iterations: usize,
    /// pheromone exponent
    pub alpha: f64,
    /// desirability exponent
    pub beta: f64,
    pub evaporation_rate: f64,
    /// deposit scale, each edge of a tour receives `q / cost`
    #[serde(alias = "Q")]
    pub q: f64,
    pub initial_pheromone: f64,
    pub tau_min: f64,
    pub tau_max: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            num_ants: 80,
            iterations: 200,
            alpha: 7.0,
            beta: 4.0,
            evaporation_rate: 0.6,
            q: 1.0,
            initial_pheromone: 1.0,
            tau_min: 0.1,
            tau_max: 10.0,
        }
    }
}

impl Parameters {
    pub fn validate(&self) -> Result<(), Error> {
        if self.num_ants == 0 {
            return Err(Error::invalid_parameter("num_ants", "must be positive"));
        }
        if self.iterations == 0 {
            return Err(Error::invalid_parameter("iterations", "must be positive"));
        }
        let reals = [
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("evaporation_rate", self.evaporation_rate),
            ("q", self.q),
            ("initial_pheromone", self.initial_pheromone),
            ("tau_min", self.tau_min),
            ("tau_max", self.tau_max),
        ];
        for &(name, value) in reals.iter() {
            if !value.is_finite() {
                return Err(Error::invalid_parameter(name, format!("{} is not finite", value)));
            }
        }
        if self.alpha < 0.0 {
            return Err(Error::invalid_parameter("alpha", format!("{} is negative", self.alpha)));
        }
        if self.beta < 0.0 {
            return Err(Error::invalid_parameter("beta", format!("{} is negative", self.beta)));
        }
        if !(0.0..=1.0).contains(&self.evaporation_rate) {
            return Err(Error::invalid_parameter("evaporation_rate", format!(
                "{} is outside [0, 1]", self.evaporation_rate
            )));
        }
        if self.q <= 0.0 {
            return Err(Error::invalid_parameter("q", format!("{} is not positive", self.q)));
        }
        if self.initial_pheromone <= 0.0 {
            return Err(Error::invalid_parameter("initial_pheromone", format!(
                "{} is not positive", self.initial_pheromone
            )));
        }
        if self.tau_min <= 0.0 {
            return Err(Error::invalid_parameter("tau_min", format!("{} is not positive", self.tau_min)));
        }
        if self.tau_min > self.tau_max {
            return Err(Error::invalid_parameter("tau_max", format!(
                "{} is below tau_min {}", self.tau_max, self.tau_min
            )));
        }
        Ok(())
    }
}

impl Config {
    pub fn override_from_args(&mut self, args: &Arguments) {
        if let Some(seed) = args.seed {
            self.seed = seed;
        }
        if let Some(ants) = args.ants {
            self.parameters.num_ants = ants;
        }
        if let Some(iterations) = args.iterations {
            self.parameters.iterations = iterations;
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> Arguments {
        Arguments {
            instance: String::from("data/instance/tiny3.dat"),
            config: String::from("data/config/default.yaml"),
            seed: Some(7),
            ants: None,
            iterations: Some(3),
            output: None,
            quiet: true,
        }
    }

    #[test]
    fn it_accepts_defaults() {
        assert!(Parameters::default().validate().is_ok());
    }

    #[test]
    fn it_rejects_out_of_range() {
        let cases: [fn(&mut Parameters); 11] = [
            |p: &mut Parameters| p.num_ants = 0,
            |p: &mut Parameters| p.iterations = 0,
            |p: &mut Parameters| p.alpha = -1.0,
            |p: &mut Parameters| p.beta = -0.5,
            |p: &mut Parameters| p.evaporation_rate = 1.5,
            |p: &mut Parameters| p.evaporation_rate = -0.1,
            |p: &mut Parameters| p.q = 0.0,
            |p: &mut Parameters| p.initial_pheromone = 0.0,
            |p: &mut Parameters| p.tau_min = 0.0,
            |p: &mut Parameters| p.tau_max = 0.05,
            |p: &mut Parameters| p.beta = f64::NAN,
        ];
        for mutate in cases.iter() {
            let mut params = Parameters::default();
            mutate(&mut params);
            assert!(matches!(params.validate(), Err(Error::InvalidParameter { .. })), "{:?}", params);
        }
    }

    #[test]
    fn it_overrides_from_args() {
        let mut config = Config { name: String::from("test"), seed: 0, parameters: Parameters::default() };
        config.override_from_args(&args());
        assert_eq!(config.seed, 7);
        assert_eq!(config.parameters.iterations, 3);
        assert_eq!(config.parameters.num_ants, 80);
    }

    #[test]
    fn it_parses_yaml_with_upper_q() {
        let text = "name: partial\nparameters:\n  Q: 2.5\n  num_ants: 4\n";
        let config: Config = serde_yaml::from_str(text).unwrap();
        assert_eq!(config.seed, 0);
        assert_eq!(config.parameters.q, 2.5);
        assert_eq!(config.parameters.num_ants, 4);
        assert_eq!(config.parameters.tau_max, 10.0);
    }
}
