use anyhow::bail;
use kmeans::Seeding;

use crate::Args;

/// Initial centroid strategy selectable from the command line
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitMethod {
    /// First k points, or the points named by --seed-indices
    Fixed,
    /// k distinct points drawn with --seed
    Random,
    /// K-Means++ drawn with --seed
    PlusPlus,
}

// Struct to hold the resolved settings of one clustering run
#[derive(Clone, Debug)]
pub struct ClusterizationContext {
    pub input: String,
    pub output: String,
    pub k: usize,
    pub seeding: Seeding,
    pub max_iteration: Option<usize>,
    pub report: bool,
}

impl ClusterizationContext {
    pub fn from_args(args: &Args) -> anyhow::Result<Self> {
        let seeding = match args.init {
            InitMethod::Fixed => match &args.seed_indices {
                Some(indices) => Seeding::FixedIndices(indices.clone()),
                None => Seeding::first_k(args.k),
            },
            InitMethod::Random | InitMethod::PlusPlus if args.seed_indices.is_some() => {
                bail!("--seed-indices only applies to --init fixed")
            }
            InitMethod::Random => Seeding::UniformRandom { seed: args.seed },
            InitMethod::PlusPlus => Seeding::KMeansPlusPlus { seed: args.seed },
        };

        Ok(Self {
            input: args.input.clone(),
            output: args.output.clone(),
            k: args.k,
            seeding,
            max_iteration: match args.max_iter {
                0 => None,
                n => Some(n),
            },
            report: !args.no_report,
        })
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn context(argv: &[&str]) -> anyhow::Result<ClusterizationContext> {
        let args = Args::try_parse_from(std::iter::once("geo-cluster").chain(argv.iter().copied()))?;
        ClusterizationContext::from_args(&args)
    }

    #[test]
    fn defaults_match_the_batch_job() {
        let ctx = context(&[]).unwrap();
        assert_eq!(ctx.input, "location.txt");
        assert_eq!(ctx.output, "clusters.txt");
        assert_eq!(ctx.k, 3);
        assert_eq!(ctx.seeding, Seeding::FixedIndices(vec![0, 1, 2]));
        assert_eq!(ctx.max_iteration, Some(300));
        assert!(ctx.report);
    }

    #[test]
    fn seed_indices_feed_fixed_seeding() {
        let ctx = context(&["--k", "3", "--seed-indices", "0,4,6"]).unwrap();
        assert_eq!(ctx.seeding, Seeding::FixedIndices(vec![0, 4, 6]));
    }

    #[test]
    fn random_strategies_use_the_seed() {
        let ctx = context(&["--init", "plus-plus", "--seed", "42"]).unwrap();
        assert_eq!(ctx.seeding, Seeding::KMeansPlusPlus { seed: 42 });
        let ctx = context(&["--init", "random"]).unwrap();
        assert_eq!(ctx.seeding, Seeding::UniformRandom { seed: 0 });
    }

    #[test]
    fn seed_indices_with_random_init_is_rejected() {
        assert!(context(&["--init", "random", "--seed-indices", "1,2,3"]).is_err());
    }

    #[test]
    fn zero_max_iter_means_unbounded() {
        let ctx = context(&["--max-iter", "0", "--no-report", "--input", "pts.txt", "--k", "5"]).unwrap();
        assert_eq!(ctx.max_iteration, None);
        assert!(!ctx.report);
        assert_eq!(ctx.input, "pts.txt");
        assert_eq!(ctx.k, 5);
        assert_eq!(ctx.seeding, Seeding::first_k(5));
    }
}
