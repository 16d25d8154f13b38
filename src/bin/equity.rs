//! Equity Binary
//!
//! Runs one preflop, auction, or round estimate from the command line.

use auctioneer::cards::Card;
use auctioneer::equity::AuctionEquity;
use auctioneer::equity::AuctionQuery;
use auctioneer::equity::EquityQuery;
use auctioneer::equity::EquityResult;
use auctioneer::equity::Estimator;
use auctioneer::equity::Villain;
use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(author, version, about = "Monte Carlo equity for auction hold'em", long_about = None)]
struct Args {
    #[command(subcommand)]
    query: Query,
    #[arg(long, global = true, default_value_t = auctioneer::DEFAULT_TRIALS)]
    trials: usize,
    #[arg(long, global = true)]
    seed: Option<u64>,
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Query {
    #[command(about = "Win rate of two hole cards before the flop", alias = "pre")]
    Preflop {
        #[arg(long, required = true)]
        hero: String,
        #[arg(long, default_value = "")]
        dead: String,
    },
    #[command(about = "Conditional win rates around the auction card", alias = "bid")]
    Auction {
        #[arg(long, required = true)]
        hero: String,
        #[arg(long, required = true)]
        board: String,
        #[arg(long, default_value = "")]
        dead: String,
    },
    #[command(about = "Win, loss, and tie rates on any street", alias = "est")]
    Round {
        #[arg(long, required = true)]
        hero: String,
        #[arg(long, default_value = "")]
        board: String,
        #[arg(long, default_value_t = 2, conflicts_with = "villain")]
        opponent: usize,
        #[arg(long)]
        villain: Option<String>,
        #[arg(long, default_value = "")]
        dead: String,
    },
}

#[derive(serde::Serialize)]
#[serde(untagged)]
enum Report {
    Equity(EquityResult),
    Auction(AuctionEquity),
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Report::Equity(result) => write!(f, "{}", result),
            Report::Auction(result) => write!(f, "{}", result),
        }
    }
}

fn cards(s: &str) -> anyhow::Result<Vec<Card>> {
    Card::parse(s).map_err(anyhow::Error::msg)
}

fn main() -> anyhow::Result<()> {
    auctioneer::log()?;
    let args = Args::parse();
    let estimator: Estimator = match args.seed {
        Some(seed) => Estimator::default().seeded(seed),
        None => Estimator::default(),
    };
    let report = match &args.query {
        Query::Preflop { hero, dead } => {
            let query = EquityQuery::preflop(cards(hero)?, args.trials).with_dead(cards(dead)?);
            Report::Equity(estimator.estimate(&query)?)
        }
        Query::Auction { hero, board, dead } => {
            let query = AuctionQuery::new(cards(hero)?, cards(board)?, args.trials).with_dead(cards(dead)?);
            Report::Auction(estimator.contest(&query)?)
        }
        Query::Round {
            hero,
            board,
            opponent,
            villain,
            dead,
        } => {
            let villain = match villain {
                Some(villain) => Villain::Known(cards(villain)?),
                None => Villain::Unknown(*opponent),
            };
            let query = EquityQuery::round(cards(hero)?, cards(board)?, villain, args.trials).with_dead(cards(dead)?);
            Report::Equity(estimator.estimate(&query)?)
        }
    };
    match args.json {
        true => println!("{}", serde_json::to_string_pretty(&report)?),
        false => println!("{}", report),
    }
    Ok(())
}
