use std::{env, fs::File, io::Read, path::Path};

use simple_bank::{
    Account, Error, Money, dlq::StdErrDLQ, ingestion::CsvReader, notifier::StdOutNotifier,
    print_welcome_message, teller::Teller, telemetry,
};

const USAGE: &str = "usage: simple_bank <holder> <initial_balance> [operations.csv]";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init();

    let mut args = env::args().skip(1);

    let holder = args.next().ok_or_else(|| Error::Config(USAGE.to_string()))?;
    let raw_balance = args.next().ok_or_else(|| Error::Config(USAGE.to_string()))?;
    let initial_balance = Money::from_decimal_str(&raw_balance).ok_or_else(|| {
        Error::Config(format!("invalid initial balance {:?}; {}", raw_balance, USAGE))
    })?;

    // stdin when no script path is given
    let input: Box<dyn Read + Send> = match args.next() {
        Some(path) => Box::new(File::open(Path::new(&path))?),
        None => Box::new(std::io::stdin()),
    };

    let account = Account::new(holder, initial_balance);
    let ingestion = CsvReader::new(input)?;

    print_welcome_message();

    let mut teller = Teller::new(account, ingestion, StdOutNotifier::default(), StdErrDLQ::default());
    teller.process().await?;
    teller.flush();

    Ok(())
}
