use std::io::Read;
use std::pin::Pin;

use futures::stream::{self, Stream};
use serde::Deserialize;

use crate::domain::traits::OperationStream;
use crate::domain::{Error, Money, Operation};

/// Reads an operation script with a `type, amount` header.
pub struct CsvReader<R: Read> {
    reader: Option<csv::Reader<R>>,
}

impl<R: Read> CsvReader<R> {
    pub fn new(reader: R) -> Result<Self, Error> {
        let rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        Ok(Self { reader: Some(rdr) })
    }
}

/// Internal shape used only for CSV deserialization.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    amount: Option<Money>,
}

impl TryFrom<CsvRow> for Operation {
    type Error = Error;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        let kind = row.kind.trim().to_ascii_lowercase();
        match (kind.as_str(), row.amount) {
            ("deposit", Some(amount)) => Ok(Operation::Deposit { amount }),
            ("withdrawal" | "withdraw", Some(amount)) => Ok(Operation::Withdrawal { amount }),
            ("deposit" | "withdrawal" | "withdraw", None) => Err(Error::Ingestion(format!(
                "Missing or invalid amount for {}",
                kind
            ))),
            ("balance", _) => Ok(Operation::Balance),
            ("welcome", _) => Ok(Operation::Welcome),
            (other, _) => Err(Error::Ingestion(format!(
                "Invalid operation type: {}",
                other
            ))),
        }
    }
}

impl<R: Read + Send + 'static> OperationStream for CsvReader<R> {
    type OpStream = Pin<Box<dyn Stream<Item = Result<Operation, Error>> + Send>>;

    fn stream(&mut self) -> Self::OpStream {
        let reader = match self.reader.take() {
            Some(r) => r,
            None => {
                return Box::pin(stream::iter(Vec::<Result<Operation, Error>>::new()));
            }
        };

        let iter = reader
            .into_deserialize::<CsvRow>()
            .map(|row_res| match row_res {
                Ok(row) => Operation::try_from(row),
                Err(e) => Err(Error::Ingestion(format!(
                    "CSV deserialization error: {}",
                    e
                ))),
            });

        Box::pin(stream::iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    async fn collect(input: &'static str) -> Vec<Result<Operation, Error>> {
        let mut reader = CsvReader::new(input.as_bytes()).unwrap();
        reader.stream().collect().await
    }

    #[tokio::test]
    async fn parses_every_operation_kind() {
        let ops = collect(
            "type, amount\n\
             deposit, 50.0\n\
             Withdrawal, 20\n\
             withdraw, 1.25\n\
             balance,\n\
             welcome\n",
        )
        .await;

        let ops: Vec<Operation> = ops.into_iter().map(Result::unwrap).collect();
        assert_eq!(
            ops,
            vec![
                Operation::Deposit {
                    amount: Money::from(50)
                },
                Operation::Withdrawal {
                    amount: Money::from(20)
                },
                Operation::Withdrawal {
                    amount: Money::from_decimal_str("1.25").unwrap()
                },
                Operation::Balance,
                Operation::Welcome,
            ]
        );
    }

    #[tokio::test]
    async fn bad_rows_become_errors_without_stopping_the_stream() {
        let ops = collect(
            "type, amount\n\
             transfer, 5\n\
             deposit,\n\
             deposit, lots\n\
             deposit, 3\n",
        )
        .await;

        assert_eq!(ops.len(), 4);
        assert!(matches!(ops[0], Err(Error::Ingestion(_))));
        assert!(matches!(ops[1], Err(Error::Ingestion(_))));
        assert!(matches!(ops[2], Err(Error::Ingestion(_))));
        assert!(matches!(
            ops[3],
            Ok(Operation::Deposit { amount }) if amount == Money::from(3)
        ));
    }

    #[tokio::test]
    async fn second_stream_is_empty() {
        let mut reader = CsvReader::new("type, amount\nbalance,\n".as_bytes()).unwrap();
        assert_eq!(reader.stream().count().await, 1);
        assert_eq!(reader.stream().count().await, 0);
    }
}
