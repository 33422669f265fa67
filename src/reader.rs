use crate::error::SessionError;
use crate::selection::Selection;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum RequestType {
    Deposit,
    Vend,
}

/// Raw CSV shape of a session row; fields are optional on the wire and
/// checked per request type when converting to `Request`.
#[derive(Debug, Deserialize)]
struct RawRequest {
    r#type: RequestType,
    selection: Option<Selection>,
    quantity: Option<u32>,
    amount: Option<Decimal>,
}

/// A structurally complete request, ready to run against a machine.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Request {
    Deposit { amount: Decimal },
    Vend { selection: Selection, quantity: u32 },
}

impl TryFrom<RawRequest> for Request {
    type Error = SessionError;

    fn try_from(raw: RawRequest) -> Result<Self, Self::Error> {
        match raw.r#type {
            RequestType::Deposit => {
                let amount = raw
                    .amount
                    .ok_or_else(|| SessionError::Request("deposit missing amount".to_string()))?;
                Ok(Request::Deposit { amount })
            }
            RequestType::Vend => {
                let selection = raw
                    .selection
                    .ok_or_else(|| SessionError::Request("vend missing selection".to_string()))?;
                let quantity = raw
                    .quantity
                    .ok_or_else(|| SessionError::Request("vend missing quantity".to_string()))?;
                Ok(Request::Vend {
                    selection,
                    quantity,
                })
            }
        }
    }
}

/// Reads deposit/vend requests from a CSV session script.
///
/// Wraps `csv::Reader` and yields an iterator of `Result<Request>`, so a
/// malformed row surfaces as an error item without stopping the stream.
pub struct SessionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> SessionReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn requests(self) -> impl Iterator<Item = Result<Request, SessionError>> {
        self.reader
            .into_deserialize::<RawRequest>()
            .map(|result| result.map_err(SessionError::from).and_then(Request::try_from))
    }
}
