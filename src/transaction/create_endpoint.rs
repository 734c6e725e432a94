//! Defines the endpoint for creating a new transaction.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    app_state::LedgerState,
    transaction::{NewTransaction, Transaction, TransactionKind},
};

/// An amount as sent by the client, either a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    /// A JSON number, e.g. `3000` or `12.5`.
    Number(f64),
    /// A string holding a number, e.g. `"12.5"`.
    Text(String),
}

/// The JSON body for creating a transaction.
///
/// Every field is optional here so that a missing field can be reported as
/// such instead of as a generic JSON error.
#[derive(Debug, Default, Deserialize)]
pub struct TransactionRequest {
    /// Text detailing the transaction.
    pub description: Option<String>,
    /// The value of the transaction.
    pub amount: Option<AmountInput>,
    /// Either "income" or "expense".
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl TransactionRequest {
    /// Check the request and convert it into the fields of a new transaction.
    ///
    /// Empty or whitespace-only strings count as missing.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::MissingFields] if the description, amount or type is missing,
    /// - or [Error::InvalidKind] if the type is not "income" or "expense",
    /// - or [Error::InvalidAmount] if the amount is not a finite number.
    pub fn validate(self) -> Result<NewTransaction, Error> {
        let description = self
            .description
            .filter(|description| !description.trim().is_empty());
        let amount = self.amount.filter(|amount| match amount {
            AmountInput::Number(_) => true,
            AmountInput::Text(text) => !text.trim().is_empty(),
        });
        let kind = self.kind.filter(|kind| !kind.is_empty());

        let (Some(description), Some(amount), Some(kind)) = (description, amount, kind) else {
            return Err(Error::MissingFields);
        };

        let kind: TransactionKind = kind.parse()?;
        let amount = parse_amount(amount)?;

        Ok(NewTransaction::new(&description, amount, kind))
    }
}

fn parse_amount(amount: AmountInput) -> Result<f64, Error> {
    let value = match amount {
        AmountInput::Number(value) => value,
        AmountInput::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::InvalidAmount(text.clone()))?,
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidAmount(value.to_string()))
    }
}

/// The response body for a newly created transaction.
#[derive(Debug, Serialize)]
pub struct TransactionCreated {
    /// A confirmation message for the client.
    pub message: &'static str,
    /// The transaction as stored in the ledger.
    pub transaction: Transaction,
}

/// A route handler for creating a new transaction, responds with 201 and the
/// stored transaction on success.
///
/// Nothing is written to the ledger unless the whole request is valid.
pub async fn create_transaction_endpoint(
    State(state): State<LedgerState>,
    payload: Result<Json<TransactionRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!("could not parse transaction request: {rejection}");
            return Error::from(rejection).into_response();
        }
    };

    let new_transaction = match request.validate() {
        Ok(new_transaction) => new_transaction,
        Err(error) => {
            tracing::warn!("rejected new transaction: {error}");
            return error.into_response();
        }
    };

    let mut ledger = match state.ledger.lock() {
        Ok(ledger) => ledger,
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return Error::LedgerLockError.into_response();
        }
    };

    let transaction = ledger.append(new_transaction);
    tracing::info!(
        "recorded {} transaction {} for {}",
        transaction.kind,
        transaction.id,
        transaction.amount
    );

    (
        StatusCode::CREATED,
        Json(TransactionCreated {
            message: "Transaction added successfully",
            transaction,
        }),
    )
        .into_response()
}
